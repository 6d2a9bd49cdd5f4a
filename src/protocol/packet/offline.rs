//! Offline packets are packets that are sent before a connection is established.
//! For a status query these consist of:
//! - [`UnconnectedPing`]
//! - [`UnconnectedPong`]
//!
//! The pinger sends a single ping carrying a random token, and the server answers with a
//! single pong that echoes the token, names the server and carries the MCPE status record.
use std::borrow::Cow;

use binary_util::interfaces::{Reader, Writer};
use binary_util::io::{ByteReader, ByteWriter};

use super::{MIN_PONG_SIZE, PONG_HEADER_SIZE, UNCONNECTED_PING, UNCONNECTED_PONG};
use crate::error::QueryError;
use crate::protocol::Magic;

/// This is an enum of all offline packets a query deals with.
///
/// The first byte on the wire is the packet id, the rest is the packet body.
/// You can use this to read and write offline packets,
/// with the `binary_util` traits `Reader` and `Writer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfflinePacket {
    UnconnectedPing(UnconnectedPing),
    UnconnectedPong(UnconnectedPong),
}

impl OfflinePacket {
    pub fn id(&self) -> u8 {
        match self {
            OfflinePacket::UnconnectedPing(_) => UNCONNECTED_PING,
            OfflinePacket::UnconnectedPong(_) => UNCONNECTED_PONG,
        }
    }
}

impl Reader<OfflinePacket> for OfflinePacket {
    fn read(buf: &mut ByteReader) -> Result<OfflinePacket, std::io::Error> {
        match buf.read_u8()? {
            UNCONNECTED_PING => Ok(OfflinePacket::UnconnectedPing(UnconnectedPing::read(buf)?)),
            UNCONNECTED_PONG => Ok(OfflinePacket::UnconnectedPong(UnconnectedPong::read(buf)?)),
            id => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Unknown offline packet {:#04x}", id),
            )),
        }
    }
}

impl Writer for OfflinePacket {
    fn write(&self, buf: &mut ByteWriter) -> Result<(), std::io::Error> {
        buf.write_u8(self.id())?;
        match self {
            OfflinePacket::UnconnectedPing(pk) => pk.write(buf),
            OfflinePacket::UnconnectedPong(pk) => pk.write(buf),
        }
    }
}

impl From<UnconnectedPing> for OfflinePacket {
    fn from(packet: UnconnectedPing) -> Self {
        OfflinePacket::UnconnectedPing(packet)
    }
}

impl From<UnconnectedPong> for OfflinePacket {
    fn from(packet: UnconnectedPong) -> Self {
        OfflinePacket::UnconnectedPong(packet)
    }
}

/// Sent to the server expecting a [`UnconnectedPong`] packet carrying the same token.
///
/// If the peer does not respond with a [`UnconnectedPong`] packet, the initiator should
/// expect that the server is offline.
///
/// The body is followed by a 4 byte big endian length of everything before it (`25`).
/// Servers do not interpret it, it is only written to stay byte compatible with
/// existing pingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnconnectedPing {
    /// The random token the server has to echo back.
    pub token: u64,
}

impl UnconnectedPing {
    /// Id, token and magic.
    pub const HEADER_LEN: u32 = 25;

    pub fn new(token: u64) -> Self {
        Self { token }
    }
}

impl Reader<UnconnectedPing> for UnconnectedPing {
    fn read(buf: &mut ByteReader) -> Result<UnconnectedPing, std::io::Error> {
        let token = buf.read_u64()?;
        buf.read_type::<Magic>()?;
        // the length trailer (or a client guid, for other pingers) is ignored.
        Ok(UnconnectedPing { token })
    }
}

impl Writer for UnconnectedPing {
    fn write(&self, buf: &mut ByteWriter) -> Result<(), std::io::Error> {
        buf.write_u64(self.token)?;
        buf.write_type::<Magic>(&Magic::new())?;
        buf.write_u32(Self::HEADER_LEN)?;
        Ok(())
    }
}

/// Sent in response to a [`UnconnectedPing`] packet.
/// The payload is the `;` separated MCPE status record, prefixed by its length
/// as a big endian `u16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnconnectedPong {
    /// The token of the ping this pong answers.
    pub token: u64,
    pub server_id: u64,
    pub payload: Vec<u8>,
}

impl UnconnectedPong {
    pub fn new(token: u64, server_id: u64, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            token,
            server_id,
            payload: payload.into(),
        }
    }

    /// Validates a whole datagram as the answer to the ping carrying `token`.
    ///
    /// Checks run in wire order and the first failing one is returned:
    /// size, packet id, echoed token, magic, then the declared payload length.
    pub fn parse(datagram: &[u8], token: u64) -> Result<Self, QueryError> {
        if datagram.len() < MIN_PONG_SIZE {
            return Err(QueryError::ShortReply);
        }

        if datagram[0] != UNCONNECTED_PONG {
            return Err(QueryError::UnexpectedMessageType(datagram[0]));
        }

        if datagram[1..9] != token.to_be_bytes() {
            return Err(QueryError::TokenMismatch);
        }

        if !Magic::matches(&datagram[17..MIN_PONG_SIZE]) {
            return Err(QueryError::MagicMismatch);
        }

        if datagram.len() < PONG_HEADER_SIZE {
            return Err(QueryError::ShortReply);
        }

        // only the declared payload length can still be wrong here.
        let mut reader = ByteReader::from(&datagram[1..]);
        UnconnectedPong::read(&mut reader).map_err(|_| QueryError::ShortReply)
    }

    /// The payload as text. Invalid UTF-8 is replaced rather than rejected.
    pub fn status_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

impl Reader<UnconnectedPong> for UnconnectedPong {
    fn read(buf: &mut ByteReader) -> Result<UnconnectedPong, std::io::Error> {
        let token = buf.read_u64()?;
        let server_id = buf.read_u64()?;
        buf.read_type::<Magic>()?;
        let len = buf.read_u16()? as usize;

        // anything after the declared payload is ignored.
        let remaining = buf.as_slice();
        if remaining.len() < len {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "Payload length exceeds datagram",
            ));
        }

        Ok(UnconnectedPong {
            token,
            server_id,
            payload: remaining[..len].to_vec(),
        })
    }
}

impl Writer for UnconnectedPong {
    fn write(&self, buf: &mut ByteWriter) -> Result<(), std::io::Error> {
        if self.payload.len() > u16::MAX as usize {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Payload too large",
            ));
        }

        buf.write_u64(self.token)?;
        buf.write_u64(self.server_id)?;
        buf.write_type::<Magic>(&Magic::new())?;
        buf.write_u16(self.payload.len() as u16)?;
        buf.write(&self.payload)?;
        Ok(())
    }
}
