//! This module contains the packets exchanged by the RakNet unconnected ping/pong.
//! Both are offline packets, sent without any session between the peers.
//!
//! - [`offline`]: The ping, the pong and the id-tagged union of both.
//!
//! [`offline`]: crate::protocol::packet::offline
pub mod offline;

/// Packet id of the unconnected ping.
pub const UNCONNECTED_PING: u8 = 0x01;
/// Packet id of the unconnected pong.
pub const UNCONNECTED_PONG: u8 = 0x1c;

/// Id, token, server id and magic. A pong shorter than this is never valid.
pub const MIN_PONG_SIZE: usize = 33;
/// The pong header including the payload length prefix.
pub const PONG_HEADER_SIZE: usize = MIN_PONG_SIZE + 2;
