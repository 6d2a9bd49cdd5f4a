use binary_util::interfaces::{Reader, Writer};
use binary_util::io::{ByteReader, ByteWriter};

/// A unique identifier recoginzing the message as offline.
pub const MAGIC: [u8; 16] = [
    0x00, 0xff, 0xff, 0x0, 0xfe, 0xfe, 0xfe, 0xfe, 0xfd, 0xfd, 0xfd, 0xfd, 0x12, 0x34, 0x56, 0x78,
];

/// The magic is carried by both the unconnected ping and pong.
/// This is a special raknet header that uniquely identifies the protocol as raknet,
/// anything else on the port is not a RakNet peer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Magic;

impl Magic {
    pub fn new() -> Self {
        Self {}
    }

    /// Whether `bytes` is exactly the offline message magic.
    pub fn matches(bytes: &[u8]) -> bool {
        bytes == MAGIC
    }
}

impl Reader<Magic> for Magic {
    fn read(buf: &mut ByteReader) -> Result<Magic, std::io::Error> {
        if buf.as_slice().len() < MAGIC.len() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "Magic truncated",
            ));
        }

        let mut magic = [0u8; 16];
        buf.read(&mut magic)?;

        if !Magic::matches(&magic) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "Invalid magic",
            ));
        }

        Ok(Magic)
    }
}

impl Writer for Magic {
    fn write(&self, buf: &mut ByteWriter) -> Result<(), std::io::Error> {
        buf.write(&MAGIC)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_flipped_byte() {
        for i in 0..MAGIC.len() {
            let mut bytes = MAGIC;
            bytes[i] ^= 0xff;
            assert!(!Magic::matches(&bytes));

            let mut reader = ByteReader::from(&bytes[..]);
            let err = Magic::read(&mut reader).unwrap_err();
            assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        }
    }

    #[test]
    fn rejects_truncated() {
        assert!(!Magic::matches(&MAGIC[..15]));
        let mut reader = ByteReader::from(&MAGIC[..15]);
        assert!(Magic::read(&mut reader).is_err());
    }

    #[test]
    fn writes_magic() {
        let buf = Magic::new().write_to_bytes().unwrap();
        assert_eq!(buf.as_slice(), &MAGIC[..]);
    }
}
