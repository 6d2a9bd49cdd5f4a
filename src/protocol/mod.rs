pub(crate) mod magic;
/// Minecraft specific handling of the status record carried by the pong.
pub mod mcpe;
pub mod packet;

pub use magic::*;

/// Size of the receive buffer. Replies larger than this are truncated by the socket.
pub const MAX_REPLY_SIZE: usize = 4096;
