/// Minecraft has a specific format for the payload of the `UnconnectedPong` packet.
/// This data is attached to the Unconnected Pong packet and is used to
/// display information about the server.
pub mod motd;

pub use motd::{Gamemode, Motd, MCPE_TAG};
