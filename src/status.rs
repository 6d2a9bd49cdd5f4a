//! The result of a successful query.
use crate::protocol::mcpe::{Gamemode, Motd};

/// The status a server reported in its unconnected pong.
///
/// A status is only built once the whole reply has been validated, so every
/// field here came from a well formed pong answering our own ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedrockStatus {
    server_id: u64,
    motd: Motd,
}

impl BedrockStatus {
    pub(crate) fn new(server_id: u64, motd: Motd) -> Self {
        Self { server_id, motd }
    }

    /// The server id from the pong header.
    pub fn server_id(&self) -> u64 {
        self.server_id
    }

    /// The message of the day.
    pub fn motd(&self) -> &str {
        &self.motd.name
    }

    pub fn online_count(&self) -> i32 {
        self.motd.player_count
    }

    pub fn max_count(&self) -> i32 {
        self.motd.player_max
    }

    /// The network protocol version the server speaks.
    pub fn protocol_version(&self) -> i32 {
        self.motd.protocol
    }

    pub fn game_version(&self) -> &str {
        &self.motd.version
    }

    pub fn gamemode(&self) -> Option<Gamemode> {
        self.motd.gamemode
    }

    /// The full status record, including the optional trailing fields.
    pub fn details(&self) -> &Motd {
        &self.motd
    }
}

impl std::fmt::Display for BedrockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BedrockStatus{{ServerId={}, NetVer={}, GameVer={}, MOTD={}, OnlineCount={}, MaxCount={}}}",
            self.server_id,
            self.motd.protocol,
            self.motd.version,
            self.motd.name,
            self.motd.player_count,
            self.motd.player_max
        )
    }
}
