//! # rak-ping
//!
//! Queries Minecraft: Bedrock Edition servers for their status with the RakNet
//! unconnected ping/pong exchange. One ping goes out, one pong comes back, and the
//! status record it carries is decoded into a [`BedrockStatus`].
//!
//! The async runtime is picked with the `async_std` (default) or `async_tokio` feature.
//!
//! ```rust no_run
//! # async fn run() -> Result<(), rak_ping::error::QueryError> {
//! let status = rak_ping::query("127.0.0.1:19132").await?;
//! println!("{} ({}/{})", status.motd(), status.online_count(), status.max_count());
//! # Ok(())
//! # }
//! ```

/// The pinger, which runs a single query against a server.
pub mod client;
pub mod error;
/// Home of the wire format.
/// This contains the offline packets and the MCPE status record.
pub mod protocol;
pub mod status;
/// Address helpers and the debug macros.
pub mod util;

pub use client::{decode_reply, Pinger};
pub use error::{FormatError, QueryError};
pub use status::BedrockStatus;
pub use util::PossiblySocketAddr;

/// Queries a server with the default timeout and random ping tokens.
pub async fn query<'a, Addr: Into<PossiblySocketAddr<'a>>>(
    addr: Addr,
) -> Result<BedrockStatus, QueryError> {
    Pinger::new().query(addr).await
}
