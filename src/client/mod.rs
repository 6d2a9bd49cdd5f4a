//! The pinger sends one unconnected ping to a server and waits for its pong.
pub mod token;

use std::time::Duration;

#[cfg(feature = "async_std")]
use async_std::{future::timeout, net::UdpSocket};

#[cfg(feature = "async_tokio")]
use tokio::{net::UdpSocket, time::timeout};

use binary_util::interfaces::Writer;

use crate::{
    error::QueryError,
    protocol::{
        mcpe::Motd,
        packet::offline::{OfflinePacket, UnconnectedPing, UnconnectedPong},
        MAX_REPLY_SIZE,
    },
    rakping_debug, rakping_debug_buffers,
    status::BedrockStatus,
    util::{local_bind_addr, PossiblySocketAddr},
};

pub use self::token::{FixedToken, RandomToken, TokenSource};

/// How long to wait for the pong when no timeout is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10000);

/// This struct is used to query RakNet servers for their status.
/// To query a server, use `Pinger::query()`.
///
/// Every query opens its own socket and uses its own token, so a single pinger
/// can be shared between concurrent queries.
///
/// ```rust no_run
/// use rak_ping::client::Pinger;
/// use std::time::Duration;
///
/// # async fn run() -> Result<(), rak_ping::error::QueryError> {
/// let status = Pinger::new()
///     .with_timeout(Duration::from_secs(2))
///     .query("127.0.0.1:19132")
///     .await?;
/// println!("{}", status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pinger<T: TokenSource = RandomToken> {
    /// The longest the pinger waits for the pong.
    timeout: Duration,
    /// Where ping tokens come from.
    tokens: T,
}

impl Pinger<RandomToken> {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            tokens: RandomToken,
        }
    }
}

impl Default for Pinger<RandomToken> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenSource> Pinger<T> {
    /// Sets how long a query waits for the pong before failing with [`QueryError::Timeout`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces where ping tokens come from.
    pub fn with_token_source<U: TokenSource>(self, tokens: U) -> Pinger<U> {
        Pinger {
            timeout: self.timeout,
            tokens,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Queries a server for its status.
    ///
    /// Exactly one ping is sent and the first datagram the server sends back is taken as
    /// the reply; nothing is retried. The socket is owned by this call and is closed
    /// when it returns, whatever the outcome. Dropping the returned future cancels the
    /// query and closes the socket as well.
    /// > Note: This is an async function. You must await it.
    /// > Note: Host names are resolved with the blocking system resolver, which stalls the
    /// > executor thread while it runs. Pass a `SocketAddr` to avoid this.
    pub async fn query<'a, Addr: Into<PossiblySocketAddr<'a>>>(
        &self,
        addr: Addr,
    ) -> Result<BedrockStatus, QueryError> {
        let addrr: PossiblySocketAddr = addr.into();
        let address = match addrr.to_socket_addr() {
            Some(a) => a,
            None => {
                rakping_debug!("Invalid address provided: {}", addrr);
                return Err(QueryError::InvalidAddress);
            }
        };

        let socket = match UdpSocket::bind(local_bind_addr(&address)).await {
            Ok(s) => s,
            Err(e) => {
                rakping_debug!("Failed to bind socket: {}", e);
                return Err(e.into());
            }
        };
        socket.connect(address).await?;

        let token = self.tokens.next_token();
        let ping = OfflinePacket::from(UnconnectedPing::new(token)).write_to_bytes()?;

        rakping_debug!(true, "[{}] Sending ping with token {:#018x}", address, token);
        rakping_debug_buffers!("out", "{:?}", ping.as_slice());

        if let Err(e) = socket.send(ping.as_slice()).await {
            rakping_debug!("[{}] Failed to send ping: {}", address, e);
            return Err(e.into());
        }

        let mut buf = vec![0u8; MAX_REPLY_SIZE];
        let length = match timeout(self.timeout, socket.recv(&mut buf)).await {
            Ok(Ok(l)) => l,
            Ok(Err(e)) => {
                rakping_debug!("[{}] Failed to receive pong: {}", address, e);
                return Err(e.into());
            }
            Err(_) => {
                rakping_debug!("[{}] Ping failed, server did not respond!", address);
                return Err(QueryError::Timeout);
            }
        };
        buf.truncate(length);

        rakping_debug_buffers!("in", "{:?}", buf.as_slice());

        decode_reply(&buf, token).map_err(|e| {
            rakping_debug!("[{}] Rejected pong: {}", address, e);
            e
        })
    }

    /// Blocking version of [`Pinger::query`], for callers without an async runtime.
    #[cfg(feature = "async_std")]
    pub fn query_blocking<'a, Addr: Into<PossiblySocketAddr<'a>>>(
        &self,
        addr: Addr,
    ) -> Result<BedrockStatus, QueryError> {
        futures_executor::block_on(self.query(addr))
    }

    /// Blocking version of [`Pinger::query`], for callers without an async runtime.
    /// > Note: This spins up its own runtime, it must not be called from within one.
    #[cfg(feature = "async_tokio")]
    pub fn query_blocking<'a, Addr: Into<PossiblySocketAddr<'a>>>(
        &self,
        addr: Addr,
    ) -> Result<BedrockStatus, QueryError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(self.query(addr))
    }
}

/// Validates a raw pong against the token of the ping it should answer, and decodes
/// the status it carries.
///
/// This is pure: the same bytes and token always give the same outcome.
pub fn decode_reply(reply: &[u8], token: u64) -> Result<BedrockStatus, QueryError> {
    let pong = UnconnectedPong::parse(reply, token)?;
    let motd = Motd::decode(&pong.status_text())?;
    Ok(BedrockStatus::new(pong.server_id, motd))
}
