pub mod debug;

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};

/// This is a helper enum that allows you to pass in a `SocketAddr` or a `&str` to [`Pinger::query`].
/// This is useful for when you want to query a specific address, but you don't want to resolve it yourself.
///
/// This will successfully resolve the following:
/// - `SocketAddr::from(([127, 0, 0, 1], 19132))`
/// - `"127.0.0.1:19132"`
/// - `String::from("play.example.net:19132")`
///
/// [`Pinger::query`]: crate::client::Pinger::query
#[derive(Debug, Clone)]
pub enum PossiblySocketAddr<'a> {
    SocketAddr(SocketAddr),
    Str(&'a str),
    String(String),
}

impl PossiblySocketAddr<'_> {
    /// Resolves the address, taking the first result the resolver yields.
    /// Host names go through the system resolver, which may block.
    pub fn to_socket_addr(&self) -> Option<SocketAddr> {
        match self {
            PossiblySocketAddr::SocketAddr(addr) => Some(*addr),
            PossiblySocketAddr::Str(addr) => Self::resolve(addr),
            PossiblySocketAddr::String(addr) => Self::resolve(addr.as_str()),
        }
    }

    fn resolve(addr: &str) -> Option<SocketAddr> {
        if let Ok(addr) = addr.parse::<SocketAddr>() {
            return Some(addr);
        }
        // not a literal, try it as host:port
        addr.to_socket_addrs().ok()?.next()
    }
}

impl<'a> From<&'a str> for PossiblySocketAddr<'a> {
    fn from(s: &'a str) -> Self {
        PossiblySocketAddr::Str(s)
    }
}

impl From<String> for PossiblySocketAddr<'_> {
    fn from(s: String) -> Self {
        PossiblySocketAddr::String(s)
    }
}

impl From<SocketAddr> for PossiblySocketAddr<'_> {
    fn from(s: SocketAddr) -> Self {
        PossiblySocketAddr::SocketAddr(s)
    }
}

impl std::fmt::Display for PossiblySocketAddr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PossiblySocketAddr::SocketAddr(addr) => write!(f, "{}", addr),
            PossiblySocketAddr::Str(addr) => write!(f, "{}", addr),
            PossiblySocketAddr::String(addr) => write!(f, "{}", addr),
        }
    }
}

/// The wildcard address of the same family as `peer`, with an ephemeral port.
pub(crate) fn local_bind_addr(peer: &SocketAddr) -> SocketAddr {
    match peer {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}
