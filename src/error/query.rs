//! Query errors are errors that can occur when using the [`Pinger`](crate::client::Pinger) api.

/// These are errors that can occur while querying a server.
/// Every failure is terminal for the query that produced it, nothing is retried
/// internally, so the caller decides whether to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryError {
    /// The given address could not be resolved to a socket address.
    InvalidAddress,
    /// The socket could not be opened, or sending / receiving failed.
    Transport(std::io::ErrorKind),
    /// The server did not reply before the deadline.
    Timeout,
    /// The reply is shorter than the pong header, or shorter than its declared payload.
    ShortReply,
    /// The reply is not an unconnected pong. Carries the id that was received.
    UnexpectedMessageType(u8),
    /// The echoed ping token is not the one we sent.
    TokenMismatch,
    /// The offline message magic is missing or wrong.
    MagicMismatch,
    /// The status record inside the pong is malformed.
    BadFormat(FormatError),
}

impl QueryError {
    /// Whether this failure happened at the transport level (including timeouts),
    /// rather than while validating a reply.
    pub fn is_transport(&self) -> bool {
        matches!(self, QueryError::Transport(_) | QueryError::Timeout)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidAddress => write!(f, "Invalid address"),
            QueryError::Transport(kind) => write!(f, "Transport error: {}", kind),
            QueryError::Timeout => write!(f, "Timed out waiting for pong"),
            QueryError::ShortReply => write!(f, "Reply too short"),
            QueryError::UnexpectedMessageType(id) => {
                write!(f, "Unexpected message type {:#04x}", id)
            }
            QueryError::TokenMismatch => write!(f, "Pong token does not match ping token"),
            QueryError::MagicMismatch => write!(f, "Invalid magic"),
            QueryError::BadFormat(e) => write!(f, "Bad status format: {}", e),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<std::io::Error> for QueryError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => QueryError::Timeout,
            kind => QueryError::Transport(kind),
        }
    }
}

impl From<FormatError> for QueryError {
    fn from(e: FormatError) -> Self {
        QueryError::BadFormat(e)
    }
}

/// The part of the status record that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatError {
    /// Fewer than the six mandatory fields.
    TooFewFields,
    /// The first field is not `MCPE`.
    WrongTag,
    /// The protocol version is not a 32 bit signed integer.
    ProtocolVersion,
    /// The online player count is not a 32 bit signed integer.
    OnlineCount,
    /// The max player count is not a 32 bit signed integer.
    MaxCount,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FormatError::TooFewFields => "too few fields",
                FormatError::WrongTag => "not an MCPE record",
                FormatError::ProtocolVersion => "invalid protocol version",
                FormatError::OnlineCount => "invalid online player count",
                FormatError::MaxCount => "invalid max player count",
            }
        )
    }
}

impl std::error::Error for FormatError {}
