//! Ping tokens correlate a pong with the ping that caused it.
//! They are not a security measure, so they do not need a strong rng.

/// Anything that can hand out a token for the next ping.
pub trait TokenSource: Send + Sync {
    fn next_token(&self) -> u64;
}

/// A fresh random token for every ping. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomToken;

impl TokenSource for RandomToken {
    fn next_token(&self) -> u64 {
        rand::random::<u64>()
    }
}

/// Always the same token, useful when a test has to predict the ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedToken(pub u64);

impl TokenSource for FixedToken {
    fn next_token(&self) -> u64 {
        self.0
    }
}

impl<F> TokenSource for F
where
    F: Fn() -> u64 + Send + Sync,
{
    fn next_token(&self) -> u64 {
        self()
    }
}
