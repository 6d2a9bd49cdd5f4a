//! Errors returned by the query api.
pub mod query;

pub use query::{FormatError, QueryError};
