use thiserror::Error;

/// Result type returned by the parsing functions of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned at the parsing boundaries of the crate.
///
/// Scope mutation and event merging never fail. Dropping an event is reported as `None`, not as
/// an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The string does not name a known [`Level`](crate::Level).
    #[error("unknown level {0:?}")]
    InvalidLevel(String),
    /// The string is not a 32-character hex [`EventId`](crate::EventId).
    #[error("invalid event id {0:?}")]
    InvalidEventId(String),
}
