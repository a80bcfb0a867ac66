//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,
}

/// Errors raised by a room store
///
/// Absence of a room is not an error; repositories report it as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store could not be reached or read
    #[error("room store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The store was read but its contents are not a valid set of rooms
    #[error("room store corrupted: {reason}")]
    Corrupted { reason: String },
}
