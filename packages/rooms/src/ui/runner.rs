//! Lookup runner: resolves the configured room and renders the result.

use std::io::Write;

use thiserror::Error;

use crate::{
    domain::{Room, RoomId},
    infrastructure::dto::RoomData,
    usecase::{GetRoomByIdUseCase, GetRoomError},
};

use super::config::Config;

/// Exit code when the room exists
pub const EXIT_FOUND: u8 = 0;
/// Exit code when the room does not exist
pub const EXIT_NOT_FOUND: u8 = 1;
/// Exit code for invalid arguments
pub const EXIT_INVALID_ARGS: u8 = 2;
/// Exit code when the room store failed
pub const EXIT_STORE_FAILURE: u8 = 3;
/// Exit code when the result could not be written
pub const EXIT_OUTPUT_FAILURE: u8 = 4;

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Room),
    NotFound(RoomId),
}

impl LookupOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Found(_) => EXIT_FOUND,
            Self::NotFound(_) => EXIT_NOT_FOUND,
        }
    }
}

/// Errors that abort a lookup run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Lookup(#[from] GetRoomError),

    #[error("failed to encode room: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Lookup(_) => EXIT_STORE_FAILURE,
            Self::Encode(_) | Self::Output(_) => EXIT_OUTPUT_FAILURE,
        }
    }
}

/// Look up the configured room and write it to `out` as pretty JSON.
///
/// Nothing is written when the room does not exist.
pub async fn run<W: Write>(config: Config, out: &mut W) -> Result<LookupOutcome, RunError> {
    let repository = config.store.build();
    let usecase = GetRoomByIdUseCase::new(repository);

    match usecase.execute(&config.room_id).await? {
        Some(room) => {
            let json = serde_json::to_string_pretty(&RoomData::from(&room))?;
            writeln!(out, "{}", json)?;
            tracing::info!("Room '{}' found", room.room_id);
            Ok(LookupOutcome::Found(room))
        }
        None => {
            tracing::info!("Room '{}' not found", config.room_id);
            Ok(LookupOutcome::NotFound(config.room_id))
        }
    }
}
