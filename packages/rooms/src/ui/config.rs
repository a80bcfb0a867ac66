//! Command line arguments and the validated configuration built from them.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use thiserror::Error;

use crate::{
    domain::{Room, RoomId, RoomRepository, ValueObjectError},
    infrastructure::repository::{InMemoryRoomRepository, JsonFileRoomRepository},
};

/// Look up a chat room by its identifier
#[derive(Debug, Parser)]
#[command(name = "heya-lookup", version, about)]
pub struct Args {
    /// Room identifier to look up (exact match)
    pub room_id: String,

    /// JSON file holding the room store (`[{"room_id": "..."}]`)
    #[arg(long, value_name = "PATH", conflicts_with = "seed_room")]
    pub store: Option<PathBuf>,

    /// Room to preload into the in-memory store (repeatable)
    #[arg(long = "seed-room", value_name = "ROOM_ID")]
    pub seed_room: Vec<String>,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Errors raised while turning [`Args`] into a [`Config`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid room id: {0}")]
    InvalidRoomId(#[source] ValueObjectError),

    #[error("invalid seed room {value:?}: {source}")]
    InvalidSeedRoom {
        value: String,
        source: ValueObjectError,
    },
}

/// Which room store to read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// In-memory store preloaded with the given rooms
    InMemory { seed: Vec<RoomId> },
    /// JSON file store
    JsonFile { path: PathBuf },
}

impl StoreConfig {
    /// Build the repository described by this configuration
    pub fn build(&self) -> Arc<dyn RoomRepository> {
        match self {
            Self::InMemory { seed } => Arc::new(InMemoryRoomRepository::from_rooms(
                seed.iter().cloned().map(Room::new),
            )),
            Self::JsonFile { path } => Arc::new(JsonFileRoomRepository::new(path.clone())),
        }
    }
}

/// Validated lookup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub room_id: RoomId,
    pub store: StoreConfig,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let room_id = RoomId::new(args.room_id).map_err(ConfigError::InvalidRoomId)?;

        let store = match args.store {
            Some(path) => StoreConfig::JsonFile { path },
            None => {
                let seed = args
                    .seed_room
                    .into_iter()
                    .map(|value| {
                        RoomId::new(value.clone())
                            .map_err(|source| ConfigError::InvalidSeedRoom { value, source })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                StoreConfig::InMemory { seed }
            }
        };

        Ok(Self { room_id, store })
    }
}
