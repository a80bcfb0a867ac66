//! Domain layer for the room lookup.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::Room;
pub use error::{RepositoryError, ValueObjectError};
pub use repository::RoomRepository;
pub use value_object::RoomId;

#[cfg(test)]
pub use repository::MockRoomRepository;
