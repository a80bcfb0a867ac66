//! Data transfer objects.

pub mod room;

pub use room::RoomData;
