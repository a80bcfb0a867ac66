//! Core domain models for the chat application.

use serde::{Deserialize, Serialize};

use super::value_object::RoomId;

/// Represents a chat room
///
/// Rooms are created and destroyed outside this crate; here they are only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier, unique within a store
    pub room_id: RoomId,
}

impl Room {
    /// Create a room with the given ID
    pub fn new(room_id: RoomId) -> Self {
        Self { room_id }
    }

    /// Whether this room is the one identified by `room_id` (exact match)
    pub fn is_identified_by(&self, room_id: &RoomId) -> bool {
        &self.room_id == room_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_new() {
        // テスト項目: 指定した ID で Room が作成される
        // given (前提条件):
        let room_id = RoomId::try_from("abc123").unwrap();

        // when (操作):
        let room = Room::new(room_id.clone());

        // then (期待する結果):
        assert_eq!(room.room_id, room_id);
    }

    #[test]
    fn test_room_is_identified_by() {
        // テスト項目: ID の完全一致でのみ同一と判定される
        // given (前提条件):
        let room = Room::new(RoomId::try_from("abc123").unwrap());

        // then (期待する結果):
        assert!(room.is_identified_by(&RoomId::try_from("abc123").unwrap()));
        assert!(!room.is_identified_by(&RoomId::try_from("abc12").unwrap()));
        assert!(!room.is_identified_by(&RoomId::try_from("ABC123").unwrap()));
    }

    #[test]
    fn test_room_serializes_as_flat_id() {
        // テスト項目: Room は {"room_id": "..."} として JSON 化される
        // given (前提条件):
        let room = Room::new(RoomId::try_from("abc123").unwrap());

        // when (操作):
        let json = serde_json::to_value(&room).unwrap();

        // then (期待する結果):
        assert_eq!(json, serde_json::json!({"room_id": "abc123"}));
    }
}
