//! Room record DTO.
//!
//! Shape of a room as persisted in the JSON store file and as printed by the
//! lookup CLI:
//!
//! ```text
//! {"room_id": "abc123"}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Room, RoomId, ValueObjectError};

/// Room record (JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomData {
    pub room_id: String,
}

impl TryFrom<RoomData> for Room {
    type Error = ValueObjectError;

    fn try_from(data: RoomData) -> Result<Self, Self::Error> {
        Ok(Room::new(RoomId::new(data.room_id)?))
    }
}

impl From<&Room> for RoomData {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.room_id.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_data_into_room() {
        // テスト項目: RoomData からドメインモデルの Room に変換できる
        // given (前提条件):
        let data = RoomData {
            room_id: "abc123".to_string(),
        };

        // when (操作):
        let result = Room::try_from(data);

        // then (期待する結果):
        assert_eq!(result, Ok(Room::new(RoomId::try_from("abc123").unwrap())));
    }

    #[test]
    fn test_room_data_with_empty_id_is_rejected() {
        // テスト項目: 空の room_id を持つレコードは Room に変換できない
        // given (前提条件):
        let data = RoomData {
            room_id: String::new(),
        };

        // when (操作):
        let result = Room::try_from(data);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::RoomIdEmpty));
    }

    #[test]
    fn test_room_data_ignores_unknown_fields() {
        // テスト項目: ストアファイルの未知フィールドは無視される
        // when (操作):
        let data: RoomData =
            serde_json::from_str(r#"{"room_id": "abc123", "messages": []}"#).unwrap();

        // then (期待する結果):
        assert_eq!(data.room_id, "abc123");
    }
}
