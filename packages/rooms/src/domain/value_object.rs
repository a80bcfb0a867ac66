//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Room identifier value object.
///
/// Represents a unique identifier for a chat room. The only rule enforced
/// here is non-emptiness; the token is otherwise opaque and compared
/// byte-for-byte (no trimming, no case folding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if the string is empty
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<RoomId> for String {
    fn from(value: RoomId) -> Self {
        value.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: 有効なルーム ID を作成できる
        // given (前提条件):
        let id = "abc123".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        // given (前提条件):
        let id = "".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomIdEmpty);
    }

    #[test]
    fn test_room_id_keeps_token_verbatim() {
        // テスト項目: 形式チェックを行わず、空白や記号を含むトークンもそのまま保持する
        // given (前提条件):
        let id = " Room#1 ".to_string();

        // when (操作):
        let room_id = RoomId::new(id).unwrap();

        // then (期待する結果):
        assert_eq!(room_id.as_str(), " Room#1 ");
    }

    #[test]
    fn test_room_id_equality_is_exact() {
        // テスト項目: 大文字小文字や前後の空白が異なる ID は等価ではない
        // given (前提条件):
        let lower = RoomId::try_from("abc123").unwrap();
        let upper = RoomId::try_from("ABC123").unwrap();
        let padded = RoomId::try_from("abc123 ").unwrap();

        // then (期待する結果):
        assert_eq!(lower, RoomId::try_from("abc123").unwrap());
        assert_ne!(lower, upper);
        assert_ne!(lower, padded);
    }

    #[test]
    fn test_room_id_deserialize_rejects_empty() {
        // テスト項目: デシリアライズ時にも空文字列は拒否される
        // when (操作):
        let ok: Result<RoomId, _> = serde_json::from_str("\"abc123\"");
        let empty: Result<RoomId, _> = serde_json::from_str("\"\"");

        // then (期待する結果):
        assert_eq!(ok.unwrap().as_str(), "abc123");
        assert!(empty.is_err());
    }
}
