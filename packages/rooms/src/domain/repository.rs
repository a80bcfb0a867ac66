//! Repository trait（データアクセス層の抽象化）
//!
//! ドメイン層が Repository のインターフェースを定義し、
//! Infrastructure 層がそれを実装します（依存性の逆転）。

use async_trait::async_trait;

use super::{Room, RoomId, error::RepositoryError};

/// Room の永続化ストア
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ID が完全一致する Room を取得する
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Room))` - 該当する Room が存在する
    /// * `Ok(None)` - 該当する Room が存在しない（エラーではない）
    /// * `Err(RepositoryError)` - ストア自体にアクセスできない
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError>;
}
