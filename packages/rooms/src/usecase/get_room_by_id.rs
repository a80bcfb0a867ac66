//! UseCase: ID による Room 取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetRoomByIdUseCase::execute() メソッド
//! - Repository への問い合わせ結果（存在 / 不在 / ストア障害）の扱い
//!
//! ### なぜこのテストが必要か
//! - 不在は正常系（`Ok(None)`）であり、エラーとして扱わないことを保証
//! - ストア障害を「見つからない」と取り違えないことを保証
//! - 読み取り専用で冪等であることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：存在する Room の取得
//! - 正常系：存在しない Room の取得（None）
//! - 異常系：ストアに接続できない
//! - エッジケース：大文字小文字のみ異なる ID、連続した同一呼び出し

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::GetRoomError;

/// ID による Room 取得のユースケース
pub struct GetRoomByIdUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomByIdUseCase {
    /// 新しい GetRoomByIdUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room 取得を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 取得する Room の ID（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Room))` - ID が完全一致する Room
    /// * `Ok(None)` - 該当する Room が存在しない
    /// * `Err(GetRoomError)` - ストア障害（リトライはしない）
    pub async fn execute(&self, room_id: &RoomId) -> Result<Option<Room>, GetRoomError> {
        let room = self
            .repository
            .find_by_room_id(room_id)
            .await
            .inspect_err(|e| tracing::warn!("Room store lookup for '{}' failed: {}", room_id, e))?;

        match &room {
            Some(_) => tracing::debug!("Room '{}' found", room_id),
            None => tracing::debug!("Room '{}' not found", room_id),
        }

        Ok(room)
    }
}
