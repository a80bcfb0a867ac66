//! JSON file Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の、ファイルを永続化先とする実装。
//! ファイルは Room レコードの JSON 配列です：
//!
//! ```text
//! [{"room_id": "abc123"}, {"room_id": "def456"}]
//! ```
//!
//! 変換は `JSON → RoomData (DTO) → Room (ドメインモデル)` の順に行います。
//! 検索のたびにファイルを読み直し、キャッシュは持ちません。

use std::{collections::HashSet, path::PathBuf};

use async_trait::async_trait;

use crate::{
    domain::{RepositoryError, Room, RoomId, RoomRepository},
    infrastructure::dto::RoomData,
};

/// JSON ファイル Room Repository 実装
pub struct JsonFileRoomRepository {
    path: PathBuf,
}

impl JsonFileRoomRepository {
    /// 新しい JsonFileRoomRepository を作成
    ///
    /// ファイルの存在チェックは行わず、検索時に読み込みます。
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ファイルを読み込み、全ての Room を返す
    ///
    /// # Errors
    ///
    /// * `RepositoryError::Unavailable` - ファイルを読み込めない
    /// * `RepositoryError::Corrupted` - JSON (UTF-8) として不正、空の ID、または ID の重複
    async fn load(&self) -> Result<Vec<Room>, RepositoryError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RepositoryError::Unavailable {
                reason: format!("failed to read '{}': {}", self.path.display(), e),
            })?;

        let records: Vec<RoomData> =
            serde_json::from_slice(&raw).map_err(|e| RepositoryError::Corrupted {
                reason: format!("failed to parse '{}': {}", self.path.display(), e),
            })?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut rooms = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let room = Room::try_from(record).map_err(|e| RepositoryError::Corrupted {
                reason: format!("invalid room record at index {}: {}", index, e),
            })?;

            // room_id は 1 つの Room しか指さない
            if !seen.insert(room.room_id.clone()) {
                return Err(RepositoryError::Corrupted {
                    reason: format!("duplicate room_id '{}'", room.room_id),
                });
            }
            rooms.push(room);
        }

        tracing::trace!(
            "Loaded {} rooms from '{}'",
            rooms.len(),
            self.path.display()
        );
        Ok(rooms)
    }
}

#[async_trait]
impl RoomRepository for JsonFileRoomRepository {
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.load().await?;
        Ok(rooms.into_iter().find(|room| room.is_identified_by(room_id)))
    }
}
