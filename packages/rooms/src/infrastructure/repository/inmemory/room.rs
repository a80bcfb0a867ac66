//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! Room の作成・削除はこの Repository の責務ではありません。
//! 共有ハンドル（`Arc<RwLock<..>>`）を保持する外部のコンポーネントが書き込み、
//! この Repository は読み取りのみを行います。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{RepositoryError, Room, RoomId, RoomRepository};

/// インメモリ Room Repository 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// キーが RoomId なので、1 つの ID に対応する Room は高々 1 つです。
pub struct InMemoryRoomRepository {
    rooms: Arc<RwLock<HashMap<RoomId, Room>>>,
}

impl InMemoryRoomRepository {
    /// 共有ハンドルから InMemoryRoomRepository を作成
    pub fn new(rooms: Arc<RwLock<HashMap<RoomId, Room>>>) -> Self {
        Self { rooms }
    }

    /// 初期データから InMemoryRoomRepository を作成
    ///
    /// 同じ ID の Room が複数渡された場合は後勝ち。
    pub fn from_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let rooms = rooms
            .into_iter()
            .map(|room| (room.room_id.clone(), room))
            .collect();
        Self::new(Arc::new(RwLock::new(rooms)))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(room_id).cloned())
    }
}
