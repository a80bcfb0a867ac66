//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod get_room_by_id;

pub use error::GetRoomError;
pub use get_room_by_id::GetRoomByIdUseCase;
