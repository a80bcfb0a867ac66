//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// Room 取得時のエラー
///
/// Room が存在しないことはエラーではなく `Ok(None)` で表現する。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetRoomError {
    /// ストアに問い合わせできなかった（握りつぶさず呼び出し元へ返す）
    #[error("failed to look up room: {0}")]
    StoreUnavailable(#[from] RepositoryError),
}
