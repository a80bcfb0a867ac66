//! JSON ファイルを永続化先とする Repository 実装

mod room;

pub use room::JsonFileRoomRepository;
