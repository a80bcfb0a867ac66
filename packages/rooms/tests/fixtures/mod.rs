//! Shared fixtures for integration tests.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::{NamedTempFile, TempDir};

/// JSON room store backed by a temporary file, removed on drop.
pub struct TempRoomStore {
    file: NamedTempFile,
}

impl TempRoomStore {
    /// Write a store holding one record per room id
    pub fn with_rooms(room_ids: &[&str]) -> Self {
        let records: Vec<serde_json::Value> = room_ids
            .iter()
            .map(|id| serde_json::json!({ "room_id": id }))
            .collect();
        Self::with_contents(&serde_json::to_string(&records).expect("Failed to encode store"))
    }

    /// Write a store with raw contents
    pub fn with_contents(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp store");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp store");
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn path_str(&self) -> &str {
        self.path().to_str().expect("Temp store path is not UTF-8")
    }
}

/// A store path inside an empty temporary directory, so it never exists.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn missing_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.json");
    (dir, path)
}

/// Run the `heya-lookup` binary with logging disabled
pub fn run_lookup(args: &[&str]) -> Output {
    run_lookup_with_log(args, "off")
}

/// Run the `heya-lookup` binary with `RUST_LOG` set to `filter`
pub fn run_lookup_with_log(args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heya-lookup"))
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("Failed to run heya-lookup")
}
