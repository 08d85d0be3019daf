use crate::error::Result;
use crate::model::CannedResponse;
use crate::store::LibraryStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk format version, bumped on incompatible envelope changes.
const STORE_VERSION: u32 = 1;

/// File-backed store: the whole library lives in one JSON file.
///
/// Writes are atomic (write to a sibling tmp file, then rename) so a crash
/// mid-save never leaves a truncated library behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

/// The persisted envelope wrapping the response list.
#[derive(Debug, Serialize, Deserialize)]
struct LibraryFile {
    version: u32,
    saved_at: DateTime<Utc>,
    responses: Vec<CannedResponse>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl LibraryStore for FileStore {
    fn load(&self) -> Result<Option<Vec<CannedResponse>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let file: LibraryFile = serde_json::from_str(&raw)?;
        Ok(Some(file.responses))
    }

    fn save(&mut self, responses: &[CannedResponse]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = LibraryFile {
            version: STORE_VERSION,
            saved_at: Utc::now(),
            responses: responses.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_response;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("responses.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("responses.json"));
        let responses = vec![
            sample_response("need-str").with_categories(["need-info"]),
            sample_response("dup").with_description("close as duplicate"),
        ];
        store.save(&responses).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), responses);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("responses.json");
        let mut store = FileStore::new(&path);
        store.save(&[sample_response("a")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("responses.json"));
        store.save(&[sample_response("a")]).unwrap();
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, "not json at all").unwrap();
        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_envelope_carries_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        let mut store = FileStore::new(&path);
        store.save(&[]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["saved_at"].is_string());
    }
}
