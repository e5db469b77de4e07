use super::DataStore;
use crate::error::{Result, TallyzError};
use crate::model::Entry;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole entry list as one JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TallyzError::Io)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(TallyzError::Serialization)?;
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TallyzError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(entries).map_err(TallyzError::Serialization)?;
        fs::write(&self.path, content).map_err(TallyzError::Io)?;
        Ok(())
    }
}
