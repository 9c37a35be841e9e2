use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::PreferenceStore;

/// Preferences kept as a flat JSON object on disk.
/// A missing or unreadable file reads as empty.
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

    fn read_all(&self) -> HashMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(r) => r,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                );
                HashMap::new()
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
        }
        let body = serde_json::to_string_pretty(&all).map_err(|e| e.to_string())?;
        fs::write(&self.path, body)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}
