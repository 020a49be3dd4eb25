//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists entries to
//! a single TOML file. It is used on desktop platforms, where there is no
//! browser `localStorage`, so that remembered credentials survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── local_storage.toml     # [entries] table, one string per key
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/travel-planner/` |
//! | Linux | `~/.local/share/travel-planner/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\travel-planner\` |
//!
//! Every operation re-reads the file, so two `FileStore`s on the same directory
//! always observe each other's writes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::kv::{KeyValueStore, StoreError};

const FILE_NAME: &str = "local_storage.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Entries {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn file_path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    /// A missing or unparsable file reads as empty.
    fn load(&self) -> Entries {
        std::fs::read_to_string(self.file_path())
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    fn save(&self, entries: &Entries) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let content = toml::to_string_pretty(entries)?;
        std::fs::write(self.file_path(), content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().entries.remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load();
        if entries.entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "travel_planner_{name}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let store = FileStore::new(dir.clone());
        store.set("rememberedEmail", "ada@example.com").unwrap();

        // Re-open from same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(
            store2.get("rememberedEmail").as_deref(),
            Some("ada@example.com")
        );

        store2.remove("rememberedEmail").unwrap();
        assert!(store.get("rememberedEmail").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_dir_reads_empty() {
        let dir = temp_dir("missing");
        let store = FileStore::new(dir.clone());

        assert!(store.get("anything").is_none());
        // Removing from a store that was never written does not create the file
        store.remove("anything").unwrap();
        assert!(!dir.join(FILE_NAME).exists());
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_overwritten() {
        let dir = temp_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FILE_NAME), "not = [valid").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.get("k").is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
