// crates/clipdeck-core/src/store.rs
//
// Keyed durable storage for editor convenience state (trim ranges, brand
// template drafts). Values are JSON strings; keys are scoped per entity id
// (e.g. "clip.<uuid>.trim"), so two clips never contend for the same entry.
//
// Failure policy: everything stored here is a convenience, not a
// correctness-critical artifact. Reads that fail return None, writes that
// fail are dropped silently — callers degrade to defaults.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `%APPDATA%\ClipDeck\state` on Windows, `~/.local/share/clipdeck/state` elsewhere.
pub fn default_state_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let base = std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("ClipDeck");
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share"))
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("clipdeck");
    base.join("state")
}

/// One file per key under a state directory. The key is sanitized into a
/// filename; dots and dashes survive so `clip.<uuid>.trim` stays readable
/// on disk.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open_default() -> Self {
        Self { dir: default_state_dir() }
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.dir);
        let _ = std::fs::write(self.path_for(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}

/// In-memory store for tests and headless use.
#[derive(Default)]
pub struct MemStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_store_round_trip() {
        let store = MemStore::new();
        assert_eq!(store.get("clip.abc.trim"), None);
        store.set("clip.abc.trim", r#"{"in":5.0,"out":40.0}"#);
        assert_eq!(store.get("clip.abc.trim").as_deref(), Some(r#"{"in":5.0,"out":40.0}"#));
        store.remove("clip.abc.trim");
        assert_eq!(store.get("clip.abc.trim"), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().to_path_buf());
        store.set("brandTemplate.active", r#"{"projectId":"1"}"#);
        assert_eq!(
            store.get("brandTemplate.active").as_deref(),
            Some(r#"{"projectId":"1"}"#)
        );
        store.remove("brandTemplate.active");
        assert_eq!(store.get("brandTemplate.active"), None);
    }

    #[test]
    fn file_store_missing_dir_reads_none() {
        let store = JsonFileStore::at(PathBuf::from("/nonexistent/clipdeck-test"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn keys_are_isolated_per_entity() {
        let store = MemStore::new();
        store.set("clip.abc.trim", "a");
        store.set("clip.xyz.trim", "b");
        assert_eq!(store.get("clip.abc.trim").as_deref(), Some("a"));
        assert_eq!(store.get("clip.xyz.trim").as_deref(), Some("b"));
    }
}
