//! Named key-value persistence
//!
//! The leaderboard is the only persisted data: one string value under a named
//! store. `KeyValueStore` is the seam; hosts pick the backing. Reads never
//! fail outward: a missing or unreadable value is `None` (with a logged
//! diagnostic), and the caller falls back to its empty default.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A flat string-valued store addressed by key
pub trait KeyValueStore {
    /// Read a value; `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;
    /// Replace a value wholesale
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store for tests and headless demos
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed store: one file per key under a named directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store directory `root/name`
    pub fn open(root: &Path, name: &str) -> io::Result<Self> {
        let dir = root.join(name);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("failed to read {:?}: {}", self.path_for(key), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}
