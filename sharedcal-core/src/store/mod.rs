//! Persistence for the four record collections.
//!
//! Each collection lives as one JSON blob under a fixed key in a
//! [`KeyValueStore`]. Loading never fails: a missing or unreadable blob
//! falls back to an empty collection. Saving is best effort.

mod bucket;
mod kv;

pub use bucket::Bucket;
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use crate::records::{CalendarEvent, DiaryEntry, TodoItem, User};

pub const USERS_KEY: &str = "shared-app-users";
pub const EVENTS_KEY: &str = "shared-app-events";
pub const TODOS_KEY: &str = "shared-app-todos";
pub const DIARY_KEY: &str = "shared-app-diaries";

/// Owns the backing key-value store and hands out one bucket per collection.
#[derive(Debug, Clone, Default)]
pub struct Store<K> {
    kv: K,
}

impl<K: KeyValueStore> Store<K> {
    pub fn new(kv: K) -> Self {
        Store { kv }
    }

    pub fn users(&self) -> Bucket<'_, K, Vec<User>> {
        Bucket::new(&self.kv, USERS_KEY)
    }

    pub fn events(&self) -> Bucket<'_, K, Vec<CalendarEvent>> {
        Bucket::new(&self.kv, EVENTS_KEY)
    }

    pub fn todos(&self) -> Bucket<'_, K, Vec<TodoItem>> {
        Bucket::new(&self.kv, TODOS_KEY)
    }

    pub fn diaries(&self) -> Bucket<'_, K, Vec<DiaryEntry>> {
        Bucket::new(&self.kv, DIARY_KEY)
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }
}

impl Store<FileStore> {
    /// Store backed by JSON files in `dir`.
    pub fn open(dir: impl Into<std::path::PathBuf>) -> Self {
        Store::new(FileStore::new(dir))
    }
}
