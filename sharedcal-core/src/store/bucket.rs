//! Typed access to one stored collection.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::kv::KeyValueStore;
use crate::error::SharedCalResult;

/// A JSON value of type `T` kept under a single key.
pub struct Bucket<'a, K, T> {
    kv: &'a K,
    key: &'static str,
    _value: PhantomData<T>,
}

impl<'a, K: KeyValueStore, T> Bucket<'a, K, T> {
    pub(crate) fn new(kv: &'a K, key: &'static str) -> Self {
        Bucket {
            kv,
            key,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<K: KeyValueStore, T: DeserializeOwned + Default> Bucket<'_, K, T> {
    /// The stored value, or `T::default()` if there is none or it can't be
    /// read back.
    pub fn load(&self) -> T {
        self.load_or(T::default())
    }
}

impl<K: KeyValueStore, T: DeserializeOwned> Bucket<'_, K, T> {
    pub fn load_or(&self, fallback: T) -> T {
        let raw = match self.kv.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "failed to read stored value");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "failed to parse stored value");
                fallback
            }
        }
    }
}

impl<K: KeyValueStore, T: Serialize> Bucket<'_, K, T> {
    /// Write `value`, logging and dropping any failure.
    pub fn save(&self, value: &T) {
        if let Err(e) = self.try_save(value) {
            tracing::error!(key = self.key, error = %e, "failed to save value");
        }
    }

    pub fn try_save(&self, value: &T) -> SharedCalResult<()> {
        let json = serde_json::to_string(value)?;
        self.kv.set(self.key, &json)
    }
}
