// ABOUTME: Injected key-value storage provider for persisted session values
// ABOUTME: Read-only trait for the guard, writable extension for sign-in/out, DashMap backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::constants::storage_keys;

/// Read access to persisted client storage
///
/// The guard only ever reads. Implementations must return the value exactly
/// as stored; interpretation happens in the guard.
pub trait SessionStorage: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
}

/// Write access used by sign-in and sign-out collaborators
pub trait SessionStorageMut: SessionStorage {
    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: String);

    /// Remove `key`; absent keys are ignored
    fn remove(&self, key: &str);
}

impl<T: SessionStorage + ?Sized> SessionStorage for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: SessionStorageMut + ?Sized> SessionStorageMut for Arc<T> {
    fn set(&self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<T: SessionStorage + ?Sized> SessionStorage for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl SessionStorage for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// In-process storage backend
///
/// Stands in for browser storage in tests and in hosts that keep the session
/// in memory. Single-key reads and writes are atomic.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: DashMap<String, String>,
}

impl MemorySessionStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }
}

impl SessionStorageMut for MemorySessionStorage {
    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Storage keys the session lives under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeys {
    /// Bearer access token
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
    /// Serialized profile
    pub profile: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            access_token: storage_keys::ACCESS_TOKEN.to_owned(),
            refresh_token: storage_keys::REFRESH_TOKEN.to_owned(),
            profile: storage_keys::USER_DATA.to_owned(),
        }
    }
}

impl SessionKeys {
    /// Every key written at sign-in
    #[must_use]
    pub fn all(&self) -> [&str; 3] {
        [
            self.access_token.as_str(),
            self.refresh_token.as_str(),
            self.profile.as_str(),
        ]
    }
}
