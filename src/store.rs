//! Storage collaborator interface for short codes.
//!
//! The hash and encode core never guarantees uniqueness. A store is where
//! uniqueness is enforced: `put` must be an atomic insert-if-absent per
//! code, so two writers racing on the same code cannot both succeed.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::error::{MurmurCodeError, Result};

/// A key space mapping short codes to the values they stand for.
pub trait CodeStore {
    /// Insert `value` under `code` if the code is free.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if `code` is taken.
    fn put(&self, code: &str, value: &str) -> Result<()>;

    /// Look up the value stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored under `code`.
    fn get(&self, code: &str) -> Result<String>;

    /// Returns true if `code` is taken.
    fn contains(&self, code: &str) -> bool {
        self.get(code).is_ok()
    }

    /// Number of stored codes. Used to plan the length of new codes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the map half-updated:
    // every mutation is a single insert.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(|poisoned: PoisonError<_>| {
            debug!("recovering poisoned store lock");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(|poisoned: PoisonError<_>| {
            debug!("recovering poisoned store lock");
            poisoned.into_inner()
        })
    }
}

impl CodeStore for MemoryStore {
    fn put(&self, code: &str, value: &str) -> Result<()> {
        let mut entries = self.write();
        if entries.contains_key(code) {
            return Err(MurmurCodeError::AlreadyExists {
                code: code.to_string(),
            });
        }
        entries.insert(code.to_string(), value.to_string());
        trace!(code, "stored short code");
        Ok(())
    }

    fn get(&self, code: &str) -> Result<String> {
        self.read()
            .get(code)
            .cloned()
            .ok_or_else(|| MurmurCodeError::NotFound {
                code: code.to_string(),
            })
    }

    fn contains(&self, code: &str) -> bool {
        self.read().contains_key(code)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
