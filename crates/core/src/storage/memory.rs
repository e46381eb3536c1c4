//! In-memory storage for tests and ephemeral use.

use std::sync::{Mutex, MutexGuard};

use super::Storage;
use crate::Error;

/// A document held in process memory.
///
/// A read-only store rejects every write, which lets callers exercise
/// their write-failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<u8>>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `bytes`.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self { slot: Mutex::new(Some(bytes.into())), read_only: false }
    }

    /// A store whose writes always fail.
    pub fn read_only(contents: Option<Vec<u8>>) -> Self {
        Self { slot: Mutex::new(contents), read_only: true }
    }

    /// Current raw contents.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<u8>>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.lock().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        if self.read_only {
            return Err(Error::StorageUnavailable("memory store is read-only".into()));
        }
        *self.lock() = Some(bytes.to_vec());
        Ok(())
    }
}
