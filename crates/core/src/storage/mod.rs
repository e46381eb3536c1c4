//! Single-document storage backends.
//!
//! The cache and the history each own exactly one JSON document. They reach
//! it through [`Storage`], so the same logic runs against a file on disk or
//! an in-memory fake.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::Error;

/// A slot holding one whole document.
pub trait Storage: Send + Sync {
    /// Read the stored document.
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<Vec<u8>>, Error>;

    /// Replace the stored document with `bytes`.
    fn write(&self, bytes: &[u8]) -> Result<(), Error>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self) -> Result<Option<Vec<u8>>, Error> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        (**self).write(bytes)
    }
}
