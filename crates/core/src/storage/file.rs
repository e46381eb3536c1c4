//! File-backed storage with atomic replacement.
//!
//! Every write lands in its own uniquely named temp file in the target's
//! directory, gets synced, and is then renamed over the target. Readers see
//! either the old document or the new one, and concurrent writers never
//! share a temp file.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::Storage;
use crate::Error;

/// A document stored in a single file.
#[derive(Debug, Clone)]
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

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Storage for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>, Error> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Read document");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(&self.path, e)),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| Error::storage(dir, e))?;
        }

        write_synced(dir, &self.path, bytes).map_err(|e| Error::storage(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote document");
        Ok(())
    }
}

/// Write `bytes` to a fresh temp file in `dir` and rename it to `target`.
/// The temp file is removed on any failure.
fn write_synced(dir: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("doc.json"));

        store.write(b"[\"Paris\"]").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), b"[\"Paris\"]");

        store.write(b"[]").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("deeper").join("doc.json"));

        store.write(b"{}").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("doc.json"));
        store.write(b"{}").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["doc.json".to_string()]);
    }

    #[test]
    fn test_concurrent_writes_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("doc.json"));
        let short = br#"{"name":"Oslo"}"#.to_vec();
        let long = format!(r#"{{"name":"{}"}}"#, "Llanfairpwllgwyngyll".repeat(200)).into_bytes();

        for _ in 0..50 {
            std::thread::scope(|s| {
                let a = s.spawn(|| store.write(&short));
                let b = s.spawn(|| store.write(&long));
                a.join().unwrap().unwrap();
                b.join().unwrap().unwrap();
            });

            let contents = store.read().unwrap().unwrap();
            assert!(contents == short || contents == long);
        }

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["doc.json".to_string()]);
    }

    #[test]
    fn test_relative_path_writes_into_current_dir() {
        let store = FileStore::new("doc.json");
        assert_eq!(store.dir(), Path::new("."));
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let result = store.write(b"{}");
        assert!(matches!(result, Err(Error::Storage { .. })));
    }
}
