//! Core types and shared functionality for nimbus.
//!
//! This crate provides:
//! - Single-slot response cache with a freshness window
//! - Persisted, de-duplicated search history
//! - Pluggable single-document storage (file or memory)
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod storage;

pub use cache::{CacheConfig, CacheEntry, ResponseCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use history::{DuplicatePolicy, HistoryConfig, SearchHistory, normalize_term};
pub use storage::{FileStore, MemoryStore, Storage};
