//! Single-slot response cache with a freshness window.
//!
//! The most recent payload is stored together with its capture time in one
//! JSON document:
//!
//! ```json
//! { "timestamp": 1700000000.25, "data": { "name": "Paris" } }
//! ```
//!
//! Every save overwrites the document. Staleness is decided when reading;
//! nothing is ever purged.

pub mod response;

pub use crate::Error;

pub use response::{CacheConfig, CacheEntry, ResponseCache};
