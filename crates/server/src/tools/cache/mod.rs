//! Cache-related MCP tools.
//!
//! This module provides tools for interacting with the response cache.

pub mod get;
pub mod save;
pub mod status;

pub use get::get_impl;
pub use save::{CacheSaveParams, save_impl};
pub use status::status_impl;
