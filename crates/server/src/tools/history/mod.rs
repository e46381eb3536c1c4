//! Search history MCP tools.

pub mod list;
pub mod record;

pub use list::list_impl;
pub use record::{HistoryTermParams, add_impl, select_impl};
