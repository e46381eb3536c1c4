//! Persisted search history.
//!
//! A most-recent-first list of normalized search terms, capped at a
//! configured length and stored as a JSON array of strings. The whole list is
//! rewritten after every mutation.

mod normalize;

pub use normalize::normalize_term;

use serde_json::Value;

use crate::Error;
use crate::storage::Storage;

/// How many terms the history keeps.
///
/// Where the list lives is up to the [`Storage`] handed to the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

impl HistoryConfig {
    pub const DEFAULT_MAX_ENTRIES: usize = 8;
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: Self::DEFAULT_MAX_ENTRIES }
    }
}

/// What to do when an inserted term is already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Leave the existing entry where it is.
    Skip,
    /// Move the existing entry to the front.
    Promote,
}

/// Ordered, de-duplicated, length-capped list of search terms.
pub struct SearchHistory<S> {
    store: S,
    entries: Vec<String>,
    max_entries: usize,
}

impl<S: Storage> SearchHistory<S> {
    /// Load the history from `store`.
    ///
    /// A missing or unparseable document yields an empty history, and
    /// non-string array elements are skipped. Loaded entries are normalized,
    /// de-duplicated and truncated to the cap. A cap of zero is raised to one.
    pub fn open(store: S, config: &HistoryConfig) -> Result<Self, Error> {
        let max_entries = config.max_entries.max(1);

        let raw = match store.read()? {
            None => Vec::new(),
            Some(bytes) => parse_terms(&bytes),
        };

        let loaded = raw.len();
        let mut entries: Vec<String> = Vec::with_capacity(loaded.min(max_entries));
        for term in raw.iter().filter_map(|t| normalize_term(t)) {
            if entries.len() == max_entries {
                break;
            }
            if !entries.contains(&term) {
                entries.push(term);
            }
        }

        if entries.len() != loaded {
            tracing::debug!(loaded, kept = entries.len(), max_entries, "Sanitized history on load");
        }

        Ok(Self { store, entries, max_entries })
    }

    /// Record a new search.
    ///
    /// A term already in the list keeps its position and nothing is written.
    /// Returns whether the list changed.
    pub fn add_entry(&mut self, term: &str) -> Result<bool, Error> {
        self.insert(term, DuplicatePolicy::Skip)
    }

    /// Record that the user picked `term`, moving it to the front if it is
    /// already present. Returns whether the list changed.
    pub fn select_entry(&mut self, term: &str) -> Result<bool, Error> {
        self.insert(term, DuplicatePolicy::Promote)
    }

    /// Insert `term` at the front under `policy`, truncate and persist.
    ///
    /// Empty input is ignored. The in-memory list only changes once the
    /// write has succeeded.
    pub fn insert(&mut self, term: &str, policy: DuplicatePolicy) -> Result<bool, Error> {
        let Some(term) = normalize_term(term) else {
            return Ok(false);
        };

        let existing = self.entries.iter().position(|e| *e == term);
        let mut next = match (existing, policy) {
            (Some(_), DuplicatePolicy::Skip) => return Ok(false),
            (Some(index), DuplicatePolicy::Promote) => {
                let mut next = self.entries.clone();
                next.remove(index);
                next
            }
            (None, _) => self.entries.clone(),
        };
        next.insert(0, term);
        next.truncate(self.max_entries);

        let changed = next != self.entries;
        self.persist(&next)?;
        self.entries = next;
        Ok(changed)
    }

    /// Current terms, most recent first.
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `term` is present after normalization.
    pub fn contains(&self, term: &str) -> bool {
        normalize_term(term).is_some_and(|t| self.entries.contains(&t))
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    fn persist(&self, entries: &[String]) -> Result<(), Error> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.write(&bytes)
    }
}

/// Pull the string elements out of a JSON array document.
fn parse_terms(bytes: &[u8]) -> Vec<String> {
    match serde_json::from_slice::<Vec<Value>>(bytes) {
        Ok(values) => {
            let total = values.len();
            let terms: Vec<String> = values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            if terms.len() != total {
                tracing::warn!(skipped = total - terms.len(), "Skipping non-string history entries");
            }
            terms
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed history document");
            Vec::new()
        }
    }
}
