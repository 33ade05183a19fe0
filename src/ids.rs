//! Tile identifier de-duplication.
//!
//! Ids are normalized by replacing `_` with `-`, then suffixed with a
//! per-base counter: the first `wall` becomes `wall-1`, the next `wall-2`.
//! Existing suffixes are not detected, so `wall-1` becomes `wall-1-1`.

use std::collections::HashMap;

/// Normalize an identifier for counting purposes.
pub fn normalize_id(raw: &str) -> String {
    raw.replace('_', "-")
}

/// Next-suffix table for one run.
#[derive(Debug, Default, Clone)]
pub struct IdCounter {
    next: HashMap<String, u32>,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the disambiguated form of `raw` and advance its counter.
    pub fn next(&mut self, raw: &str) -> String {
        let base = normalize_id(raw);
        let n = self.next.get(&base).copied().unwrap_or(1);
        let id = format!("{}-{}", base, n);
        self.next.insert(base, n + 1);
        id
    }
}
