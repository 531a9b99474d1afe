//! Keyword search over the in-memory index collection.
//!
//! Search is a stable, linear, case-insensitive substring filter. There is no
//! tokenization, stemming or ranking; matches keep their collection order and
//! are capped at [`MAX_HITS`].

use crate::models::{IndexItem, SearchOutcome};

/// Maximum number of matches returned by one search; anything beyond this is
/// silently dropped.
pub const MAX_HITS: usize = 50;

/// Session-wide search state.
///
/// Owns the concatenated index collection and the most recently submitted
/// keyword. The loader replaces `items` wholesale on reload and
/// [`SessionState::search`] is the only writer of `keyword`; everything else
/// reads.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Most recently submitted (trimmed) query; empty means no active search.
    pub keyword: String,
    /// All loaded index items in file-list order, then in-file order.
    pub items: Vec<IndexItem>,
}

impl SessionState {
    pub fn new(items: Vec<IndexItem>) -> Self {
        Self { keyword: String::new(), items }
    }

    /// Replace the collection wholesale after a reload.
    pub fn reload(&mut self, items: Vec<IndexItem>) {
        self.items = items;
    }

    /// Run a search pass.
    ///
    /// Trims `query` and records it as the session keyword before matching,
    /// even when empty; clearing the input thus clears the keyword used for
    /// highlighting and the viewer search fragment.
    ///
    /// With `part_filter` set, items whose `part` differs exactly are
    /// excluded. Matching is case-insensitive substring containment over the
    /// item text, preserving collection order, capped at [`MAX_HITS`].
    pub fn search(&mut self, query: &str, part_filter: Option<&str>) -> SearchOutcome {
        let query = query.trim();
        self.keyword = query.to_string();

        if query.is_empty() {
            return SearchOutcome::NoQuery;
        }

        let needle = query.to_lowercase();
        let hits: Vec<IndexItem> = self
            .items
            .iter()
            .filter(|item| part_filter.is_none_or(|part| item.part == part))
            .filter(|item| item.text.to_lowercase().contains(&needle))
            .take(MAX_HITS)
            .cloned()
            .collect();

        if hits.is_empty() { SearchOutcome::NoMatches } else { SearchOutcome::Hits(hits) }
    }
}
