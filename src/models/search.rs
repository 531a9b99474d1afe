use crate::models::IndexItem;

/// Outcome of one search pass.
///
/// An empty query and a query with zero matches are distinct UI states: the
/// first shows a placeholder, the second a "no results" message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty after trimming; nothing was searched.
    NoQuery,
    /// The query matched no items after filtering.
    NoMatches,
    /// Matching items in collection order, capped at the result limit.
    Hits(Vec<IndexItem>),
}
