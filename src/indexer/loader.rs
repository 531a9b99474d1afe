//! Loader for the per-manual index resources.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Read errors**: A missing or unreadable index file is logged as a warning
//!   and skipped; the remaining manuals still load
//! - **Parse errors**: Malformed JSON gets the same treatment as a read error
//! - **User feedback**: A per-file count and a final summary are printed to
//!   stderr
//!
//! One manual's failure never blocks the others; a failed resource simply
//! contributes no items until the next full reload.

use std::fs;
use std::path::Path;

use crate::models::{IndexFile, IndexItem, Manual};

/// Load every manual's index from `dir` into one ordered collection.
///
/// Files are read in [`Manual::ALL`] order and each file's items are appended
/// in their on-disk order, so the final ordering is file-list order then
/// in-file order. Items are never deduplicated.
///
/// There is no partial result exposure: callers see either the empty
/// collection (nothing loaded yet) or the completed concatenation. Reloading
/// means calling this again and replacing the collection wholesale.
pub fn load_index(dir: &Path) -> Vec<IndexItem> {
    let mut items = Vec::new();

    for manual in Manual::ALL {
        let path = dir.join(manual.index_file());

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Warning: could not read {}: {}", path.display(), e);
                continue;
            }
        };

        match serde_json::from_str::<IndexFile>(&raw) {
            Ok(file) => {
                eprintln!("Loaded {} entries from {}", file.items.len(), manual.index_file());
                items.extend(file.items);
            }
            Err(e) => {
                eprintln!("Warning: could not parse {}: {}", path.display(), e);
            }
        }
    }

    eprintln!("Index loading complete: {} entries total", items.len());
    items
}
