//! Manual Search - keyword search and PDF navigation for a fixed set of
//! reference manuals
//!
//! This library loads precomputed JSON text indexes for three technical
//! reference manuals (建築編 / 電気編 / 機械編), filters them by keyword and
//! manual, highlights matches in short snippets and resolves hits to a PDF
//! viewer target (`file.pdf#page=N&search=keyword`). It supports:
//!
//! - Fault-tolerant loading of the per-manual index files
//! - Case-insensitive substring search with an exact part filter
//! - Snippet truncation with literal (metacharacter-safe) highlighting
//! - Driving an external viewer frame, including a best-effort in-document
//!   search trigger
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use manual_search::{SearchOutcome, SessionState, load_index};
//!
//! let mut session = SessionState::new(load_index(Path::new("/srv/manuals")));
//! match session.search("配線", Some("電気編")) {
//!     SearchOutcome::Hits(hits) => println!("{} hits", hits.len()),
//!     SearchOutcome::NoMatches => println!("no matches"),
//!     SearchOutcome::NoQuery => println!("empty query"),
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod indexer;
pub mod models;
pub mod navigator;
pub mod render;
pub mod search;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use indexer::load_index;
pub use models::{IndexItem, Manual, SearchOutcome};
pub use navigator::{NavRequest, NavTarget};
pub use search::SessionState;
