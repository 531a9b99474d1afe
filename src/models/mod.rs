//! Data models for the manual search index.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Manual`] - The three fixed reference manuals and their resource names
//! - [`IndexItem`] - One searchable entry loaded from an index file
//! - [`IndexFile`] - The on-disk shape of a per-manual index resource
//! - [`SearchOutcome`] - The three distinct results of a search pass
//!
//! These models use serde for JSON deserialization with a custom deserializer
//! for the `page` field (absent or zero pages coerce to 1).

pub mod index;
pub mod manual;
pub mod search;

pub use index::{IndexFile, IndexItem};
pub use manual::Manual;
pub use search::SearchOutcome;
