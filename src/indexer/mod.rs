//! Index loading for the manual search collection.
//!
//! Reads the fixed set of per-manual JSON index files and concatenates their
//! items into one in-memory collection.

pub mod loader;

pub use loader::load_index;
