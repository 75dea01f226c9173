//! Query Module
//!
//! The read-side views over the question corpus used by the listing endpoints.
//!
//! ## Submodules
//! - **`pager`**: 1-based fixed-size windows over an ordered result list.
//! - **`searcher`**: case-insensitive substring matching on question text.
//! - **`category`**: exact category filtering, reporting "no matches" distinctly.
//!
//! Everything here is pure: inputs are slices supplied by the store, outputs
//! are new vectors or sub-slices. Ordering is whatever the store supplied.

pub mod category;
pub mod pager;
pub mod searcher;
