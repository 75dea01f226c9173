//! Quiz Module
//!
//! Serves quiz questions one at a time without repeats.
//!
//! ## Round Model
//! The server keeps no round state. Each request carries the category the
//! player chose and every question id already served; the selector removes
//! those ids from the category's pool and draws one of the remaining
//! questions uniformly at random. When nothing remains the round is over and
//! the selector returns `None`. Selection never writes to the store.
//!
//! ## Submodules
//! - **`selector`**: pool loading, exclusion and random choice.
//! - **`types`**: the category selector, including the "all categories" sentinel.

pub mod selector;
pub mod types;
