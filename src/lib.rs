//! Trivia API Library
//!
//! This library crate defines the modules behind the trivia game service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Modules
//! - **`store`**: The question store contract and its in-memory implementation,
//!   including JSON seed loading.
//! - **`query`**: Pagination, case-insensitive search and category filtering
//!   over the question corpus.
//! - **`quiz`**: The quiz selector. Draws an unseen question at random and
//!   signals when a round is exhausted.
//! - **`api`**: The axum HTTP layer. Routing, request validation and JSON responses.
//! - **`config`** / **`error`**: Startup configuration and the shared error taxonomy.

pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod quiz;
pub mod store;
