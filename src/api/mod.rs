//! HTTP API Module
//!
//! Exposes the trivia store, query views and quiz selector over JSON.
//!
//! ## Endpoints
//! - `GET /categories`: category index.
//! - `GET /questions?page=N`: paginated question listing.
//! - `POST /questions`: create a question.
//! - `DELETE /questions/:id`: delete a question.
//! - `POST /questions/search`: case-insensitive substring search.
//! - `GET /categories/:id/questions`: questions of one category.
//! - `POST /quizzes`: next unseen quiz question, `null` once exhausted.
//!
//! A known path hit with an unsupported method answers 405, an unknown path 404.
//! Errors share one body shape, `{"success": false, "error": <status>, "message": ...}`.

pub mod handlers;
pub mod types;
pub mod validation;

use crate::store::QuestionStore;
use handlers::*;

use axum::http::{HeaderValue, header};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub page_size: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }
}

async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS"),
    );
    response
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handle_list_categories).fallback(handle_method_not_allowed),
        )
        .route(
            "/categories/:id/questions",
            get(handle_category_questions).fallback(handle_method_not_allowed),
        )
        .route(
            "/questions",
            get(handle_list_questions)
                .post(handle_create_question)
                .fallback(handle_method_not_allowed),
        )
        .route(
            "/questions/search",
            post(handle_search_questions).fallback(handle_method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(handle_delete_question).fallback(handle_method_not_allowed),
        )
        .route(
            "/quizzes",
            post(handle_quiz).fallback(handle_method_not_allowed),
        )
        .fallback(handle_not_found)
        .layer(middleware::map_response(add_cors_headers))
        .with_state(state)
}
