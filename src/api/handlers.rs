use super::AppState;
use super::types::*;
use super::validation::{category_index, parse_new_question, parse_quiz_request, parse_search_term};
use crate::error::TriviaError;
use crate::query::category::{CategoryMatch, filter_category};
use crate::query::pager::{is_out_of_range, paginate, parse_page};
use crate::quiz::selector::next_question;
use crate::store::types::{CategoryId, DeleteOutcome, QuestionId};

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::Json;

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Maps an error to its status code and JSON body, logging it on the way out.
pub fn reject(err: TriviaError) -> ApiError {
    let (status, kind) = match &err {
        TriviaError::Validation(_) => (StatusCode::BAD_REQUEST, "bad request"),
        TriviaError::NotFound(_) => (StatusCode::NOT_FOUND, "not found"),
        TriviaError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
        TriviaError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
        TriviaError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::warn!("Request rejected ({}): {}", status.as_u16(), err);
    }

    (
        status,
        Json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: format!("{} : {}", kind, err),
        }),
    )
}

fn malformed_body(rejection: JsonRejection) -> ApiError {
    reject(TriviaError::validation(format!(
        "malformed request body: {}",
        rejection.body_text()
    )))
}

pub async fn handle_list_categories(State(state): State<AppState>) -> ApiResult<CategoriesResponse> {
    let categories = state.store.categories().map_err(reject)?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_index(&categories),
    }))
}

pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<QuestionPageResponse> {
    let page = parse_page(params.page.as_deref());
    let questions = state.store.all().map_err(reject)?;
    let page_items = paginate(&questions, page, state.page_size);

    if is_out_of_range(page_items.len(), page, questions.len()) {
        return Err(reject(TriviaError::not_found(format!(
            "page {} has no questions",
            page
        ))));
    }

    let categories = state.store.categories().map_err(reject)?;
    tracing::debug!(
        "Listing page {} ({} of {} questions)",
        page,
        page_items.len(),
        questions.len()
    );

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_items.to_vec(),
        total_questions: questions.len(),
        categories: category_index(&categories),
        current_category: None,
    }))
}

pub async fn handle_delete_question(
    State(state): State<AppState>,
    id: Result<Path<QuestionId>, PathRejection>,
) -> ApiResult<DeleteResponse> {
    let Ok(Path(id)) = id else {
        return Err(reject(TriviaError::not_found("question id is not a number")));
    };

    match state.store.delete(id).map_err(reject)? {
        DeleteOutcome::Deleted => {
            tracing::info!("Deleted question {}", id);
            Ok(Json(DeleteResponse {
                success: true,
                deleted: id,
            }))
        }
        DeleteOutcome::NotFound => Err(reject(TriviaError::not_found(format!(
            "question {} does not exist",
            id
        )))),
    }
}

pub async fn handle_create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<CreateResponse> {
    let Json(req) = payload.map_err(malformed_body)?;
    let question = parse_new_question(req).map_err(reject)?;
    let id = state.store.insert(question).map_err(reject)?;

    tracing::info!("Created question {}", id);
    Ok(Json(CreateResponse {
        success: true,
        created: id,
    }))
}

pub async fn handle_search_questions(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<SearchResponse> {
    let Json(req) = payload.map_err(malformed_body)?;
    let term = parse_search_term(req).map_err(reject)?;
    let questions = state.store.search(&term).map_err(reject)?;

    tracing::debug!("Search {:?} matched {} questions", term, questions.len());
    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub async fn handle_category_questions(
    State(state): State<AppState>,
    id: Result<Path<CategoryId>, PathRejection>,
) -> ApiResult<CategoryQuestionsResponse> {
    let Ok(Path(category_id)) = id else {
        return Err(reject(TriviaError::not_found("category id is not a number")));
    };

    let corpus = state.store.all().map_err(reject)?;
    let matched = filter_category(&corpus, category_id);
    if matched == CategoryMatch::Empty {
        return Err(reject(TriviaError::not_found(format!(
            "no questions found for category {}",
            category_id
        ))));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: matched.count(),
        questions: matched.into_questions(),
        current_category: category_id,
    }))
}

pub async fn handle_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<QuizResponse> {
    let Json(req) = payload.map_err(malformed_body)?;
    let (category, previous) = parse_quiz_request(req).map_err(reject)?;
    let question = next_question(state.store.as_ref(), category, &previous).map_err(reject)?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub async fn handle_not_found() -> ApiError {
    reject(TriviaError::not_found("no such resource"))
}

pub async fn handle_method_not_allowed(method: Method, uri: Uri) -> ApiError {
    reject(TriviaError::method_not_allowed(format!(
        "{} is not supported on {}",
        method,
        uri.path()
    )))
}
