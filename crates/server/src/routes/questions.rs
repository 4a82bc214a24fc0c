use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use service::db::{category_service, question_service};
use service::pagination;

use crate::errors::ApiError;
use crate::routes::categories::category_map;
use crate::routes::ServerState;

/// `?page=N` with a lenient parse: anything unusable falls back to page 1.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        pagination::parse_page(self.page.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchInput {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// GET /questions?page=N
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let questions = question_service::list_questions(&state.db).await.map_err(|e| {
        error!(err = %e, "list questions failed");
        ApiError::Internal
    })?;
    let categories = category_service::list_categories_by_id(&state.db)
        .await
        .map_err(|e| {
            error!(err = %e, "list categories failed");
            ApiError::Internal
        })?;

    let current = pagination::paginate(q.page(), &questions);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": questions.len(),
        "categories": category_map(&categories),
        "current_category": null,
    })))
}

/// POST /questions
pub async fn create(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
    payload: Result<Json<CreateQuestionInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::BadRequest)?;
    let Some(text) = input.question else {
        return Err(ApiError::BadRequest);
    };

    let created = question_service::create_question(
        &state.db,
        &text,
        input.answer,
        input.category,
        input.difficulty,
    )
    .await
    .map_err(|e| {
        error!(err = %e, "insert question failed");
        ApiError::Unprocessable
    })?;
    info!(id = created.id, "created question");

    let questions = question_service::list_questions(&state.db).await.map_err(|e| {
        error!(err = %e, "re-list after insert failed");
        ApiError::Unprocessable
    })?;
    let current = pagination::paginate(q.page(), &questions);
    Ok(Json(json!({
        "success": true,
        "created": created.id,
        "questions": current,
        "total_questions": questions.len(),
    })))
}

/// DELETE /questions/:question_id
pub async fn remove(
    State(state): State<ServerState>,
    question_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(question_id) = question_id.map_err(|_| ApiError::NotFound)?;

    let existing = question_service::get_question(&state.db, question_id)
        .await
        .map_err(|e| {
            error!(err = %e, question_id, "question lookup failed");
            ApiError::Unprocessable
        })?;
    if existing.is_none() {
        return Err(ApiError::NotFound);
    }

    let deleted = question_service::delete_question(&state.db, question_id)
        .await
        .map_err(|e| {
            error!(err = %e, question_id, "delete question failed");
            ApiError::Unprocessable
        })?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    info!(question_id, "deleted question");
    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
    })))
}

/// POST /questions/search
pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
    payload: Result<Json<SearchInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::BadRequest)?;
    let Some(term) = input.search_term else {
        return Err(ApiError::BadRequest);
    };

    let questions = question_service::search_questions(&state.db, &term)
        .await
        .map_err(|e| {
            error!(err = %e, "search query failed");
            ApiError::Internal
        })?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let current = pagination::paginate(q.page(), &questions);
    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": questions.len(),
    })))
}
