use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::error;

use service::db::{category_service, question_service};
use service::pagination;

use crate::errors::ApiError;
use crate::routes::questions::PageQuery;
use crate::routes::ServerState;

/// `{id: type, ...}` object embedded in category and question listings.
/// Integer ids become string keys, as JSON objects require.
pub(crate) fn category_map(categories: &[models::category::Model]) -> Map<String, Value> {
    let mut map = Map::new();
    for c in categories {
        map.insert(c.id.to_string(), Value::String(c.r#type.clone()));
    }
    map
}

/// GET /categories
pub async fn list(State(state): State<ServerState>) -> Result<Json<Value>, ApiError> {
    let categories = category_service::list_categories(&state.db).await.map_err(|e| {
        error!(err = %e, "list categories failed");
        ApiError::Internal
    })?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// GET /categories/:category_id/questions
pub async fn questions(
    State(state): State<ServerState>,
    category_id: Result<Path<i32>, PathRejection>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    // a non-integer id never matches a category
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;

    let category = category_service::get_category(&state.db, category_id)
        .await
        .map_err(|e| {
            error!(err = %e, category_id, "category lookup failed");
            ApiError::Internal
        })?;
    if category.is_none() {
        return Err(ApiError::NotFound);
    }

    let questions = question_service::list_by_category(&state.db, category_id)
        .await
        .map_err(|e| {
            error!(err = %e, category_id, "category questions query failed");
            ApiError::Unprocessable
        })?;
    let current = pagination::paginate(q.page(), &questions);
    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": questions.len(),
        "current_category": category_id,
    })))
}
