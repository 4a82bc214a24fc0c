use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use service::db::question_service;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(default)]
    pub r#type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizInput {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// POST /quizzes
///
/// Stateless single-shot pick: the caller carries the seen-question set.
/// An exhausted candidate set is a success with a null question.
pub async fn play(
    State(state): State<ServerState>,
    payload: Result<Json<QuizInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::BadRequest)?;
    // both keys are required; category id 0 means "any category"
    let (Some(previous), Some(category)) = (input.previous_questions, input.quiz_category) else {
        return Err(ApiError::BadRequest);
    };

    let candidates = question_service::quiz_candidates(&state.db, &previous, category.id)
        .await
        .map_err(|e| {
            error!(err = %e, "quiz candidate query failed");
            ApiError::Unprocessable
        })?;

    if candidates.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "question": null,
        })));
    }

    let idx = rand::thread_rng().gen_range(0..candidates.len());
    Ok(Json(json!({
        "success": true,
        "question": candidates[idx],
    })))
}
