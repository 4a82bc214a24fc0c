use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;

pub mod categories;
pub mod questions;
pub mod quizzes;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// The router answers unmatched methods with a bare 405; rewrite those so
/// every error code carries the JSON error body.
async fn method_not_allowed_body(resp: Response) -> Response {
    if resp.status() == StatusCode::METHOD_NOT_ALLOWED {
        return ApiError::MethodNotAllowed.into_response();
    }
    resp
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(categories::list))
        .route("/categories/:category_id/questions", get(categories::questions))
        .route("/questions", get(questions::list).post(questions::create))
        .route("/questions/:question_id", delete(questions::remove))
        .route("/questions/search", post(questions::search))
        .route("/quizzes", post(quizzes::play))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::map_response(method_not_allowed_body))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
