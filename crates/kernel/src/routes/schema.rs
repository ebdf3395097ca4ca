//! Schema API for the authoring tool.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::schema::{PreviewLabel, SchemaCatalog, Severity, ValidationIssue};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ValidationResponse {
    schema: String,
    /// False when any issue has error severity; warnings alone still pass.
    valid: bool,
    issues: Vec<ValidationIssue>,
}

/// Create the schema router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schema", get(list_schemas))
        .route("/api/schema/{name}/validate", post(validate))
        .route("/api/schema/{name}/preview", post(preview))
}

async fn list_schemas(State(state): State<AppState>) -> Json<SchemaCatalog> {
    Json(state.schemas().as_ref().clone())
}

async fn validate(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(value): Json<Value>,
) -> AppResult<Json<ValidationResponse>> {
    let issues = state
        .schemas()
        .validate(&name, &value)
        .ok_or(AppError::NotFound)?;
    let valid = !issues.iter().any(|i| i.severity == Severity::Error);
    Ok(Json(ValidationResponse {
        schema: name,
        valid,
        issues,
    }))
}

async fn preview(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(value): Json<Value>,
) -> AppResult<Json<PreviewLabel>> {
    state
        .schemas()
        .preview(&name, &value)
        .map(Json)
        .ok_or(AppError::NotFound)
}
