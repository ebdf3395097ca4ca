//! Revalidation webhook: evicts cached pages after CMS mutations.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::content::model::{Slug, normalize_path};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Prefix the CMS puts on unpublished document ids.
const DRAFTS_PREFIX: &str = "drafts.";

#[derive(Debug, Default, Deserialize)]
pub struct RevalidatePayload {
    /// Event source; only `mutation` events (or unspecified) revalidate.
    pub source: Option<String>,
    pub document: Option<RevalidateDocument>,
    /// Flush every cached page.
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RevalidateDocument {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    pub slug: Option<Slug>,
}

#[derive(Debug, Serialize)]
struct RevalidateResponse {
    revalidated: bool,
    tags: Vec<String>,
    invalidated: usize,
}

/// Cache tags affected by a payload, or `None` when it should be ignored.
pub fn revalidation_tags(payload: &RevalidatePayload) -> Option<Vec<String>> {
    if payload.source.as_deref().is_some_and(|s| s != "mutation") {
        return None;
    }
    let document = payload.document.as_ref()?;

    let mut tags = Vec::new();
    if let Some(id) = document.id.as_deref().filter(|i| !i.is_empty()) {
        tags.push(id.strip_prefix(DRAFTS_PREFIX).unwrap_or(id).to_string());
    }
    if let Some(slug) = document
        .slug
        .as_ref()
        .and_then(Slug::as_str)
        .filter(|s| !s.trim().is_empty())
    {
        tags.push(normalize_path(slug));
    }
    if let Some(doc_type) = document.doc_type.as_deref().filter(|t| !t.is_empty()) {
        tags.push(doc_type.to_string());
    }
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    Some(unique)
}

/// Check `Authorization: Bearer <token>` in constant time.
fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    let Some(provided) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    else {
        return false;
    };
    provided.trim().as_bytes().ct_eq(expected.as_bytes()).into()
}

async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RevalidatePayload>,
) -> AppResult<Json<RevalidateResponse>> {
    if let Some(token) = state.config().revalidate_token.as_deref()
        && !authorized(&headers, token)
    {
        warn!("revalidation request with missing or invalid token");
        return Err(AppError::Unauthorized);
    }

    if payload.all {
        let entries = state.cache().stats().await.entries;
        state.cache().invalidate_all();
        info!(entries, "revalidated all pages");
        return Ok(Json(RevalidateResponse {
            revalidated: true,
            tags: Vec::new(),
            invalidated: usize::try_from(entries).unwrap_or(usize::MAX),
        }));
    }

    let Some(tags) = revalidation_tags(&payload) else {
        debug!(source = ?payload.source, "ignoring non-mutation revalidation event");
        return Ok(Json(RevalidateResponse {
            revalidated: false,
            tags: Vec::new(),
            invalidated: 0,
        }));
    };

    let invalidated = state.cache().invalidate_tags(&tags).await;
    info!(tags = ?tags, invalidated, "revalidated cache tags");

    Ok(Json(RevalidateResponse {
        revalidated: true,
        tags,
        invalidated,
    }))
}

/// Create the revalidation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/revalidate", post(revalidate))
}
