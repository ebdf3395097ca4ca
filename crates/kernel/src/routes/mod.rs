//! HTTP route handlers.

pub mod front;
pub mod health;
pub mod helpers;
pub mod revalidate;
pub mod schema;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
///
/// The page catch-all is merged last; static routes take precedence over it.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(schema::router())
        .merge(revalidate::router())
        .merge(front::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
