//! HTTP route handlers.

use askama::Template;
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;

use super::state::AppState;
use super::templates::BoardTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the icon assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The board page, rendered from the latest snapshot.
async fn board_page(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;

    let template = BoardTemplate {
        bus: snapshot.view.bus.clone(),
        rail: snapshot.view.rail.clone(),
        updated: snapshot
            .updated_at
            .map(|at| at.format("%H:%M:%S UTC").to_string()),
    };
    drop(snapshot);

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
