//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Layout and callback wiring

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::Layout;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.to_string())
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}
