//! REST API routes for schema suggestions
//!
//! Thin transport over the suggestion core: the handlers validate and shape
//! payloads, everything else happens in [`crate::suggest`]. Malformed bodies
//! are rejected by axum's `Json` extractor before the core sees them.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::suggest::{suggest_classes, AttributePredictor, Suggestion};
use crate::vocabulary::VocabularyStore;

/// Default number of suggestions per request
const DEFAULT_MAX_SUGGESTIONS: i64 = 6;

/// Shared read-only state for all suggestion requests
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VocabularyStore>,
    pub predictor: Arc<dyn AttributePredictor>,
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SuggestClassesRequest {
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub existing_classes: Vec<String>,
    /// Maximum number of suggestions; negative values are treated as zero
    pub max: Option<i64>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// POST /api/suggest/classes
/// Suggest new entity names for a project, with predicted attributes
async fn suggest_classes_handler(
    State(state): State<AppState>,
    Json(req): Json<SuggestClassesRequest>,
) -> Json<Vec<Suggestion>> {
    let max_items = req.max.unwrap_or(DEFAULT_MAX_SUGGESTIONS).max(0) as usize;
    tracing::info!(
        title = %req.project_title,
        existing = req.existing_classes.len(),
        max_items,
        "suggestion request"
    );
    let suggestions = suggest_classes(
        &state.store,
        state.predictor.as_ref(),
        &req.project_title,
        &req.existing_classes,
        max_items,
    )
    .await;
    Json(suggestions)
}

/// Build the suggestion router over shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/suggest/classes", post(suggest_classes_handler))
        .with_state(state)
}
