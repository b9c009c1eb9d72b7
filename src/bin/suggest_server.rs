//! Schema Suggestion REST API Server
//!
//! Serves class suggestions over HTTP, backed by the built-in domain
//! vocabulary and an external attribute prediction service.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (predictor defaults to http://localhost:5000/predict)
//! PREDICTOR_URL=http://localhost:5000/predict cargo run --bin suggest_server
//!
//! # Test endpoints
//! curl http://localhost:3000/api/health
//! curl -X POST http://localhost:3000/api/suggest/classes \
//!   -H "Content-Type: application/json" \
//!   -d '{"project_title": "tienda online", "existing_classes": ["cliente"], "max": 4}'
//! ```

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use schema_advisor::api::{create_router, AppState};
use schema_advisor::{HttpPredictor, VocabularyStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let store = Arc::new(VocabularyStore::builtin()?);
    let predictor = Arc::new(HttpPredictor::from_env());
    tracing::info!(domains = store.domains().len(), "vocabulary store loaded");

    let app = create_router(AppState {
        store,
        predictor,
    })
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http());

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "suggestion server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
