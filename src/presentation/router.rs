use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_session_handler, delete_session_handler, health_handler, query_handler,
    retrieve_handler, rewrite_handler, session_status_handler, summary_handler,
    upload_document_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = upload_limit_bytes(state.settings.server.max_upload_mb);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/sessions", post(create_session_handler))
        .route(
            "/api/v1/sessions/{session_id}",
            get(session_status_handler).delete(delete_session_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/document",
            post(upload_document_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/{session_id}/retrieve",
            post(retrieve_handler),
        )
        .route("/api/v1/sessions/{session_id}/query", post(query_handler))
        .route(
            "/api/v1/sessions/{session_id}/summary",
            post(summary_handler),
        )
        .route("/api/v1/rewrite", post(rewrite_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Body limit for document uploads. Clamps instead of overflowing.
fn upload_limit_bytes(max_upload_mb: usize) -> usize {
    max_upload_mb.saturating_mul(1024 * 1024)
}
