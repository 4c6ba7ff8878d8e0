//! API routes for the resume server

pub mod page;
pub mod resume;

use axum::{routing::get, Router};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/resume", get(resume::get_resume))
        .route("/info", get(info))
}

/// API info endpoint
async fn info(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "resume-folio",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Portfolio page and resume API built from .docx files",
        "cache_backend": state.cache().name(),
        "endpoints": {
            "GET /": "Rendered portfolio page",
            "GET /api/resume": "Profile as JSON",
            "GET /api/info": "This document",
            "GET /static/*": "Static assets",
            "GET /health": "Liveness",
            "GET /ready": "Cache readiness"
        }
    }))
}
