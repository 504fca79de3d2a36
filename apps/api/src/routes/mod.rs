pub mod health;
pub mod payload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enrichment::handlers as generate;
use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route("/api/resume/generate", post(generate::handle_generate_resume))
        .route(
            "/api/cover-letter/generate",
            post(generate::handle_generate_cover_letter),
        )
        // Preview
        .route("/api/templates", get(render::handle_list_templates))
        .route("/api/resume/render", post(render::handle_render_resume))
        // Downloads
        .route("/api/export/resume", post(export::handle_export_resume))
        .route(
            "/api/export/cover-letter",
            post(export::handle_export_cover_letter),
        )
        .with_state(state)
}
