use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::export::ExportFormat;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and export format.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let export_format = match state.exports.format() {
        ExportFormat::Pdf => "pdf",
        ExportFormat::Html => "html",
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio-api",
        "exportFormat": export_format,
    }))
}
