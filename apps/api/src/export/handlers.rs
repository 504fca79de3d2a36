//! Download endpoints.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::{ExportDocument, ExportedFile};
use crate::errors::AppError;
use crate::render::handlers::TemplateQuery;
use crate::routes::payload::{profile_from_body, MISSING_FIELDS_MESSAGE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterExportRequest {
    pub user_data: Option<Value>,
    #[serde(default)]
    pub cover_letter: String,
}

/// `attachment` disposition with a quoted ASCII `filename` and, when the name
/// needs it, an RFC 6266 `filename*` carrying the UTF-8 original.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();
    if fallback == file_name {
        return format!("attachment; filename=\"{fallback}\"");
    }

    let mut encoded = String::new();
    for byte in file_name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => encoded.push(byte as char),
            b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

/// File bytes as an attachment, or 204 when there was nothing to export.
fn attachment(file: Option<ExportedFile>) -> Response {
    match file {
        Some(file) => (
            [
                (header::CONTENT_TYPE, file.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    content_disposition(&file.file_name),
                ),
            ],
            file.bytes,
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /api/export/resume?template=classic|modern|minimal
pub async fn handle_export_resume(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let variant = query.variant()?;
    let profile = profile_from_body(body)?;

    let file = state
        .exports
        .export_to_file(ExportDocument::resume(&profile, variant)?)
        .await?;
    Ok(attachment(file))
}

/// POST /api/export/cover-letter
pub async fn handle_export_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterExportRequest>,
) -> Result<Response, AppError> {
    let user_data = request
        .user_data
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;
    let profile = profile_from_body(user_data)?;

    let file = state
        .exports
        .export_to_file(ExportDocument::cover_letter(&profile, &request.cover_letter)?)
        .await?;
    Ok(attachment(file))
}
