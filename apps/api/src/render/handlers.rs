//! Preview endpoints: template catalogue and profile rendering.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{renderer_for, VisualDocument};
use crate::errors::AppError;
use crate::models::TemplateVariant;
use crate::routes::payload::{profile_from_body, SuccessEnvelope};

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

impl TemplateQuery {
    /// Selected variant, `Modern` when the parameter is absent.
    pub fn variant(&self) -> Result<TemplateVariant, AppError> {
        match self.template.as_deref() {
            None => Ok(TemplateVariant::default()),
            Some(name) => name
                .parse::<TemplateVariant>()
                .map_err(|e| AppError::Validation(e.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: TemplateVariant,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    pub template: TemplateVariant,
    pub document: VisualDocument,
    pub markup: String,
}

/// GET /api/templates
pub async fn handle_list_templates() -> Json<SuccessEnvelope<Vec<TemplateSummary>>> {
    let templates = TemplateVariant::ALL
        .into_iter()
        .map(|variant| TemplateSummary {
            id: variant,
            name: variant.display_name(),
            description: variant.description(),
        })
        .collect();
    Json(SuccessEnvelope::new(templates))
}

/// POST /api/resume/render?template=classic|modern|minimal
pub async fn handle_render_resume(
    Query(query): Query<TemplateQuery>,
    Json(body): Json<Value>,
) -> Result<Json<SuccessEnvelope<RenderedResume>>, AppError> {
    let variant = query.variant()?;
    let profile = profile_from_body(body)?;
    let renderer = renderer_for(variant);

    Ok(Json(SuccessEnvelope::new(RenderedResume {
        template: variant,
        document: renderer.render(&profile),
        markup: renderer.snapshot(&profile)?,
    })))
}
