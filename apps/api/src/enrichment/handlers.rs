//! Axum route handlers for the two generation endpoints.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::Profile;
use crate::routes::payload::{profile_from_body, SuccessEnvelope, MISSING_FIELDS_MESSAGE};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub user_data: Option<Value>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterData {
    pub cover_letter: String,
    pub generated_at: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/generate
///
/// Returns the submitted profile with `aiGenerated` attached.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SuccessEnvelope<Profile>>, AppError> {
    let profile = profile_from_body(body)?;

    let enrichment = state.enrichment.enrich_resume(&profile).await;

    Ok(Json(SuccessEnvelope::new(profile.with_enrichment(enrichment))))
}

/// POST /api/cover-letter/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<SuccessEnvelope<CoverLetterData>>, AppError> {
    let user_data = request
        .user_data
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;
    let profile = profile_from_body(user_data)?;

    let cover_letter = state
        .enrichment
        .enrich_cover_letter(&profile, request.job_description.as_deref())
        .await;

    Ok(Json(SuccessEnvelope::new(CoverLetterData {
        cover_letter,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::enrichment::testing::{Reply, ScriptedGenerator};
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app(generator: Arc<ScriptedGenerator>) -> axum::Router {
        build_router(AppState::for_tests(generator))
    }

    async fn post(app: axum::Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn profile_json() -> serde_json::Value {
        json!({
            "personalInfo": {
                "fullName": "Jane A. Doe",
                "email": "jane@example.com",
                "phone": "555-0100",
                "location": "Austin, TX"
            },
            "education": [],
            "experience": [
                {"id": "exp-0", "jobTitle": "Engineer", "company": "Globex",
                 "duration": "2019 - 2024", "description": "Built things"}
            ],
            "skills": ["Rust", "SQL"],
            "targetRole": "Staff Engineer"
        })
    }

    #[tokio::test]
    async fn test_generate_resume_rejects_missing_fields_without_upstream_call() {
        let generator = Arc::new(ScriptedGenerator::text("{}"));
        let (status, body) = post(
            app(generator.clone()),
            "/api/resume/generate",
            json!({"personalInfo": {"fullName": "Jane"}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: personalInfo and targetRole");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_cover_letter_rejects_missing_fields_without_upstream_call() {
        let generator = Arc::new(ScriptedGenerator::text("Dear team"));
        let (status, _) = post(
            app(generator.clone()),
            "/api/cover-letter/generate",
            json!({"userData": {"targetRole": "SRE"}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post(app(generator.clone()), "/api/cover-letter/generate", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_resume_attaches_ai_generated() {
        let reply = r#"{"summary": "Builder of reliable systems.",
                        "enhancedExperience": [{"bulletPoints": ["Led the Globex migration"]}],
                        "skillsRecommendations": ["Rust"]}"#;
        let generator = Arc::new(ScriptedGenerator::text(reply));
        let (status, body) = post(app(generator.clone()), "/api/resume/generate", profile_json()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["personalInfo"]["fullName"], "Jane A. Doe");
        assert_eq!(body["data"]["aiGenerated"]["summary"], "Builder of reliable systems.");
        assert_eq!(
            body["data"]["experience"][0]["bulletPoints"][0],
            "Led the Globex migration"
        );
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_resume_upstream_failure_still_succeeds() {
        let generator = Arc::new(ScriptedGenerator::new(Reply::RateLimited));
        let (status, body) = post(app(generator), "/api/resume/generate", profile_json()).await;

        assert_eq!(status, StatusCode::OK);
        let summary = body["data"]["aiGenerated"]["summary"].as_str().unwrap();
        assert!(summary.contains("Staff Engineer"));
    }

    #[tokio::test]
    async fn test_cover_letter_returns_text_and_timestamp() {
        let generator = Arc::new(ScriptedGenerator::new(Reply::Unreachable));
        let (status, body) = post(
            app(generator),
            "/api/cover-letter/generate",
            json!({"userData": profile_json(), "jobDescription": "Own payments"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let letter = body["data"]["coverLetter"].as_str().unwrap();
        assert!(letter.contains("Jane A. Doe"));
        assert!(letter.contains("Staff Engineer"));
        let generated_at = body["data"]["generatedAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(generated_at).is_ok());
    }
}
