// Enrichment relay: profile in, generated summary / bullets / cover letter out.
// All upstream calls go through llm_client::TextGenerator. Failures never reach
// the caller; they are logged and replaced by the deterministic content in `fallback`.

pub mod fallback;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::enrichment::prompts::{
    COVER_LETTER_MAX_TOKENS, COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_TEMPERATURE,
    COVER_LETTER_WORD_LIMIT, RESUME_MAX_TOKENS, RESUME_PROMPT_TEMPLATE, RESUME_TEMPERATURE,
};
use crate::llm_client::{parse_json, CompletionRequest, LlmError, TextGenerator};
use crate::models::{EnrichmentResult, Profile};

const BILLING_URL: &str = "https://platform.openai.com/account/billing";

/// Graceful-degradation client: every call resolves with usable content.
///
/// Not pure: generation runs at temperature > 0, so identical input can yield
/// different text. Only the fallback paths are deterministic.
#[derive(Clone)]
pub struct EnrichmentClient {
    generator: Arc<dyn TextGenerator>,
}

impl EnrichmentClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generates a summary, per-experience bullet points and skill recommendations.
    pub async fn enrich_resume(&self, profile: &Profile) -> EnrichmentResult {
        let prompt = build_resume_prompt(profile);
        let completion = self
            .generator
            .complete(CompletionRequest {
                prompt: &prompt,
                temperature: RESUME_TEMPERATURE,
                max_tokens: RESUME_MAX_TOKENS,
            })
            .await;

        let text = match completion {
            Ok(text) => text,
            Err(e) => {
                log_upstream_failure("resume enrichment", &e);
                return fallback::unavailable_enrichment(profile);
            }
        };

        match parse_json::<EnrichmentResult>(&text) {
            Ok(mut result) => {
                if result.summary_text().is_none() {
                    warn!("Enrichment returned a blank summary; substituting the generic one");
                    result.summary = fallback::GENERIC_SUMMARY.to_string();
                }
                if result.enhanced_experience.len() != profile.experience.len() {
                    warn!(
                        "Enrichment returned {} experience slots for {} entries; unmatched entries keep their descriptions",
                        result.enhanced_experience.len(),
                        profile.experience.len()
                    );
                }
                info!(
                    "Resume enriched for target role {:?} ({} experience slots)",
                    profile.target_role,
                    result.enhanced_experience.len()
                );
                result
            }
            Err(e) => {
                warn!("Enrichment response was not the expected JSON ({e}); using generic content");
                fallback::unparsed_enrichment(profile)
            }
        }
    }

    /// Generates a three-paragraph cover letter, optionally tailored to a job description.
    pub async fn enrich_cover_letter(
        &self,
        profile: &Profile,
        job_description: Option<&str>,
    ) -> String {
        let prompt = build_cover_letter_prompt(profile, job_description);
        let completion = self
            .generator
            .complete(CompletionRequest {
                prompt: &prompt,
                temperature: COVER_LETTER_TEMPERATURE,
                max_tokens: COVER_LETTER_MAX_TOKENS,
            })
            .await;

        match completion {
            Ok(text) if !text.trim().is_empty() => {
                info!("Cover letter generated for target role {:?}", profile.target_role);
                text.trim().to_string()
            }
            Ok(_) => {
                log_upstream_failure("cover letter", &LlmError::EmptyContent);
                fallback::cover_letter(profile)
            }
            Err(e) => {
                log_upstream_failure("cover letter", &e);
                fallback::cover_letter(profile)
            }
        }
    }
}

fn log_upstream_failure(operation: &str, e: &LlmError) {
    error!("Upstream generation failed during {operation}: {e}");
    if matches!(e, LlmError::RateLimited { .. }) {
        warn!("Generation API quota exceeded. Please check your billing at {BILLING_URL}");
        warn!("Using fallback content for now; the service keeps working with pre-generated text.");
    }
}

/// Fills the resume prompt template from the profile.
pub fn build_resume_prompt(profile: &Profile) -> String {
    let education = profile
        .education
        .iter()
        .map(|edu| format!("{} from {}", edu.degree, edu.institution))
        .collect::<Vec<_>>()
        .join(", ");
    let experience = profile
        .experience
        .iter()
        .map(|exp| format!("{} at {} ({})", exp.job_title, exp.company, exp.duration))
        .collect::<Vec<_>>()
        .join(", ");

    RESUME_PROMPT_TEMPLATE
        .replace("{target_role}", &profile.target_role)
        .replace("{skills}", &profile.skills_in_use().join(", "))
        .replace("{education}", &education)
        .replace("{experience}", &experience)
        .replace("{full_name}", &profile.personal_info.full_name)
}

/// Fills the cover letter prompt; only the two most recent roles are mentioned.
pub fn build_cover_letter_prompt(profile: &Profile, job_description: Option<&str>) -> String {
    let key_experience = profile
        .experience
        .iter()
        .take(2)
        .map(|exp| format!("{} at {}", exp.job_title, exp.company))
        .collect::<Vec<_>>()
        .join(", ");
    let job_context = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(|jd| format!("\nJob Description Context: {jd}\n"))
        .unwrap_or_default();

    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{word_limit}", &COVER_LETTER_WORD_LIMIT.to_string())
        .replace("{target_role}", &profile.target_role)
        .replace(
            "{company}",
            profile.target_company_name().unwrap_or("the organization"),
        )
        .replace("{skills}", &profile.skills_in_use().join(", "))
        .replace("{key_experience}", &key_experience)
        .replace("{job_context}", &job_context)
        .replace("{full_name}", &profile.personal_info.full_name)
}


#[cfg(test)]
mod tests {
    use super::testing::{Reply, ScriptedGenerator};
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn profile() -> Profile {
        Profile {
            personal_info: PersonalInfo {
                full_name: "Jane A. Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Austin, TX".to_string(),
                ..Default::default()
            },
            education: vec![EducationEntry {
                id: "edu-0".to_string(),
                degree: "BSc Computer Science".to_string(),
                institution: "UT Austin".to_string(),
                graduation_year: "2016".to_string(),
                gpa: None,
            }],
            experience: vec![
                ExperienceEntry {
                    id: "exp-0".to_string(),
                    job_title: "Senior Engineer".to_string(),
                    company: "Globex".to_string(),
                    duration: "2020 - present".to_string(),
                    description: "Runs the billing platform".to_string(),
                    bullet_points: None,
                },
                ExperienceEntry {
                    id: "exp-1".to_string(),
                    job_title: "Engineer".to_string(),
                    company: "Initech".to_string(),
                    duration: "2016 - 2020".to_string(),
                    description: "Built TPS reporting".to_string(),
                    bullet_points: None,
                },
            ],
            skills: vec!["Rust".to_string(), "Postgres".to_string(), "Kafka".to_string()],
            target_role: "Staff Engineer".to_string(),
            target_company: Some("Umbrella".to_string()),
            enrichment: None,
        }
    }

    fn client(generator: ScriptedGenerator) -> (EnrichmentClient, Arc<ScriptedGenerator>) {
        let generator = Arc::new(generator);
        (EnrichmentClient::new(generator.clone()), generator)
    }

    #[test]
    fn test_resume_prompt_embeds_profile() {
        let prompt = build_resume_prompt(&profile());
        assert!(prompt.contains("Name: Jane A. Doe"));
        assert!(prompt.contains("Target Role: Staff Engineer"));
        assert!(prompt.contains("Skills: Rust, Postgres, Kafka"));
        assert!(prompt.contains("BSc Computer Science from UT Austin"));
        assert!(prompt.contains("Senior Engineer at Globex (2020 - present)"));
        assert!(!prompt.contains("{full_name}"));
    }

    #[test]
    fn test_cover_letter_prompt_includes_job_description_only_when_given() {
        let with_jd = build_cover_letter_prompt(&profile(), Some("Own the ledger service."));
        assert!(with_jd.contains("Job Description Context: Own the ledger service."));
        assert!(with_jd.contains("Company: Umbrella"));
        assert!(with_jd.contains("under 300 words"));

        let without = build_cover_letter_prompt(&profile(), Some("   "));
        assert!(!without.contains("Job Description Context"));
    }

    #[tokio::test]
    async fn test_enrich_resume_parses_fenced_json() {
        let reply = r#"```json
        {
            "summary": "Staff-level engineer with a decade of backend work.",
            "enhancedExperience": [
                {"jobTitle": "Senior Engineer", "bulletPoints": ["Cut billing latency 40%"]},
                {"jobTitle": "Engineer", "bulletPoints": ["Automated TPS reports"]}
            ],
            "skillsRecommendations": ["Rust", "Kafka"]
        }
        ```"#;
        let (client, generator) = client(ScriptedGenerator::text(reply));
        let result = client.enrich_resume(&profile()).await;

        assert_eq!(generator.calls(), 1);
        assert_eq!(result.summary_text(), Some("Staff-level engineer with a decade of backend work."));
        assert_eq!(result.bullets_for(1), Some(vec!["Automated TPS reports"]));
        assert_eq!(result.skills_recommendations, vec!["Rust", "Kafka"]);
    }

    #[tokio::test]
    async fn test_enrich_resume_unparseable_reply_uses_generic_fallback() {
        let (client, _) = client(ScriptedGenerator::text("Here is a great resume for you!"));
        let result = client.enrich_resume(&profile()).await;
        assert_eq!(result.summary, fallback::GENERIC_SUMMARY);
        assert_eq!(result.bullets_for(0).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_enrich_resume_upstream_failure_uses_personalised_fallback() {
        let (client, _) = client(ScriptedGenerator::new(Reply::RateLimited));
        let result = client.enrich_resume(&profile()).await;
        assert!(result.summary.contains("Staff Engineer"));
        assert!(result.summary.contains("Rust, Postgres, Kafka"));
        assert_eq!(result.bullets_for(0).unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_enrich_resume_blank_summary_is_replaced() {
        let reply = r#"{"summary": "  ", "enhancedExperience": [], "skillsRecommendations": []}"#;
        let (client, _) = client(ScriptedGenerator::text(reply));
        let result = client.enrich_resume(&profile()).await;
        assert_eq!(result.summary, fallback::GENERIC_SUMMARY);
        assert!(result.bullets_for(0).is_none());
    }

    #[tokio::test]
    async fn test_enrich_cover_letter_trims_completion() {
        let (client, generator) = client(ScriptedGenerator::text("\n\nDear Umbrella team,\n...\n"));
        let letter = client
            .enrich_cover_letter(&profile(), Some("Ledger work"))
            .await;
        assert_eq!(letter, "Dear Umbrella team,\n...");
        assert!(generator.last_prompt().unwrap().contains("Ledger work"));
    }

    #[tokio::test]
    async fn test_enrich_cover_letter_failure_is_deterministic() {
        let (client, _) = client(ScriptedGenerator::new(Reply::Unreachable));
        let first = client.enrich_cover_letter(&profile(), None).await;
        let second = client.enrich_cover_letter(&profile(), None).await;

        assert_eq!(first, second);
        assert!(first.contains("Jane A. Doe"));
        assert!(first.contains("Staff Engineer"));
        assert!(first.contains("Rust"));
    }

    #[tokio::test]
    async fn test_enrich_cover_letter_blank_completion_falls_back() {
        let (client, _) = client(ScriptedGenerator::text("   "));
        let letter = client.enrich_cover_letter(&profile(), None).await;
        assert!(letter.starts_with("Dear Hiring Manager,"));
    }
}
