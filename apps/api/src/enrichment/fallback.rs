//! Deterministic stand-ins for generated content.
//!
//! Two resume fallbacks exist because the failure points differ: a completion that
//! arrived but could not be parsed gets the generic variant, while an upstream call
//! that never produced text gets a variant personalised from the profile itself.

use crate::models::{EnhancedExperience, EnrichmentResult, Profile};

pub const GENERIC_SUMMARY: &str = "Dynamic professional with proven expertise in modern \
    technologies and a track record of delivering high-quality solutions that drive business success.";

const GENERIC_BULLETS: [&str; 3] = [
    "Led key initiatives that improved team productivity and project outcomes",
    "Collaborated with cross-functional teams to deliver innovative solutions",
    "Implemented best practices resulting in enhanced system performance",
];

const UNAVAILABLE_BULLETS: [&str; 3] = [
    "Collaborated effectively with diverse teams to achieve common goals",
    "Continuously improved processes and implemented innovative solutions",
    "Mentored team members and contributed to knowledge sharing initiatives",
];

/// Used when a skill list would otherwise interpolate as nothing.
const NO_SKILLS_PHRASE: &str = "a broad range of disciplines";

fn top_skills(profile: &Profile, count: usize, separator: &str) -> String {
    let skills = profile.skills_in_use();
    if skills.is_empty() {
        return NO_SKILLS_PHRASE.to_string();
    }
    skills
        .into_iter()
        .take(count)
        .collect::<Vec<_>>()
        .join(separator)
}

fn echo_entry(profile: &Profile, index: usize, bullets: Vec<String>) -> EnhancedExperience {
    let entry = &profile.experience[index];
    EnhancedExperience {
        job_title: Some(entry.job_title.clone()),
        company: Some(entry.company.clone()),
        bullet_points: Some(bullets),
    }
}

/// The completion arrived but was not the JSON shape we asked for.
pub fn unparsed_enrichment(profile: &Profile) -> EnrichmentResult {
    EnrichmentResult {
        summary: GENERIC_SUMMARY.to_string(),
        enhanced_experience: (0..profile.experience.len())
            .map(|i| echo_entry(profile, i, GENERIC_BULLETS.map(str::to_string).to_vec()))
            .collect(),
        skills_recommendations: profile.skills.clone(),
    }
}

/// The upstream call failed outright (network, non-2xx, rate limit, empty reply).
pub fn unavailable_enrichment(profile: &Profile) -> EnrichmentResult {
    let role = if profile.target_role.trim().is_empty() {
        "professional"
    } else {
        profile.target_role.trim()
    };

    EnrichmentResult {
        summary: format!(
            "Passionate and results-driven {role} with expertise in {} and a commitment to \
             excellence in every project.",
            top_skills(profile, 3, ", ")
        ),
        enhanced_experience: profile
            .experience
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut bullets = vec![format!(
                    "Successfully delivered {} projects on time and within budget",
                    entry.job_title.trim().to_lowercase()
                )];
                bullets.extend(UNAVAILABLE_BULLETS.iter().map(|b| b.to_string()));
                echo_entry(profile, i, bullets)
            })
            .collect(),
        skills_recommendations: profile.skills.clone(),
    }
}

/// Templated three-paragraph letter built only from the profile.
pub fn cover_letter(profile: &Profile) -> String {
    let full_name = profile.personal_info.full_name.trim();
    let company = profile.target_company_name().unwrap_or("your organization");
    let opener = match profile.experience.first() {
        Some(recent) => format!(
            "In my recent role as {} at {}, I have",
            recent.job_title.trim(),
            recent.company.trim()
        ),
        None => "Throughout my career, I have".to_string(),
    };

    format!(
        "Dear Hiring Manager,\n\n\
         I am writing to express my strong interest in the {role} position at {company}. \
         With my comprehensive background in {top_three}, I am excited about the opportunity \
         to contribute to your team's continued success and growth.\n\n\
         {opener} demonstrated expertise in {top_two}, consistently delivering high-quality \
         results that exceed expectations. My experience has equipped me with both the technical \
         skills and collaborative mindset necessary to make an immediate positive impact in this role.\n\n\
         I would welcome the opportunity to discuss how my background, enthusiasm, and commitment \
         to excellence can contribute to your team's objectives. Thank you for considering my \
         application, and I look forward to hearing from you soon.\n\n\
         Sincerely,\n\
         {full_name}",
        role = profile.target_role.trim(),
        top_three = top_skills(profile, 3, ", "),
        top_two = top_skills(profile, 2, " and "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, PersonalInfo};

    fn profile() -> Profile {
        Profile {
            personal_info: PersonalInfo {
                full_name: "Jane A. Doe".to_string(),
                ..Default::default()
            },
            experience: vec![
                ExperienceEntry {
                    job_title: "Staff Engineer".to_string(),
                    company: "Globex".to_string(),
                    ..Default::default()
                },
                ExperienceEntry {
                    job_title: "Engineer".to_string(),
                    company: "Initech".to_string(),
                    ..Default::default()
                },
            ],
            skills: vec![
                "Rust".to_string(),
                "".to_string(),
                "Kafka".to_string(),
                "SQL".to_string(),
                "Go".to_string(),
            ],
            target_role: "Platform Engineer".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unparsed_fallback_gives_three_generic_bullets_per_entry() {
        let result = unparsed_enrichment(&profile());
        assert_eq!(result.summary, GENERIC_SUMMARY);
        assert_eq!(result.enhanced_experience.len(), 2);
        for slot in &result.enhanced_experience {
            assert_eq!(slot.bullet_points.as_ref().unwrap().len(), 3);
        }
        assert_eq!(result.skills_recommendations, profile().skills);
    }

    #[test]
    fn test_unavailable_fallback_uses_role_and_first_three_skills() {
        let result = unavailable_enrichment(&profile());
        assert!(result.summary.contains("Platform Engineer"));
        assert!(result.summary.contains("Rust, Kafka, SQL"));
        assert!(!result.summary.contains("Go"));
        let first = result.enhanced_experience[0].bullet_points.as_ref().unwrap();
        assert_eq!(first.len(), 4);
        assert!(first[0].contains("staff engineer projects"));
    }

    #[test]
    fn test_unavailable_fallback_without_role_says_professional() {
        let mut p = profile();
        p.target_role = "  ".to_string();
        assert!(unavailable_enrichment(&p).summary.contains("results-driven professional"));
    }

    #[test]
    fn test_cover_letter_mentions_recent_role_and_company_default() {
        let letter = cover_letter(&profile());
        assert!(letter.starts_with("Dear Hiring Manager,"));
        assert!(letter.contains("Platform Engineer position at your organization"));
        assert!(letter.contains("recent role as Staff Engineer at Globex"));
        assert!(letter.contains("expertise in Rust and Kafka"));
        assert!(letter.ends_with("Jane A. Doe"));
    }

    #[test]
    fn test_cover_letter_without_experience_or_skills_still_reads() {
        let mut p = profile();
        p.experience.clear();
        p.skills.clear();
        p.target_company = Some("Umbrella".to_string());
        let letter = cover_letter(&p);
        assert!(letter.contains("Throughout my career, I have"));
        assert!(letter.contains("position at Umbrella"));
        assert!(letter.contains(NO_SKILLS_PHRASE));
    }
}
