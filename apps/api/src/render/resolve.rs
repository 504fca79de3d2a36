//! Content resolution shared by every variant and by both render paths.
//!
//! All enrichment-vs-fallback and optional-field decisions happen here, once,
//! so the interactive document and the export snapshot can never disagree.

use crate::models::profile::non_blank;
use crate::models::Profile;

#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceBody<'a> {
    /// Generated bullets for this index.
    Bullets(Vec<&'a str>),
    /// No usable bullets: the entry's own free-text description.
    Description(&'a str),
    /// Neither bullets nor a description to show.
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedExperience<'a> {
    pub job_title: &'a str,
    pub company: &'a str,
    pub duration: &'a str,
    pub body: ExperienceBody<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEducation<'a> {
    pub degree: &'a str,
    pub institution: &'a str,
    pub graduation_year: &'a str,
    pub gpa: Option<&'a str>,
}

impl ResolvedEducation<'_> {
    pub fn gpa_label(&self) -> Option<String> {
        self.gpa.map(|gpa| format!("GPA: {gpa}"))
    }
}

/// A contact line item. The kind lets a variant decorate it (icons, separators).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    LinkedIn,
    Portfolio,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedResume<'a> {
    pub full_name: &'a str,
    pub target_role: &'a str,
    /// Present, non-blank contact fields in display order.
    pub contact: Vec<(ContactKind, &'a str)>,
    /// `None` means the summary region is omitted entirely.
    pub summary: Option<&'a str>,
    pub experience: Vec<ResolvedExperience<'a>>,
    pub education: Vec<ResolvedEducation<'a>>,
    pub skills: Vec<&'a str>,
}

impl<'a> ResolvedResume<'a> {
    pub fn from_profile(profile: &'a Profile) -> Self {
        let info = &profile.personal_info;
        let enrichment = profile.enrichment.as_ref();

        let contact = [
            (ContactKind::Email, non_blank(&info.email)),
            (ContactKind::Phone, non_blank(&info.phone)),
            (ContactKind::Location, non_blank(&info.location)),
            (ContactKind::LinkedIn, info.linked_in_url()),
            (ContactKind::Portfolio, info.portfolio_url()),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.map(|v| (kind, v)))
        .collect();

        let experience = profile
            .experience
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let body = match enrichment.and_then(|e| e.bullets_for(index)) {
                    Some(bullets) => ExperienceBody::Bullets(bullets),
                    None => match non_blank(&entry.description) {
                        Some(description) => ExperienceBody::Description(description),
                        None => ExperienceBody::Empty,
                    },
                };
                ResolvedExperience {
                    job_title: entry.job_title.trim(),
                    company: entry.company.trim(),
                    duration: entry.duration.trim(),
                    body,
                }
            })
            .collect();

        let education = profile
            .education
            .iter()
            .map(|edu| ResolvedEducation {
                degree: edu.degree.trim(),
                institution: edu.institution.trim(),
                graduation_year: edu.graduation_year.trim(),
                gpa: edu.gpa_value(),
            })
            .collect();

        Self {
            full_name: info.full_name.trim(),
            target_role: profile.target_role.trim(),
            contact,
            summary: enrichment.and_then(|e| e.summary_text()),
            experience,
            education,
            skills: profile.skills_in_use(),
        }
    }

    pub fn contact_values(&self) -> Vec<String> {
        self.contact.iter().map(|(_, v)| v.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EnhancedExperience, EnrichmentResult, ExperienceEntry, PersonalInfo,
    };

    fn profile() -> Profile {
        Profile {
            personal_info: PersonalInfo {
                full_name: " Jane Doe ".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Austin".to_string(),
                linked_in: Some("".to_string()),
                portfolio: Some("https://jane.dev".to_string()),
            },
            experience: vec![
                ExperienceEntry {
                    job_title: "Lead".to_string(),
                    description: "Led a team".to_string(),
                    ..Default::default()
                },
                ExperienceEntry {
                    job_title: "Engineer".to_string(),
                    description: "Wrote code".to_string(),
                    ..Default::default()
                },
                ExperienceEntry {
                    job_title: "Intern".to_string(),
                    description: "".to_string(),
                    ..Default::default()
                },
            ],
            skills: vec!["Rust".to_string(), " ".to_string(), "Rust".to_string()],
            target_role: "Staff Engineer".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_without_enrichment_descriptions_are_used_and_summary_omitted() {
        let p = profile();
        let resolved = ResolvedResume::from_profile(&p);
        assert_eq!(resolved.full_name, "Jane Doe");
        assert_eq!(resolved.summary, None);
        assert_eq!(resolved.experience[0].body, ExperienceBody::Description("Led a team"));
        assert_eq!(resolved.experience[2].body, ExperienceBody::Empty);
    }

    #[test]
    fn test_short_enrichment_falls_back_per_index() {
        let p = profile().with_enrichment(EnrichmentResult {
            summary: "Leader.".to_string(),
            enhanced_experience: vec![EnhancedExperience {
                bullet_points: Some(vec!["Grew team to 9".to_string()]),
                ..Default::default()
            }],
            skills_recommendations: vec![],
        });
        let resolved = ResolvedResume::from_profile(&p);
        assert_eq!(resolved.summary, Some("Leader."));
        assert_eq!(resolved.experience[0].body, ExperienceBody::Bullets(vec!["Grew team to 9"]));
        assert_eq!(resolved.experience[1].body, ExperienceBody::Description("Wrote code"));
    }

    #[test]
    fn test_blank_optional_contact_fields_are_dropped() {
        let p = profile();
        let resolved = ResolvedResume::from_profile(&p);
        let kinds: Vec<ContactKind> = resolved.contact.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                ContactKind::Email,
                ContactKind::Phone,
                ContactKind::Location,
                ContactKind::Portfolio
            ]
        );
    }

    #[test]
    fn test_skills_keep_order_and_duplicates_but_drop_blanks() {
        let p = profile();
        assert_eq!(ResolvedResume::from_profile(&p).skills, vec!["Rust", "Rust"]);
    }
}
