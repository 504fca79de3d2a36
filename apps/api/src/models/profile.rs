//! Candidate profile: the one data shape shared by the wizard, the enrichment relay,
//! the three template renderers and the export snapshot builder.
//!
//! Wire names are camelCase so the same JSON flows between the HTTP surface and
//! an interactive client unchanged. Enrichment travels as `aiGenerated`.

use serde::{Deserialize, Deserializer, Serialize};

/// Returns the trimmed value when it holds something other than whitespace.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn non_blank_opt(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

// ────────────────────────────────────────────────────────────────────────────
// Profile records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl PersonalInfo {
    /// Professional-network URL, if one was provided.
    pub fn linked_in_url(&self) -> Option<&str> {
        non_blank_opt(&self.linked_in)
    }

    pub fn portfolio_url(&self) -> Option<&str> {
        non_blank_opt(&self.portfolio)
    }

    /// True once every required contact field carries a value.
    pub fn is_complete(&self) -> bool {
        [&self.full_name, &self.email, &self.phone, &self.location]
            .iter()
            .all(|field| non_blank(field).is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    /// Free text; never parsed as a number.
    pub graduation_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl EducationEntry {
    pub fn gpa_value(&self) -> Option<&str> {
        non_blank_opt(&self.gpa)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub job_title: String,
    pub company: String,
    /// Free text ("2021 – present"); never parsed into dates.
    pub duration: String,
    pub description: String,
    /// Only set after a successful enrichment that covers this entry's index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
}

/// One positional slot of `enhancedExperience`. The model may echo the entry's
/// own fields back; only `bulletPoints` is consumed by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhancedExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
}

/// Generated augmentation of a profile.
///
/// `enhanced_experience[i]` belongs to `experience[i]`. When the sequences differ
/// in length, unmatched experience entries keep their free-text description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrichmentResult {
    pub summary: String,
    pub enhanced_experience: Vec<EnhancedExperience>,
    #[serde(deserialize_with = "lenient_skill_list")]
    pub skills_recommendations: Vec<String>,
}

impl EnrichmentResult {
    /// The summary, or `None` when it is blank and the summary region must be omitted.
    pub fn summary_text(&self) -> Option<&str> {
        non_blank(&self.summary)
    }

    /// Bullet points generated for experience index `index`, blank bullets dropped.
    /// `None` when the slot is missing or holds nothing displayable.
    pub fn bullets_for(&self, index: usize) -> Option<Vec<&str>> {
        let bullets: Vec<&str> = self
            .enhanced_experience
            .get(index)?
            .bullet_points
            .as_ref()?
            .iter()
            .filter_map(|b| non_blank(b))
            .collect();
        (!bullets.is_empty()).then_some(bullets)
    }
}

/// Accepts either a flat list of skills or an object of categorized lists
/// (`{"technical": [...], "soft": [...]}`), flattening the latter in key order.
fn lenient_skill_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SkillShape {
        Flat(Vec<String>),
        Grouped(serde_json::Map<String, serde_json::Value>),
    }

    Ok(match SkillShape::deserialize(deserializer)? {
        SkillShape::Flat(skills) => skills,
        SkillShape::Grouped(groups) => groups
            .into_iter()
            .flat_map(|(_, v)| match v {
                serde_json::Value::Array(items) => items,
                other => vec![other],
            })
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    })
}

/// The complete candidate record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub target_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_company: Option<String>,
    #[serde(rename = "aiGenerated", skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentResult>,
}

impl Profile {
    /// Skills with blank entries filtered out, input order and duplicates preserved.
    pub fn skills_in_use(&self) -> Vec<&str> {
        self.skills.iter().filter_map(|s| non_blank(s)).collect()
    }

    pub fn target_company_name(&self) -> Option<&str> {
        non_blank_opt(&self.target_company)
    }

    /// Attaches an enrichment result and copies positionally aligned bullet points
    /// onto the matching experience entries.
    pub fn with_enrichment(mut self, enrichment: EnrichmentResult) -> Self {
        for (index, entry) in self.experience.iter_mut().enumerate() {
            entry.bullet_points = enrichment
                .bullets_for(index)
                .map(|bullets| bullets.into_iter().map(str::to_string).collect());
        }
        self.enrichment = Some(enrichment);
        self
    }
}

/// A shallow patch: every provided top-level field replaces the current value
/// wholesale. Arrays and nested records are never deep-merged.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub personal_info: Option<PersonalInfo>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub skills: Option<Vec<String>>,
    pub target_role: Option<String>,
    pub target_company: Option<Option<String>>,
    pub enrichment: Option<Option<EnrichmentResult>>,
}

impl PartialProfile {
    /// A patch that replaces every field of the target with `profile`'s.
    pub fn replace_all(profile: Profile) -> Self {
        Self {
            personal_info: Some(profile.personal_info),
            education: Some(profile.education),
            experience: Some(profile.experience),
            skills: Some(profile.skills),
            target_role: Some(profile.target_role),
            target_company: Some(profile.target_company),
            enrichment: Some(profile.enrichment),
        }
    }

    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(personal_info) = self.personal_info {
            profile.personal_info = personal_info;
        }
        if let Some(education) = self.education {
            profile.education = education;
        }
        if let Some(experience) = self.experience {
            profile.experience = experience;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(target_role) = self.target_role {
            profile.target_role = target_role;
        }
        if let Some(target_company) = self.target_company {
            profile.target_company = target_company;
        }
        if let Some(enrichment) = self.enrichment {
            profile.enrichment = enrichment;
        }
    }
}
