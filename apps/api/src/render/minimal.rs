//! Minimal: light typography, unlabelled summary, spaced uppercase headings.

use askama::Template;

use super::resolve::{ExperienceBody, ResolvedResume};
use super::{
    education_region, experience_region, header_region, skills_region, summary_region, Placement,
    TemplateRenderer, VisualDocument,
};
use crate::models::{Profile, TemplateVariant};

#[derive(Template)]
#[template(path = "resume/minimal.html")]
struct MinimalSnapshot<'a> {
    resume: ResolvedResume<'a>,
    contact: Vec<&'a str>,
}

pub struct MinimalTemplate;

impl TemplateRenderer for MinimalTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Minimal
    }

    fn render(&self, profile: &Profile) -> VisualDocument {
        let resume = ResolvedResume::from_profile(profile);
        let mut regions = vec![header_region(&resume, Placement::Full)];
        regions.extend(summary_region(&resume, Placement::Full, None));
        regions.push(experience_region(&resume, Placement::Full, "EXPERIENCE"));
        regions.push(education_region(&resume, Placement::Full, "EDUCATION"));
        regions.push(skills_region(&resume, Placement::Full, "SKILLS"));

        VisualDocument {
            variant: TemplateVariant::Minimal,
            regions,
        }
    }

    fn snapshot(&self, profile: &Profile) -> Result<String, askama::Error> {
        let resume = ResolvedResume::from_profile(profile);
        MinimalSnapshot {
            contact: resume.contact.iter().map(|(_, value)| *value).collect(),
            resume,
        }
        .render()
    }
}
