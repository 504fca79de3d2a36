//! Classic: centered header, single column, uppercase ruled section headings.

use askama::Template;

use super::resolve::{ExperienceBody, ResolvedResume};
use super::{
    education_region, experience_region, header_region, skills_region, summary_region, Placement,
    TemplateRenderer, VisualDocument,
};
use crate::models::{Profile, TemplateVariant};

#[derive(Template)]
#[template(path = "resume/classic.html")]
struct ClassicSnapshot<'a> {
    resume: ResolvedResume<'a>,
    contact: Vec<&'a str>,
}

pub struct ClassicTemplate;

impl TemplateRenderer for ClassicTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Classic
    }

    fn render(&self, profile: &Profile) -> VisualDocument {
        let resume = ResolvedResume::from_profile(profile);
        let mut regions = vec![header_region(&resume, Placement::Full)];
        regions.extend(summary_region(
            &resume,
            Placement::Full,
            Some("Professional Summary"),
        ));
        regions.push(experience_region(&resume, Placement::Full, "Professional Experience"));
        regions.push(education_region(&resume, Placement::Full, "Education"));
        regions.push(skills_region(&resume, Placement::Full, "Technical Skills"));

        VisualDocument {
            variant: TemplateVariant::Classic,
            regions,
        }
    }

    fn snapshot(&self, profile: &Profile) -> Result<String, askama::Error> {
        let resume = ResolvedResume::from_profile(profile);
        ClassicSnapshot {
            contact: resume.contact.iter().map(|(_, value)| *value).collect(),
            resume,
        }
        .render()
    }
}
