//! Modern: dark banner carrying identity, summary and contact; experience in the
//! main column; skills and education in a sidebar.

use askama::Template;

use super::resolve::{ContactKind, ExperienceBody, ResolvedResume};
use super::{
    education_region, experience_region, header_region, skills_region, summary_region, Placement,
    TemplateRenderer, VisualDocument,
};
use crate::models::{Profile, TemplateVariant};

struct ContactLine<'a> {
    icon: &'static str,
    value: &'a str,
}

#[derive(Template)]
#[template(path = "resume/modern.html")]
struct ModernSnapshot<'a> {
    resume: ResolvedResume<'a>,
    contact: Vec<ContactLine<'a>>,
}

pub struct ModernTemplate;

impl TemplateRenderer for ModernTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Modern
    }

    fn render(&self, profile: &Profile) -> VisualDocument {
        let resume = ResolvedResume::from_profile(profile);
        let mut regions = vec![header_region(&resume, Placement::Banner)];
        regions.extend(summary_region(&resume, Placement::Banner, None));
        regions.push(experience_region(&resume, Placement::Main, "Professional Experience"));
        regions.push(skills_region(&resume, Placement::Sidebar, "Technical Skills"));
        regions.push(education_region(&resume, Placement::Sidebar, "Education"));

        VisualDocument {
            variant: TemplateVariant::Modern,
            regions,
        }
    }

    fn snapshot(&self, profile: &Profile) -> Result<String, askama::Error> {
        let resume = ResolvedResume::from_profile(profile);
        ModernSnapshot {
            contact: resume
                .contact
                .iter()
                .map(|(kind, value)| ContactLine {
                    icon: contact_icon(*kind),
                    value: *value,
                })
                .collect(),
            resume,
        }
        .render()
    }
}

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "📧",
        ContactKind::Phone => "📱",
        ContactKind::Location => "📍",
        ContactKind::LinkedIn => "💼",
        ContactKind::Portfolio => "🌐",
    }
}
