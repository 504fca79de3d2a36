//! Resume template renderers.
//!
//! Every variant consumes the same `Profile` and shows the same content; they
//! differ only in arrangement and styling. Each variant has two outputs driven by
//! one `ResolvedResume`: a `VisualDocument` for interactive display and a
//! markup snapshot for export.

pub mod classic;
pub mod cover_letter;
pub mod document;
pub mod handlers;
pub mod minimal;
pub mod modern;
pub mod resolve;

use crate::models::{Profile, TemplateVariant};

pub use classic::ClassicTemplate;
pub use document::{Block, Placement, Region, RegionKind, VisualDocument};
pub use cover_letter::render_cover_letter;
pub use minimal::MinimalTemplate;
pub use modern::ModernTemplate;
pub use resolve::{ExperienceBody, ResolvedResume};

pub trait TemplateRenderer: Send + Sync {
    fn variant(&self) -> TemplateVariant;

    /// Structured document for interactive display.
    fn render(&self, profile: &Profile) -> VisualDocument;

    /// Self-contained inline-styled markup used at export time.
    fn snapshot(&self, profile: &Profile) -> Result<String, askama::Error>;
}

static CLASSIC: ClassicTemplate = ClassicTemplate;
static MODERN: ModernTemplate = ModernTemplate;
static MINIMAL: MinimalTemplate = MinimalTemplate;

pub fn renderer_for(variant: TemplateVariant) -> &'static dyn TemplateRenderer {
    match variant {
        TemplateVariant::Classic => &CLASSIC,
        TemplateVariant::Modern => &MODERN,
        TemplateVariant::Minimal => &MINIMAL,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Region builders shared by the variants
// ────────────────────────────────────────────────────────────────────────────

fn experience_region(resume: &ResolvedResume<'_>, placement: Placement, heading: &str) -> Region {
    let mut region = Region::new(RegionKind::Experience, placement, Some(heading));
    for entry in &resume.experience {
        region.blocks.push(Block::Entry {
            title: entry.job_title.to_string(),
            organization: entry.company.to_string(),
            period: entry.duration.to_string(),
            note: None,
        });
        match &entry.body {
            ExperienceBody::Bullets(bullets) => region.blocks.push(Block::Bullets {
                items: bullets.iter().map(|b| b.to_string()).collect(),
            }),
            ExperienceBody::Description(text) => region.blocks.push(Block::Paragraph {
                text: text.to_string(),
            }),
            ExperienceBody::Empty => {}
        }
    }
    region
}

fn education_region(resume: &ResolvedResume<'_>, placement: Placement, heading: &str) -> Region {
    let mut region = Region::new(RegionKind::Education, placement, Some(heading));
    region.blocks.extend(resume.education.iter().map(|edu| Block::Entry {
        title: edu.degree.to_string(),
        organization: edu.institution.to_string(),
        period: edu.graduation_year.to_string(),
        note: edu.gpa_label(),
    }));
    region
}

fn skills_region(resume: &ResolvedResume<'_>, placement: Placement, heading: &str) -> Region {
    Region::new(RegionKind::Skills, placement, Some(heading)).with(Block::Tags {
        items: resume.skills.iter().map(|s| s.to_string()).collect(),
    })
}

fn header_region(resume: &ResolvedResume<'_>, placement: Placement) -> Region {
    Region::new(RegionKind::Header, placement, None)
        .with(Block::Title {
            text: resume.full_name.to_string(),
        })
        .with(Block::Subtitle {
            text: resume.target_role.to_string(),
        })
        .with(Block::Contact {
            items: resume.contact_values(),
        })
}

fn summary_region(
    resume: &ResolvedResume<'_>,
    placement: Placement,
    heading: Option<&str>,
) -> Option<Region> {
    resume.summary.map(|summary| {
        Region::new(RegionKind::Summary, placement, heading).with(Block::Paragraph {
            text: summary.to_string(),
        })
    })
}
