//! Export adapter: turns a rendered snapshot into a downloadable file.
//!
//! `ExportRunner` runs single exports under a deadline; `ExportQueue` gives one
//! owner a sequential worker. Byte production is behind the `DocumentExporter`
//! trait (standalone HTML, or PDF via an external converter command).

pub mod exporter;
pub mod handlers;
pub mod queue;

use bytes::Bytes;
use thiserror::Error;

use crate::models::{Profile, TemplateVariant};
use crate::render::{render_cover_letter, renderer_for};

pub use exporter::{CommandPdfExporter, DocumentExporter, HtmlExporter};
pub use queue::{ExportPackage, ExportQueue, ExportRunner};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("converter exited with {status}: {stderr}")]
    Converter { status: String, stderr: String },

    #[error("failed to render export markup: {0}")]
    Render(#[from] askama::Error),

    #[error("export did not finish within {0:?}")]
    TimedOut(std::time::Duration),

    #[error("export queue is no longer running")]
    QueueClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    fn file_suffix(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover_Letter",
        }
    }

    pub fn page_setup(self) -> PageSetup {
        match self {
            DocumentKind::Resume => PageSetup::letter_portrait(0.5),
            DocumentKind::CoverLetter => PageSetup::letter_portrait(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

/// Physical page parameters. Sizes are in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width_in: f32,
    pub height_in: f32,
    pub margin_in: f32,
    pub landscape: bool,
}

impl PageSetup {
    pub fn letter_portrait(margin_in: f32) -> Self {
        Self {
            width_in: 8.5,
            height_in: 11.0,
            margin_in,
            landscape: false,
        }
    }
}

/// `"Jane A. Doe"` → `Jane_A._Doe_Resume.pdf`. Control characters are dropped
/// and a blank name leaves only the suffix: `Cover_Letter.pdf`.
pub fn export_file_name(full_name: &str, kind: DocumentKind, format: ExportFormat) -> String {
    let stem = full_name
        .split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        format!("{}.{}", kind.file_suffix(), format.extension())
    } else {
        format!("{stem}_{}.{}", kind.file_suffix(), format.extension())
    }
}

/// A render target ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub kind: DocumentKind,
    pub full_name: String,
    /// Self-contained body markup.
    pub markup: String,
}

impl ExportDocument {
    /// `None` when there is no render target (blank full name).
    pub fn resume(profile: &Profile, variant: TemplateVariant) -> Result<Option<Self>, ExportError> {
        let full_name = profile.personal_info.full_name.trim();
        if full_name.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            kind: DocumentKind::Resume,
            full_name: full_name.to_string(),
            markup: renderer_for(variant).snapshot(profile)?,
        }))
    }

    /// `None` when there is no letter to export. A blank full name still
    /// exports, under the bare `Cover_Letter` file name.
    pub fn cover_letter(profile: &Profile, letter: &str) -> Result<Option<Self>, ExportError> {
        if letter.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            kind: DocumentKind::CoverLetter,
            full_name: profile.personal_info.full_name.trim().to_string(),
            markup: render_cover_letter(letter)?,
        }))
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        export_file_name(&self.full_name, self.kind, format)
    }

    pub fn page_setup(&self) -> PageSetup {
        self.kind.page_setup()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalInfo;

    fn profile(name: &str) -> Profile {
        Profile {
            personal_info: PersonalInfo {
                full_name: name.to_string(),
                ..Default::default()
            },
            target_role: "SRE".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_name_collapses_whitespace() {
        assert_eq!(
            export_file_name("Jane A. Doe", DocumentKind::Resume, ExportFormat::Pdf),
            "Jane_A._Doe_Resume.pdf"
        );
        assert_eq!(
            export_file_name("  Jane \t Doe ", DocumentKind::CoverLetter, ExportFormat::Html),
            "Jane_Doe_Cover_Letter.html"
        );
    }

    #[test]
    fn test_file_name_drops_control_characters() {
        assert_eq!(
            export_file_name("Jane\u{1}Doe\u{7f}", DocumentKind::Resume, ExportFormat::Html),
            "JaneDoe_Resume.html"
        );
        assert_eq!(
            export_file_name("José Álvarez", DocumentKind::Resume, ExportFormat::Pdf),
            "José_Álvarez_Resume.pdf"
        );
    }

    #[test]
    fn test_blank_name_keeps_only_suffix() {
        assert_eq!(
            export_file_name(" \u{1} ", DocumentKind::CoverLetter, ExportFormat::Pdf),
            "Cover_Letter.pdf"
        );
    }

    #[test]
    fn test_page_setup_margins() {
        assert_eq!(DocumentKind::Resume.page_setup().margin_in, 0.5);
        assert_eq!(DocumentKind::CoverLetter.page_setup().margin_in, 1.0);
        assert!(!DocumentKind::Resume.page_setup().landscape);
    }

    #[test]
    fn test_resume_without_name_has_no_target() {
        assert!(ExportDocument::resume(&profile("  "), TemplateVariant::Classic)
            .unwrap()
            .is_none());
        let document = ExportDocument::resume(&profile("Jane Doe"), TemplateVariant::Classic)
            .unwrap()
            .unwrap();
        assert_eq!(document.kind, DocumentKind::Resume);
        assert!(document.markup.contains("Jane Doe"));
    }

    #[test]
    fn test_blank_cover_letter_has_no_target() {
        assert!(ExportDocument::cover_letter(&profile("Jane"), "\n  ")
            .unwrap()
            .is_none());
        let document = ExportDocument::cover_letter(&profile("Jane"), "Dear team")
            .unwrap()
            .unwrap();
        assert_eq!(document.file_name(ExportFormat::Pdf), "Jane_Cover_Letter.pdf");
    }

    #[test]
    fn test_cover_letter_without_name_uses_bare_file_name() {
        let document = ExportDocument::cover_letter(&profile("   "), "Dear team")
            .unwrap()
            .unwrap();
        assert_eq!(document.file_name(ExportFormat::Html), "Cover_Letter.html");
    }
}
