use std::path::PathBuf;

use askama::Template;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;
use tracing::debug;

use super::{ExportDocument, ExportError, ExportFormat, PageSetup};

/// Produces the bytes of one exported file.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    async fn export(&self, document: &ExportDocument) -> Result<Bytes, ExportError>;
}

#[derive(Template)]
#[template(path = "export/page.html")]
struct StandalonePage<'a> {
    title: &'a str,
    width: f32,
    height: f32,
    margin: f32,
    body: &'a str,
}

/// Wraps body markup in a standalone, print-ready page.
pub fn standalone_html(document: &ExportDocument) -> Result<String, ExportError> {
    let PageSetup {
        width_in,
        height_in,
        margin_in,
        landscape,
    } = document.page_setup();
    let (width, height) = if landscape {
        (height_in, width_in)
    } else {
        (width_in, height_in)
    };
    let page = StandalonePage {
        title: &document.full_name,
        width,
        height,
        margin: margin_in,
        body: &document.markup,
    };
    Ok(page.render()?)
}

/// Serves the standalone HTML page itself. Used when no PDF converter is configured.
#[derive(Debug, Default, Clone)]
pub struct HtmlExporter;

#[async_trait]
impl DocumentExporter for HtmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    async fn export(&self, document: &ExportDocument) -> Result<Bytes, ExportError> {
        Ok(Bytes::from(standalone_html(document)?))
    }
}

/// Runs an external HTML→PDF converter taking wkhtmltopdf-style arguments:
/// `--page-size Letter --orientation Portrait --margin-* <m>in <input.html> <output.pdf>`.
#[derive(Debug, Clone)]
pub struct CommandPdfExporter {
    program: PathBuf,
}

impl CommandPdfExporter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn arguments(page: PageSetup) -> Vec<String> {
        let margin = format!("{}in", page.margin_in);
        let orientation = if page.landscape { "Landscape" } else { "Portrait" };
        let mut args = vec![
            "--quiet".to_string(),
            "--page-size".to_string(),
            "Letter".to_string(),
            "--orientation".to_string(),
            orientation.to_string(),
        ];
        for side in ["top", "right", "bottom", "left"] {
            args.push(format!("--margin-{side}"));
            args.push(margin.clone());
        }
        args
    }
}

#[async_trait]
impl DocumentExporter for CommandPdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    async fn export(&self, document: &ExportDocument) -> Result<Bytes, ExportError> {
        let scratch = tempfile::tempdir()?;
        let input = scratch.path().join("document.html");
        let output = scratch.path().join("document.pdf");
        tokio::fs::write(&input, standalone_html(document)?).await?;

        debug!(program = %self.program.display(), kind = ?document.kind, "running PDF converter");
        let result = Command::new(&self.program)
            .args(Self::arguments(document.page_setup()))
            .arg(&input)
            .arg(&output)
            .kill_on_drop(true)
            .output()
            .await?;

        if !result.status.success() {
            return Err(ExportError::Converter {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(Bytes::from(tokio::fs::read(&output).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::DocumentKind;

    fn document() -> ExportDocument {
        ExportDocument {
            kind: DocumentKind::CoverLetter,
            full_name: "Jane <Doe>".to_string(),
            markup: "<p>Hello</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_html_export_is_standalone_with_page_rules() {
        let bytes = HtmlExporter.export(&document()).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@page { size: 8.5in 11in; margin: 1in; }"));
        assert!(html.contains("<title>Jane &lt;Doe&gt;</title>"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_converter_arguments() {
        let args = CommandPdfExporter::arguments(PageSetup::letter_portrait(0.5));
        assert!(args.windows(2).any(|w| w[0] == "--orientation" && w[1] == "Portrait"));
        assert!(args.windows(2).any(|w| w[0] == "--margin-left" && w[1] == "0.5in"));
    }

    #[tokio::test]
    async fn test_missing_converter_is_an_io_error() {
        let exporter = CommandPdfExporter::new("/nonexistent/folio-pdf-converter");
        let err = exporter.export(&document()).await.unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
