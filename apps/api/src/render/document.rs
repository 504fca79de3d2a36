//! Visual document: the structured, display-ready form of a rendered resume.
//!
//! An interactive client draws this tree directly; the export path produces the
//! equivalent markup string through `TemplateRenderer::snapshot`.

use serde::Serialize;

use crate::models::TemplateVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
}

/// Where a region sits in the variant's layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Full-bleed band across the top of the page.
    Banner,
    Full,
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Subtitle { text: String },
    Contact { items: Vec<String> },
    Paragraph { text: String },
    /// Heading line of an experience or education entry.
    Entry {
        title: String,
        organization: String,
        period: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Bullets { items: Vec<String> },
    /// Unordered visual collection (skills), input order preserved.
    Tags { items: Vec<String> },
}

impl Block {
    fn text_values(&self) -> Vec<&str> {
        match self {
            Block::Title { text } | Block::Subtitle { text } | Block::Paragraph { text } => {
                vec![text.as_str()]
            }
            Block::Contact { items } | Block::Bullets { items } | Block::Tags { items } => {
                items.iter().map(String::as_str).collect()
            }
            Block::Entry {
                title,
                organization,
                period,
                note,
            } => {
                let mut values = vec![title.as_str(), organization.as_str(), period.as_str()];
                values.extend(note.as_deref());
                values
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub kind: RegionKind,
    pub placement: Placement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

impl Region {
    pub fn new(kind: RegionKind, placement: Placement, heading: Option<&str>) -> Self {
        Self {
            kind,
            placement,
            heading: heading.map(str::to_string),
            blocks: Vec::new(),
        }
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualDocument {
    pub variant: TemplateVariant,
    pub regions: Vec<Region>,
}

impl VisualDocument {
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }

    /// Every profile-derived string displayed, in document order. Headings are
    /// layout chrome and are left out.
    pub fn text_values(&self) -> Vec<&str> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .flat_map(Block::text_values)
            .collect()
    }
}
