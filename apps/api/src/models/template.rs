use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three fixed resume layouts. `Modern` is selected for a fresh session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    Classic,
    #[default]
    Modern,
    Minimal,
}

impl TemplateVariant {
    /// Picker order.
    pub const ALL: [TemplateVariant; 3] = [
        TemplateVariant::Modern,
        TemplateVariant::Classic,
        TemplateVariant::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateVariant::Classic => "classic",
            TemplateVariant::Modern => "modern",
            TemplateVariant::Minimal => "minimal",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TemplateVariant::Classic => "Classic",
            TemplateVariant::Modern => "Modern",
            TemplateVariant::Minimal => "Minimal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateVariant::Classic => "Traditional layout",
            TemplateVariant::Modern => "Clean and professional",
            TemplateVariant::Minimal => "Simple and elegant",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown template variant '{0}' (expected classic, modern or minimal)")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateVariant {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(TemplateVariant::Classic),
            "modern" => Ok(TemplateVariant::Modern),
            "minimal" => Ok(TemplateVariant::Minimal),
            _ => Err(UnknownTemplate(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_modern() {
        assert_eq!(TemplateVariant::default(), TemplateVariant::Modern);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Classic".parse::<TemplateVariant>().unwrap(), TemplateVariant::Classic);
        assert_eq!(" minimal ".parse::<TemplateVariant>().unwrap(), TemplateVariant::Minimal);
        assert!("fancy".parse::<TemplateVariant>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&TemplateVariant::Minimal).unwrap();
        assert_eq!(json, r#""minimal""#);
        let back: TemplateVariant = serde_json::from_str(r#""classic""#).unwrap();
        assert_eq!(back, TemplateVariant::Classic);
    }
}
