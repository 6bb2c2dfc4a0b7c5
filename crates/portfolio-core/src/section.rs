//! Section identifiers for the in-page anchors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// One scrollable content region of the page.
///
/// The string form doubles as the DOM element id used for scroll targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Companies,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Home,
            SectionId::About,
            SectionId::Experience,
            SectionId::Companies,
            SectionId::Contact,
        ]
    }

    /// Anchor id of the rendered element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Companies => "companies",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn parses_every_anchor() {
        for id in SectionId::all() {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), *id);
        }
    }

    #[test]
    fn rejects_unknown_anchor() {
        let err = "Home".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownSection(ref s) if s == "Home"));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SectionId::Companies).unwrap();
        assert_eq!(json, "\"companies\"");
        let back: SectionId = serde_json::from_str("\"experience\"").unwrap();
        assert_eq!(back, SectionId::Experience);
    }
}
