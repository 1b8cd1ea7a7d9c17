use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Class shared by the sidebar, tooltip and bubble roots.
pub const OVERLAY_CLASS: &str = "siblinks";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiblinksConfig {
    /// Heading over every siblinks list.
    pub label: String,
    /// Glyph in front of link counts.
    pub marker: String,
    pub annotation_class: String,
    pub annotation_link_class: String,
    /// CSS selector used to scan the page for annotatable links.
    pub link_selector: String,
    pub strip_fragment: bool,
}

impl Default for SiblinksConfig {
    fn default() -> Self {
        Self {
            label: "Siblinks".to_string(),
            marker: "‡".to_string(),
            annotation_class: "ksp-browser-annotation".to_string(),
            annotation_link_class: "ksp-browser-siblinks".to_string(),
            link_selector: "a[href]:not(.ksp-browser-siblinks)".to_string(),
            strip_fragment: true,
        }
    }
}

impl SiblinksConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.link_selector.trim().is_empty() {
            return Err(Error::InvalidConfig("link_selector cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Matches every node this crate draws, so scans can leave them alone.
    pub fn overlay_selector(&self) -> String {
        format!(".{}, .{}", self.annotation_class, OVERLAY_CLASS)
    }

    /// `‡3` style count badge.
    pub fn count_label(&self, count: usize) -> String {
        format!("{}{}", self.marker, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiblinksConfig::from_json(r#"{ "label": "Related" }"#).unwrap();
        assert_eq!(config.label, "Related");
        assert_eq!(config.marker, "‡");
        assert!(config.strip_fragment);
    }

    #[test]
    fn rejects_empty_selector() {
        let err = SiblinksConfig::from_json(r#"{ "link_selector": " " }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SiblinksConfig::from_json("{"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn default_scan_skips_own_annotation_links() {
        let config = SiblinksConfig::default();
        assert!(config
            .link_selector
            .contains(&format!(":not(.{})", config.annotation_link_class)));
        assert_eq!(
            config.overlay_selector(),
            ".ksp-browser-annotation, .siblinks"
        );
    }

    #[test]
    fn formats_count_label() {
        assert_eq!(SiblinksConfig::default().count_label(3), "‡3");
    }
}
