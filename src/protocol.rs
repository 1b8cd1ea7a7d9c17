//! Wire types for the "link ingested" payload delivered by the companion process.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingest {
    #[serde(default)]
    pub sib_links: Vec<SibLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SibLink {
    pub target: Target,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub url: String,
    #[serde(default)]
    pub back_links: Vec<BackLink>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A page that referenced the target url.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackLink {
    pub referrer: Referrer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl BackLink {
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            referrer: Referrer {
                url: url.into(),
                title: None,
                description: None,
            },
            name: None,
            fragment: None,
        }
    }

    /// Text shown for the link: the referrer title, the link name, or the raw url.
    pub fn label(&self) -> &str {
        self.referrer
            .title
            .as_deref()
            .or(self.name.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.referrer.url)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Referrer {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "TagRepr")]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_fragment: Option<String>,
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_fragment: None,
        }
    }
}

// Tags arrive either bare (`"x"`) or as `{ name, targetFragment }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagRepr {
    Bare(String),
    #[serde(rename_all = "camelCase")]
    Full {
        name: String,
        #[serde(default)]
        target_fragment: Option<String>,
    },
}

impl From<TagRepr> for Tag {
    fn from(repr: TagRepr) -> Self {
        match repr {
            TagRepr::Bare(name) => Tag::named(name),
            TagRepr::Full {
                name,
                target_fragment,
            } => Tag {
                name,
                target_fragment,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let json = r#"{
            "sibLinks": [{
                "target": {
                    "url": "https://b.example/",
                    "backLinks": [{ "referrer": { "url": "https://c.example/", "title": "C" } }],
                    "tags": ["x", { "name": "y", "targetFragment": "top" }]
                }
            }]
        }"#;
        let ingest: Ingest = serde_json::from_str(json).unwrap();
        let target = &ingest.sib_links[0].target;
        assert_eq!(target.url, "https://b.example/");
        assert_eq!(target.back_links[0].label(), "C");
        assert_eq!(target.tags[0], Tag::named("x"));
        assert_eq!(target.tags[1].target_fragment.as_deref(), Some("top"));
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let json = r#"{ "sibLinks": [{ "target": { "url": "a" } }] }"#;
        let ingest: Ingest = serde_json::from_str(json).unwrap();
        assert!(ingest.sib_links[0].target.back_links.is_empty());
        assert!(ingest.sib_links[0].target.tags.is_empty());
    }

    #[test]
    fn label_falls_back_to_url() {
        let mut link = BackLink::to("https://c.example/");
        assert_eq!(link.label(), "https://c.example/");
        link.name = Some("  ".into());
        assert_eq!(link.label(), "https://c.example/");
        link.name = Some("named".into());
        assert_eq!(link.label(), "named");
    }
}
