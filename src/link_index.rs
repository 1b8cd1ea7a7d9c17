use std::collections::HashMap;

use crate::protocol::{BackLink, Ingest, Tag};

/// Everything known about one target url. Never empty once stored in a [`LinkIndex`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Siblink {
    pub links: Vec<BackLink>,
    pub tags: Vec<Tag>,
}

impl Siblink {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.tags.is_empty()
    }
}

/// Lookup from normalized target url to its siblinks.
///
/// Built in one go from an [`Ingest`] and replaced wholesale by the next one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkIndex {
    entries: HashMap<String, Siblink>,
}

impl LinkIndex {
    /// Back links pointing from `document_url` are dropped, and targets left with no
    /// links and no tags are not stored at all.
    pub fn build(ingest: &Ingest, document_url: &str) -> Self {
        let mut entries = HashMap::with_capacity(ingest.sib_links.len());
        for sib_link in &ingest.sib_links {
            let target = &sib_link.target;
            let siblink = Siblink {
                links: target
                    .back_links
                    .iter()
                    .filter(|link| link.referrer.url != document_url)
                    .cloned()
                    .collect(),
                tags: target.tags.clone(),
            };
            if siblink.is_empty() {
                log::trace!("dropping empty siblinks for {}", target.url);
                continue;
            }
            entries.insert(target.url.clone(), siblink);
        }
        log::debug!(
            "indexed {} of {} ingested targets",
            entries.len(),
            ingest.sib_links.len()
        );
        Self { entries }
    }

    pub fn get(&self, url: &str) -> Option<&Siblink> {
        self.entries.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Siblink)> {
        self.entries.iter().map(|(url, siblink)| (url.as_str(), siblink))
    }
}
