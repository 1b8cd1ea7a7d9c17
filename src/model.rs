use std::sync::Arc;

use crate::error::Result;
use crate::hover::{self, HoveredLink, Status, TargetLink};
use crate::link_index::{LinkIndex, Siblink};
use crate::page::Page;
use crate::protocol::Ingest;

/// Page-wide siblinks state.
///
/// `link_index` is `None` until the first ingestion; an ingestion with nothing
/// relevant still produces an (empty) index.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub link_index: Option<Arc<LinkIndex>>,
    pub target: Option<TargetLink>,
}

/// The hovered target joined with its indexed siblinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadyState<'a> {
    pub status: Status,
    pub link: &'a HoveredLink,
    pub siblinks: &'a Siblink,
}

impl Model {
    pub fn init() -> Self {
        Self::default()
    }

    /// Replaces the index with one built from `ingest`, relative to the page's own url.
    ///
    /// Fails without touching the model when the page url cannot be read, since the
    /// self-referrer filter depends on it.
    pub fn ingested(self, ingest: &Ingest, page: &impl Page) -> Result<Self> {
        let document_url = page.document_url()?;
        Ok(Self {
            link_index: Some(Arc::new(LinkIndex::build(ingest, &document_url))),
            ..self
        })
    }

    pub fn hover(self, link: Option<HoveredLink>) -> Self {
        Self {
            target: hover::transition(self.target, link),
            ..self
        }
    }

    /// Drops the target once the host is done animating it out.
    pub fn clear_target(self) -> Self {
        Self {
            target: None,
            ..self
        }
    }

    pub fn siblinks_of(&self) -> Option<&Siblink> {
        let target = self.target.as_ref()?;
        self.link_index.as_deref()?.get(&target.link.url)
    }

    pub fn read(&self) -> Option<ReadyState<'_>> {
        let siblinks = self.siblinks_of()?;
        let target = self.target.as_ref()?;
        Some(ReadyState {
            status: target.status,
            link: &target.link,
            siblinks,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::hover::Rect;
    use crate::page::tests::FakePage;
    use crate::protocol::{BackLink, SibLink, Tag, Target};

    pub(crate) fn ingest_b() -> Ingest {
        Ingest {
            sib_links: vec![SibLink {
                target: Target {
                    url: "b".into(),
                    back_links: vec![BackLink::to("c")],
                    tags: vec![Tag::named("x")],
                },
            }],
        }
    }

    pub(crate) fn hovered(url: &str) -> HoveredLink {
        HoveredLink::new(url, Rect::new(1.0, 2.0, 3.0, 4.0))
    }

    #[test]
    fn init_is_empty() {
        let model = Model::init();
        assert!(model.link_index.is_none());
        assert!(model.target.is_none());
        assert!(model.read().is_none());
    }

    #[test]
    fn ingest_then_hover_resolves_siblinks() {
        let model = Model::init()
            .ingested(&ingest_b(), &FakePage::new("a"))
            .unwrap()
            .hover(Some(hovered("b")));
        let siblinks = model.siblinks_of().unwrap();
        assert_eq!(siblinks.links.len(), 1);
        assert_eq!(siblinks.tags, vec![Tag::named("x")]);

        let ready = model.read().unwrap();
        assert_eq!(ready.status, Status::Over);
        assert_eq!(ready.link.url, "b");
    }

    #[test]
    fn hover_before_ingest_is_not_ready() {
        let model = Model::init().hover(Some(hovered("b")));
        assert!(model.target.is_some());
        assert!(model.siblinks_of().is_none());
    }

    #[test]
    fn unknown_url_misses() {
        let model = Model::init()
            .ingested(&ingest_b(), &FakePage::new("a"))
            .unwrap()
            .hover(Some(hovered("zzz")));
        assert!(model.siblinks_of().is_none());
        assert!(model.read().is_none());
    }

    #[test]
    fn leave_keeps_resolution_in_out_phase() {
        let model = Model::init()
            .ingested(&ingest_b(), &FakePage::new("a"))
            .unwrap()
            .hover(Some(hovered("b")))
            .hover(None);
        assert_eq!(model.read().unwrap().status, Status::Out);

        let cleared = model.clear_target();
        assert!(cleared.read().is_none());
        assert!(cleared.link_index.is_some());
    }

    #[test]
    fn unreadable_page_url_fails_ingest() {
        let err = Model::init()
            .ingested(&ingest_b(), &FakePage::without_url())
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::Dom(_)));
    }

    #[test]
    fn reingest_replaces_index_instance() {
        let first = Model::init().ingested(&ingest_b(), &FakePage::new("a")).unwrap();
        let before = first.link_index.clone().unwrap();
        let second = first.ingested(&Ingest::default(), &FakePage::new("a")).unwrap();
        let after = second.link_index.unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(after.is_empty());
    }
}
