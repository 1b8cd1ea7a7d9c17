//! The page the siblinks are drawn on.
//!
//! Core code reads the document url and walks links only through these traits, so it can
//! be driven by a fake page in tests and by [`crate::dom::WebPage`] in the browser.

use crate::config::SiblinksConfig;
use crate::error::Result;
use crate::projection::AnnotationView;

pub trait Page {
    type Link: PageLink;

    /// Canonical url of the document itself.
    fn document_url(&self) -> Result<String>;

    /// Every hyperlink matching `selector`. Each call starts a fresh scan.
    fn scan_links(&self, selector: &str) -> impl Iterator<Item = Self::Link> + '_;

    /// Removes annotations left by an earlier pass. Returns how many were removed.
    fn clear_annotations(&self, config: &SiblinksConfig) -> usize;
}

pub trait PageLink {
    fn href(&self) -> String;

    /// True when the link belongs to something this crate drew (an annotation, the
    /// sidebar, the tooltip or the bubble).
    fn is_overlay(&self, config: &SiblinksConfig) -> bool;

    /// Inserts the annotation right after this link.
    ///
    /// Fails with [`crate::Error::DetachedLink`] when the link has no parent.
    fn insert_after(&self, annotation: &AnnotationView, config: &SiblinksConfig) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::error::Error;

    type Links = Rc<RefCell<Vec<FakeLink>>>;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) enum LinkKind {
        Content,
        /// Part of the sidebar, tooltip or bubble.
        Overlay,
        /// The `<a>` inside an inserted annotation.
        Annotation,
    }

    #[derive(Clone)]
    pub(crate) struct FakeLink {
        pub href: String,
        pub attached: bool,
        pub kind: LinkKind,
        links: Links,
        inserted: Rc<RefCell<Vec<AnnotationView>>>,
    }

    impl PageLink for FakeLink {
        fn href(&self) -> String {
            self.href.clone()
        }

        fn is_overlay(&self, _config: &SiblinksConfig) -> bool {
            self.kind != LinkKind::Content
        }

        fn insert_after(&self, annotation: &AnnotationView, _config: &SiblinksConfig) -> Result<()> {
            if !self.attached {
                return Err(Error::DetachedLink {
                    href: self.href.clone(),
                });
            }
            self.inserted.borrow_mut().push(annotation.clone());
            // The inserted `<a>` is itself a link later scans will see.
            self.links.borrow_mut().push(FakeLink {
                href: annotation.url.clone(),
                attached: true,
                kind: LinkKind::Annotation,
                links: Rc::clone(&self.links),
                inserted: Rc::clone(&self.inserted),
            });
            Ok(())
        }
    }

    /// In-memory page. Annotations inserted by one pass show up as links in the next
    /// scan, like they do in a live document.
    #[derive(Default)]
    pub(crate) struct FakePage {
        pub url: Option<String>,
        pub scans: Cell<usize>,
        links: Links,
        inserted: Rc<RefCell<Vec<AnnotationView>>>,
    }

    impl FakePage {
        pub fn new(url: &str) -> Self {
            Self {
                url: Some(url.to_string()),
                ..Self::default()
            }
        }

        /// A page whose own url cannot be read.
        pub fn without_url() -> Self {
            Self::default()
        }

        fn push(self, href: &str, attached: bool, kind: LinkKind) -> Self {
            self.links.borrow_mut().push(FakeLink {
                href: href.to_string(),
                attached,
                kind,
                links: Rc::clone(&self.links),
                inserted: Rc::clone(&self.inserted),
            });
            self
        }

        pub fn with_link(self, href: &str) -> Self {
            self.push(href, true, LinkKind::Content)
        }

        pub fn with_detached_link(self, href: &str) -> Self {
            self.push(href, false, LinkKind::Content)
        }

        pub fn with_overlay_link(self, href: &str) -> Self {
            self.push(href, true, LinkKind::Overlay)
        }

        /// Every annotation ever inserted, including cleared ones.
        pub fn inserted(&self) -> Vec<AnnotationView> {
            self.inserted.borrow().clone()
        }

        /// Annotations currently on the page.
        pub fn live_annotations(&self) -> usize {
            self.links
                .borrow()
                .iter()
                .filter(|link| link.kind == LinkKind::Annotation)
                .count()
        }
    }

    impl Page for FakePage {
        type Link = FakeLink;

        fn document_url(&self) -> Result<String> {
            self.url
                .clone()
                .ok_or_else(|| Error::Dom("document url unavailable".to_string()))
        }

        fn scan_links(&self, _selector: &str) -> impl Iterator<Item = FakeLink> + '_ {
            self.scans.set(self.scans.get() + 1);
            self.links.borrow().clone().into_iter()
        }

        fn clear_annotations(&self, _config: &SiblinksConfig) -> usize {
            let mut links = self.links.borrow_mut();
            let before = links.len();
            links.retain(|link| link.kind != LinkKind::Annotation);
            before - links.len()
        }
    }
}
