use std::sync::{Arc, Weak};

use crate::config::SiblinksConfig;
use crate::link_index::LinkIndex;
use crate::model::Model;
use crate::normalize::{NormalizeOptions, UrlNormalizer};
use crate::page::{Page, PageLink};
use crate::projection::AnnotationView;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    pub annotated: usize,
    pub skipped: usize,
}

/// Decorates page links with inline siblink counts, once per [`LinkIndex`] instance.
///
/// The weak handle keeps the last applied index's allocation alive, so a later index can
/// never be mistaken for it by address.
#[derive(Debug, Default)]
pub struct AnnotationInjector {
    applied: Option<Weak<LinkIndex>>,
}

impl AnnotationInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_applied_to(&self, index: &Arc<LinkIndex>) -> bool {
        self.applied
            .as_ref()
            .is_some_and(|applied| std::ptr::eq(applied.as_ptr(), Arc::as_ptr(index)))
    }

    /// Returns `None` when there is nothing to do: no index yet, or this index was
    /// already applied.
    ///
    /// A pass first removes the previous pass's annotations, and never annotates links
    /// the overlay drew itself.
    pub fn run<P, N>(
        &mut self,
        model: &Model,
        page: &P,
        normalizer: &N,
        config: &SiblinksConfig,
    ) -> Option<AnnotationReport>
    where
        P: Page,
        N: UrlNormalizer,
    {
        let index = model.link_index.as_ref()?;
        if self.is_applied_to(index) {
            return None;
        }
        self.applied = Some(Arc::downgrade(index));

        let cleared = page.clear_annotations(config);
        if cleared > 0 {
            log::debug!("cleared {cleared} annotations from the previous index");
        }

        let options = NormalizeOptions {
            strip_fragment: config.strip_fragment,
        };
        let mut report = AnnotationReport::default();
        for link in page.scan_links(&config.link_selector) {
            if link.is_overlay(config) {
                continue;
            }
            let href = link.href();
            let url = match normalizer.normalize(&href, options) {
                Ok(url) => url,
                Err(err) => {
                    log::debug!("not annotating link: {err}");
                    report.skipped += 1;
                    continue;
                }
            };
            let Some(siblink) = index.get(&url) else {
                continue;
            };
            match link.insert_after(&AnnotationView::new(url, siblink), config) {
                Ok(()) => report.annotated += 1,
                Err(err) => {
                    log::warn!("skipping annotation: {err}");
                    report.skipped += 1;
                }
            }
        }
        log::debug!(
            "annotated {} links ({} skipped)",
            report.annotated,
            report.skipped
        );
        Some(report)
    }
}
