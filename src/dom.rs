use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement};

use crate::config::SiblinksConfig;
use crate::error::{Error, Result};
use crate::page::{Page, PageLink};
use crate::projection::AnnotationView;

fn dom_error(err: JsValue) -> Error {
    Error::Dom(format!("{err:?}"))
}

/// The live browser document.
#[derive(Clone, Debug)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Dom("no document available".to_string()))?;
        Ok(Self { document })
    }
}

impl Page for WebPage {
    type Link = WebLink;

    fn document_url(&self) -> Result<String> {
        self.document.url().map_err(dom_error)
    }

    fn scan_links(&self, selector: &str) -> impl Iterator<Item = WebLink> + '_ {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => Some(nodes),
            Err(err) => {
                log::warn!("link scan failed for {selector:?}: {err:?}");
                None
            }
        };
        let len = nodes.as_ref().map_or(0, |nodes| nodes.length());
        (0..len)
            .filter_map(move |i| nodes.as_ref().and_then(|nodes| nodes.item(i)))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(move |element| WebLink {
                element,
                document: self.document.clone(),
            })
    }

    fn clear_annotations(&self, config: &SiblinksConfig) -> usize {
        let selector = format!("sup.{}", config.annotation_class);
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("annotation lookup failed for {selector:?}: {err:?}");
                return 0;
            }
        };
        let mut removed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                element.remove();
                removed += 1;
            }
        }
        removed
    }
}

#[derive(Clone, Debug)]
pub struct WebLink {
    element: Element,
    document: Document,
}

impl WebLink {
    fn render(&self, annotation: &AnnotationView, config: &SiblinksConfig) -> Result<Element> {
        let sup = self.document.create_element("sup").map_err(dom_error)?;
        sup.set_class_name(&config.annotation_class);

        let anchor = self.document.create_element("a").map_err(dom_error)?;
        anchor.set_class_name(&config.annotation_link_class);
        anchor.set_attribute("href", &annotation.url).map_err(dom_error)?;
        anchor
            .set_attribute("data-siblinks", &annotation.count.to_string())
            .map_err(dom_error)?;
        anchor.set_text_content(Some(&format!("[{}]", config.count_label(annotation.count))));

        sup.append_child(&anchor).map_err(dom_error)?;
        Ok(sup)
    }
}

impl PageLink for WebLink {
    fn href(&self) -> String {
        match self.element.dyn_ref::<HtmlAnchorElement>() {
            // Resolved against the document base, unlike the raw attribute.
            Some(anchor) => anchor.href(),
            None => self.element.get_attribute("href").unwrap_or_default(),
        }
    }

    fn is_overlay(&self, config: &SiblinksConfig) -> bool {
        match self.element.closest(&config.overlay_selector()) {
            Ok(found) => found.is_some(),
            Err(err) => {
                log::warn!("overlay check failed: {err:?}");
                false
            }
        }
    }

    fn insert_after(&self, annotation: &AnnotationView, config: &SiblinksConfig) -> Result<()> {
        let Some(parent) = self.element.parent_element() else {
            return Err(Error::DetachedLink { href: self.href() });
        };
        let node = self.render(annotation, config)?;
        parent
            .insert_before(&node, self.element.next_sibling().as_ref())
            .map_err(dom_error)?;
        Ok(())
    }
}
