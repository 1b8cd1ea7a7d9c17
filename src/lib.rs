//! Siblinks overlay: annotates page links with related pages reported by the
//! ingestion service, and shows them in a sidebar, a tooltip and a hover bubble.

pub mod annotate;
pub mod config;
pub mod dom;
pub mod error;
pub mod hover;
pub mod link_index;
pub mod model;
pub mod normalize;
pub mod page;
pub mod projection;
pub mod protocol;
pub mod view;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub use config::SiblinksConfig;
pub use error::{Error, Result};
pub use hover::{HoveredLink, Rect, Status, TargetLink};
pub use link_index::{LinkIndex, Siblink};
pub use model::{Model, ReadyState};
pub use protocol::Ingest;

use crate::dom::WebPage;
use crate::view::SiblinksApp;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn is_absent(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

/// Host-side handle on the mounted overlay. Every call applies one state transition.
#[wasm_bindgen]
pub struct SiblinksHandle {
    model: RwSignal<Model>,
}

#[wasm_bindgen]
impl SiblinksHandle {
    pub fn ingested(&self, payload: JsValue) -> std::result::Result<(), JsValue> {
        let ingest: Ingest = serde_wasm_bindgen::from_value(payload)
            .map_err(|err| Error::InvalidPayload(err.to_string()))?;
        let page = WebPage::current()?;
        let next = self.model.get_untracked().ingested(&ingest, &page)?;
        self.model.set(next);
        Ok(())
    }

    /// `null` or `undefined` means the pointer left the link.
    pub fn hover(&self, link: JsValue) -> std::result::Result<(), JsValue> {
        let link = if is_absent(&link) {
            None
        } else {
            let link: HoveredLink = serde_wasm_bindgen::from_value(link)
                .map_err(|err| Error::InvalidPayload(err.to_string()))?;
            Some(link)
        };
        self.model
            .update(|model| *model = std::mem::take(model).hover(link));
        Ok(())
    }

    #[wasm_bindgen(js_name = clearTarget)]
    pub fn clear_target(&self) {
        self.model
            .update(|model| *model = std::mem::take(model).clear_target());
    }
}

/// Mounts the overlay on `document.body`. `config` may be omitted for defaults.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> std::result::Result<SiblinksHandle, JsValue> {
    let config = if is_absent(&config) {
        SiblinksConfig::default()
    } else {
        let config: SiblinksConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|err| Error::InvalidConfig(err.to_string()))?;
        config.validate()?;
        config
    };

    let model = RwSignal::new(Model::init());
    leptos::mount::mount_to_body(move || view! { <SiblinksApp model=model config=config /> });
    log::debug!("siblinks overlay mounted");
    Ok(SiblinksHandle { model })
}
