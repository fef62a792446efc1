//! Smooth scrolling for same-page anchor links

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::config::EffectsConfig;
use crate::dom;

type ClickCallback = Closure<dyn FnMut(MouseEvent)>;

struct AnchorBinding {
    el: HtmlElement,
    cb: ClickCallback,
}

impl Drop for AnchorBinding {
    fn drop(&mut self) {
        let _ = self
            .el
            .remove_event_listener_with_callback("click", self.cb.as_ref().unchecked_ref());
    }
}

pub struct SmoothAnchors {
    bindings: Vec<AnchorBinding>,
}

impl SmoothAnchors {
    pub fn install(doc: &Document, cfg: &EffectsConfig) -> Result<Self, JsValue> {
        let mut bindings = Vec::new();
        for el in dom::query_all(doc, &cfg.anchor_selector) {
            let anchor = el.clone();
            let target_doc = doc.clone();
            let cb: ClickCallback = Closure::wrap(Box::new(move |e: MouseEvent| {
                e.prevent_default();
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                if let Ok(Some(target)) = target_doc.query_selector(&href) {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }));
            el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
            bindings.push(AnchorBinding { el, cb });
        }
        debug!(anchors = bindings.len(), "smooth-scroll anchors bound");
        Ok(Self { bindings })
    }
}
