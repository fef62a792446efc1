//! Scroll-triggered reveals
//!
//! Two intersection watchers: fade-up elements gain the `visible` class
//! once a tenth of them is in view; flow steps get a slide-in animation at
//! a fifth, honoring a per-element `--delay` custom property.

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::EffectsConfig;
use crate::dom;
use crate::keyframes::SLIDE_IN_ANIMATION;

/// Class the presentation layer keys its fade-up transition on.
pub const VISIBLE_CLASS: &str = "visible";

type EntriesCallback = Closure<dyn FnMut(js_sys::Array)>;

pub struct RevealWatcher {
    doc: Document,
    fade_up_selector: String,
    fade_observer: IntersectionObserver,
    flow_observer: IntersectionObserver,
    _fade_cb: EntriesCallback,
    _flow_cb: EntriesCallback,
}

impl RevealWatcher {
    pub fn install(doc: &Document, cfg: &EffectsConfig) -> Result<Self, JsValue> {
        let fade_cb: EntriesCallback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        }));
        let fade_opts = IntersectionObserverInit::new();
        fade_opts.set_threshold(&JsValue::from_f64(cfg.fade_up_threshold));
        fade_opts.set_root_margin(&cfg.fade_up_root_margin);
        let fade_observer = IntersectionObserver::new_with_options(
            fade_cb.as_ref().unchecked_ref(),
            &fade_opts,
        )?;

        let flow_cb: EntriesCallback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(el) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                let style = el.style();
                let _ = style.set_property(
                    "animation",
                    &format!("{SLIDE_IN_ANIMATION} 0.6s ease-out forwards"),
                );
                let delay = style.get_property_value("--delay").unwrap_or_default();
                let delay = if delay.is_empty() { "0s".into() } else { delay };
                let _ = style.set_property("animation-delay", &delay);
            }
        }));
        let flow_opts = IntersectionObserverInit::new();
        flow_opts.set_threshold(&JsValue::from_f64(cfg.flow_step_threshold));
        let flow_observer = IntersectionObserver::new_with_options(
            flow_cb.as_ref().unchecked_ref(),
            &flow_opts,
        )?;

        let watcher = Self {
            doc: doc.clone(),
            fade_up_selector: cfg.fade_up_selector.clone(),
            fade_observer,
            flow_observer,
            _fade_cb: fade_cb,
            _flow_cb: flow_cb,
        };

        watcher.rescan();
        for step in dom::query_all(doc, &cfg.flow_step_selector) {
            watcher.flow_observer.observe(&step);
        }
        Ok(watcher)
    }

    /// Re-scan the document for fade-up targets. Re-observing an element
    /// already under watch is a no-op, so this is safe to call repeatedly
    /// (the resize handler does).
    pub fn rescan(&self) {
        let targets = dom::query_all(&self.doc, &self.fade_up_selector);
        debug!(count = targets.len(), "observing fade-up elements");
        for el in targets {
            self.fade_observer.observe(&el);
        }
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.fade_observer.disconnect();
        self.flow_observer.disconnect();
    }
}
