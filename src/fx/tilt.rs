//! Pointer tilt on interactive cards
//!
//! Each card leans toward the pointer while it moves inside the card's
//! box and snaps back to neutral when it leaves.

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::EffectsConfig;
use crate::dom;
use crate::motion::Tilt;

type PointerCallback = Closure<dyn FnMut(MouseEvent)>;

struct CardBinding {
    el: HtmlElement,
    enter: PointerCallback,
    moved: PointerCallback,
    leave: PointerCallback,
}

impl Drop for CardBinding {
    fn drop(&mut self) {
        for (event, cb) in [
            ("mouseenter", &self.enter),
            ("mousemove", &self.moved),
            ("mouseleave", &self.leave),
        ] {
            let _ = self
                .el
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
        let _ = self.el.style().remove_property("transform");
    }
}

pub struct TiltEffect {
    bindings: Vec<CardBinding>,
}

impl TiltEffect {
    pub fn install(doc: &Document, cfg: &EffectsConfig) -> Result<Self, JsValue> {
        let mut bindings = Vec::new();
        for el in dom::query_all(doc, &cfg.tilt_selector) {
            bindings.push(Self::bind(el, cfg.tilt_divisor)?);
        }
        debug!(cards = bindings.len(), "tilt listeners attached");
        Ok(Self { bindings })
    }

    fn bind(el: HtmlElement, divisor: f64) -> Result<CardBinding, JsValue> {
        let target = el.clone();
        let enter: PointerCallback = Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = target.style().set_property("transition", "all 0.3s ease");
        }));

        let target = el.clone();
        let moved: PointerCallback = Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            let tilt = Tilt::from_pointer(x, y, rect.width(), rect.height(), divisor);
            let _ = target.style().set_property("transform", &tilt.transform());
        }));

        let target = el.clone();
        let leave: PointerCallback = Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = target.style().remove_property("transform");
        }));

        el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
        el.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
        el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;

        Ok(CardBinding {
            el,
            enter,
            moved,
            leave,
        })
    }
}
