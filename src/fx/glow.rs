//! Call-to-action hover glow

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::EffectsConfig;
use crate::dom;

const HOVER_SHADOW: &str =
    "0 12px 32px rgba(0, 212, 255, 0.5), 0 0 40px rgba(0, 212, 255, 0.3)";
const REST_SHADOW: &str = "0 8px 24px rgba(0, 212, 255, 0.3)";

type PointerCallback = Closure<dyn FnMut(MouseEvent)>;

pub struct CtaGlow {
    button: HtmlElement,
    enter: PointerCallback,
    leave: PointerCallback,
}

impl CtaGlow {
    /// Attach the hover listeners. `None` when the button is absent.
    pub fn install(doc: &Document, cfg: &EffectsConfig) -> Result<Option<Self>, JsValue> {
        let Some(button) = dom::query_one(doc, &cfg.cta_selector) else {
            debug!(selector = %cfg.cta_selector, "no CTA button, skipping glow");
            return Ok(None);
        };

        let target = button.clone();
        let enter: PointerCallback = Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = target.style().set_property("box-shadow", HOVER_SHADOW);
        }));
        let target = button.clone();
        let leave: PointerCallback = Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = target.style().set_property("box-shadow", REST_SHADOW);
        }));

        button.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
        button.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;

        Ok(Some(Self {
            button,
            enter,
            leave,
        }))
    }
}

impl Drop for CtaGlow {
    fn drop(&mut self) {
        let _ = self.button.remove_event_listener_with_callback(
            "mouseenter",
            self.enter.as_ref().unchecked_ref(),
        );
        let _ = self.button.remove_event_listener_with_callback(
            "mouseleave",
            self.leave.as_ref().unchecked_ref(),
        );
        let _ = self.button.style().remove_property("box-shadow");
    }
}
