//! Page-level housekeeping
//!
//! Body fade-in on load, animation pause while the tab is hidden, and a
//! debounced resize handler that re-scans for reveal targets.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::config::EffectsConfig;
use crate::fx::reveal::RevealWatcher;
use crate::page_state::{play_state, Debouncer};

type EventCallback = Closure<dyn FnMut()>;

pub struct PageEffects {
    doc: Document,
    window: Window,
    visibility_cb: EventCallback,
    resize_cb: EventCallback,
    /// Pending debounce timer; re-arming on each resize event in a burst
    /// cancels the previous one.
    pending: Rc<RefCell<Debouncer<Timeout>>>,
    _fade_in: Option<Timeout>,
}

impl PageEffects {
    pub fn install(
        win: &Window,
        doc: &Document,
        cfg: &EffectsConfig,
        reveal: Rc<RevealWatcher>,
    ) -> Result<Self, JsValue> {
        let fade_in = Self::start_fade_in(doc, cfg.fade_in_delay_ms);

        // Pause every CSS animation while the tab is in the background.
        let observed = doc.clone();
        let visibility_cb: EventCallback = Closure::wrap(Box::new(move || {
            let state = play_state(observed.hidden());
            debug!(state, "visibility changed");
            if let Some(body) = observed.body() {
                let _ = body.style().set_property("animation-play-state", state);
            }
        }));
        doc.add_event_listener_with_callback(
            "visibilitychange",
            visibility_cb.as_ref().unchecked_ref(),
        )?;

        // Collapse resize bursts into one rescan after the burst quiesces.
        let pending = Rc::new(RefCell::new(Debouncer::new()));
        let debounce = pending.clone();
        let debounce_ms = cfg.resize_debounce_ms;
        let resize_cb: EventCallback = Closure::wrap(Box::new(move || {
            let reveal = reveal.clone();
            let timer = Timeout::new(debounce_ms, move || {
                debug!("resize settled, re-scanning reveal targets");
                reveal.rescan();
            });
            debounce.borrow_mut().arm(timer);
        }));
        win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

        Ok(Self {
            doc: doc.clone(),
            window: win.clone(),
            visibility_cb,
            resize_cb,
            pending,
            _fade_in: fade_in,
        })
    }

    /// Hide the body now, fade it back in shortly after.
    fn start_fade_in(doc: &Document, delay_ms: u32) -> Option<Timeout> {
        let body = doc.body()?;
        let _ = body.style().set_property("opacity", "0");
        let target = body.clone();
        Some(Timeout::new(delay_ms, move || {
            let style = target.style();
            let _ = style.set_property("transition", "opacity 0.5s ease");
            let _ = style.set_property("opacity", "1");
        }))
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        let _ = self.doc.remove_event_listener_with_callback(
            "visibilitychange",
            self.visibility_cb.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "resize",
            self.resize_cb.as_ref().unchecked_ref(),
        );
        self.pending.borrow_mut().cancel();
        if let Some(body) = self.doc.body() {
            let style = body.style();
            let _ = style.remove_property("animation-play-state");
            // The fade-in timer cancels on drop; never leave the body hidden.
            let _ = style.remove_property("opacity");
        }
    }
}
