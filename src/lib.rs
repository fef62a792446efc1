//! glimmer - decorative motion effects for the marketing page
//!
//! Compiled to WebAssembly and attached to the host document at load:
//! - floating particle field in the `#particles` container
//! - scroll-triggered reveals (`.fade-up`, `.flow-step`)
//! - pointer tilt on the cards, hover glow on the CTA button
//! - hero parallax and a slow hue-rotation cycle
//! - smooth anchor scrolling, body fade-in, tab-visibility pause,
//!   debounced resize re-scan
//!
//! Pure math lives in [`motion`] and is unit-tested natively; the DOM glue
//! only compiles for wasm32.

pub mod config;
pub mod keyframes;
pub mod motion;
pub mod page_state;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fx;

#[cfg(target_arch = "wasm32")]
pub use wasm::Effects;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use tracing::{error, info, warn};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Window};

    use crate::config::{EffectsConfig, CONFIG_SCRIPT_ID};
    use crate::motion::particle::sample_drift;
    use crate::{dom, fx, keyframes};

    /// A live effects installation. Dropping it (or calling [`stop`]) removes
    /// every node, listener and timer the effects added to the page.
    ///
    /// [`stop`]: Effects::stop
    #[wasm_bindgen]
    pub struct Effects {
        style: Element,
        window: Window,
        _particles: Option<fx::particles::ParticleField>,
        _reveal: Rc<fx::reveal::RevealWatcher>,
        _tilt: fx::tilt::TiltEffect,
        _parallax: Option<fx::parallax::ParallaxEffect>,
        _hue: Option<fx::hue::HueCycler>,
        _glow: Option<fx::glow::CtaGlow>,
        _anchors: fx::anchors::SmoothAnchors,
        _page: fx::page::PageEffects,
    }

    #[wasm_bindgen]
    impl Effects {
        /// Install the effects into the current document, honoring any
        /// inline config override block.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<Effects, JsValue> {
            let win = dom::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let doc = win
                .document()
                .ok_or_else(|| JsValue::from_str("no document"))?;
            let cfg = page_config(&doc);
            Self::install(win, doc, cfg)
        }

        /// Tear everything down. For single-page hosts that unmount the
        /// decorated view; the default start path never calls this.
        pub fn stop(self) {
            info!("effects stopped");
        }

        /// Count `id`'s text content up from `start` to `end` over
        /// `duration_ms`. Missing elements are skipped, like everywhere else.
        pub fn animate_count(
            &self,
            id: &str,
            start: i32,
            end: i32,
            duration_ms: f64,
        ) -> Result<(), JsValue> {
            let doc = self
                .window
                .document()
                .ok_or_else(|| JsValue::from_str("no document"))?;
            let Some(el) = doc
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                warn!(id, "no such element, skipping count-up");
                return Ok(());
            };
            fx::counter::animate_count(
                &self.window,
                el,
                i64::from(start),
                i64::from(end),
                duration_ms,
            )
        }
    }

    impl Effects {
        fn install(win: Window, doc: Document, cfg: EffectsConfig) -> Result<Self, JsValue> {
            let mut rng = fastrand::Rng::new();

            let css = keyframes::stylesheet(sample_drift(&mut rng));
            let style = dom::inject_stylesheet(&doc, &css)?;
            let particles = fx::particles::ParticleField::install(&doc, &cfg, &mut rng)?;
            let reveal = Rc::new(fx::reveal::RevealWatcher::install(&doc, &cfg)?);
            let tilt = fx::tilt::TiltEffect::install(&doc, &cfg)?;
            let parallax = fx::parallax::ParallaxEffect::install(&win, &doc, &cfg)?;
            let hue = fx::hue::HueCycler::start(&doc, &cfg);
            let glow = fx::glow::CtaGlow::install(&doc, &cfg)?;
            let anchors = fx::anchors::SmoothAnchors::install(&doc, &cfg)?;
            let page = fx::page::PageEffects::install(&win, &doc, &cfg, reveal.clone())?;

            info!("effects installed");
            Ok(Self {
                style,
                window: win,
                _particles: particles,
                _reveal: reveal,
                _tilt: tilt,
                _parallax: parallax,
                _hue: hue,
                _glow: glow,
                _anchors: anchors,
                _page: page,
            })
        }
    }

    impl Drop for Effects {
        fn drop(&mut self) {
            self.style.remove();
        }
    }

    /// Read the inline override block, falling back to defaults.
    fn page_config(doc: &Document) -> EffectsConfig {
        let Some(el) = doc.get_element_by_id(CONFIG_SCRIPT_ID) else {
            return EffectsConfig::default();
        };
        let raw = el.text_content().unwrap_or_default();
        match EffectsConfig::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(error = %e, "invalid inline config, using defaults");
                EffectsConfig::default()
            }
        }
    }

    fn install_and_leak() {
        match Effects::new() {
            // Static page, never unmounts; SPA hosts construct Effects
            // themselves and drop it on navigation.
            Ok(effects) => std::mem::forget(effects),
            Err(e) => error!(?e, "failed to install effects"),
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let Some(doc) = dom::document() else {
            return;
        };
        if doc.ready_state() == "loading" {
            let cb = Closure::once(install_and_leak);
            if doc
                .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
                .is_ok()
            {
                cb.forget();
            }
        } else {
            install_and_leak();
        }
    }
}
