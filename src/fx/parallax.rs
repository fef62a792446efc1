//! Hero parallax
//!
//! On every scroll the hero trails at half speed and fades out linearly.
//! The opacity is deliberately unclamped; negative values render as fully
//! transparent.

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::config::EffectsConfig;
use crate::dom;
use crate::motion::Parallax;

pub struct ParallaxEffect {
    window: Window,
    cb: Closure<dyn FnMut()>,
}

impl ParallaxEffect {
    /// Attach the scroll listener. `None` when the hero is absent.
    pub fn install(
        win: &Window,
        doc: &Document,
        cfg: &EffectsConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(hero) = dom::query_one(doc, &cfg.hero_selector) else {
            debug!(selector = %cfg.hero_selector, "no hero element, skipping parallax");
            return Ok(None);
        };

        let factor = cfg.parallax_factor;
        let fade_distance = cfg.parallax_fade_distance;
        let scroll_source = win.clone();
        let cb: Closure<dyn FnMut()> = Closure::wrap(Box::new(move || {
            let scroll_y = scroll_source.scroll_y().unwrap_or(0.0);
            let p = Parallax::at(scroll_y, factor, fade_distance);
            let style = hero.style();
            let _ = style.set_property("transform", &p.transform());
            let _ = style.set_property("opacity", &format!("{:.3}", p.opacity));
        }));

        win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())?;
        Ok(Some(Self {
            window: win.clone(),
            cb,
        }))
    }
}

impl Drop for ParallaxEffect {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.cb.as_ref().unchecked_ref());
    }
}
