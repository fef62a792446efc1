//! Periodic hue cycling on the hero
//!
//! A fixed-interval timer advances the hue wheel and applies the rotation
//! filter. The `Interval` handle cancels on drop, which is the stop path
//! the original page never had.

use gloo_timers::callback::Interval;
use tracing::debug;
use web_sys::Document;

use crate::config::EffectsConfig;
use crate::dom;
use crate::motion::HueWheel;

pub struct HueCycler {
    _interval: Interval,
}

impl HueCycler {
    /// Start cycling. `None` when the hero is absent.
    pub fn start(doc: &Document, cfg: &EffectsConfig) -> Option<Self> {
        let hero = dom::query_one(doc, &cfg.hero_selector)?;

        let mut wheel = HueWheel::new();
        let interval = Interval::new(cfg.hue_interval_ms, move || {
            wheel.advance();
            let _ = hero.style().set_property("filter", &wheel.filter());
        });

        debug!(interval_ms = cfg.hue_interval_ms, "hue cycler started");
        Some(Self {
            _interval: interval,
        })
    }
}
