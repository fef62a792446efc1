//! Effect configuration
//!
//! Every tunable the effects use, with the stock values of the page this
//! crate decorates. A host page can override any subset through an inline
//! `<script type="application/json" id="glimmer-config">` block.

use serde::{Deserialize, Serialize};

/// Id of the inline script block holding configuration overrides.
pub const CONFIG_SCRIPT_ID: &str = "glimmer-config";

/// All tunables for the page effects.
///
/// Unknown fields in an override block are rejected rather than silently
/// ignored, so a typo in the page shows up in the console.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    /// Number of particles spawned into the particle container.
    pub particle_count: usize,
    /// Id of the particle container element.
    pub particles_container_id: String,
    /// Selector for elements revealed with the `visible` class.
    pub fade_up_selector: String,
    /// Intersection threshold for the fade-up reveal.
    pub fade_up_threshold: f64,
    /// Root margin for the fade-up observer.
    pub fade_up_root_margin: String,
    /// Selector for elements that slide in from the left.
    pub flow_step_selector: String,
    /// Intersection threshold for the slide-in reveal.
    pub flow_step_threshold: f64,
    /// Selector for surfaces that tilt under the pointer.
    pub tilt_selector: String,
    /// Divisor mapping pointer offset (px) to rotation (deg).
    pub tilt_divisor: f64,
    /// Selector for the parallax / hue-cycle target.
    pub hero_selector: String,
    /// Fraction of the scroll offset applied as hero translation.
    pub parallax_factor: f64,
    /// Scroll distance (px) over which the hero fades to zero opacity.
    pub parallax_fade_distance: f64,
    /// Milliseconds between hue steps.
    pub hue_interval_ms: u32,
    /// Selector for the glowing call-to-action button.
    pub cta_selector: String,
    /// Selector for same-page links given smooth scrolling.
    pub anchor_selector: String,
    /// Quiet time (ms) before a burst of resize events settles.
    pub resize_debounce_ms: u32,
    /// Delay (ms) before the body fades in on load.
    pub fade_in_delay_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            particles_container_id: "particles".into(),
            fade_up_selector: ".fade-up".into(),
            fade_up_threshold: 0.1,
            fade_up_root_margin: "0px 0px -100px 0px".into(),
            flow_step_selector: ".flow-step".into(),
            flow_step_threshold: 0.2,
            tilt_selector: ".problem-card, .benefit-card, .flow-step".into(),
            tilt_divisor: 20.0,
            hero_selector: ".hero".into(),
            parallax_factor: 0.5,
            parallax_fade_distance: 600.0,
            hue_interval_ms: 100,
            cta_selector: ".cta-button".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            resize_debounce_ms: 250,
            fade_in_delay_ms: 100,
        }
    }
}

impl EffectsConfig {
    /// Parse an override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let cfg = EffectsConfig::default();
        assert_eq!(cfg.particle_count, 50);
        assert_eq!(cfg.particles_container_id, "particles");
        assert_eq!(cfg.fade_up_threshold, 0.1);
        assert_eq!(cfg.flow_step_threshold, 0.2);
        assert_eq!(cfg.tilt_divisor, 20.0);
        assert_eq!(cfg.parallax_factor, 0.5);
        assert_eq!(cfg.parallax_fade_distance, 600.0);
        assert_eq!(cfg.hue_interval_ms, 100);
        assert_eq!(cfg.resize_debounce_ms, 250);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg = EffectsConfig::from_json(r#"{"particle_count": 12}"#).unwrap();
        assert_eq!(cfg.particle_count, 12);
        assert_eq!(cfg.fade_up_selector, ".fade-up");
        assert_eq!(cfg.hue_interval_ms, 100);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(EffectsConfig::from_json(r#"{"particle_cnt": 12}"#).is_err());
    }
}
