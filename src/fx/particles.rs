//! Floating particle field
//!
//! Spawns a fixed number of decorative markers into the `#particles`
//! container, each with independently randomized size, position, opacity
//! and float timing. Parameters are sampled once and never mutated.

use tracing::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::EffectsConfig;
use crate::keyframes::FLOAT_ANIMATION;
use crate::motion::ParticleParams;

pub struct ParticleField {
    particles: Vec<Element>,
}

impl ParticleField {
    /// Spawn the field. `None` when the container is absent from the page.
    pub fn install(
        doc: &Document,
        cfg: &EffectsConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<Option<Self>, JsValue> {
        let Some(container) = doc.get_element_by_id(&cfg.particles_container_id) else {
            debug!(id = %cfg.particles_container_id, "no particle container, skipping");
            return Ok(None);
        };

        let mut particles = Vec::with_capacity(cfg.particle_count);
        for _ in 0..cfg.particle_count {
            let params = ParticleParams::sample(rng);
            let el = doc.create_element("div")?;
            el.set_class_name("particle");
            el.set_attribute("style", &params.css_text(FLOAT_ANIMATION))?;
            container.append_child(&el)?;
            particles.push(el);
        }

        info!(count = particles.len(), "particle field installed");
        Ok(Some(Self { particles }))
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        for p in &self.particles {
            p.remove();
        }
    }
}
