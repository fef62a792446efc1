//! Randomized particle parameters
//!
//! Each particle gets its visual parameters sampled once at creation and
//! never mutated afterwards; the looping float animation does the rest.

use fastrand::Rng;

/// Accent color of the page, shared by particles and the CTA glow.
pub const ACCENT_RGB: (u8, u8, u8) = (0, 212, 255);

/// Visual parameters of one particle.
#[derive(Clone, Debug)]
pub struct ParticleParams {
    /// Marker width, px. Drawn separately from the height, so most
    /// particles are slightly elliptical.
    pub width_px: f64,
    /// Marker height, px.
    pub height_px: f64,
    /// Fill opacity.
    pub opacity: f64,
    /// Vertical position, percent of the container.
    pub top_pct: f64,
    /// Horizontal position, percent of the container.
    pub left_pct: f64,
    /// Float loop duration, seconds.
    pub duration_s: f64,
    /// Start delay, seconds.
    pub delay_s: f64,
}

impl ParticleParams {
    /// Sample one particle. Ranges: width and height independently 1-4 px,
    /// opacity 0.2-0.7, position 0-100%, duration 10-20 s, delay 0-5 s.
    pub fn sample(rng: &mut Rng) -> Self {
        Self {
            width_px: 1.0 + rng.f64() * 3.0,
            height_px: 1.0 + rng.f64() * 3.0,
            opacity: 0.2 + rng.f64() * 0.5,
            top_pct: rng.f64() * 100.0,
            left_pct: rng.f64() * 100.0,
            duration_s: 10.0 + rng.f64() * 10.0,
            delay_s: rng.f64() * 5.0,
        }
    }

    /// Inline `style` text for the particle element.
    pub fn css_text(&self, animation: &str) -> String {
        let (r, g, b) = ACCENT_RGB;
        format!(
            "position: absolute; \
             width: {width:.2}px; height: {height:.2}px; \
             background: rgba({r}, {g}, {b}, {opacity:.2}); \
             border-radius: 50%; \
             top: {top:.2}%; left: {left:.2}%; \
             animation: {animation} {duration:.2}s linear infinite; \
             animation-delay: {delay:.2}s;",
            width = self.width_px,
            height = self.height_px,
            opacity = self.opacity,
            top = self.top_pct,
            left = self.left_pct,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// Horizontal drift reached at the end of the float loop, -50..50 px.
pub fn sample_drift(rng: &mut Rng) -> f64 {
    rng.f64() * 100.0 - 50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_params_stay_in_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..1000 {
            let p = ParticleParams::sample(&mut rng);
            assert!((1.0..4.0).contains(&p.width_px), "width {}", p.width_px);
            assert!((1.0..4.0).contains(&p.height_px), "height {}", p.height_px);
            assert!((0.2..0.7).contains(&p.opacity), "opacity {}", p.opacity);
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((10.0..20.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn test_width_and_height_drawn_independently() {
        let mut rng = Rng::with_seed(7);
        let differing = (0..100)
            .map(|_| ParticleParams::sample(&mut rng))
            .filter(|p| p.width_px != p.height_px)
            .count();
        // Two independent draws virtually never coincide; a single shared
        // sample would make every particle a perfect circle.
        assert!(differing > 90, "only {differing} of 100 differ");
    }

    #[test]
    fn test_drift_stays_in_range() {
        let mut rng = Rng::with_seed(11);
        for _ in 0..1000 {
            let d = sample_drift(&mut rng);
            assert!((-50.0..50.0).contains(&d), "drift {d}");
        }
    }

    #[test]
    fn test_css_text_shape() {
        let p = ParticleParams {
            width_px: 2.5,
            height_px: 3.25,
            opacity: 0.4,
            top_pct: 10.0,
            left_pct: 90.0,
            duration_s: 15.0,
            delay_s: 2.0,
        };
        let css = p.css_text("float");
        assert!(css.contains("width: 2.50px; height: 3.25px;"));
        assert!(css.contains("background: rgba(0, 212, 255, 0.40);"));
        assert!(css.contains("top: 10.00%; left: 90.00%;"));
        assert!(css.contains("animation: float 15.00s linear infinite;"));
        assert!(css.contains("animation-delay: 2.00s;"));
    }
}
