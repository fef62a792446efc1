//! Keyframe animations injected into the host document
//!
//! The randomized per-instance inputs are data fed into fixed templates;
//! the rendered stylesheet is appended to `<head>` once at startup.

/// Animation name used by every particle.
pub const FLOAT_ANIMATION: &str = "float";

/// Animation name applied to flow steps when they scroll into view.
pub const SLIDE_IN_ANIMATION: &str = "slideInRight";

/// Upward-drift loop for the particles. `drift_px` is the horizontal
/// offset reached at the end of the loop (sampled once per page load).
pub fn float_keyframes(drift_px: f64) -> String {
    format!(
        "@keyframes {FLOAT_ANIMATION} {{\n\
         \x20 0% {{ transform: translateY(0) translateX(0); opacity: 0; }}\n\
         \x20 10% {{ opacity: 1; }}\n\
         \x20 90% {{ opacity: 1; }}\n\
         \x20 100% {{ transform: translateY(-100vh) translateX({drift_px:.1}px); opacity: 0; }}\n\
         }}"
    )
}

/// Slide-in used by flow steps.
pub fn slide_in_keyframes() -> String {
    format!(
        "@keyframes {SLIDE_IN_ANIMATION} {{\n\
         \x20 from {{ opacity: 0; transform: translateX(-50px); }}\n\
         \x20 to {{ opacity: 1; transform: translateX(0); }}\n\
         }}"
    )
}

/// Full stylesheet injected at startup.
pub fn stylesheet(drift_px: f64) -> String {
    format!("{}\n{}", float_keyframes(drift_px), slide_in_keyframes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_keyframes_embed_drift() {
        let css = float_keyframes(-37.5);
        assert!(css.starts_with("@keyframes float {"));
        assert!(css.contains("translateY(-100vh) translateX(-37.5px)"));
        assert!(css.contains("0% { transform: translateY(0) translateX(0); opacity: 0; }"));
    }

    #[test]
    fn test_slide_in_keyframes_shape() {
        let css = slide_in_keyframes();
        assert!(css.starts_with("@keyframes slideInRight {"));
        assert!(css.contains("from { opacity: 0; transform: translateX(-50px); }"));
        assert!(css.contains("to { opacity: 1; transform: translateX(0); }"));
    }

    #[test]
    fn test_stylesheet_holds_both_animations() {
        let css = stylesheet(10.0);
        assert!(css.contains("@keyframes float"));
        assert!(css.contains("@keyframes slideInRight"));
    }
}
