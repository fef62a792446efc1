//! Parallax math for the hero section

/// Hero offsets derived from the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y_px: f64,
    /// Unclamped; values below zero render as fully transparent.
    pub opacity: f64,
}

impl Parallax {
    /// Hero state at a given scroll offset. The hero trails the scroll by
    /// `factor` and fades out linearly over `fade_distance` px.
    pub fn at(scroll_y: f64, factor: f64, fade_distance: f64) -> Self {
        Self {
            translate_y_px: scroll_y * factor,
            opacity: 1.0 - scroll_y / fade_distance,
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({:.1}px)", self.translate_y_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_speed_translation_and_linear_fade() {
        let p = Parallax::at(300.0, 0.5, 600.0);
        assert_eq!(p.translate_y_px, 150.0);
        assert_eq!(p.opacity, 0.5);
        assert_eq!(p.transform(), "translateY(150.0px)");
    }

    #[test]
    fn test_top_of_page_is_neutral() {
        let p = Parallax::at(0.0, 0.5, 600.0);
        assert_eq!(p.translate_y_px, 0.0);
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn test_opacity_goes_negative_past_fade_distance() {
        let p = Parallax::at(900.0, 0.5, 600.0);
        assert_eq!(p.opacity, -0.5);
    }
}
