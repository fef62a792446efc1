//! Pointer tilt math for the interactive cards

/// Tilt of a card under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    /// Map a pointer offset within the card's box to rotation angles.
    ///
    /// The card leans toward the pointer: a pointer below center tips the
    /// top away (positive X rotation), a pointer right of center turns the
    /// card left (negative Y rotation). `divisor` scales px to degrees.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x_deg: (y - center_y) / divisor,
            rotate_y_deg: (center_x - x) / divisor,
        }
    }

    /// CSS transform with a fixed perspective and vertical lift.
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) translateY(-8px)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_neutral() {
        let t = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0, 20.0);
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
    }

    #[test]
    fn test_angles_proportional_to_offset() {
        // Bottom-right corner of a 200x100 card.
        let t = Tilt::from_pointer(200.0, 100.0, 200.0, 100.0, 20.0);
        assert_eq!(t.rotate_x_deg, 2.5);
        assert_eq!(t.rotate_y_deg, -5.0);

        // Doubling the divisor halves the angles.
        let t2 = Tilt::from_pointer(200.0, 100.0, 200.0, 100.0, 40.0);
        assert_eq!(t2.rotate_x_deg, 1.25);
        assert_eq!(t2.rotate_y_deg, -2.5);
    }

    #[test]
    fn test_transform_string() {
        let t = Tilt {
            rotate_x_deg: 2.5,
            rotate_y_deg: -5.0,
        };
        assert_eq!(
            t.transform(),
            "perspective(1000px) rotateX(2.500deg) rotateY(-5.000deg) translateY(-8px)"
        );
    }
}
