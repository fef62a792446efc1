//! Hue counter behind the hero color-rotation flourish

/// Integral hue counter, one degree per tick, wrapping at 360.
///
/// The applied filter rotates a tenth of the counter, which keeps the
/// visible drift slow (a full cycle every 36 seconds at the stock tick).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HueWheel {
    hue: u16,
}

impl HueWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one step, returning the new hue in `[0, 360)`.
    pub fn advance(&mut self) -> u16 {
        self.hue = (self.hue + 1) % 360;
        self.hue
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// `filter` value for the current hue.
    pub fn filter(&self) -> String {
        format!("hue-rotate({:.1}deg)", f64::from(self.hue) * 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_ticks_is_n_mod_360() {
        let mut wheel = HueWheel::new();
        for _ in 0..1000 {
            wheel.advance();
        }
        assert_eq!(wheel.hue(), 1000 % 360);
    }

    #[test]
    fn test_wraps_to_zero() {
        let mut wheel = HueWheel::new();
        for _ in 0..359 {
            wheel.advance();
        }
        assert_eq!(wheel.hue(), 359);
        assert_eq!(wheel.advance(), 0);
    }

    #[test]
    fn test_filter_uses_tenth_of_counter() {
        let mut wheel = HueWheel::new();
        for _ in 0..90 {
            wheel.advance();
        }
        assert_eq!(wheel.filter(), "hue-rotate(9.0deg)");
    }
}
