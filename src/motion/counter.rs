//! Linear count-up interpolation for the stat counter helper

/// Fraction of the animation elapsed, clamped to 1.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    (elapsed_ms / duration_ms).min(1.0)
}

/// Displayed value at a given progress, floored to an integer.
pub fn value_at(progress: f64, start: i64, end: i64) -> i64 {
    (progress * (end - start) as f64 + start as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_at_one() {
        assert_eq!(progress(500.0, 1000.0), 0.5);
        assert_eq!(progress(1500.0, 1000.0), 1.0);
    }

    #[test]
    fn test_value_hits_endpoints() {
        assert_eq!(value_at(0.0, 10, 250), 10);
        assert_eq!(value_at(1.0, 10, 250), 250);
    }

    #[test]
    fn test_value_floors_midway() {
        // 0.33 * 100 = 33.0, 0.333 * 10 = 3.33 -> 3
        assert_eq!(value_at(0.333, 0, 10), 3);
        assert_eq!(value_at(0.5, 0, 5), 2);
    }

    #[test]
    fn test_counts_down_when_end_below_start() {
        assert_eq!(value_at(0.5, 100, 0), 50);
        assert_eq!(value_at(1.0, 100, 0), 0);
    }
}
