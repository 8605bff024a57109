//! Synthetic progress readout
//!
//! While the provider works, the landing page shows a percentage derived
//! purely from elapsed time. The value is capped below 100 so the bar
//! never completes before the real result arrives.

/// Percentage for `elapsed_ms` of readout time against `target_ms`,
/// rounded to the nearest point and capped at `cap`.
pub fn synthetic_progress(elapsed_ms: u64, target_ms: u64, cap: u8) -> u8 {
    if target_ms == 0 {
        return cap;
    }
    let pct = elapsed_ms
        .saturating_mul(100)
        .saturating_add(target_ms / 2)
        / target_ms;
    pct.min(cap as u64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_elapsed() {
        assert_eq!(synthetic_progress(0, 1400, 95), 0);
    }

    #[test]
    fn test_halfway() {
        assert_eq!(synthetic_progress(700, 1400, 95), 50);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 63ms of 1400 is 4.5%, which rounds up
        assert_eq!(synthetic_progress(63, 1400, 95), 5);
        assert_eq!(synthetic_progress(62, 1400, 95), 4);
    }

    #[test]
    fn test_caps_at_95() {
        assert_eq!(synthetic_progress(1400, 1400, 95), 95);
        assert_eq!(synthetic_progress(5000, 1400, 95), 95);
    }

    #[test]
    fn test_huge_elapsed_saturates_instead_of_overflowing() {
        assert_eq!(synthetic_progress(u64::MAX, 1400, 95), 95);
        assert_eq!(synthetic_progress(u64::MAX / 100 + 1, 1400, 95), 95);
    }

    #[test]
    fn test_non_decreasing() {
        let mut last = 0;
        for elapsed in (0..2000).step_by(90) {
            let pct = synthetic_progress(elapsed, 1400, 95);
            assert!(pct >= last, "progress regressed at {}ms", elapsed);
            last = pct;
        }
    }

    #[test]
    fn test_zero_target_saturates() {
        assert_eq!(synthetic_progress(0, 0, 95), 95);
    }
}
