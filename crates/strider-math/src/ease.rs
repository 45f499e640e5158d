//! Quartic ease-out curve and its closed-form inverse.
//!
//! The turn controller never stores tween progress; it recovers the curve
//! time from the current angle with [`quartic_ease_out_inverse`], advances
//! it linearly, and re-applies [`quartic_ease_out`]. Keeping the pair in one
//! place guarantees the two directions stay exact inverses of each other.

/// Quartic ease-out: `1 - (1 - t)^4`, clamped to `t ∈ [0, 1]`.
///
/// Fast start, decelerating finish.
pub fn quartic_ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Inverse of [`quartic_ease_out`]: the `t` for which `ease(t) = p`.
///
/// `p` is clamped to `[0, 1]`, so the result is always finite.
pub fn quartic_ease_out_inverse(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powf(0.25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert!((quartic_ease_out(0.0) - 0.0).abs() < 1e-6);
        assert!((quartic_ease_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_starts_fast() {
        // An ease-out curve sits above the diagonal everywhere inside (0, 1).
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(quartic_ease_out(t) > t, "ease({t}) should exceed {t}");
        }
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let eased = quartic_ease_out(i as f32 / 100.0);
            assert!(eased >= prev, "not monotonic at step {i}");
            prev = eased;
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        for t in [0.0, 0.05, 0.3, 0.5, 0.77, 0.99, 1.0] {
            let back = quartic_ease_out_inverse(quartic_ease_out(t));
            assert!((back - t).abs() < 1e-4, "round trip failed at t={t}: {back}");
        }
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        assert!((quartic_ease_out(-3.0) - 0.0).abs() < 1e-6);
        assert!((quartic_ease_out(2.0) - 1.0).abs() < 1e-6);
        assert!((quartic_ease_out_inverse(-1.0) - 0.0).abs() < 1e-6);
        assert!((quartic_ease_out_inverse(5.0) - 1.0).abs() < 1e-6);
    }
}
