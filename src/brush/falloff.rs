//! Brush falloff model
//!
//! Linear cone: full strength at the center, zero at the radius.

/// Weight of a pixel `distance` pixels away from the brush center.
///
/// `strength` is a 0-100 percentage. The result is in `[0, 1]` and is 0
/// at or beyond `radius`.
#[inline]
pub fn weight(distance: f32, radius: f32, strength: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        return 0.0;
    }
    let strength = strength.clamp(0.0, 100.0) / 100.0;
    (1.0 - distance / radius).max(0.0) * strength
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_center_weight_is_strength() {
        assert!(approx_eq(weight(0.0, 20.0, 80.0), 0.8));
        assert!(approx_eq(weight(0.0, 20.0, 100.0), 1.0));
    }

    #[test]
    fn test_linear_falloff() {
        assert!(approx_eq(weight(10.0, 20.0, 100.0), 0.5));
        assert!(approx_eq(weight(15.0, 20.0, 80.0), 0.2));
    }

    #[test]
    fn test_edge_and_beyond_are_zero() {
        assert_eq!(weight(20.0, 20.0, 100.0), 0.0);
        assert_eq!(weight(25.0, 20.0, 100.0), 0.0);
    }

    #[test]
    fn test_degenerate_radius() {
        assert_eq!(weight(0.0, 0.0, 100.0), 0.0);
        assert_eq!(weight(0.0, -1.0, 100.0), 0.0);
    }

    #[test]
    fn test_strength_clamped() {
        assert!(approx_eq(weight(0.0, 10.0, 250.0), 1.0));
        assert_eq!(weight(0.0, 10.0, -5.0), 0.0);
    }
}
