use super::TOLERANCE;

/// Tolerance-aware equality for scalar values.
///
/// Exact equality must never be used on floating-point normals or
/// lengths; every classification test in the crate funnels through here.
#[must_use]
pub fn almost_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Tolerance-aware zero test.
#[must_use]
pub fn almost_zero(v: f64) -> bool {
    v.abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_within_tolerance() {
        assert!(almost_eq(1.0, 1.0 + TOLERANCE / 2.0));
        assert!(almost_eq(-0.5, -0.5));
    }

    #[test]
    fn unequal_outside_tolerance() {
        assert!(!almost_eq(1.0, 1.0 + TOLERANCE * 10.0));
        assert!(!almost_eq(0.0, 1.0));
    }

    #[test]
    fn zero_test() {
        assert!(almost_zero(0.0));
        assert!(almost_zero(TOLERANCE / 10.0));
        assert!(!almost_zero(TOLERANCE * 2.0));
    }
}
