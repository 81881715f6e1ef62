/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        // covers matching infinities
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Replace an indeterminate (NaN) value with positive infinity.
///
/// Used for conduit legs whose area and length both vanish: the 0/0 leg
/// carries no resistance.
#[inline]
pub fn nan_to_inf(v: Real) -> Real {
    if v.is_nan() { Real::INFINITY } else { v }
}

/// Arithmetic mean of the values, NaN when there are none.
pub fn mean(values: impl IntoIterator<Item = Real>) -> Real {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0_usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { Real::NAN } else { sum / n as Real }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
        assert!(nearly_equal(Real::INFINITY, Real::INFINITY, tol));
    }

    #[test]
    fn nan_becomes_infinity() {
        assert_eq!(nan_to_inf(Real::NAN), Real::INFINITY);
        assert_eq!(nan_to_inf(2.5), 2.5);
        assert_eq!(nan_to_inf(Real::INFINITY), Real::INFINITY);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(Vec::new()).is_nan());
        assert_eq!(mean([1.0, 2.0, 3.0]), 2.0);
    }
}
