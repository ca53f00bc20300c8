//! Cubic Hermite basis functions.
//!
//! ```text
//! h00(t) =  2t³ - 3t² + 1
//! h10(t) =   t³ - 2t² + t
//! h01(t) = -2t³ + 3t²
//! h11(t) =   t³ -  t²
//! ```
//!
//! All four are defined for every real t. Outside of [0,1] they extrapolate.
use num_traits::Float;

#[inline]
pub fn h00<T: Float>(t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let t2 = t * t;
    two * t2 * t - three * t2 + T::one()
}

#[inline]
pub fn h10<T: Float>(t: T) -> T {
    let two = T::one() + T::one();
    let t2 = t * t;
    t2 * t - two * t2 + t
}

#[inline]
pub fn h01<T: Float>(t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let t2 = t * t;
    -two * t2 * t + three * t2
}

#[inline]
pub fn h11<T: Float>(t: T) -> T {
    let t2 = t * t;
    t2 * t - t2
}

/// The four Hermite weights evaluated at a single parameter value.
///
/// Weights are applied as `h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1`.
/// Tangents are used as given, their length is never renormalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HermiteBasis<T> {
    pub h00: T,
    pub h10: T,
    pub h01: T,
    pub h11: T,
}

impl<T: Float> HermiteBasis<T> {
    pub fn at(t: T) -> Self {
        HermiteBasis {
            h00: h00(t),
            h10: h10(t),
            h01: h01(t),
            h11: h11(t),
        }
    }

    /// Weights of the first derivative with respect to t
    pub fn derivative_at(t: T) -> Self {
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let four = two + two;
        let six = three + three;
        let t2 = t * t;
        HermiteBasis {
            h00: six * t2 - six * t,
            h10: three * t2 - four * t + one,
            h01: -six * t2 + six * t,
            h11: three * t2 - two * t,
        }
    }

    /// Combine scalar inputs (one coordinate axis) with these weights
    pub fn combine(&self, p0: T, p1: T, m0: T, m1: T) -> T {
        self.h00 * p0 + self.h10 * m0 + self.h01 * p1 + self.h11 * m1
    }
}

/// Hermite interpolation of a single coordinate axis.
/// `p0`/`p1` are the end values, `m0`/`m1` the slopes at those ends.
pub fn hermite_interpolate<T: Float>(t: T, p0: T, p1: T, m0: T, m1: T) -> T {
    HermiteBasis::at(t).combine(p0, p1, m0, m1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn closed_form_midpoint_values() {
        let b = HermiteBasis::at(0.5f64);
        assert_eq!(b.h00, 0.5);
        assert_eq!(b.h10, 0.125);
        assert_eq!(b.h01, 0.5);
        assert_eq!(b.h11, -0.125);
    }

    #[test]
    fn endpoint_weights() {
        let b0 = HermiteBasis::at(0.0f64);
        assert_eq!((b0.h00, b0.h10, b0.h01, b0.h11), (1.0, 0.0, 0.0, 0.0));
        let b1 = HermiteBasis::at(1.0f64);
        assert_eq!((b1.h00, b1.h10, b1.h01, b1.h11), (0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn partition_of_unity() {
        // h00 + h01 == 1 for any t, including extrapolation
        let nsteps = 1000;
        for i in -nsteps..=2 * nsteps {
            let t = i as f64 / nsteps as f64;
            let b = HermiteBasis::at(t);
            assert!((b.h00 + b.h01 - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-6;
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let d = HermiteBasis::derivative_at(t);
            let fd = |f: fn(f64) -> f64| (f(t + h) - f(t - h)) / (2.0 * h);
            assert!((d.h00 - fd(h00)).abs() < 1e-6);
            assert!((d.h10 - fd(h10)).abs() < 1e-6);
            assert!((d.h01 - fd(h01)).abs() < 1e-6);
            assert!((d.h11 - fd(h11)).abs() < 1e-6);
        }
    }

    #[test]
    fn scalar_interpolation() {
        assert!((hermite_interpolate(0.0, 200.0, 600.0, 100.0, 100.0) - 200.0).abs() < EPSILON);
        assert!((hermite_interpolate(1.0, 200.0, 600.0, 100.0, 100.0) - 600.0).abs() < EPSILON);
        // at t = 0.5 the tangent terms reduce to 0.125 * (m0 - m1)
        assert_eq!(hermite_interpolate(0.5, 200.0, 600.0, 100.0, 100.0), 400.0);
        assert_eq!(hermite_interpolate(0.5, 300.0, 300.0, -100.0, 100.0), 275.0);
    }
}
