use num_traits::{Float, NumCast, Zero};

use super::basis::HermiteBasis;
use super::point::Point;
use super::spline::Curve;
use super::NativeFloat;

/// A cubic Hermite segment defined by its two end points and the tangent vectors there.
/// The curve is defined by equation:
/// ```P(t) = h00(t) * p0 + h10(t) * m0 + h01(t) * p1 + h11(t) * m1```
/// Tangents are taken as given. Longer tangents pull the curve further along
/// their direction, nothing renormalizes them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CubicHermite<P> {
    pub(crate) p0: P,
    pub(crate) p1: P,
    pub(crate) m0: P,
    pub(crate) m1: P,
}

impl<P> CubicHermite<P>
where
    P: Point,
{
    pub fn new(p0: P, p1: P, m0: P, m1: P) -> Self {
        CubicHermite { p0, p1, m0, m1 }
    }

    pub fn start(&self) -> P {
        self.p0
    }

    pub fn end(&self) -> P {
        self.p1
    }

    /// Tangents at start and end
    pub fn tangents(&self) -> (P, P) {
        (self.m0, self.m1)
    }

    /// Evaluate the segment at t. Values outside of [0,1] extrapolate the cubic.
    pub fn eval(&self, t: P::Scalar) -> P {
        let b = HermiteBasis::at(t);
        self.p0 * b.h00 + self.m0 * b.h10 + self.p1 * b.h01 + self.m1 * b.h11
    }

    /// Sample a single coordinate axis of the segment at t
    ///
    /// # Panics
    ///
    /// Panics if `axis` is out of range for `P`, see [`Point::axis`].
    pub fn axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        HermiteBasis::at(t).combine(
            self.p0.axis(axis),
            self.p1.axis(axis),
            self.m0.axis(axis),
            self.m1.axis(axis),
        )
    }

    /// First derivative (velocity) of the segment at t.
    /// Equals `m0` at t = 0 and `m1` at t = 1.
    pub fn derivative(&self, t: P::Scalar) -> P {
        let d = HermiteBasis::derivative_at(t);
        self.p0 * d.h00 + self.m0 * d.h10 + self.p1 * d.h01 + self.m1 * d.h11
    }

    /// Approximates the arc length of the segment by flattening it with straight line segments.
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let step = |i: usize| -> P::Scalar {
            NumCast::from(i as NativeFloat / nsteps as NativeFloat).unwrap_or_else(P::Scalar::zero)
        };
        let mut arclen = P::Scalar::zero();
        let mut prev = self.p0;
        for i in 1..=nsteps {
            let p = self.eval(step(i));
            arclen = arclen + (p - prev).squared_length().sqrt();
            prev = p;
        }
        arclen
    }
}

impl<P: Point> Curve<P> for CubicHermite<P> {
    fn eval(&self, t: P::Scalar) -> P {
        CubicHermite::eval(self, t)
    }
}

/// Evaluate the Hermite curve between `p0` and `p1` with end tangents `m0` and `m1` at t.
pub fn evaluate_hermite<P: Point>(t: P::Scalar, p0: P, p1: P, m0: P, m1: P) -> P {
    CubicHermite::new(p0, p1, m0, m1).eval(t)
}
