use core::{fmt, slice};

use num_traits::{Float, NumCast, One, ToPrimitive, Zero};
use tinyvec::ArrayVec;

use super::error::{CurveError, Result};
use super::hermite::CubicHermite;
use super::point::Point;
use super::spline::Curve;
use super::tangent::TangentEstimator;

/// A spline of up to `N` cubic Hermite segments that share their tangents at the joints.
///
/// Built from a sequence of control points with [`through`](Self::through).
/// The first control point only steers the tangent at the second one, the curve
/// itself runs from `points[1]` to the last point, so `n` points give `n - 2` segments.
pub struct HermiteSpline<P, const N: usize>
where
    P: Point,
{
    segments: ArrayVec<[CubicHermite<P>; N]>,
}

impl<P, const N: usize> HermiteSpline<P, N>
where
    P: Point,
    [CubicHermite<P>; N]: tinyvec::Array<Item = CubicHermite<P>>,
{
    /// Interpolate `points[1..]`, estimating the tangent at every knot from its neighbours.
    /// The last knot has no right neighbour and stands in for it itself.
    ///
    /// Needs at least 3 points and at most `N + 2`.
    pub fn through<E>(points: &[P], estimator: &E) -> Result<Self>
    where
        E: TangentEstimator<P>,
    {
        let n = points.len();
        if n < 3 {
            return Err(CurveError::TooFewControlPoints {
                expected: 3,
                found: n,
            });
        }
        if n - 2 > N {
            return Err(CurveError::TooManyControlPoints {
                capacity: N + 2,
                found: n,
            });
        }

        let tangent = |k: usize| {
            let right = points.get(k + 1).copied().unwrap_or(points[k]);
            estimator.estimate(points[k - 1], points[k], right)
        };

        let mut segments = ArrayVec::new();
        let mut m0 = tangent(1);
        for k in 1..n - 1 {
            let m1 = tangent(k + 1);
            segments.push(CubicHermite::new(points[k], points[k + 1], m0, m1));
            m0 = m1;
        }
        Ok(HermiteSpline { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.len() == 0
    }

    pub fn segments(&self) -> slice::Iter<'_, CubicHermite<P>> {
        self.segments.iter()
    }

    /// Append a segment. Returns false if the spline is already at capacity.
    /// Continuity with the previous segment is up to the caller.
    pub fn push(&mut self, segment: CubicHermite<P>) -> bool {
        if self.segments.len() < self.segments.capacity() {
            self.segments.push(segment);
            true
        } else {
            false
        }
    }

    /// Tangents at the knots in order, from `points[1]` to the last point
    pub fn tangents(&self) -> impl Iterator<Item = P> + '_ {
        self.segments
            .iter()
            .map(|s| s.m0)
            .chain(self.segments.last().map(|s| s.m1))
    }

    /// Evaluate a point along the spline for t in [0,1], every segment gets an equal share of t.
    /// Unlike a single segment the spline does not extrapolate, t is clamped to [0,1].
    pub fn eval(&self, t: P::Scalar) -> P {
        let (index, local_t) = self.segment_parameter(t);
        self.segments[index].eval(local_t)
    }

    fn segment_parameter(&self, t: P::Scalar) -> (usize, P::Scalar) {
        let zero = P::Scalar::zero();
        let one = P::Scalar::one();
        let count = self.segments.len();

        let t = t.max(zero).min(one);
        let count_scalar: P::Scalar = NumCast::from(count).unwrap_or_else(P::Scalar::one);
        let scaled = t * count_scalar;
        if scaled >= count_scalar {
            return (count - 1, one);
        }

        let index = scaled.floor();
        (index.to_usize().unwrap_or(0), scaled - index)
    }
}

impl<P, const N: usize> Curve<P> for HermiteSpline<P, N>
where
    P: Point,
    [CubicHermite<P>; N]: tinyvec::Array<Item = CubicHermite<P>>,
{
    fn eval(&self, t: P::Scalar) -> P {
        HermiteSpline::eval(self, t)
    }
}

impl<P, const N: usize> Clone for HermiteSpline<P, N>
where
    P: Point,
    [CubicHermite<P>; N]: tinyvec::Array<Item = CubicHermite<P>>,
{
    fn clone(&self) -> Self {
        HermiteSpline {
            segments: self.segments.iter().copied().collect(),
        }
    }
}

impl<P, const N: usize> fmt::Debug for HermiteSpline<P, N>
where
    P: Point + fmt::Debug,
    [CubicHermite<P>; N]: tinyvec::Array<Item = CubicHermite<P>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HermiteSpline")
            .field("segments", &self.segments.as_slice())
            .finish()
    }
}
