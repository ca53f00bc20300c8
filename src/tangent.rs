//! Tangent estimation from three consecutive control points.
//!
//! Both strategies estimate the tangent *at the middle point* `p1`:
//! - [`Bessel`]: central difference `(p2 - p0) / 2`
//! - [`Circle`]: tangent of the circle through all three points
use num_traits::{Float, One};

use super::point::Point;
use super::point2::Point2;

/// Strategy for estimating the tangent at `p1` given its neighbours `p0` and `p2`.
pub trait TangentEstimator<P> {
    fn estimate(&self, p0: P, p1: P, p2: P) -> P;
}

/// Central difference (Bessel) tangent
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Bessel;

/// Tangent of the circle circumscribed around the three points
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Circle;

impl<P: Point> TangentEstimator<P> for Bessel {
    fn estimate(&self, p0: P, p1: P, p2: P) -> P {
        bessel_tangent(p0, p1, p2)
    }
}

impl<T> TangentEstimator<Point2<T>> for Circle
where
    T: Float + Default,
{
    fn estimate(&self, p0: Point2<T>, p1: Point2<T>, p2: Point2<T>) -> Point2<T> {
        circle_tangent(p0, p1, p2)
    }
}

/// Central difference tangent at `p1`: `(p2 - p0) / 2`.
/// `p1` does not take part, it only names where the tangent applies.
/// Zero only if `p0 == p2`.
pub fn bessel_tangent<P: Point>(p0: P, _p1: P, p2: P) -> P {
    let half = P::Scalar::one() / (P::Scalar::one() + P::Scalar::one());
    (p2 - p0) * half
}

/// Center of the circle through `p0`, `p1` and `p2`, found by intersecting two
/// perpendicular bisectors. Returns None if the points are exactly collinear
/// (this includes any two of them coinciding).
pub fn circumcenter<T: Float>(p0: Point2<T>, p1: Point2<T>, p2: Point2<T>) -> Option<Point2<T>> {
    let two = T::one() + T::one();
    let a = p1.x - p0.x;
    let b = p1.y - p0.y;
    let c = p2.x - p1.x;
    let d = p2.y - p1.y;
    let e = a * (p0.x + p1.x) + b * (p0.y + p1.y);
    let f = c * (p1.x + p2.x) + d * (p1.y + p2.y);
    let g = two * (a * d - b * c);

    if g == T::zero() {
        return None;
    }

    Some(Point2::new((d * e - b * f) / g, (a * f - c * e) / g))
}

/// Tangent at `p1` of the circle through the three points: the radius vector
/// `p1 - center` turned by -90 degrees, so its length equals the radius.
/// The orientation follows that rotation, not the order of the points, so it
/// can point back towards `p0`.
///
/// Exactly collinear points have no such circle. In that case the zero vector
/// is returned, which callers must read as "no curvature information" rather
/// than as a flat tangent.
pub fn circle_tangent<T: Float>(p0: Point2<T>, p1: Point2<T>, p2: Point2<T>) -> Point2<T> {
    match circumcenter(p0, p1, p2) {
        Some(c) => Point2::new(p1.y - c.y, c.x - p1.x),
        None => {
            log::trace!("collinear points, circle tangent falls back to zero");
            Point2::zero()
        }
    }
}
