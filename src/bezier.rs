use alloc::vec::Vec;
use core::iter::IntoIterator;
use core::slice;

use num_traits::{Float, NumCast, One, Zero};
use tinyvec::TinyVec;

use super::error::{CurveError, Result};
use super::point::Point;
use super::spline::Curve;
use super::NativeFloat;

/// Every intermediate round of de Casteljau's algorithm, starting with the control
/// points themselves (level 0) and ending with the single curve point.
/// An n point curve always produces n levels.
pub type SubdivisionLevels<P> = Vec<Vec<P>>;

/// Working buffer for slice based evaluation; stays on the stack up to 8 control points
type CasteljauBuffer<P> = TinyVec<[P; 8]>;

/// A Bezier curve of degree N - 1 over a fixed array of control points.
///
/// `t` runs from the first control point (t = 0) to the last (t = 1), values outside
/// of [0,1] extrapolate the polynomial. `P` is any [`Point`], `N` must be at least one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier<P, const N: usize>
where
    P: Point,
{
    control_points: [P; N],
}

impl<P, const N: usize> Curve<P> for Bezier<P, { N }>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        self.eval(t)
    }
}

impl<P: Point, const N: usize> IntoIterator for Bezier<P, { N }> {
    type Item = P;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.control_points)
    }
}

impl<'a, P: Point, const N: usize> IntoIterator for &'a mut Bezier<P, { N }> {
    type Item = &'a mut P;
    type IntoIter = slice::IterMut<'a, P>;

    fn into_iter(self) -> slice::IterMut<'a, P> {
        self.control_points.iter_mut()
    }
}

impl<P, const N: usize> Bezier<P, { N }>
where
    P: Point,
{
    const NON_EMPTY: () = assert!(N > 0, "a Bezier curve needs at least one control point");

    /// Curve of degree N - 1 starting at the first and ending at the last control point.
    /// `Bezier::<_, 0>::new` fails to compile.
    pub fn new(control_points: [P; N]) -> Bezier<P, { N }> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Bezier { control_points }
    }

    pub fn control_points(&self) -> [P; N] {
        self.control_points
    }

    /// Point on the curve at 't', by de Casteljau on a stack copy of the control points
    pub fn eval(&self, t: P::Scalar) -> P {
        let mut p: [P; N] = self.control_points;
        casteljau_in_place(&mut p, t)
    }

    /// The construction ladder at 't', see [`subdivision_levels`]
    pub fn levels(&self, t: P::Scalar) -> SubdivisionLevels<P> {
        ladder(t, &self.control_points)
    }

    /// Split the curve at 't' into two curves of the same degree which together trace the original.
    /// The left half collects the first point of every de Casteljau level, the right half the last.
    pub fn split(&self, t: P::Scalar) -> (Self, Self) {
        let mut left: [P; N] = self.control_points;
        let mut right: [P; N] = self.control_points;
        let mut level: [P; N] = self.control_points;

        for round in 0..N {
            let live = N - round;
            left[round] = level[0];
            right[live - 1] = level[live - 1];
            lerp_round(&mut level[..live], t);
        }

        (
            Bezier {
                control_points: left,
            },
            Bezier {
                control_points: right,
            },
        )
    }

    /// First derivative of the curve at 't'.
    /// The derivative of an nth degree Bézier curve is an (n-1)th degree Bézier curve
    /// with control points n * (p[i+1] - p[i]), which is evaluated in place.
    /// A single point curve has the zero vector as its tangent.
    pub fn tangent(&self, t: P::Scalar) -> P {
        let mut p: [P; N] = self.control_points;
        hodograph_in_place(&mut p, t)
    }

    /// Lengths of the legs of the control polygon, in order
    pub fn control_polygon_legs(&self) -> impl Iterator<Item = P::Scalar> + '_ {
        self.control_points
            .windows(2)
            .map(|w| (w[1] - w[0]).squared_length().sqrt())
    }

    /// Total length of the control polygon, an upper bound for the arc length
    pub fn control_polygon_length(&self) -> P::Scalar {
        self.control_polygon_legs()
            .fold(P::Scalar::zero(), |acc, leg| acc + leg)
    }

    /// Length of the polyline through `nsteps + 1` evenly spaced curve points.
    /// Always a lower bound, converging slowly with `nsteps`.
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let mut arclen = P::Scalar::zero();
        let mut prev = self.control_points[0];
        for i in 1..=nsteps {
            let t = NumCast::from(i as NativeFloat / nsteps as NativeFloat)
                .unwrap_or_else(P::Scalar::one);
            let p = self.eval(t);
            arclen = arclen + (p - prev).squared_length().sqrt();
            prev = p;
        }
        arclen
    }
}

/// Evaluate the Bezier curve defined by `points` at 't' with de Casteljau's algorithm.
///
/// A single point is returned unchanged. An empty slice is rejected with
/// [`CurveError::EmptyControlPoints`].
pub fn evaluate_bezier<P: Point>(t: P::Scalar, points: &[P]) -> Result<P> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlPoints);
    }
    let mut buffer: CasteljauBuffer<P> = points.iter().copied().collect();
    Ok(casteljau_in_place(&mut buffer, t))
}

/// All rounds of de Casteljau's algorithm at 't', for drawing the construction lines.
/// Level 0 is a copy of `points`, each following level has one point less and the
/// last level holds only the curve point, identical to [`evaluate_bezier`].
pub fn subdivision_levels<P: Point>(t: P::Scalar, points: &[P]) -> Result<SubdivisionLevels<P>> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlPoints);
    }
    Ok(ladder(t, points))
}

/// First derivative at 't' of the Bezier curve defined by `points`.
pub fn bezier_tangent<P: Point>(t: P::Scalar, points: &[P]) -> Result<P> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlPoints);
    }
    let mut buffer: CasteljauBuffer<P> = points.iter().copied().collect();
    Ok(hodograph_in_place(&mut buffer, t))
}

/// Collapses `points` round by round, overwriting the front of the buffer.
/// The caller guarantees at least one point.
fn casteljau_in_place<P: Point>(points: &mut [P], t: P::Scalar) -> P {
    for live in (2..=points.len()).rev() {
        lerp_round(&mut points[..live], t);
    }
    points[0]
}

/// One de Casteljau round: `level[..len - 1]` becomes the next level, the last point is stale.
fn lerp_round<P: Point>(level: &mut [P], t: P::Scalar) {
    for j in 1..level.len() {
        level[j - 1] = level[j - 1].lerp(level[j], t);
    }
}

fn hodograph_in_place<P: Point>(points: &mut [P], t: P::Scalar) -> P {
    let n = points.len();
    if n < 2 {
        return P::default();
    }
    for i in 0..n - 1 {
        points[i] = points[i + 1] - points[i];
    }
    let degree: P::Scalar = NumCast::from(n - 1).unwrap_or_else(P::Scalar::zero);
    casteljau_in_place(&mut points[..n - 1], t) * degree
}

fn ladder<P: Point>(t: P::Scalar, points: &[P]) -> SubdivisionLevels<P> {
    let mut levels = Vec::with_capacity(points.len());
    let mut level = points.to_vec();
    while level.len() > 1 {
        let next = level.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
        levels.push(core::mem::replace(&mut level, next));
    }
    levels.push(level);
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Point2, EPSILON};

    fn square() -> [Point2<f64>; 4] {
        [
            Point2::new(200.0, 200.0),
            Point2::new(400.0, 200.0),
            Point2::new(200.0, 400.0),
            Point2::new(400.0, 400.0),
        ]
    }

    #[test]
    fn eval_endpoints() {
        let points = [
            Point2::new(0f64, 1.77f64),
            Point2::new(1.1f64, -1f64),
            Point2::new(4.3f64, 3f64),
            Point2::new(3.2f64, -4f64),
            Point2::new(7.3f64, 2.7f64),
            Point2::new(8.9f64, 1.7f64),
        ];

        let curve: Bezier<Point2<f64>, 6> = Bezier::new(points);

        assert!((curve.eval(0.0) - points[0]).squared_length() < EPSILON);
        assert!((curve.eval(1.0) - points[5]).squared_length() < EPSILON);

        // the slice based evaluator agrees on any prefix of the points
        for n in 1..=points.len() {
            let slice = &points[..n];
            assert_eq!(evaluate_bezier(0.0, slice).unwrap(), slice[0]);
            assert_eq!(evaluate_bezier(1.0, slice).unwrap(), slice[n - 1]);
        }
    }

    #[test]
    fn square_midpoint() {
        let pts = square();
        // three manual lerp rounds
        let l1: Vec<_> = pts.windows(2).map(|w| w[0].lerp(w[1], 0.5)).collect();
        let l2: Vec<_> = l1.windows(2).map(|w| w[0].lerp(w[1], 0.5)).collect();
        let l3 = l2[0].lerp(l2[1], 0.5);

        let p = evaluate_bezier(0.5, &pts).unwrap();
        assert_eq!(p, l3);
        assert_eq!(p, Point2::new(300.0, 300.0));
        assert_eq!(Bezier::new(pts).eval(0.5), p);
    }

    #[test]
    fn ladder_shape() {
        let pts = square();
        for t in [0.0, 0.25, 0.5, 0.8, 1.0] {
            let levels = subdivision_levels(t, &pts).unwrap();
            assert_eq!(levels.len(), pts.len());
            assert_eq!(levels[0], pts);
            for (i, level) in levels.iter().enumerate() {
                assert_eq!(level.len(), pts.len() - i);
            }
            let last = levels.last().unwrap();
            assert_eq!(last.len(), 1);
            assert_eq!(last[0], evaluate_bezier(t, &pts).unwrap());
        }
        assert_eq!(Bezier::new(pts).levels(0.3), subdivision_levels(0.3, &pts).unwrap());
    }

    #[test]
    fn single_point_and_empty() {
        let p = Point2::new(3.0, 4.0);
        assert_eq!(evaluate_bezier(0.7, &[p]).unwrap(), p);
        assert_eq!(subdivision_levels(0.7, &[p]).unwrap(), [[p]]);
        assert_eq!(Bezier::new([p]).eval(0.2), p);
        assert!(Bezier::new([p]).tangent(0.2).is_zero());

        let empty: [Point2<f64>; 0] = [];
        let err = evaluate_bezier(0.5, &empty).unwrap_err();
        assert_eq!(err, CurveError::EmptyControlPoints);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(subdivision_levels(0.5, &empty).is_err());
        assert!(bezier_tangent(0.5, &empty).is_err());
    }

    #[test]
    fn many_points_spill_to_heap() {
        // more points than the inline buffer holds
        let pts: Vec<_> = (0..12)
            .map(|i| Point2::new(i as f64, if i % 2 == 0 { 0.0 } else { 1.0 }))
            .collect();
        assert_eq!(evaluate_bezier(0.0, &pts).unwrap(), pts[0]);
        assert_eq!(evaluate_bezier(1.0, &pts).unwrap(), pts[11]);
        let levels = subdivision_levels(0.5, &pts).unwrap();
        assert_eq!(levels.len(), 12);
        assert_eq!(levels[11][0], evaluate_bezier(0.5, &pts).unwrap());
    }

    #[test]
    fn extrapolation_is_defined() {
        // outside of [0,1] the same polynomial keeps going, for a line that is easy to check
        let line = [Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)];
        assert_eq!(evaluate_bezier(2.0, &line).unwrap(), Point2::new(2.0, 4.0));
        assert_eq!(evaluate_bezier(-1.0, &line).unwrap(), Point2::new(-1.0, -2.0));
    }

    #[test]
    fn split_equivalence() {
        let bezier = Bezier::new([
            Point2::new(0f64, 1.77f64),
            Point2::new(2.9f64, 0f64),
            Point2::new(4.3f64, 3f64),
            Point2::new(3.2f64, -4f64),
        ]);
        let (left, right) = bezier.split(0.5);
        // each half traces its half of the parent at double speed
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            assert!((bezier.eval(t / 2.0) - left.eval(t)).squared_length() < EPSILON);
            assert!((bezier.eval(0.5 + t / 2.0) - right.eval(t)).squared_length() < EPSILON);
        }
        assert_eq!(left.control_points()[3], right.control_points()[0]);
    }

    #[test]
    fn split_at_the_ends() {
        let pts = square();
        let bezier = Bezier::new(pts);
        let (left, right) = bezier.split(0.0);
        assert_eq!(left.control_points(), [pts[0]; 4]);
        assert_eq!(right, bezier);

        let (left, right) = bezier.split(1.0);
        assert_eq!(left, bezier);
        assert_eq!(right.control_points(), [pts[3]; 4]);
    }

    #[test]
    fn tangent_matches_cubic_derivative() {
        let pts = square();
        let bezier = Bezier::new(pts);
        // B'(0) = 3 (p1 - p0), B'(1) = 3 (p3 - p2)
        assert_eq!(bezier.tangent(0.0), (pts[1] - pts[0]) * 3.0);
        assert_eq!(bezier.tangent(1.0), (pts[3] - pts[2]) * 3.0);

        let h = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let fd = (bezier.eval(t + h) - bezier.eval(t - h)) / (2.0 * h);
            assert!((bezier.tangent(t) - fd).length() < 1e-4);
            assert_eq!(bezier_tangent(t, &pts).unwrap(), bezier.tangent(t));
        }
    }

    #[test]
    fn control_polygon() {
        let bezier = Bezier::new(square());
        let legs: Vec<_> = bezier.control_polygon_legs().collect();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0], 200.0);
        assert!((legs[1] - 200.0 * 2f64.sqrt()).abs() < EPSILON);
        assert_eq!(legs[2], 200.0);
        let total = bezier.control_polygon_length();
        assert!((total - (400.0 + 200.0 * 2f64.sqrt())).abs() < EPSILON);
        // the curve is never longer than its control polygon
        assert!(bezier.arclen(256) <= total);
        assert!(bezier.arclen(256) > 0.0);
    }

    #[test]
    fn straight_line_arclen() {
        let bezier = Bezier::new([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ]);
        assert!((bezier.arclen(32) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn drag_a_control_point() {
        let mut bezier = Bezier::new(square());
        for p in &mut bezier {
            *p = *p + Point2::new(10.0, -10.0);
        }
        assert_eq!(bezier.eval(0.5), Point2::new(310.0, 290.0));
        let moved: Vec<_> = bezier.into_iter().collect();
        assert_eq!(moved[0], Point2::new(210.0, 190.0));
    }
}
