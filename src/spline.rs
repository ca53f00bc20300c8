//! Common abstraction over all curve types and lazy sampling of them.
use core::iter::FusedIterator;

use num_traits::{NumCast, One, Zero};

use super::point::Point;
use super::DEFAULT_STEPS;

pub trait Curve<P: Point> {
    fn eval(&self, t: P::Scalar) -> P;

    /// Evenly spaced points on the curve for t in [0,1], both ends included.
    /// `None` uses [`DEFAULT_STEPS`] steps, which yields `steps + 1` points.
    fn samples(&self, steps: Option<usize>) -> Samples<'_, Self, P>
    where
        Self: Sized,
    {
        Samples::new(self, steps.unwrap_or(DEFAULT_STEPS))
    }
}

/// Iterator over `steps + 1` points of a curve.
///
/// Sampling is lazy and can be restarted by cloning the iterator before it is consumed.
pub struct Samples<'a, C, P> {
    curve: &'a C,
    steps: usize,
    next: usize,
    end: usize,
    _point: core::marker::PhantomData<P>,
}

impl<'a, C, P> Samples<'a, C, P>
where
    C: Curve<P>,
    P: Point,
{
    pub fn new(curve: &'a C, steps: usize) -> Self {
        Samples {
            curve,
            steps,
            next: 0,
            end: steps.saturating_add(1),
            _point: core::marker::PhantomData,
        }
    }

    fn parameter(&self, i: usize) -> P::Scalar {
        if self.steps == 0 || i >= self.steps {
            // hit the end point exactly instead of relying on i / steps rounding to one
            return if self.steps == 0 {
                P::Scalar::zero()
            } else {
                P::Scalar::one()
            };
        }
        let i: P::Scalar = NumCast::from(i).unwrap_or_else(P::Scalar::zero);
        let n: P::Scalar = NumCast::from(self.steps).unwrap_or_else(P::Scalar::one);
        i / n
    }
}

impl<'a, C, P> Clone for Samples<'a, C, P> {
    fn clone(&self) -> Self {
        Samples {
            curve: self.curve,
            steps: self.steps,
            next: self.next,
            end: self.end,
            _point: core::marker::PhantomData,
        }
    }
}

impl<'a, C, P> Iterator for Samples<'a, C, P>
where
    C: Curve<P>,
    P: Point,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.next >= self.end {
            return None;
        }
        let t = self.parameter(self.next);
        self.next += 1;
        Some(self.curve.eval(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, C, P> DoubleEndedIterator for Samples<'a, C, P>
where
    C: Curve<P>,
    P: Point,
{
    fn next_back(&mut self) -> Option<P> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        let t = self.parameter(self.end);
        Some(self.curve.eval(t))
    }
}

impl<'a, C, P> ExactSizeIterator for Samples<'a, C, P>
where
    C: Curve<P>,
    P: Point,
{
}

impl<'a, C, P> FusedIterator for Samples<'a, C, P>
where
    C: Curve<P>,
    P: Point,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubicHermite, Point2, EPSILON};
    use alloc::vec::Vec;

    fn line() -> CubicHermite<Point2<f64>> {
        CubicHermite::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 0.0),
        )
    }

    #[test]
    fn samples_include_both_ends() {
        let c = line();
        let pts: Vec<_> = c.samples(Some(4)).collect();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Point2::new(0.0, 0.0));
        assert_eq!(pts[4], Point2::new(10.0, 0.0));
        assert!((pts[2] - Point2::new(5.0, 0.0)).squared_length() < EPSILON);
    }

    #[test]
    fn default_resolution() {
        let c = line();
        assert_eq!(c.samples(None).len(), DEFAULT_STEPS + 1);
    }

    #[test]
    fn zero_steps_yields_start_only() {
        let c = line();
        let pts: Vec<_> = c.samples(Some(0)).collect();
        assert_eq!(pts, [Point2::new(0.0, 0.0)]);
    }

    #[test]
    fn huge_step_count_is_lazy() {
        let c = line();
        let mut it = c.samples(Some(usize::MAX));
        assert_eq!(it.len(), usize::MAX);
        assert_eq!(it.next(), Some(Point2::new(0.0, 0.0)));
        let last = it.next_back().unwrap();
        assert!((last - Point2::new(10.0, 0.0)).squared_length() < EPSILON);
    }

    #[test]
    fn restartable_and_reversible() {
        let c = line();
        let mut it = c.samples(Some(10));
        it.next();
        let restart = it.clone();
        assert_eq!(it.len(), 10);
        assert_eq!(restart.count(), 10);

        let fwd: Vec<_> = c.samples(Some(10)).collect();
        let mut back: Vec<_> = c.samples(Some(10)).rev().collect();
        back.reverse();
        assert_eq!(fwd, back);
    }
}
