//! Global polynomial interpolation through a set of samples.
//!
//! The control points are read as samples `(x, y)` of an unknown function and the
//! unique polynomial of degree n - 1 through all of them is evaluated with the
//! Lagrange form:
//!
//! ```text
//! L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)
//! y(x)   = Σ_i y_i * L_i(x)
//! ```
//!
//! Each evaluation costs O(n²). That is fine for a handful of points; for large n
//! the barycentric form would be the way to go.
use alloc::vec::Vec;

use num_traits::{Float, NumCast};

use super::error::{CurveError, Result};
use super::point2::Point2;
use super::DEFAULT_STEPS;

/// Evaluate the interpolating polynomial through `nodes` at `x`.
///
/// Any `x` is accepted, far outside of the node span the polynomial tends to swing wildly.
/// Fails with [`CurveError::DuplicateAbscissa`] if two nodes share an x-coordinate and
/// with [`CurveError::NonFinite`] if the arithmetic overflows.
pub fn evaluate_lagrange<T: Float>(x: T, nodes: &[Point2<T>]) -> Result<T> {
    if nodes.is_empty() {
        return Err(CurveError::EmptyControlPoints);
    }
    check_distinct(nodes)?;
    finite(interpolate(x, nodes))
}

/// Interpolating polynomial through a validated set of nodes.
///
/// Validation happens once in [`LagrangePolynomial::new`], after that only
/// overflow can make an evaluation fail.
#[derive(Clone, Debug, PartialEq)]
pub struct LagrangePolynomial<T> {
    nodes: Vec<Point2<T>>,
}

impl<T: Float> LagrangePolynomial<T> {
    pub fn new(nodes: &[Point2<T>]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(CurveError::EmptyControlPoints);
        }
        check_distinct(nodes)?;
        Ok(LagrangePolynomial {
            nodes: nodes.to_vec(),
        })
    }

    pub fn nodes(&self) -> &[Point2<T>] {
        &self.nodes
    }

    /// Degree of the polynomial, one less than the number of nodes
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn eval(&self, x: T) -> Result<T> {
        finite(interpolate(x, &self.nodes))
    }

    /// Value of the i-th Lagrange basis polynomial at `x`, None if there is no node `i`
    pub fn basis(&self, i: usize, x: T) -> Option<T> {
        if i < self.nodes.len() {
            Some(basis_at(&self.nodes, i, x))
        } else {
            None
        }
    }

    /// Smallest and largest node x-coordinate, the natural domain for plotting
    pub fn span(&self) -> (T, T) {
        self.nodes
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            })
    }

    /// Points `(x, y(x))` at `steps + 1` evenly spaced x across [`span`](Self::span).
    /// `None` uses [`DEFAULT_STEPS`].
    pub fn samples(&self, steps: Option<usize>) -> LagrangeSamples<'_, T> {
        let steps = steps.unwrap_or(DEFAULT_STEPS);
        let (lo, hi) = self.span();
        LagrangeSamples {
            polynomial: self,
            lo,
            hi,
            steps,
            next: 0,
            end: steps.saturating_add(1),
        }
    }
}

/// Lazy sampling of a [`LagrangePolynomial`] over its node span.
/// Each item carries the evaluation result so a single overflowing sample can be skipped.
#[derive(Clone, Debug)]
pub struct LagrangeSamples<'a, T> {
    polynomial: &'a LagrangePolynomial<T>,
    lo: T,
    hi: T,
    steps: usize,
    next: usize,
    end: usize,
}

impl<'a, T: Float> Iterator for LagrangeSamples<'a, T> {
    type Item = Result<Point2<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let x = if i == self.steps {
            self.hi
        } else {
            let frac: T = NumCast::from(i).unwrap_or_else(T::zero)
                / NumCast::from(self.steps).unwrap_or_else(T::one);
            self.lo + (self.hi - self.lo) * frac
        };
        Some(self.polynomial.eval(x).map(|y| Point2::new(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Float> ExactSizeIterator for LagrangeSamples<'a, T> {}

fn check_distinct<T: Float>(nodes: &[Point2<T>]) -> Result<()> {
    for (i, a) in nodes.iter().enumerate() {
        for (j, b) in nodes.iter().enumerate().skip(i + 1) {
            if a.x == b.x {
                log::debug!("lagrange nodes {} and {} share an x-coordinate", i, j);
                return Err(CurveError::DuplicateAbscissa { first: i, second: j });
            }
        }
    }
    Ok(())
}

fn finite<T: Float>(y: T) -> Result<T> {
    if y.is_finite() {
        Ok(y)
    } else {
        log::debug!("lagrange evaluation is not finite");
        Err(CurveError::NonFinite)
    }
}

fn basis_at<T: Float>(nodes: &[Point2<T>], i: usize, x: T) -> T {
    let xi = nodes[i].x;
    nodes
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(T::one(), |l, (_, pj)| l * ((x - pj.x) / (xi - pj.x)))
}

fn interpolate<T: Float>(x: T, nodes: &[Point2<T>]) -> T {
    (0..nodes.len()).fold(T::zero(), |y, i| y + nodes[i].y * basis_at(nodes, i, x))
}
