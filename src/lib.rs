//! Curve evaluation for interactive sketching.
//!
//! The crate evaluates parametric curves from a handful of user-movable control
//! points. Every evaluator is a pure function of its inputs: the caller owns the
//! control points, hands them in by reference on each redraw, and turns the
//! returned points into pixels however it likes.
//!
//! Available curve types:
//! - [`Bezier`] and the slice based [`evaluate_bezier`] / [`subdivision_levels`]
//!   (de Casteljau's algorithm, including the construction ladder)
//! - [`CubicHermite`] segments and [`evaluate_hermite`]
//! - [`HermiteSpline`] stitched from Hermite segments with estimated tangents
//! - [`LagrangePolynomial`] and [`evaluate_lagrange`]
//!
//! Tangents for Hermite segments can be estimated with the [`Bessel`]
//! (central difference) or [`Circle`] (circumscribed circle) strategies.
//!
//! The library is `#![no_std]` and only needs `alloc`.
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod basis;
pub mod bezier;
pub mod error;
pub mod hermite;
pub mod hermite_spline;
pub mod lagrange;
pub mod point;
pub mod point2;
pub mod spline;
pub mod tangent;

pub use basis::{hermite_interpolate, HermiteBasis};
pub use bezier::{bezier_tangent, evaluate_bezier, subdivision_levels, Bezier, SubdivisionLevels};
pub use error::{CurveError, ErrorKind, Result};
pub use hermite::{evaluate_hermite, CubicHermite};
pub use hermite_spline::HermiteSpline;
pub use lagrange::{evaluate_lagrange, LagrangePolynomial, LagrangeSamples};
pub use point::Point;
pub use point2::Point2;
pub use spline::{Curve, Samples};
pub use tangent::{
    bessel_tangent, circle_tangent, circumcenter, Bessel, Circle, TangentEstimator,
};

/// Default float type used by the demos and tests
pub type NativeFloat = f64;

/// Absolute tolerance used when comparing evaluated points
pub const EPSILON: NativeFloat = 1e-9;

/// Sampling resolution used when a caller passes `None` for the number of steps
pub const DEFAULT_STEPS: usize = 100;
