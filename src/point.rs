use core::ops::{Add, Mul, Sub};

use num_traits::{Float, One};

/// Trait defined over generic points P which themselves are generic over a float Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
///
/// The same type doubles as a free vector: tangents and offsets are points
/// that are never bound to a location.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    type Scalar: Float + Default;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1] -> [x, y]
    ///
    /// # Panics
    ///
    /// Implementations panic if `index` is not an axis of the point type.
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar;

    /// Linear interpolation `(1 - t) * self + t * other`.
    /// Not restricted to t in [0,1].
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self * (Self::Scalar::one() - t) + other * t
    }
}
