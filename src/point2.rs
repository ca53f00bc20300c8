use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use super::point::Point;

/// Planar point or vector with public coordinates.
///
/// Positions, tangents and offsets all use this type; which one a value is
/// depends only on how it is used.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn zero() -> Self {
        Point2 {
            x: T::zero(),
            y: T::zero(),
        }
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// The vector rotated by +90 degrees: `(-y, x)`
    pub fn perp(&self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn squared_length(&self) -> T {
        self.dot(*self)
    }

    /// Interprets the Point2 as a vector and returns its norm (distance from origin)
    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Returns the distance between self and other
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// True only for the exact zero vector
    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    /// Direction of the vector in radians, measured from the positive x axis
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Rotate the vector by `angle` radians. The length is kept.
    pub fn rotate(&self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Point2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Neg for Point2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Div<T> for Point2<T>
where
    T: Div<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn div(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default,
{
    type Scalar = T;

    /// # Panics
    ///
    /// Panics if `index` is greater than 1.
    fn axis(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => panic!("Point2 has no axis {}", index),
        }
    }

    fn squared_length(&self) -> Self::Scalar {
        Point2::squared_length(self)
    }
}
