//! Homogeneous four-component tuples: points and vectors.
//!
//! A [`Tuple`] carries no discriminant tag. Whether it is a point or a
//! vector is read off its `w` component at query time, so intermediate
//! results with `w` outside `{0, 1}` are representable and simply classify
//! as neither.
//!
//! The operator impls here are unrestricted component-wise arithmetic over
//! all four components, which is what makes affine geometry fall out for
//! free: point − point is a vector, point + vector is a point. Only the
//! metric operations ([`Tuple::magnitude`], [`Tuple::normalize`],
//! [`Tuple::dot`], [`Tuple::cross`]) check their operands.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::OperandError;
use crate::float::approx_eq;

/// A point or vector in homogeneous coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tuple {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// Homogeneous coordinate: 1 for points, 0 for vectors.
    pub w: f32,
}

impl Tuple {
    /// Create a tuple from its four components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (`w = 1`).
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a vector (`w = 0`).
    pub const fn vector(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Whether `w` is approximately 1.
    pub fn is_point(&self) -> bool {
        approx_eq(self.w, 1.0)
    }

    /// Whether `w` is approximately 0.
    pub fn is_vector(&self) -> bool {
        approx_eq(self.w, 0.0)
    }

    /// Component-wise tolerance equality across all four components.
    pub fn approx_eq(&self, other: &Tuple) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }

    /// Euclidean norm over all four components.
    ///
    /// Returns [`OperandError::NotAVector`] if `self` is not a vector.
    pub fn magnitude(&self) -> Result<f32, OperandError> {
        self.require_vector("magnitude")?;
        Ok(self.norm())
    }

    /// This vector scaled to unit length.
    ///
    /// A zero vector yields non-finite components; that is IEEE-754
    /// behaviour, not an error.
    pub fn normalize(&self) -> Result<Tuple, OperandError> {
        self.require_vector("normalize")?;
        Ok(*self * (1.0 / self.norm()))
    }

    /// Sum of the component-wise products over all four components.
    pub fn dot(&self, other: &Tuple) -> Result<f32, OperandError> {
        self.require_vector("dot")?;
        other.require_vector("dot")?;
        Ok(self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w)
    }

    /// 3D cross product over `x, y, z`; the result is always a vector.
    ///
    /// Not commutative: `a.cross(b) == -(b.cross(a))`.
    pub fn cross(&self, other: &Tuple) -> Result<Tuple, OperandError> {
        self.require_vector("cross")?;
        other.require_vector("cross")?;
        Ok(Tuple::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// This vector reflected about `normal`: `self - normal * 2 * (self · normal)`.
    ///
    /// Both operands must be vectors. `normal` is expected to be unit length;
    /// it is not normalized here.
    pub fn reflect(&self, normal: &Tuple) -> Result<Tuple, OperandError> {
        self.require_vector("reflect")?;
        normal.require_vector("reflect")?;
        let d = self.dot(normal)?;
        Ok(*self - *normal * (2.0 * d))
    }

    /// The components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    fn require_vector(&self, op: &'static str) -> Result<(), OperandError> {
        if self.is_vector() {
            Ok(())
        } else {
            Err(OperandError::NotAVector { op, w: self.w })
        }
    }
}

impl From<[f32; 4]> for Tuple {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        Tuple::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        Tuple::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f32) -> Tuple {
        Tuple::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

/// Division is multiplication by the reciprocal. A zero divisor yields
/// infinities or NaN.
impl Div<f32> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f32) -> Tuple {
        self * (1.0 / rhs)
    }
}
