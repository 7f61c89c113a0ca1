// src/tuple.rs

//! Defines `Tuple`, the four-component value used for points, vectors and
//! colors, together with the arithmetic that is legal between them.
//!
//! The `w` component doubles as the kind discriminant: `1.0` for a point,
//! `0.0` for a vector. Colors reuse the vector representation, so nothing
//! here can tell a color from a vector. All legality checks go through
//! [`Tuple::kind`].

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Neg};

use crate::error::{Error, Result};
use crate::float::approx_eq;

/// What a tuple represents, as read from its `w` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `w == 1.0`, a location.
    Point,
    /// `w == 0.0`, a direction or displacement (also used for colors).
    Vector,
    /// Any other `w`, e.g. a point that has been scaled.
    Other,
}

/// A four-component value. Every operation returns a new tuple.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Black, also the initial value of every canvas pixel.
pub const BLACK: Tuple = Tuple::new(0.0, 0.0, 0.0, 0.0);
pub const WHITE: Tuple = Tuple::new(1.0, 1.0, 1.0, 0.0);
pub const RED: Tuple = Tuple::new(1.0, 0.0, 0.0, 0.0);
pub const GREEN: Tuple = Tuple::new(0.0, 1.0, 0.0, 0.0);
pub const BLUE: Tuple = Tuple::new(0.0, 0.0, 1.0, 0.0);

/// Creates a point (`w = 1.0`).
pub const fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

/// Creates a vector (`w = 0.0`).
pub const fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

/// Creates a color. Same representation as [`vector`]; callers must not rely
/// on the kind check to tell the two apart.
pub const fn color(r: f64, g: f64, b: f64) -> Tuple {
    Tuple::new(r, g, b, 0.0)
}

impl Tuple {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Classifies the tuple from its `w` component.
    pub fn kind(&self) -> Kind {
        if self.w == 1.0 {
            Kind::Point
        } else if self.w == 0.0 {
            Kind::Vector
        } else {
            Kind::Other
        }
    }

    pub fn is_point(&self) -> bool {
        self.kind() == Kind::Point
    }

    pub fn is_vector(&self) -> bool {
        self.kind() == Kind::Vector
    }

    /// Red channel when the tuple is used as a color.
    pub fn red(&self) -> f64 {
        self.x
    }

    /// Green channel when the tuple is used as a color.
    pub fn green(&self) -> f64 {
        self.y
    }

    /// Blue channel when the tuple is used as a color.
    pub fn blue(&self) -> f64 {
        self.z
    }

    /// Component-wise sum, `w` included.
    ///
    /// Point + Vector gives a point and Vector + Vector a vector.
    ///
    /// # Errors
    /// `InvalidOperation` if both tuples are points.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Tuple) -> Result<Tuple> {
        if self.is_point() && other.is_point() {
            trace!("Rejected add of two points: {} + {}", self, other);
            return Err(Error::InvalidOperation("can't add two points"));
        }
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Component-wise difference, `w` included.
    ///
    /// Point - Point gives a vector, Point - Vector a point and
    /// Vector - Vector a vector.
    ///
    /// # Errors
    /// `InvalidOperation` if a point is subtracted from a vector.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Tuple) -> Result<Tuple> {
        if self.is_vector() && other.is_point() {
            trace!("Rejected sub of a point from a vector: {} - {}", self, other);
            return Err(Error::InvalidOperation("can't subtract a point from a vector"));
        }
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Component-wise negation, `w` included.
    pub fn negate(&self) -> Tuple {
        self.map(|c| -c)
    }

    /// Multiplies every component, `w` included, by `scalar`.
    pub fn scale(&self, scalar: f64) -> Tuple {
        self.map(|c| c * scalar)
    }

    /// Divides every component, `w` included, by `scalar`.
    ///
    /// # Errors
    /// `DivisionByZero` if `scalar` is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, scalar: f64) -> Result<Tuple> {
        if scalar == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.map(|c| c / scalar))
    }

    /// Length of a vector. `w` takes part in the sum but is zero for vectors.
    ///
    /// # Errors
    /// `NotAVector` if the tuple is not a vector.
    pub fn magnitude(&self) -> Result<f64> {
        self.require_vector()?;
        Ok((self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt())
    }

    /// Scales a vector to unit length.
    ///
    /// # Errors
    /// `NotAVector` if the tuple is not a vector, `DivisionByZero` for the
    /// zero vector.
    pub fn normalize(&self) -> Result<Tuple> {
        let magnitude = self.magnitude()?;
        self.div(magnitude)
    }

    /// Dot product of two vectors, `w` included.
    ///
    /// # Errors
    /// `NotAVector` unless both tuples are vectors.
    pub fn dot(&self, other: &Tuple) -> Result<f64> {
        self.require_vector()?;
        other.require_vector()?;
        Ok(self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w)
    }

    /// 3D cross product of two vectors. The result is always a vector.
    ///
    /// # Errors
    /// `NotAVector` unless both tuples are vectors.
    pub fn cross(&self, other: &Tuple) -> Result<Tuple> {
        self.require_vector()?;
        other.require_vector()?;
        Ok(vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// Component-wise product of `x`, `y` and `z`, with `w` forced to zero.
    ///
    /// This is how colors are blended. Unlike [`Tuple::dot`] and
    /// [`Tuple::cross`] it performs no kind check: colors are built with the
    /// vector-shaped constructor and blending call sites pass arbitrary tuples.
    pub fn hadamard(&self, other: &Tuple) -> Tuple {
        color(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    fn require_vector(&self) -> Result<()> {
        if self.is_vector() {
            Ok(())
        } else {
            trace!("Vector operation on non-vector tuple {}", self);
            Err(Error::NotAVector)
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Tuple {
        Tuple::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    fn zip_with(&self, other: &Tuple, f: impl Fn(f64, f64) -> f64) -> Tuple {
        Tuple::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }
}

/// Approximate equality: every component within `EPSILON`.
impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        self.negate()
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, scalar: f64) -> Tuple {
        self.scale(scalar)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
