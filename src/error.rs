// src/error.rs

//! Error type shared by the tuple algebra, the canvas and the PPM encoder.
//!
//! Every fallible operation in the library reports its failure to the direct
//! caller through [`Result`]. Nothing in here aborts the process; deciding that
//! an error is fatal is left to the binary.

use std::fmt;

/// All errors returned by `ray_tracer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A canvas was requested with a non-positive dimension.
    InvalidSize { width: i64, height: i64 },

    /// A pixel coordinate lies outside the canvas bounds.
    InvalidPoint { x: i64, y: i64 },

    /// The tuple kinds involved make the operation meaningless
    /// (adding two points, subtracting a point from a vector).
    InvalidOperation(&'static str),

    /// A vector-only operation received a tuple that is not a vector.
    NotAVector,

    /// Scalar division by zero.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
            Self::InvalidPoint { x, y } => write!(f, "invalid canvas point ({x}, {y})"),
            Self::InvalidOperation(reason) => write!(f, "invalid operation: {reason}"),
            Self::NotAVector => write!(f, "tuple is not a vector"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
