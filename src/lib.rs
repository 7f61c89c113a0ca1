//! Numeric and raster foundations for a ray tracer.
//!
//! - [`tuple`]: points, vectors and colors with kind-checked arithmetic.
//! - [`canvas`]: a fixed-size grid of colors.
//! - [`ppm`]: plain-text PPM encoding of a canvas.
//! - [`projectile`]: a small simulation built on the tuple algebra.

pub mod canvas;
pub mod config;
pub mod error;
pub mod float;
pub mod ppm;
pub mod projectile;
pub mod tuple;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use tuple::{color, point, vector, Kind, Tuple};
