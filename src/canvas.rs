// src/canvas.rs

//! A fixed-size grid of color tuples.
//!
//! The canvas is created once with its dimensions and never resized. Pixels
//! start out black and are mutated in place through [`Canvas::write_pixel`]
//! or [`Canvas::fill`]. There is no internal synchronization; concurrent
//! writers need an external lock.

use log::debug;

use crate::error::{Error, Result};
use crate::tuple::{Tuple, BLACK};

/// A `width` x `height` grid of colors stored in a single column-major buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Tuple>,
}

impl Canvas {
    /// Creates a canvas with every pixel set to black.
    ///
    /// # Errors
    /// `InvalidSize` if either dimension is zero or negative, or if the pixel
    /// buffer would not fit in memory addressing.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let invalid = Error::InvalidSize { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let (Ok(cols), Ok(rows)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(invalid);
        };
        let len = cols.checked_mul(rows).ok_or(invalid)?;
        let bytes = len
            .checked_mul(std::mem::size_of::<Tuple>())
            .ok_or(invalid)?;
        if bytes > isize::MAX as usize {
            return Err(invalid);
        }
        debug!("Creating {}x{} canvas", cols, rows);
        Ok(Canvas {
            width: cols,
            height: rows,
            pixels: vec![BLACK; len],
        })
    }

    /// Number of columns; valid `x` coordinates are `0..width`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows; valid `y` coordinates are `0..height`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, `width * height`.
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Tuple) {
        self.pixels.fill(color);
    }

    /// Returns the color stored at `(x, y)`.
    ///
    /// # Errors
    /// `InvalidPoint` if the coordinate is outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Result<Tuple> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    /// Stores `color` at `(x, y)`, touching no other pixel.
    ///
    /// # Errors
    /// `InvalidPoint` if the coordinate is outside the canvas.
    pub fn write_pixel(&mut self, x: i64, y: i64, color: Tuple) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Pixels in storage order: column by column, top to bottom.
    pub fn pixels(&self) -> impl Iterator<Item = &Tuple> + '_ {
        self.pixels.iter()
    }

    /// Maps a coordinate to its slot in the pixel buffer.
    ///
    /// Valid coordinates satisfy `0 <= x < width` and `0 <= y < height`;
    /// the buffer is column-major, so the slot is `x * height + y` (equal to
    /// `x * width + y` on square canvases). The PPM body follows this order.
    pub(crate) fn index_of(&self, x: i64, y: i64) -> Result<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(Error::InvalidPoint { x, y });
        }
        Ok(x as usize * self.height + y as usize)
    }
}
