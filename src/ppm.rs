// src/ppm.rs

//! Plain-text PPM (`P3`) encoding of a [`Canvas`].
//!
//! Output layout:
//!
//! ```text
//! <identifier>
//! <width> <height>
//! <max color>
//! <space separated channel values, wrapped at 70 columns>
//! ```
//!
//! Channel values are emitted red, green, blue for every pixel in storage
//! order (column by column, see [`Canvas::pixels`]). Values flow onto one
//! continuous line buffer that is broken only when the next value would push
//! it past [`MAX_LINE_LEN`], so line breaks do not line up with the grid.

use log::debug;
use std::io;

use crate::canvas::Canvas;

/// Magic number of the plain-text pixmap variant.
pub const PPM_IDENTIFIER: &str = "P3";
/// Conventional maximum channel value for 8-bit output.
pub const DEFAULT_MAX_COLOR: u32 = 255;
/// No body line may be longer than this.
pub const MAX_LINE_LEN: usize = 70;

/// Scales a unit-range channel to `[0, max_color]`, rounding to the nearest
/// integer and clamping anything out of range.
pub fn clamp_channel(value: f64, max_color: u32) -> u32 {
    let max = f64::from(max_color);
    // NaN falls through `clamp` and saturates to 0 in the cast.
    (value * max).round().clamp(0.0, max) as u32
}

impl Canvas {
    /// Encodes the canvas as PPM text. Pure: the canvas is only read.
    pub fn to_ppm(&self, identifier: &str, max_color: u32) -> String {
        let mut out = format!(
            "{}\n{} {}\n{}\n",
            identifier,
            self.width(),
            self.height(),
            max_color
        );

        let mut line = String::with_capacity(MAX_LINE_LEN);
        for pixel in self.pixels() {
            for channel in [pixel.red(), pixel.green(), pixel.blue()] {
                let value = clamp_channel(channel, max_color).to_string();
                if !line.is_empty() && line.len() + value.len() + 1 > MAX_LINE_LEN {
                    out.push_str(&line);
                    out.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&value);
            }
        }
        if !line.is_empty() {
            out.push_str(&line);
            out.push('\n');
        }

        debug!(
            "Encoded {}x{} canvas as PPM ({} bytes)",
            self.width(),
            self.height(),
            out.len()
        );
        out
    }

    /// Writes the same bytes as [`Canvas::to_ppm`] to `writer`.
    pub fn write_ppm<W: io::Write>(
        &self,
        writer: &mut W,
        identifier: &str,
        max_color: u32,
    ) -> io::Result<()> {
        writer.write_all(self.to_ppm(identifier, max_color).as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::{color, BLACK};

    #[test_log::test]
    fn test_clamp_channel() {
        let cases = [
            (0.0, 0),
            (1.0, 255),
            (0.5, 128),
            (0.8, 204),
            (0.6, 153),
            (1.5, 255),
            (-1.5, 0),
            (-0.001, 0),
            (f64::NAN, 0),
        ];
        for (value, want) in cases {
            assert_eq!(clamp_channel(value, 255), want, "value = {}", value);
        }
        assert_eq!(clamp_channel(0.5, 100), 50);
        assert_eq!(clamp_channel(2.0, 65535), 65535);
    }

    #[test_log::test]
    fn test_header() {
        let canvas = Canvas::new(5, 3).unwrap();
        let ppm = canvas.to_ppm(PPM_IDENTIFIER, DEFAULT_MAX_COLOR);
        let header: Vec<&str> = ppm.lines().take(3).collect();
        assert_eq!(header, ["P3", "5 3", "255"]);
    }

    #[test_log::test]
    fn test_single_black_pixel() {
        let canvas = Canvas::new(1, 1).unwrap();
        assert_eq!(canvas.to_ppm("P3", 255), "P3\n1 1\n255\n0 0 0\n");
    }

    #[test_log::test]
    fn test_fill_is_clamped() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.fill(color(1.5, 0.5, -1.5));
        assert_eq!(
            canvas.to_ppm("P3", 255),
            "P3\n2 2\n255\n255 128 0 255 128 0 255 128 0 255 128 0\n"
        );
    }

    #[test_log::test]
    fn test_body_follows_storage_order() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.write_pixel(1, 0, color(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(canvas.to_ppm("P3", 255), "P3\n2 1\n255\n0 0 0 255 0 0\n");
    }

    #[test_log::test]
    fn test_square_canvas_body_is_column_major() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.write_pixel(1, 0, color(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(
            canvas.to_ppm("P3", 255),
            "P3\n2 2\n255\n0 0 0 0 0 0 255 0 0 0 0 0\n"
        );
    }

    #[test_log::test]
    fn test_non_square_canvas_body_is_column_major() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.write_pixel(0, 1, color(1.0, 1.0, 1.0)).unwrap();
        canvas.write_pixel(2, 0, color(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(
            canvas.to_ppm("P3", 255),
            "P3\n3 2\n255\n0 0 0 255 255 255 0 0 0 0 0 0 0 0 255 0 0 0\n"
        );
    }

    #[test_log::test]
    fn test_long_lines_are_wrapped() {
        let mut canvas = Canvas::new(10, 2).unwrap();
        canvas.fill(color(1.0, 0.8, 0.6));
        let expected = "P3\n10 2\n255\n\
            255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
            153 255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255\n\
            204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204 153\n\
            255 204 153 255 204 153 255 204 153\n";
        let ppm = canvas.to_ppm("P3", 255);
        assert_eq!(ppm, expected);
        assert!(ppm.lines().all(|l| l.len() <= MAX_LINE_LEN));
    }

    #[test_log::test]
    fn test_ends_with_single_newline() {
        let mut canvas = Canvas::new(7, 7).unwrap();
        canvas.fill(BLACK);
        let ppm = canvas.to_ppm("P3", 255);
        assert!(ppm.ends_with('\n'));
        assert!(!ppm.ends_with("\n\n"));
    }

    #[test_log::test]
    fn test_write_ppm_matches_to_ppm() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.write_pixel(2, 1, color(0.25, 0.5, 1.0)).unwrap();
        let mut buf = Vec::new();
        canvas.write_ppm(&mut buf, "P3", 255).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), canvas.to_ppm("P3", 255));
    }
}
