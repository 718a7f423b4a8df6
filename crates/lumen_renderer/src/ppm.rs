//! Plain PPM (`P3`) output.
//!
//! Pixels arrive as unnormalized sums of samples; scaling, gamma and
//! clamping happen here on the way out.

use lumen_math::{Color, Interval};
use std::io::{self, Write};

/// Channel range before quantizing; keeps `256 * x` below 256.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Write the `P3` header for an image of the given size.
pub fn write_header<W: Write + ?Sized>(out: &mut W, width: u32, height: u32) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", width, height)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a sum of samples to 8-bit RGB.
///
/// `samples_scale` is one over the number of samples in `pixel_sum`.
pub fn color_to_rgb(pixel_sum: Color, samples_scale: f64, gamma_correct: bool) -> [u8; 3] {
    let color = pixel_sum * samples_scale;
    let quantize = |linear: f64| {
        let value = if gamma_correct {
            linear_to_gamma(linear)
        } else {
            linear
        };
        // NaN falls through the clamp and casts to 0
        (256.0 * INTENSITY.clamp(value)) as u8
    };

    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Write one pixel as an `R G B` line.
pub fn write_color<W: Write + ?Sized>(
    out: &mut W,
    pixel_sum: Color,
    samples_scale: f64,
    gamma_correct: bool,
) -> io::Result<()> {
    let [r, g, b] = color_to_rgb(pixel_sum, samples_scale, gamma_correct);
    writeln!(out, "{} {} {}", r, g, b)
}
