//! Bulk conversions over pixel buffers.
//!
//! With the default `parallel` feature these fan out across threads via
//! rayon; without it they run serially and produce identical results.
//! Conversions are per-pixel and independent, so order in equals order out.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::colour::Colour;
use crate::convert::{colour_from_lch, lch_from_colour};
use crate::gamut::Clipped;
use crate::lch::Lch;

/// Decomposes every pixel to normalized LCH, preserving order.
pub fn lch_of_pixels(pixels: &[Colour]) -> Vec<Lch> {
    #[cfg(feature = "parallel")]
    let iter = pixels.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pixels.iter();
    iter.map(|&pixel| lch_from_colour(pixel)).collect()
}

/// Applies `f` to every pixel in LCH space and recomposes.
///
/// Each pixel's alpha rides along unchanged; each output carries its own
/// gamut flag, since `f` may push individual pixels outside sRGB.
pub fn map_pixels<F>(pixels: &[Colour], f: F) -> Vec<Clipped>
where
    F: Fn(Lch) -> Lch + Sync,
{
    let convert = |&pixel: &Colour| colour_from_lch(f(lch_from_colour(pixel)), pixel.alpha());
    #[cfg(feature = "parallel")]
    let iter = pixels.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pixels.iter();
    iter.map(convert).collect()
}

/// Scales every pixel's chroma by `factor`.
///
/// A factor of `0.0` converts the buffer to perceptual greyscale.
pub fn scale_chroma_of_pixels(pixels: &[Colour], factor: f64) -> Vec<Clipped> {
    map_pixels(pixels, move |lch| Lch::new(lch.l, lch.c * factor, lch.h))
}

/// Applies `f` in LCH space to a packed RGBA byte buffer, in place.
///
/// Pixels are 4-byte RGBA groups; the alpha byte of each pixel passes
/// through verbatim and does not participate in the conversion. A trailing
/// partial group, if the length is not a multiple of four, is left
/// untouched.
pub fn map_rgba_in_place<F>(buf: &mut [u8], f: F)
where
    F: Fn(Lch) -> Lch + Sync,
{
    let apply = |px: &mut [u8]| {
        let colour = Colour::from_rgb8(px[0], px[1], px[2]);
        let clipped = colour_from_lch(f(lch_from_colour(colour)), 1.0);
        px[0] = clipped.colour.red();
        px[1] = clipped.colour.green();
        px[2] = clipped.colour.blue();
    };
    #[cfg(feature = "parallel")]
    buf.par_chunks_exact_mut(4).for_each(apply);
    #[cfg(not(feature = "parallel"))]
    buf.chunks_exact_mut(4).for_each(apply);
}
