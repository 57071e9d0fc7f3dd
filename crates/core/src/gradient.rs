//! Gradients through LCH space.
//!
//! Interpolating in LCH rather than RGB keeps ramps perceptually even: no
//! muddy grey trough between saturated endpoints, and lightness progresses
//! at a steady visual rate. Hue takes the shorter way around the wheel, so
//! a ramp from magenta to orange passes through red, not through the whole
//! green half.

use crate::colour::Colour;
use crate::convert::{colour_from_lch, lch_from_colour};
use crate::gamut::Clipped;
use crate::lch::Lch;

/// Linearly interpolates between two LCH triples.
///
/// `t` is clamped to [0, 1]; NaN counts as 0. Lightness and chroma lerp
/// componentwise; hue follows the shorter arc and wraps, so the result's
/// hue is canonical in [0, 1].
pub fn mix(a: Lch, b: Lch, t: f64) -> Lch {
    let t = clamp_unit(t);
    Lch::new(
        (1.0 - t) * a.l + t * b.l,
        (1.0 - t) * a.c + t * b.c,
        interpolate_hue(a.h, b.h, t),
    )
}

/// Blends two display colours through LCH, interpolating alpha linearly.
///
/// Decomposes both endpoints, mixes, and recomposes; the result carries
/// the gamut flag because a midpoint between two displayable colours can
/// itself fall outside sRGB.
pub fn blend(start: Colour, end: Colour, t: f64) -> Clipped {
    let t = clamp_unit(t);
    let mixed = mix(lch_from_colour(start), lch_from_colour(end), t);
    let alpha = (1.0 - t) * start.alpha() + t * end.alpha();
    colour_from_lch(mixed, alpha)
}

/// Produces `count` colours evenly spaced from `start` to `end` inclusive.
///
/// Zero steps yields an empty ramp; a single step yields `start` verbatim.
pub fn steps(start: Colour, end: Colour, count: usize) -> Vec<Clipped> {
    match count {
        0 => Vec::new(),
        1 => vec![Clipped {
            colour: start,
            imaginary: false,
        }],
        _ => (0..count)
            .map(|i| blend(start, end, i as f64 / (count - 1) as f64))
            .collect(),
    }
}

/// Shortest-arc hue interpolation on the normalized wheel.
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let h0 = h0.rem_euclid(1.0);
    let h1 = h1.rem_euclid(1.0);
    let delta = match h1 - h0 {
        d if d > 0.5 => d - 1.0,
        d if d < -0.5 => d + 1.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(1.0)
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
