//! Gamut detection and clipping for the inverse pipeline.
//!
//! The last stage of LCH -> colour: decide whether the requested perceptual
//! colour exists in sRGB at all, then force the channels into displayable
//! range. Clipping is the engine's only notion of failure — it is reported,
//! never raised.

use crate::colour::Colour;
use serde::Serialize;

/// Slack allowed before an out-of-range channel counts as out of gamut.
///
/// The published 4-digit conversion matrices are not exact inverses of each
/// other, so even an in-gamut colour pushed through a full round trip can
/// overshoot [0, 1] by up to ~2e-4. Overshoot below half an 8-bit quantum
/// disappears in rounding, so only larger excursions are reported.
const GAMUT_SLACK: f64 = 0.5 / 255.0;

/// A display colour produced by gamut clipping, plus whether the clip lost
/// anything.
///
/// `imaginary` is true when the requested perceptual colour had no sRGB
/// representation and the channels had to be cut back into range. The
/// colour itself is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Clipped {
    pub colour: Colour,
    pub imaginary: bool,
}

/// Clips delinearized (display-referred) channels into the sRGB gamut.
///
/// Channels are clamped to [0, 1] and then rounded to 8 bits; clamping
/// before rounding keeps the byte conversion from overflowing. The flag is
/// per call, not per channel: one excursion marks the whole colour
/// imaginary. Alpha is clamped to [0, 1] and stored untouched by the
/// colour maths.
pub fn clip(r: f64, g: f64, b: f64, alpha: f64) -> Clipped {
    let imaginary = out_of_gamut(r) || out_of_gamut(g) || out_of_gamut(b);
    Clipped {
        colour: Colour::from_f64(r, g, b, alpha),
        imaginary,
    }
}

/// True when a channel leaves [0, 1] by more than [`GAMUT_SLACK`].
fn out_of_gamut(channel: f64) -> bool {
    channel < -GAMUT_SLACK || channel > 1.0 + GAMUT_SLACK
}
