//! Perceptual adjustments of display colours.
//!
//! Every operation here decomposes the colour to LCH, edits one cylindrical
//! component and recomposes, so the effect is uniform across RGB space:
//! lightening a saturated orange and a muted blue by the same amount moves
//! them by the same perceptual distance. Results carry the gamut flag
//! because an edit can push a displayable colour outside sRGB.
//!
//! Amounts for [`lighten`] and [`darken`] are open-ended; `0.0` is a no-op
//! and negative values are treated as `0.0`.

use crate::colour::Colour;
use crate::convert::{colour_from_lch, lch_from_colour};
use crate::gamut::Clipped;
use crate::lch::Lch;

/// Conventional amount for [`lighten`] and [`darken`].
pub const DEFAULT_ADJUST_AMOUNT: f64 = 0.4;

/// Replaces the normalized lightness, keeping chroma and hue.
pub fn with_lightness(colour: Colour, l: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    colour_from_lch(Lch::new(l, lch.c, lch.h), colour.alpha())
}

/// Replaces the normalized chroma, keeping lightness and hue.
pub fn with_chroma(colour: Colour, c: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    colour_from_lch(Lch::new(lch.l, c, lch.h), colour.alpha())
}

/// Replaces the normalized hue, keeping lightness and chroma.
pub fn with_hue(colour: Colour, h: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    colour_from_lch(Lch::new(lch.l, lch.c, h), colour.alpha())
}

/// Scales lightness by `factor`; the result clamps into range.
pub fn multiply_lightness(colour: Colour, factor: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    colour_from_lch(Lch::new(lch.l * factor, lch.c, lch.h), colour.alpha())
}

/// Scales chroma by `factor`; the result clamps into range.
///
/// A factor of `0.0` yields the grey of equal lightness.
pub fn multiply_chroma(colour: Colour, factor: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    colour_from_lch(Lch::new(lch.l, lch.c * factor, lch.h), colour.alpha())
}

/// Rotates the hue by `turns` full turns; fractional values wrap.
pub fn rotate_hue(colour: Colour, turns: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    colour_from_lch(Lch::new(lch.l, lch.c, lch.h + turns), colour.alpha())
}

/// Moves lightness towards white by `amount`.
///
/// The remaining distance to white shrinks by `1 / (1 + amount)`, so
/// repeated application converges on white without overshooting.
pub fn lighten(colour: Colour, amount: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    let scale = 1.0 / (1.0 + amount.max(0.0));
    let l = 1.0 - scale * (1.0 - lch.l);
    colour_from_lch(Lch::new(l, lch.c, lch.h), colour.alpha())
}

/// Moves lightness towards black by `amount`, mirroring [`lighten`].
pub fn darken(colour: Colour, amount: f64) -> Clipped {
    let lch = lch_from_colour(colour);
    let scale = 1.0 / (1.0 + amount.max(0.0));
    colour_from_lch(Lch::new(scale * lch.l, lch.c, lch.h), colour.alpha())
}
