//! The perceptual LCH value types and their range constants.
//!
//! The engine's boundary speaks normalized LCH: every component in [0, 1].
//! Internally the pipeline computes in native ranges — L in [0, 100], C in
//! [0, 134], H in degrees — and [`Lch::to_native`]/[`Lch::from_native`]
//! scale between the two. The scale factors are a fixed interface contract,
//! not colour science; they must stay numerically identical for results to
//! remain comparable with existing data.

use serde::{Deserialize, Serialize};

/// Native lightness ceiling: L spans [0, 100] inside the pipeline.
pub const LIGHTNESS_MAX: f64 = 100.0;
/// Native chroma ceiling, an empirical bound on the visible sRGB gamut.
pub const CHROMA_MAX: f64 = 134.0;
/// Degrees in a full hue turn.
pub const HUE_DEGREES: f64 = 360.0;

/// A perceptual CIE LCH colour, normalized to [0, 1] per component.
///
/// Hue is circular: any real value is meaningful and wraps at 1.0. The hue
/// of an achromatic colour (chroma ~0) is arbitrary and must not be relied
/// upon. Constructors store components as given; clamping and wrapping
/// happen at the conversion boundary, never here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    /// Lightness: 0 is black, 1 is white.
    pub l: f64,
    /// Chroma: 0 is achromatic, 1 is the native ceiling of 134.
    pub c: f64,
    /// Hue in normalized turns; wraps at 1.0.
    pub h: f64,
}

/// CIE LCH in native ranges, the pipeline's working form.
///
/// L in [0, 100], C in [0, 134], H in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchNative {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    /// Creates a normalized LCH triple, stored as given.
    pub fn new(l: f64, c: f64, h: f64) -> Lch {
        Lch { l, c, h }
    }

    /// Scales to native ranges, clamping L and C into bounds.
    ///
    /// H is scaled without clamping: hue wraps through the trigonometry of
    /// the polar stage, so any real value stays meaningful.
    pub fn to_native(self) -> LchNative {
        LchNative {
            l: (self.l * LIGHTNESS_MAX).clamp(0.0, LIGHTNESS_MAX),
            c: (self.c * CHROMA_MAX).clamp(0.0, CHROMA_MAX),
            h: self.h * HUE_DEGREES,
        }
    }

    /// Scales a native triple back to the normalized boundary form.
    pub fn from_native(native: LchNative) -> Lch {
        Lch {
            l: native.l / LIGHTNESS_MAX,
            c: native.c / CHROMA_MAX,
            h: native.h / HUE_DEGREES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_stores_components_as_given() {
        let lch = Lch::new(1.4, -0.2, 2.5);
        assert_eq!(lch.l, 1.4);
        assert_eq!(lch.c, -0.2);
        assert_eq!(lch.h, 2.5);
    }

    #[test]
    fn to_native_scales_by_range_constants() {
        let native = Lch::new(0.5, 0.5, 0.5).to_native();
        assert!(approx_eq(native.l, 50.0), "l: {}", native.l);
        assert!(approx_eq(native.c, 67.0), "c: {}", native.c);
        assert!(approx_eq(native.h, 180.0), "h: {}", native.h);
    }

    #[test]
    fn to_native_clamps_lightness_and_chroma() {
        let high = Lch::new(1.5, 1.5, 0.0).to_native();
        assert_eq!(high.l, 100.0);
        assert_eq!(high.c, 134.0);

        let low = Lch::new(-0.5, -0.5, 0.0).to_native();
        assert_eq!(low.l, 0.0);
        assert_eq!(low.c, 0.0);
    }

    #[test]
    fn to_native_leaves_hue_unclamped() {
        let native = Lch::new(0.5, 0.5, 1.25).to_native();
        assert!(approx_eq(native.h, 450.0), "h: {}", native.h);

        let negative = Lch::new(0.5, 0.5, -0.25).to_native();
        assert!(approx_eq(negative.h, -90.0), "h: {}", negative.h);
    }

    #[test]
    fn from_native_inverts_to_native_for_in_range_values() {
        let original = Lch::new(0.25, 0.75, 0.9);
        let round_tripped = Lch::from_native(original.to_native());
        assert!(approx_eq(round_tripped.l, original.l));
        assert!(approx_eq(round_tripped.c, original.c));
        assert!(approx_eq(round_tripped.h, original.h));
    }

    #[test]
    fn lch_serializes_as_plain_fields() {
        let lch = Lch::new(0.5, 0.25, 0.75);
        let json = serde_json::to_value(&lch).unwrap();
        assert_eq!(json["l"], 0.5);
        assert_eq!(json["c"], 0.25);
        assert_eq!(json["h"], 0.75);
    }

    #[test]
    fn lch_json_round_trip() {
        let original = Lch::new(0.1, 0.2, 0.3);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Lch = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, original);
    }
}
