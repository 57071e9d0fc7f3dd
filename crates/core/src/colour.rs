//! The display-referred colour value type.
//!
//! [`Colour`] is the sRGB value the engine exchanges with callers: 8-bit
//! red/green/blue channels plus a floating-point alpha. Channels are stored
//! as bytes because display colours are 8-bit; alpha stays `f64` because it
//! is carried through every conversion untouched and must not lose
//! precision on the way. Values are immutable once constructed.

use crate::error::ColourError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A display-referred sRGB colour with 8-bit channels and float alpha.
///
/// Serializes as a hex string: `"#rrggbb"` when fully opaque, `"#rrggbbaa"`
/// otherwise. Alpha picks up 8-bit quantization through the hex round-trip;
/// in-process it keeps full `f64` precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Colour {
    /// Creates a colour from 8-bit channels and a float alpha.
    ///
    /// Alpha is clamped to [0, 1]; NaN alpha is treated as 0.
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Colour {
        Colour {
            r,
            g,
            b,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Creates a fully opaque colour from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Creates a colour from 8-bit channels including an 8-bit alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour {
            r,
            g,
            b,
            alpha: a as f64 / 255.0,
        }
    }

    /// Creates a colour from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Colour {
        Colour::from_rgba8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Packs the colour into `0xAARRGGBB`.
    ///
    /// Alpha is quantized to 8 bits with rounding.
    pub fn to_argb(self) -> u32 {
        let a = (self.alpha * 255.0).round() as u32;
        (a << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Creates a colour from float channels in [0, 1].
    ///
    /// Each channel is clamped to [0, 1] and then rounded to 8 bits, in that
    /// order, so out-of-range floats cannot overflow the byte conversion.
    pub fn from_f64(r: f64, g: f64, b: f64, alpha: f64) -> Colour {
        Colour {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
            alpha: clamp_alpha(alpha),
        }
    }

    /// Parses a hex colour like `"#ff00aa"` or `"ff00aab0"` (case
    /// insensitive, `#` optional, 6 or 8 digits).
    ///
    /// Returns `ColourError::InvalidColour` if the input is not valid hex.
    pub fn from_hex(hex: &str) -> Result<Colour, ColourError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(ColourError::InvalidColour(
                "non-ASCII character in hex colour".to_string(),
            ));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColourError::InvalidColour(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ColourError::InvalidColour(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ColourError::InvalidColour(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ColourError::InvalidColour(format!("invalid blue component: {e}")))?;
        if hex.len() == 8 {
            let a = u8::from_str_radix(&hex[6..8], 16)
                .map_err(|e| ColourError::InvalidColour(format!("invalid alpha component: {e}")))?;
            Ok(Colour::from_rgba8(r, g, b, a))
        } else {
            Ok(Colour::from_rgb8(r, g, b))
        }
    }

    /// Formats the colour as a hex string.
    ///
    /// Emits `"#rrggbb"` for fully opaque colours and `"#rrggbbaa"` (alpha
    /// quantized to 8 bits) otherwise.
    pub fn to_hex(self) -> String {
        let Colour { r, g, b, alpha } = self;
        if alpha < 1.0 {
            let a = (alpha * 255.0).round() as u8;
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }

    /// Returns the same colour with a different alpha (clamped to [0, 1]).
    pub fn with_alpha(self, alpha: f64) -> Colour {
        Colour {
            alpha: clamp_alpha(alpha),
            ..self
        }
    }

    /// The red channel as an 8-bit value.
    pub fn red(self) -> u8 {
        self.r
    }

    /// The green channel as an 8-bit value.
    pub fn green(self) -> u8 {
        self.g
    }

    /// The blue channel as an 8-bit value.
    pub fn blue(self) -> u8 {
        self.b
    }

    /// The alpha channel in [0, 1].
    pub fn alpha(self) -> f64 {
        self.alpha
    }

    /// The red channel as a float in [0, 1].
    pub fn red_f64(self) -> f64 {
        self.r as f64 / 255.0
    }

    /// The green channel as a float in [0, 1].
    pub fn green_f64(self) -> f64 {
        self.g as f64 / 255.0
    }

    /// The blue channel as a float in [0, 1].
    pub fn blue_f64(self) -> f64 {
        self.b as f64 / 255.0
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Clamps a float channel to [0, 1] and rounds it to 8 bits.
fn quantize(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Clamps alpha to [0, 1]; NaN becomes 0.
fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction tests --

    #[test]
    fn from_rgb8_is_fully_opaque() {
        let c = Colour::from_rgb8(10, 20, 30);
        assert_eq!(c.red(), 10);
        assert_eq!(c.green(), 20);
        assert_eq!(c.blue(), 30);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn from_rgba8_scales_alpha_byte() {
        let c = Colour::from_rgba8(0, 0, 0, 51);
        assert!((c.alpha() - 0.2).abs() < 1e-9, "alpha: {}", c.alpha());
    }

    #[test]
    fn new_clamps_alpha_into_unit_range() {
        assert_eq!(Colour::new(0, 0, 0, 1.5).alpha(), 1.0);
        assert_eq!(Colour::new(0, 0, 0, -0.5).alpha(), 0.0);
    }

    #[test]
    fn new_treats_nan_alpha_as_zero() {
        assert_eq!(Colour::new(0, 0, 0, f64::NAN).alpha(), 0.0);
    }

    #[test]
    fn from_f64_clamps_then_rounds_channels() {
        let c = Colour::from_f64(1.5, -0.1, 0.5, 1.0);
        assert_eq!(c.red(), 255);
        assert_eq!(c.green(), 0);
        assert_eq!(c.blue(), 128);
    }

    #[test]
    fn from_f64_rounds_to_nearest_byte() {
        // Just above the midpoint between bytes 0 and 1 rounds up, just
        // below rounds down.
        let c = Colour::from_f64(0.6 / 255.0, 0.4 / 255.0, 0.0, 1.0);
        assert_eq!(c.red(), 1);
        assert_eq!(c.green(), 0);
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Colour::from_rgb8(1, 2, 3).with_alpha(0.25);
        assert_eq!(c.red(), 1);
        assert_eq!(c.green(), 2);
        assert_eq!(c.blue(), 3);
        assert_eq!(c.alpha(), 0.25);
    }

    // -- ARGB packing tests --

    #[test]
    fn from_argb_unpacks_channels() {
        let c = Colour::from_argb(0x80ff7e00);
        assert_eq!(c.red(), 0xff);
        assert_eq!(c.green(), 0x7e);
        assert_eq!(c.blue(), 0x00);
        assert!((c.alpha() - 0x80 as f64 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn to_argb_packs_channels() {
        let c = Colour::from_rgb8(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0xff123456);
    }

    #[test]
    fn argb_round_trip_is_exact() {
        let original = 0x3fc0ffee_u32;
        assert_eq!(Colour::from_argb(original).to_argb(), original);
    }

    // -- Hex parsing tests --

    #[test]
    fn from_hex_parses_red_with_hash() {
        let red = Colour::from_hex("#ff0000").unwrap();
        assert_eq!(red.red(), 255);
        assert_eq!(red.green(), 0);
        assert_eq!(red.blue(), 0);
        assert_eq!(red.alpha(), 1.0);
    }

    #[test]
    fn from_hex_parses_without_hash() {
        let green = Colour::from_hex("00ff00").unwrap();
        assert_eq!(green.green(), 255);
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let upper = Colour::from_hex("#FF00AA").unwrap();
        let lower = Colour::from_hex("#ff00aa").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn from_hex_parses_eight_digit_alpha() {
        let c = Colour::from_hex("#ff000080").unwrap();
        assert_eq!(c.red(), 255);
        assert!((c.alpha() - 0x80 as f64 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn from_hex_returns_error_for_invalid_input() {
        assert!(Colour::from_hex("#gggggg").is_err());
        assert!(Colour::from_hex("#fff").is_err()); // too short
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ff00ff001").is_err()); // too long
        assert!(Colour::from_hex("#ffßf00").is_err()); // non-ASCII
    }

    // -- to_hex tests --

    #[test]
    fn to_hex_opaque_emits_six_digits() {
        assert_eq!(Colour::from_rgb8(0x80, 0x40, 0x20).to_hex(), "#804020");
    }

    #[test]
    fn to_hex_translucent_emits_eight_digits() {
        let c = Colour::new(0xff, 0x00, 0x00, 0.5);
        assert_eq!(c.to_hex(), "#ff000080");
    }

    #[test]
    fn from_hex_to_hex_round_trip() {
        for original in ["#c0ffee", "#c0ffee7f"] {
            let colour = Colour::from_hex(original).unwrap();
            assert_eq!(colour.to_hex(), original);
        }
    }

    // -- Serde tests --

    #[test]
    fn colour_serializes_as_hex_string() {
        let red = Colour::from_rgb8(255, 0, 0);
        let json = serde_json::to_string(&red).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn colour_deserializes_from_hex_string() {
        let green: Colour = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(green, Colour::from_rgb8(0, 255, 0));
    }

    #[test]
    fn colour_json_round_trip_preserves_alpha_byte() {
        let original = Colour::from_rgba8(0x80, 0x40, 0x20, 0x10);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, original);
    }

    #[test]
    fn colour_deserialize_rejects_invalid_hex() {
        let result: Result<Colour, _> = serde_json::from_str("\"not-a-colour\"");
        assert!(result.is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn argb_round_trip_for_any_packed_value(argb in any::<u32>()) {
                prop_assert_eq!(Colour::from_argb(argb).to_argb(), argb);
            }

            #[test]
            fn hex_round_trip_for_byte_channels(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                a in any::<u8>(),
            ) {
                let original = Colour::from_rgba8(r, g, b, a);
                let round_tripped = Colour::from_hex(&original.to_hex()).unwrap();
                prop_assert_eq!(round_tripped, original);
            }

            #[test]
            fn from_f64_never_panics_and_stays_in_range(
                r in -2.0_f64..=2.0,
                g in -2.0_f64..=2.0,
                b in -2.0_f64..=2.0,
                alpha in -2.0_f64..=2.0,
            ) {
                let c = Colour::from_f64(r, g, b, alpha);
                prop_assert!((0.0..=1.0).contains(&c.alpha()));
            }
        }
    }
}
