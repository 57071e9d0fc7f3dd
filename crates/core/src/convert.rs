//! Pure conversion routines between sRGB, CIE XYZ, CIE Lab and CIE LCH.
//!
//! The pipeline is a chain of stages, each a pure function over `Copy`
//! value types:
//!
//! ```text
//! Colour -> LinearRgb -> Xyz -> Lab -> LchNative -> Lch
//! ```
//!
//! and the same chain reversed, ending in a gamut clip that reports whether
//! the requested perceptual colour was displayable at all. All maths is
//! `f64`; the D65/2° observer is the reference white throughout. The matrix
//! and white-point constants are the classic 4-digit publication values,
//! kept verbatim so results stay comparable with existing data.

use glam::{DMat3, DVec3};

use crate::colour::Colour;
use crate::gamut::{clip, Clipped};
use crate::lch::{Lch, LchNative};

/// D65 reference white (2° observer): the XYZ of sRGB white.
const D65_WHITE: DVec3 = DVec3::new(95.047, 100.0, 108.883);

/// Linear sRGB -> XYZ under D65/2°, in column-major form.
const RGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// XYZ -> linear sRGB, the published inverse of [`RGB_TO_XYZ`].
///
/// Published to 4 digits, so it is not the exact inverse; the gamut stage
/// absorbs the resulting sub-quantum round-trip noise.
const XYZ_TO_RGB: DMat3 = DMat3::from_cols(
    DVec3::new(3.2406, -0.9689, 0.0557),
    DVec3::new(-1.5372, 1.8758, -0.2040),
    DVec3::new(-0.4986, 0.0415, 1.0570),
);

/// Threshold of the Lab nonlinearity on the white-normalized domain.
const LAB_EPSILON: f64 = 0.008856;
/// Threshold of the inverse nonlinearity, on the f(t) domain (6/29).
const LAB_F_THRESHOLD: f64 = 6.0 / 29.0;
/// Slope of the linear segment of the Lab nonlinearity.
const LAB_SLOPE: f64 = 7.787;
/// Intercept of the linear segment, 16/116.
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Gamma-decoded RGB with channels nominally in [0, 1].
///
/// Values straight out of [`xyz_to_linear`] may leave that range; that is
/// how out-of-gamut colours manifest before the clip stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ tristimulus values relative to the D65 white point.
///
/// X spans [0, 95.047], Y [0, 100], Z [0, 108.883] for in-gamut colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE Lab: lightness plus Cartesian chromaticity.
///
/// L spans [0, 100]; a and b are unbounded in principle, practically
/// within roughly ±160.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Applies inverse sRGB gamma to one display-referred channel in [0, 1].
pub fn linearize(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

/// Applies sRGB gamma to one linear channel.
///
/// The output may leave [0, 1] when the input does; the gamut stage
/// downstream decides what to do about that.
pub fn delinearize(channel: f64) -> f64 {
    if channel > 0.0031308 {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * channel
    }
}

/// Converts a display colour to linear RGB by linearizing each channel.
pub fn srgb_to_linear(colour: Colour) -> LinearRgb {
    LinearRgb {
        r: linearize(colour.red_f64()),
        g: linearize(colour.green_f64()),
        b: linearize(colour.blue_f64()),
    }
}

/// Converts linear RGB to XYZ via the D65 matrix.
///
/// Channels are scaled onto the conventional [0, 100] XYZ range before the
/// multiply.
pub fn linear_to_xyz(rgb: LinearRgb) -> Xyz {
    let v = RGB_TO_XYZ * (DVec3::new(rgb.r, rgb.g, rgb.b) * 100.0);
    Xyz {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Converts XYZ back to linear RGB, unclamped.
pub fn xyz_to_linear(xyz: Xyz) -> LinearRgb {
    let v = XYZ_TO_RGB * (DVec3::new(xyz.x, xyz.y, xyz.z) / 100.0);
    LinearRgb {
        r: v.x,
        g: v.y,
        b: v.z,
    }
}

/// Converts XYZ to Lab via the white-point-relative nonlinearity.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts Lab back to XYZ.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;
    Xyz {
        x: lab_f_inv(fx) * D65_WHITE.x,
        y: lab_f_inv(fy) * D65_WHITE.y,
        z: lab_f_inv(fz) * D65_WHITE.z,
    }
}

/// The Lab nonlinearity: cube root above [`LAB_EPSILON`], linear below.
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Inverse of [`lab_f`].
///
/// The threshold sits on the f(t) domain (6/29), not the t domain; the
/// asymmetry is part of the published formulation and both branches agree
/// at the seam.
fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_F_THRESHOLD {
        t * t * t
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

/// Converts Lab to its polar form, native-range LCH.
///
/// Chroma is the radius of (a, b); hue is the `atan2` angle in degrees,
/// wrapped into [0, 360). An achromatic input (a = b = 0) comes out with
/// hue 0, but hue carries no information when chroma is ~0 and callers
/// must not rely on it.
pub fn lab_to_lch(lab: Lab) -> LchNative {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
    LchNative { l: lab.l, c, h }
}

/// Converts native-range LCH back to Cartesian Lab.
pub fn lch_to_lab(lch: LchNative) -> Lab {
    let h_rad = lch.h.to_radians();
    Lab {
        l: lch.l,
        a: lch.c * h_rad.cos(),
        b: lch.c * h_rad.sin(),
    }
}

/// Full forward pipeline: display colour to normalized LCH.
///
/// Alpha does not participate in the conversion; read it off the input
/// colour when recomposing.
pub fn lch_from_colour(colour: Colour) -> Lch {
    let lab = xyz_to_lab(linear_to_xyz(srgb_to_linear(colour)));
    Lch::from_native(lab_to_lch(lab))
}

/// Full inverse pipeline: normalized LCH plus alpha to a display colour.
///
/// L and C are clamped into their native ranges, H wraps (any real value
/// is meaningful), and alpha is clamped to [0, 1] and carried through
/// untouched. The result reports whether the requested perceptual colour
/// was outside the sRGB gamut and had to be clipped.
pub fn colour_from_lch(lch: Lch, alpha: f64) -> Clipped {
    let rgb = xyz_to_linear(lab_to_xyz(lch_to_lab(lch.to_native())));
    clip(
        delinearize(rgb.r),
        delinearize(rgb.g),
        delinearize(rgb.b),
        alpha,
    )
}
