#![deny(unsafe_code)]
//! Core types and conversions for the cielch colour engine.
//!
//! Provides the `Colour` display type, the normalized `Lch` triple and its
//! native-range counterpart `LchNative`, the sRGB <-> XYZ <-> Lab <-> LCH
//! conversion pipeline with gamut clipping (`Clipped`), perceptual
//! adjustments, LCH-space gradients, and bulk pixel operations.

pub mod adjust;
pub mod batch;
pub mod colour;
pub mod convert;
pub mod error;
pub mod gamut;
pub mod gradient;
pub mod lch;

pub use colour::Colour;
pub use convert::{colour_from_lch, lch_from_colour, Lab, LinearRgb, Xyz};
pub use error::ColourError;
pub use gamut::Clipped;
pub use lch::{Lch, LchNative};
