//! Error types for the colour engine core.

use thiserror::Error;

/// Errors produced by colour construction and parsing.
///
/// The conversion pipeline itself never fails: an unrepresentable perceptual
/// colour is reported through the `imaginary` flag on [`crate::Clipped`],
/// not as an error.
#[derive(Debug, Error)]
pub enum ColourError {
    /// A colour string could not be parsed.
    #[error("invalid colour: {0}")]
    InvalidColour(String),
}
