//! Error types for the insole pipeline.

use thiserror::Error;

/// Errors that can occur while generating an insole mesh.
///
/// All of these are recoverable: the caller keeps its last valid mesh
/// (or a default) and reports the failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsoleError {
    /// A dimension is zero, negative, or not finite.
    #[error("invalid dimension: {name} = {value} (must be a positive finite number)")]
    InvalidDimension {
        /// Which dimension failed validation.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The sampled outline encloses no usable area.
    #[error("degenerate outline: enclosed area {area} below tolerance")]
    DegenerateOutline {
        /// The computed enclosed area.
        area: f64,
    },
}

/// Result type for insole pipeline operations.
pub type Result<T> = std::result::Result<T, InsoleError>;
