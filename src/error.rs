//! Typed errors of the layout engine.

use thiserror::Error;

/// Unified result type for the layout engine.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Structural failures surfaced while generating the scene.
///
/// The layout engine assumes validated input; these cover configs that
/// slipped past validation with sections missing or degenerate geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Centering was requested but the room volume is unknown.
    #[error("globalSettings.dimensions is required for centering")]
    MissingRoomDimensions,
    /// A computed coordinate was NaN or infinite.
    #[error("module `{module_id}` resolved to a non-finite position")]
    NonFinitePosition {
        /// Offending module
        module_id: String,
    },
    /// A computed extent was NaN, infinite, zero, or negative.
    #[error("module `{module_id}` resolved to invalid dimensions {width}×{height}×{depth}")]
    InvalidDimensions {
        /// Offending module
        module_id: String,
        /// Resolved width
        width: f64,
        /// Resolved height
        height: f64,
        /// Resolved depth
        depth: f64,
    },
}
