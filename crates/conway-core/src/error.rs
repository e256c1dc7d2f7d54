//! Error types for the `conway-core` crate.
//!
//! Board construction and cell access return [`LifeError`]. Both variants
//! describe caller mistakes; neither is transient.

/// Errors that can occur when building or addressing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// The requested board side length is zero, negative, or too large to
    /// allocate.
    #[error("invalid board dimension {0}: must be a positive integer small enough to allocate")]
    InvalidDimension(i64),

    /// The coordinates fall outside the board on at least one axis.
    #[error("coordinates ({x}, {y}) are outside the {dimension}x{dimension} board")]
    OutOfBounds {
        /// Column that was requested.
        x: i64,
        /// Row that was requested.
        y: i64,
        /// Side length of the board.
        dimension: usize,
    },
}
