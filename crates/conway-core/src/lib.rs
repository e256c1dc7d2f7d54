//! Cells, board, and generation engine for Conway's Game of Life.
//!
//! The board is a finite square grid. Positions outside the grid are
//! permanently dead: neighbor counts are clipped at the edges and never
//! wrap around to the opposite side.
//!
//! # Modules
//!
//! - [`board`] -- The [`Board`] grid: bounds-checked access, neighbor
//!   counting, and the two-phase generation advance.
//! - [`cell`] -- A single [`Cell`] with a committed and a pending state.
//! - [`config`] -- Configuration loading from `conway-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Error types for board construction and cell access.
//! - [`rule`] -- The B3/S23 transition rule.
//!
//! [`Board`]: board::Board
//! [`Cell`]: cell::Cell

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod rule;

// Re-export primary types at crate root.
pub use board::{Board, GenerationSummary};
pub use cell::Cell;
pub use config::{ConfigError, LifeConfig};
pub use error::LifeError;
