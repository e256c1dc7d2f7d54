//! The square grid and the generation engine.
//!
//! A [`Board`] owns `dimension × dimension` [`Cell`]s stored row-major and
//! addressed as `(x, y)` with `x` the column and `y` the row. Every
//! generation runs in two strict phases:
//!
//! 1. **Compute** -- every cell's next state is staged into its pending
//!    field from neighbor counts over the committed states.
//! 2. **Commit** -- every cell copies pending into current.
//!
//! No cell is committed before every cell has been computed, so a cell's
//! transition never sees another cell's next state from the same tick.

use tracing::{debug, warn};

use crate::cell::Cell;
use crate::error::LifeError;
use crate::rule;

/// Offsets of the eight neighbors around a position, as `(dx, dy)`.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Outcome of a single [`Board::advance_generation`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Cells that were dead and are now live.
    pub births: usize,
    /// Cells that were live and are now dead.
    pub deaths: usize,
    /// Live cells after the commit phase.
    pub population: usize,
}

impl GenerationSummary {
    /// Whether the generation left every cell as it was.
    pub const fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// A finite square grid of cells with clipped (non-wrapping) edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length, fixed at construction.
    dimension: usize,
    /// Rows of cells, `cells[y][x]`.
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a board of `dimension × dimension` dead cells.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimension`] if `dimension` is not positive,
    /// or if a grid of that size cannot be allocated.
    pub fn new(dimension: i64) -> Result<Self, LifeError> {
        let size = usize::try_from(dimension)
            .ok()
            .filter(|&size| size > 0)
            .ok_or(LifeError::InvalidDimension(dimension))?;

        let Some(cells) = allocate_grid(size) else {
            warn!(dimension, "Board allocation failed");
            return Err(LifeError::InvalidDimension(dimension));
        };

        debug!(dimension = size, "Board created");
        Ok(Self {
            dimension: size,
            cells,
        })
    }

    /// Create a board and set every listed `(x, y)` position live.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimension`] for a non-positive dimension,
    /// or [`LifeError::OutOfBounds`] for the first listed position that is
    /// off the board.
    pub fn with_live_cells<I>(dimension: i64, live: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut board = Self::new(dimension)?;
        for (x, y) in live {
            board.set_cell(x, y, true)?;
        }
        Ok(board)
    }

    /// Return the side length of the board.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether `(x, y)` lies on the board.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// Borrow the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if either coordinate is off the board.
    pub fn get_cell(&self, x: i64, y: i64) -> Result<&Cell, LifeError> {
        self.index(x, y)
            .and_then(|(col, row)| self.cells.get(row)?.get(col))
            .ok_or(LifeError::OutOfBounds {
                x,
                y,
                dimension: self.dimension,
            })
    }

    /// Set the cell at `(x, y)` to `state`.
    ///
    /// This is the manual edit path. The pending state is reset to the same
    /// value so the cell never reports a stale staged transition.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if either coordinate is off the board.
    pub fn set_cell(&mut self, x: i64, y: i64, state: bool) -> Result<(), LifeError> {
        let cell = self.cell_mut(x, y)?;
        cell.set_state(state);
        cell.set_pending(state);
        Ok(())
    }

    /// Count the live neighbors of `(x, y)`, in `0..=8`.
    ///
    /// Neighbors off the board count as dead. The position itself is never
    /// counted.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
            .filter(|&(nx, ny)| self.get_cell(nx, ny).is_ok_and(|cell| cell.state()))
            .fold(0_u8, |count, _| count.saturating_add(1))
    }

    /// Advance the whole board by one generation.
    ///
    /// Runs the compute phase over every cell, then the commit phase over
    /// every cell, and reports what changed.
    pub fn advance_generation(&mut self) -> GenerationSummary {
        let side = self.side();

        for y in 0..side {
            for x in 0..side {
                let neighbors = self.count_live_neighbors(x, y);
                if let Ok(cell) = self.cell_mut(x, y) {
                    let next = rule::next_state(cell.state(), neighbors);
                    cell.set_pending(next);
                }
            }
        }

        let mut summary = GenerationSummary::default();
        for cell in self.cells.iter_mut().flatten() {
            let was_alive = cell.state();
            cell.commit();
            match (was_alive, cell.state()) {
                (false, true) => summary.births = summary.births.saturating_add(1),
                (true, false) => summary.deaths = summary.deaths.saturating_add(1),
                _ => {}
            }
            if cell.state() {
                summary.population = summary.population.saturating_add(1);
            }
        }

        debug!(
            births = summary.births,
            deaths = summary.deaths,
            population = summary.population,
            "Generation advanced"
        );
        summary
    }

    /// Iterate over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Return the number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.state()).count()
    }

    // -------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------

    /// Side length as a signed coordinate bound.
    fn side(&self) -> i64 {
        // Constructed from a positive i64, so the conversion cannot fail.
        i64::try_from(self.dimension).unwrap_or(i64::MAX)
    }

    /// Convert `(x, y)` into `(col, row)` storage indices if on the board.
    fn index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.dimension && row < self.dimension).then_some((col, row))
    }

    fn cell_mut(&mut self, x: i64, y: i64) -> Result<&mut Cell, LifeError> {
        let out_of_bounds = LifeError::OutOfBounds {
            x,
            y,
            dimension: self.dimension,
        };
        let (col, row) = self.index(x, y).ok_or_else(|| out_of_bounds.clone())?;
        self.cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(out_of_bounds)
    }
}

/// Allocate `size` rows of `size` dead cells.
///
/// Returns `None` when the cell count overflows the address space or the
/// allocator refuses a row.
fn allocate_grid(size: usize) -> Option<Vec<Vec<Cell>>> {
    let max_cells = usize::try_from(isize::MAX)
        .ok()?
        .checked_div(std::mem::size_of::<Cell>())?;
    if size.checked_mul(size)? > max_cells {
        return None;
    }

    let mut rows = Vec::new();
    rows.try_reserve_exact(size).ok()?;
    for _ in 0..size {
        let mut row = Vec::new();
        row.try_reserve_exact(size).ok()?;
        row.resize(size, Cell::default());
        rows.push(row);
    }
    Some(rows)
}
