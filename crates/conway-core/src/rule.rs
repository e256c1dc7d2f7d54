//! The B3/S23 transition rule.

/// Compute a cell's next state from its current state and live neighbor count.
///
/// A live cell survives with two or three live neighbors. A dead cell comes
/// alive with exactly three. Every other case is dead in the next generation.
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}
