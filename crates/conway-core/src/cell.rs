//! A single grid position.
//!
//! A [`Cell`] carries two states: the committed `current` state that
//! everyone reads, and a `pending` state staged during the compute phase of
//! a generation. [`Cell::commit`] copies pending into current.

/// One grid position's life state plus its staged next state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Committed state, read by neighbor counts and renderers.
    current: bool,
    /// Staged state, applied on the next commit.
    pending: bool,
}

impl Cell {
    /// Create a cell whose current and pending states are both `state`.
    pub const fn new(state: bool) -> Self {
        Self {
            current: state,
            pending: state,
        }
    }

    /// Return the committed state (`true` = live).
    pub const fn state(&self) -> bool {
        self.current
    }

    /// Overwrite the committed state directly, leaving pending untouched.
    pub const fn set_state(&mut self, state: bool) {
        self.current = state;
    }

    /// Return the staged next state.
    pub const fn pending(&self) -> bool {
        self.pending
    }

    /// Stage the next state without touching the committed state.
    pub const fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Make the staged state the committed state.
    pub const fn commit(&mut self) {
        self.current = self.pending;
    }
}
