use gridsearch_core::{CellState, Grid, Point};

use crate::traits::Observer;

/// Sentinel cost meaning "unreachable" in the `g_score` / distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor meaning "no parent recorded".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Which part of a run an observation belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Frontier expansion.
    Expanding,
    /// Backward walk over the predecessor map.
    Reconstructing,
}

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// Per-run search state, keyed by flat cell index.
///
/// The grid is only borrowed, so a run never mutates topology and two runs
/// never share bookkeeping. Everything here is dropped when the search
/// returns, except the visitation states moved into the outcome.
pub(crate) struct SearchContext<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) states: Vec<CellState>,
    pub(crate) came_from: Vec<usize>,
    // closed set for the priority-queue searches
    pub(crate) closed: Vec<bool>,
    // indices whose state changed since the last observation
    changes: Vec<usize>,
    phase: Phase,
    step: usize,
    pub(crate) expanded: usize,
    pub(crate) path: Vec<Point>,
}

impl<'g> SearchContext<'g> {
    /// Allocate state for one run. `start` and `end` must be valid, distinct
    /// indices into `grid`.
    pub(crate) fn new(grid: &'g Grid, start: usize, end: usize) -> Self {
        let len = grid.len();
        let mut ctx = Self {
            grid,
            start,
            end,
            states: vec![CellState::Unvisited; len],
            came_from: vec![NO_PARENT; len],
            closed: vec![false; len],
            changes: Vec::new(),
            phase: Phase::Expanding,
            step: 0,
            expanded: 0,
            path: Vec::new(),
        };
        ctx.mark_endpoints();
        ctx
    }

    /// Set the visible state of a cell. Endpoints keep their markers.
    #[inline]
    pub(crate) fn mark(&mut self, idx: usize, state: CellState) {
        if idx == self.start || idx == self.end {
            return;
        }
        self.set_state(idx, state);
    }

    /// Re-apply the Start and End markers.
    pub(crate) fn mark_endpoints(&mut self) {
        self.set_state(self.start, CellState::Start);
        self.set_state(self.end, CellState::End);
    }

    fn set_state(&mut self, idx: usize, state: CellState) {
        if self.states[idx] != state {
            self.states[idx] = state;
            self.changes.push(idx);
        }
    }

    /// Recorded predecessor of `idx`, if any.
    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        match self.came_from[idx] {
            NO_PARENT => None,
            p => Some(p),
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Hand the observer a view of the current step, then start a fresh
    /// change list.
    pub(crate) fn notify<O: Observer>(&mut self, observer: &mut O) {
        let view = SearchView {
            grid: self.grid,
            states: &self.states,
            changes: &self.changes,
            phase: self.phase,
            step: self.step,
            start: self.start,
            end: self.end,
        };
        observer.observe(&view);
        self.changes.clear();
        self.step += 1;
    }
}

// ---------------------------------------------------------------------------
// SearchView
// ---------------------------------------------------------------------------

/// Read-only snapshot handed to an [`Observer`] after each step.
pub struct SearchView<'a> {
    grid: &'a Grid,
    states: &'a [CellState],
    changes: &'a [usize],
    phase: Phase,
    step: usize,
    start: usize,
    end: usize,
}

impl<'a> SearchView<'a> {
    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Visitation state of the cell at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.grid.index(p).map(|i| self.states[i])
    }

    /// Whether this observation follows an expansion or a reconstruction step.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based number of this observation within the run.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn start(&self) -> Point {
        self.grid.point(self.start)
    }

    pub fn end(&self) -> Point {
        self.grid.point(self.end)
    }

    /// Cells whose state changed since the previous observation, with their
    /// new state. The first observation also reports the endpoint markers.
    pub fn changes(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.changes
            .iter()
            .map(|&i| (self.grid.point(i), self.states[i]))
    }
}
