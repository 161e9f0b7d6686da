use std::fmt;
use std::str::FromStr;

use gridsearch_core::{CellState, Grid, Point};

use crate::context::SearchContext;
use crate::error::SearchError;
use crate::traits::Observer;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The available search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Every strategy, in display order.
    pub const ALL: [Algorithm; 4] = [Self::AStar, Self::Dijkstra, Self::Bfs, Self::Dfs];

    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Whether the reported length is always a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar, dijkstra, bfs or dfs)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The end cell was reached.
    Found,
    /// The frontier emptied without reaching the end.
    Exhausted,
    /// The observer requested cancellation.
    Cancelled,
}

/// Result of a [`search`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub status: SearchStatus,
    /// Number of edges on the path; `None` unless found.
    pub length: Option<usize>,
    /// The path from start to end inclusive; empty unless found.
    pub path: Vec<Point>,
    /// Number of cells dequeued and expanded.
    pub expanded: usize,
    side: usize,
    states: Vec<CellState>,
}

impl SearchOutcome {
    #[inline]
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Final visitation state of the cell at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<CellState> {
        let n = self.side as i32;
        if p.row < 0 || p.col < 0 || p.row >= n || p.col >= n {
            return None;
        }
        self.states
            .get(p.row as usize * self.side + p.col as usize)
            .copied()
    }

    /// Number of cells that ended in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Draw the final states as ASCII, one row per line, with `#` for
    /// obstacles of `grid`.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(self.states.len() + self.side);
        for (i, cell) in grid.iter().enumerate() {
            if i > 0 && i % self.side == 0 {
                out.push('\n');
            }
            if cell.is_obstacle() {
                out.push('#');
            } else {
                let st = self.states.get(i).copied().unwrap_or_default();
                out.push(st.symbol());
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Check a configuration without allocating any search state.
///
/// Returns the flat indices of `start` and `end`.
pub fn validate(grid: &Grid, start: Point, end: Point) -> Result<(usize, usize), SearchError> {
    let si = grid.index(start).ok_or(SearchError::OutOfBounds(start))?;
    let ei = grid.index(end).ok_or(SearchError::OutOfBounds(end))?;
    if si == ei {
        return Err(SearchError::SameEndpoints(start));
    }
    for p in [start, end] {
        if grid.is_obstacle(p) {
            return Err(SearchError::ObstacleEndpoint(p));
        }
    }
    if grid.neighbors_stale() {
        return Err(SearchError::StaleNeighbors);
    }
    Ok((si, ei))
}

/// Run `algorithm` from `start` to `end` over `grid`.
///
/// The observer is called after every expansion step and every
/// path-reconstruction step, and polled for cancellation once per dequeue.
/// The grid is never modified, so the same grid can be searched again
/// without any reset.
pub fn search<O: Observer>(
    algorithm: Algorithm,
    grid: &Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError> {
    let (si, ei) = validate(grid, start, end)?;

    let side = grid.side();
    log::debug!("{algorithm} search from {start} to {end} on a {side}x{side} grid");

    let mut ctx = SearchContext::new(grid, si, ei);
    let status = match algorithm {
        Algorithm::AStar => ctx.astar(observer),
        Algorithm::Dijkstra => ctx.dijkstra(observer),
        Algorithm::Bfs => ctx.bfs(observer),
        Algorithm::Dfs => ctx.dfs(observer),
    };

    let length = match status {
        SearchStatus::Found => Some(ctx.path.len().saturating_sub(1)),
        SearchStatus::Exhausted | SearchStatus::Cancelled => None,
    };

    log::debug!(
        "{algorithm} search finished: {status:?}, length {length:?}, {} cells expanded",
        ctx.expanded
    );

    Ok(SearchOutcome {
        algorithm,
        status,
        length,
        path: ctx.path,
        expanded: ctx.expanded,
        side,
        states: ctx.states,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::NoopObserver;

    #[test]
    fn outcome_round_trip() {
        let mut g = Grid::new(4);
        g.update_neighbors();
        let out = search(
            Algorithm::AStar,
            &g,
            Point::new(0, 0),
            Point::new(3, 2),
            &mut NoopObserver,
        )
        .unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }
}
