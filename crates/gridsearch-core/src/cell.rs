//! The [`Cell`] type and the [`CellState`] visitation marker.

use crate::geom::Point;

/// Visitation state of a cell during a search run.
///
/// `Start` and `End` are markers that take display precedence over the
/// bookkeeping states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier.
    Frontier,
    /// Dequeued and expanded.
    Visited,
    /// On the reconstructed path.
    Path,
    Start,
    End,
}

impl CellState {
    /// Whether this is one of the endpoint markers.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// ASCII symbol used by layouts and rendered outcomes.
    pub const fn symbol(self) -> char {
        match self {
            Self::Unvisited => '.',
            Self::Frontier => 'o',
            Self::Visited => 'x',
            Self::Path => '*',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }
}

/// A grid position with an obstacle flag and a cached neighbour list.
///
/// Neighbours are stored as flat indices into the owning grid and are only
/// valid after [`Grid::update_neighbors`](crate::Grid::update_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    obstacle: bool,
    pub(crate) neighbors: Vec<usize>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            obstacle: false,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Position of the cell.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    /// Whether the cell blocks movement.
    #[inline]
    pub const fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    #[inline]
    pub(crate) fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    /// Cached traversable neighbour indices, in down/up/right/left order.
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_open_without_neighbors() {
        let c = Cell::new(Point::new(2, 3));
        assert_eq!(c.row(), 2);
        assert_eq!(c.col(), 3);
        assert!(!c.is_obstacle());
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn state_symbols_are_distinct() {
        let all = [
            CellState::Unvisited,
            CellState::Frontier,
            CellState::Visited,
            CellState::Path,
            CellState::Start,
            CellState::End,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.symbol(), b.symbol());
            }
        }
        assert!(CellState::Start.is_endpoint());
        assert!(!CellState::Path.is_endpoint());
    }
}
