//! The [`Grid`] type — a square N×N array of [`Cell`]s with cached
//! 4-directional adjacency.
//!
//! Neighbour lists are computed explicitly by [`Grid::update_neighbors`].
//! Any obstacle edit marks them stale until the next recomputation, and
//! searches refuse to run on a stale grid.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::Point;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A square grid of [`Cell`]s stored in row-major order.
#[derive(Debug, Clone)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
    neighbors_stale: bool,
}

impl Grid {
    /// Create a `side`×`side` grid with no obstacles.
    ///
    /// Neighbour lists start out stale.
    pub fn new(side: i32) -> Self {
        let n = side.max(0);
        let cells = (0..n)
            .flat_map(|row| (0..n).map(move |col| Cell::new(Point::new(row, col))))
            .collect();
        Self {
            side: n as usize,
            cells,
            neighbors_stale: true,
        }
    }

    /// Side length N.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let n = self.side as i32;
        p.row >= 0 && p.col >= 0 && p.row < n && p.col < n
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.side + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        if self.side == 0 {
            return Point::ZERO;
        }
        Point::new((idx / self.side) as i32, (idx % self.side) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).and_then(|i| self.cells.get(i))
    }

    /// Whether the cell at `p` is an obstacle. Out-of-bounds points count
    /// as obstacles.
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.cell(p).is_none_or(Cell::is_obstacle)
    }

    /// Set or clear the obstacle flag at `p`.
    ///
    /// Returns whether the flag changed. A change marks the neighbour lists
    /// stale.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> Result<bool, GridError> {
        let idx = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        let cell = &mut self.cells[idx];
        if cell.is_obstacle() == obstacle {
            return Ok(false);
        }
        cell.set_obstacle(obstacle);
        self.neighbors_stale = true;
        Ok(true)
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        let mut changed = false;
        for cell in &mut self.cells {
            changed |= cell.is_obstacle();
            cell.set_obstacle(false);
        }
        if changed {
            self.neighbors_stale = true;
        }
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle()).count()
    }

    /// Recompute every cell's traversable neighbour list.
    ///
    /// Obstacle cells get an empty list and never appear in anyone else's.
    pub fn update_neighbors(&mut self) {
        for idx in 0..self.cells.len() {
            let p = self.point(idx);
            let mut list = std::mem::take(&mut self.cells[idx].neighbors);
            list.clear();
            if !self.cells[idx].is_obstacle() {
                for np in p.neighbors_4() {
                    let Some(ni) = self.index(np) else {
                        continue;
                    };
                    if !self.cells[ni].is_obstacle() {
                        list.push(ni);
                    }
                }
            }
            self.cells[idx].neighbors = list;
        }
        self.neighbors_stale = false;
    }

    /// Whether obstacles changed since the last [`update_neighbors`](Self::update_neighbors).
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.neighbors_stale
    }

    /// Cached neighbour indices of the cell at flat index `idx`.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.cells.get(idx).map_or(&[], Cell::neighbors)
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Parse an ASCII layout.
    ///
    /// `.` is open, `#` an obstacle, `S` and `E` the (optional, unique)
    /// start and end. Blank lines and surrounding whitespace are ignored.
    /// The returned grid has its neighbour lists computed.
    pub fn from_layout(text: &str) -> Result<Layout, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let n = rows.len();
        let mut grid = Grid::new(n as i32);
        let mut start = None;
        let mut end = None;

        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != n {
                return Err(GridError::NotSquare { rows: n, width });
            }
            for (c, ch) in line.chars().enumerate() {
                let p = Point::new(r as i32, c as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        grid.set_obstacle(p, true)?;
                    }
                    'S' => set_marker(&mut start, p, 'S')?,
                    'E' => set_marker(&mut end, p, 'E')?,
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                }
            }
        }

        grid.update_neighbors();
        Ok(Layout { grid, start, end })
    }
}

fn set_marker(slot: &mut Option<Point>, p: Point, ch: char) -> Result<(), GridError> {
    if slot.is_some() {
        return Err(GridError::DuplicateEndpoint(ch));
    }
    *slot = Some(p);
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.side.max(1)).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                let ch = if cell.is_obstacle() {
                    '#'
                } else {
                    CellState::Unvisited.symbol()
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A parsed ASCII layout: the grid plus its optional endpoint markers.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Layout {
    /// Both endpoints, or an error naming the missing marker.
    pub fn endpoints(&self) -> Result<(Point, Point), GridError> {
        let start = self.start.ok_or(GridError::MissingEndpoint('S'))?;
        let end = self.end.ok_or(GridError::MissingEndpoint('E'))?;
        Ok((start, end))
    }
}
