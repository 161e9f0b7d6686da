//! **gridsearch-core** — the grid model shared by the gridsearch engines.
//!
//! This crate provides the static topology a search runs over: grid
//! positions, cells with obstacle flags and cached 4-directional adjacency,
//! ASCII layouts, and random obstacle generation. Per-run visitation state
//! lives in `gridsearch-paths`, never on the grid itself.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::Point;
pub use grid::{Grid, Layout};
pub use mapgen::MapGen;
