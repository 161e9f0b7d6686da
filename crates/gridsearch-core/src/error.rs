use std::fmt;

use crate::geom::Point;

/// Errors raised while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A layout contained no rows.
    EmptyGrid,
    /// A layout row does not have as many columns as there are rows.
    NotSquare { rows: usize, width: usize },
    /// A layout contained a character outside `.#SE`.
    InvalidChar { ch: char, pos: Point },
    /// A layout lacks the `S` or `E` marker.
    MissingEndpoint(char),
    /// A layout has more than one `S` or `E` marker.
    DuplicateEndpoint(char),
    /// The point lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("grid layout is empty"),
            Self::NotSquare { rows, width } => {
                write!(f, "grid layout is not square: {rows} rows but a row of width {width}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingEndpoint(ch) => write!(f, "grid layout has no \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateEndpoint(ch) => {
                write!(f, "grid layout has more than one \u{201c}{ch}\u{201d} marker")
            }
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}
