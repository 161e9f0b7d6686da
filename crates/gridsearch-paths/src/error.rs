use std::fmt;

use gridsearch_core::Point;

/// An invalid search configuration, rejected before any search state is
/// allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and end are the same cell.
    SameEndpoints(Point),
    /// An endpoint lies outside the grid.
    OutOfBounds(Point),
    /// An endpoint is an obstacle.
    ObstacleEndpoint(Point),
    /// Obstacles changed since the neighbour lists were last computed.
    StaleNeighbors,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameEndpoints(p) => write!(f, "start and end are the same cell {p}"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::ObstacleEndpoint(p) => write!(f, "endpoint {p} is an obstacle"),
            Self::StaleNeighbors => {
                f.write_str("neighbour lists are stale; call Grid::update_neighbors first")
            }
        }
    }
}

impl std::error::Error for SearchError {}
