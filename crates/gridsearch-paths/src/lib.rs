//! Step-observable grid search.
//!
//! This crate runs four classic search strategies over a
//! [`gridsearch_core::Grid`] and reports every step to an [`Observer`]:
//!
//! - **A\*** with the Manhattan heuristic ([`Algorithm::AStar`])
//! - **Dijkstra** with unit edge costs ([`Algorithm::Dijkstra`])
//! - **Breadth-first search** ([`Algorithm::Bfs`])
//! - **Depth-first search** ([`Algorithm::Dfs`]), which is not optimal
//!
//! All strategies go through [`search`]. Each run owns its own visitation,
//! cost and predecessor state, so the grid is only borrowed and can be
//! searched again without a reset.
//!
//! # Observation protocol
//!
//! | Hook | When |
//! |---|---|
//! | [`Observer::observe`] | after each expansion step and each reconstruction step |
//! | [`Observer::is_cancelled`] | once per dequeue, before the cell is expanded |

mod astar;
mod bfs;
mod context;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod reconstruct;
mod search;
mod traits;

pub use context::{Phase, SearchView, UNREACHABLE};
pub use distance::manhattan;
pub use error::SearchError;
pub use search::{Algorithm, ParseAlgorithmError, SearchOutcome, SearchStatus, search, validate};
pub use traits::{CancelToken, Cancellable, NoopObserver, Observer};
