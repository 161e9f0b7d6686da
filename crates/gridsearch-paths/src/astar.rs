use gridsearch_core::CellState;

use crate::context::{SearchContext, UNREACHABLE};
use crate::distance::manhattan;
use crate::frontier::PriorityFrontier;
use crate::search::SearchStatus;
use crate::traits::Observer;

impl SearchContext<'_> {
    /// A* with the Manhattan heuristic and unit edge costs.
    ///
    /// The frontier is keyed by `(f, seq)`; improved cells are pushed again
    /// and their outdated entries skipped on pop.
    pub(crate) fn astar<O: Observer>(&mut self, observer: &mut O) -> SearchStatus {
        let grid = self.grid;
        let goal = grid.point(self.end);

        let mut g_score = vec![UNREACHABLE; grid.len()];
        g_score[self.start] = 0;

        let mut open = PriorityFrontier::new();
        open.push(self.start, manhattan(grid.point(self.start), goal));

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.closed[ci] {
                continue;
            }

            if observer.is_cancelled() {
                return SearchStatus::Cancelled;
            }

            if ci == self.end {
                self.reconstruct(observer);
                return SearchStatus::Found;
            }

            self.closed[ci] = true;
            self.expanded += 1;
            let current_g = g_score[ci];

            for &ni in grid.neighbors(ci) {
                if self.closed[ni] {
                    continue;
                }
                let tentative_g = current_g + 1;
                if tentative_g >= g_score[ni] {
                    continue;
                }
                g_score[ni] = tentative_g;
                self.came_from[ni] = ci;
                open.push(ni, tentative_g + manhattan(grid.point(ni), goal));
                self.mark(ni, CellState::Frontier);
            }

            self.mark(ci, CellState::Visited);
            self.notify(observer);
        }

        SearchStatus::Exhausted
    }
}
