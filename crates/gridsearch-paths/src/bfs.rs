use std::collections::VecDeque;

use gridsearch_core::CellState;

use crate::context::SearchContext;
use crate::search::SearchStatus;
use crate::traits::Observer;

impl SearchContext<'_> {
    /// Breadth-first search.
    ///
    /// Each step has cost 1, so the first time a cell is discovered is also
    /// its shortest distance; the predecessor is recorded only then.
    pub(crate) fn bfs<O: Observer>(&mut self, observer: &mut O) -> SearchStatus {
        let grid = self.grid;

        let mut discovered = vec![false; grid.len()];
        discovered[self.start] = true;
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(self.start);

        while let Some(ci) = queue.pop_front() {
            if observer.is_cancelled() {
                return SearchStatus::Cancelled;
            }

            if ci == self.end {
                self.reconstruct(observer);
                return SearchStatus::Found;
            }

            self.expanded += 1;

            for &ni in grid.neighbors(ci) {
                if discovered[ni] {
                    continue;
                }
                discovered[ni] = true;
                self.came_from[ni] = ci;
                queue.push_back(ni);
                self.mark(ni, CellState::Frontier);
            }

            self.mark(ci, CellState::Visited);
            self.notify(observer);
        }

        SearchStatus::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use gridsearch_core::{Grid, Point};

    use crate::{Algorithm, NoopObserver, Phase, SearchView, search};

    #[test]
    fn one_observation_per_expansion() {
        let mut g = Grid::new(4);
        g.update_neighbors();
        let mut expanding = 0;
        let mut reconstructing = 0;
        let out = search(
            Algorithm::Bfs,
            &g,
            Point::new(0, 0),
            Point::new(0, 3),
            &mut |v: &SearchView<'_>| match v.phase() {
                Phase::Expanding => expanding += 1,
                Phase::Reconstructing => reconstructing += 1,
            },
        )
        .unwrap();
        assert_eq!(out.length, Some(3));
        assert_eq!(expanding, out.expanded);
        assert_eq!(reconstructing, 3);
    }

    #[test]
    fn adjacent_endpoints() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        let out = search(
            Algorithm::Bfs,
            &g,
            Point::new(1, 1),
            Point::new(2, 1),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(out.length, Some(1));
        assert_eq!(out.path, vec![Point::new(1, 1), Point::new(2, 1)]);
        // Down is explored first, so the end is found right after the start.
        assert_eq!(out.expanded, 1);
    }
}
