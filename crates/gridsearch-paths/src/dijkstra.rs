use gridsearch_core::CellState;

use crate::context::{SearchContext, UNREACHABLE};
use crate::frontier::PriorityFrontier;
use crate::search::SearchStatus;
use crate::traits::Observer;

impl SearchContext<'_> {
    /// Dijkstra's algorithm with unit edge costs.
    ///
    /// Same frontier discipline as A* with the raw distance as key. A cell
    /// is finalized when first popped and never expanded again.
    pub(crate) fn dijkstra<O: Observer>(&mut self, observer: &mut O) -> SearchStatus {
        let grid = self.grid;

        let mut distances = vec![UNREACHABLE; grid.len()];
        distances[self.start] = 0;

        let mut open = PriorityFrontier::new();
        open.push(self.start, 0);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.closed[ci] || current.cost > distances[ci] {
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

            for &ni in grid.neighbors(ci) {
                if self.closed[ni] {
                    continue;
                }
                let distance = current.cost + 1;
                if distance >= distances[ni] {
                    continue;
                }
                distances[ni] = distance;
                self.came_from[ni] = ci;
                open.push(ni, distance);
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
    use gridsearch_core::{CellState, Grid, Point};

    use crate::{Algorithm, NoopObserver, search};

    #[test]
    fn expands_in_distance_rings() {
        let mut g = Grid::new(7);
        g.update_neighbors();
        let start = Point::new(3, 3);
        let end = Point::new(0, 0);
        let mut max_seen = 0;
        let out = search(
            Algorithm::Dijkstra,
            &g,
            start,
            end,
            &mut |v: &crate::SearchView<'_>| {
                for (p, s) in v.changes() {
                    if s == CellState::Visited {
                        let d = crate::manhattan(p, start);
                        // Cells are finalized in non-decreasing distance.
                        assert!(d >= max_seen);
                        max_seen = d;
                    }
                }
            },
        )
        .unwrap();
        assert_eq!(out.length, Some(6));
    }

    #[test]
    fn failure_leaves_no_frontier() {
        let layout = Grid::from_layout(
            "
            S.#..
            ..#..
            ###..
            ....E
            .....
            ",
        )
        .unwrap();
        let (s, e) = layout.endpoints().unwrap();
        let out = search(Algorithm::Dijkstra, &layout.grid, s, e, &mut NoopObserver).unwrap();
        assert!(!out.found());
        assert_eq!(out.length, None);
        assert_eq!(out.count(CellState::Frontier), 0);
        assert_eq!(out.count(CellState::Visited), 3);
        assert_eq!(out.expanded, 4);
    }
}
