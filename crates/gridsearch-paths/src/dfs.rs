use gridsearch_core::CellState;

use crate::context::SearchContext;
use crate::search::SearchStatus;
use crate::traits::Observer;

impl SearchContext<'_> {
    /// Depth-first search with a LIFO frontier.
    ///
    /// Cells are marked discovered when pushed, so each cell enters the
    /// frontier at most once and changes state at most twice (Frontier, then
    /// Visited). The path found is not necessarily the shortest.
    pub(crate) fn dfs<O: Observer>(&mut self, observer: &mut O) -> SearchStatus {
        let grid = self.grid;

        let mut discovered = vec![false; grid.len()];
        discovered[self.start] = true;
        let mut stack = vec![self.start];

        while let Some(ci) = stack.pop() {
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
                stack.push(ni);
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
    use std::collections::HashMap;

    use gridsearch_core::{CellState, Grid, Point};

    use crate::{Algorithm, NoopObserver, SearchView, search};

    #[test]
    fn dives_along_last_pushed_neighbor() {
        // Left is pushed last, so it is explored first: the search runs west
        // along row 0 before ever turning down.
        let mut g = Grid::new(4);
        g.update_neighbors();
        let out = search(
            Algorithm::Dfs,
            &g,
            Point::new(0, 3),
            Point::new(0, 0),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(out.length, Some(3));
        assert_eq!(out.expanded, 3);
    }

    #[test]
    fn may_return_longer_path_than_shortest() {
        let mut g = Grid::new(5);
        g.update_neighbors();
        let out = search(
            Algorithm::Dfs,
            &g,
            Point::new(0, 0),
            Point::new(0, 1),
            &mut NoopObserver,
        )
        .unwrap();
        assert!(out.found());
        // Right is pushed after down and up, so (0,1) is on top of the stack
        // right away here.
        assert_eq!(out.length, Some(1));

        // Going down from the start is pushed first and explored last, so
        // the search snakes along row 0 and back through row 2 before it
        // reaches (4, 0).
        let out = search(
            Algorithm::Dfs,
            &g,
            Point::new(0, 0),
            Point::new(4, 0),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(out.length, Some(12));
        let bfs = search(
            Algorithm::Bfs,
            &g,
            Point::new(0, 0),
            Point::new(4, 0),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(bfs.length, Some(4));
    }

    #[test]
    fn each_cell_changes_state_at_most_twice() {
        let layout = Grid::from_layout(
            "
            S....
            .#.#.
            .....
            .#.#.
            ....E
            ",
        )
        .unwrap();
        let (s, e) = layout.endpoints().unwrap();
        let mut transitions: HashMap<Point, Vec<CellState>> = HashMap::new();
        search(
            Algorithm::Dfs,
            &layout.grid,
            s,
            e,
            &mut |v: &SearchView<'_>| {
                for (p, st) in v.changes() {
                    transitions.entry(p).or_default().push(st);
                }
            },
        )
        .unwrap();
        for (p, states) in &transitions {
            if *p == s || *p == e {
                continue;
            }
            assert!(
                matches!(
                    states.as_slice(),
                    [CellState::Frontier]
                        | [CellState::Frontier, CellState::Visited]
                        | [CellState::Frontier, CellState::Visited, CellState::Path]
                        | [CellState::Frontier, CellState::Path]
                ),
                "unexpected transitions at {p}: {states:?}"
            );
        }
    }
}
