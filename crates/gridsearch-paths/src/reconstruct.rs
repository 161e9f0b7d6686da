use gridsearch_core::CellState;

use crate::context::{Phase, SearchContext};
use crate::traits::Observer;

impl SearchContext<'_> {
    /// Walk the predecessor map back from the end cell.
    ///
    /// Every cell stepped onto is marked [`CellState::Path`] (the endpoints
    /// keep their markers) and the observer is notified once per step, so
    /// the number of notifications equals the returned edge count. Stores
    /// the forward path (start..=end) in `self.path`.
    pub(crate) fn reconstruct<O: Observer>(&mut self, observer: &mut O) -> usize {
        self.set_phase(Phase::Reconstructing);

        let mut rev = vec![self.end];
        let mut ci = self.end;
        while let Some(prev) = self.parent(ci) {
            ci = prev;
            rev.push(ci);
            self.mark(ci, CellState::Path);
            log::trace!("path step {} at {}", rev.len() - 1, self.grid.point(ci));
            self.notify(observer);
        }
        self.mark_endpoints();

        let length = rev.len() - 1;
        let grid = self.grid;
        self.path = rev.into_iter().rev().map(|i| grid.point(i)).collect();
        length
    }
}

#[cfg(test)]
mod tests {
    use gridsearch_core::{Grid, Point};

    use crate::context::{SearchContext, SearchView};

    use super::*;

    #[test]
    fn walks_predecessors_and_counts_edges() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        let idx = |r, c| g.index(Point::new(r, c)).unwrap();
        let (start, end) = (idx(0, 0), idx(2, 2));
        let mut ctx = SearchContext::new(&g, start, end);
        // (0,0) -> (1,0) -> (2,0) -> (2,1) -> (2,2)
        ctx.came_from[idx(1, 0)] = start;
        ctx.came_from[idx(2, 0)] = idx(1, 0);
        ctx.came_from[idx(2, 1)] = idx(2, 0);
        ctx.came_from[end] = idx(2, 1);

        let mut calls = 0;
        let len = ctx.reconstruct(&mut |v: &SearchView<'_>| {
            assert_eq!(v.phase(), Phase::Reconstructing);
            calls += 1;
        });

        assert_eq!(len, 4);
        assert_eq!(calls, len);
        assert_eq!(
            ctx.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_eq!(ctx.states[idx(1, 0)], CellState::Path);
        assert_eq!(ctx.states[idx(2, 1)], CellState::Path);
        assert_eq!(ctx.states[start], CellState::Start);
        assert_eq!(ctx.states[end], CellState::End);
        assert_eq!(ctx.states[idx(1, 1)], CellState::Unvisited);
    }

    #[test]
    fn adjacent_endpoints_have_length_one() {
        let mut g = Grid::new(2);
        g.update_neighbors();
        let mut ctx = SearchContext::new(&g, 0, 1);
        ctx.came_from[1] = 0;
        let mut calls = 0;
        let len = ctx.reconstruct(&mut |_: &SearchView<'_>| calls += 1);
        assert_eq!(len, 1);
        assert_eq!(calls, 1);
        assert!(ctx.states.iter().all(|&s| s != CellState::Path));
    }

    #[test]
    fn no_predecessor_gives_zero() {
        let mut g = Grid::new(2);
        g.update_neighbors();
        let mut ctx = SearchContext::new(&g, 0, 3);
        let mut calls = 0;
        let len = ctx.reconstruct(&mut |_: &SearchView<'_>| calls += 1);
        assert_eq!(len, 0);
        assert_eq!(calls, 0);
        assert_eq!(ctx.path, vec![Point::new(1, 1)]);
    }
}
