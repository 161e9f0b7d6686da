//! Random obstacle generation.
//!
//! Stands in for a user painting walls by hand: [`MapGen::scatter`] drops
//! obstacles uniformly at random, and [`MapGen::random_open`] picks an open
//! cell to use as an endpoint.

use rand::Rng;

use crate::geom::Point;
use crate::grid::Grid;

/// Obstacle generator driven by a caller-supplied RNG.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Turn each cell into an obstacle with probability `density`
    /// (clamped to 0.0–1.0), never touching the points in `keep`.
    ///
    /// Existing obstacles are left as they are. Returns the number of cells
    /// newly turned into obstacles. The grid's neighbour lists are stale
    /// afterwards if anything changed.
    pub fn scatter(&mut self, grid: &mut Grid, density: f64, keep: &[Point]) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut placed = 0;
        for idx in 0..grid.len() {
            let p = grid.point(idx);
            // Draw for every cell so the layout depends only on the seed.
            let r: f64 = self.rng.random();
            if r >= density || keep.contains(&p) {
                continue;
            }
            if let Ok(true) = grid.set_obstacle(p, true) {
                placed += 1;
            }
        }
        placed
    }

    /// A uniformly chosen open cell not listed in `exclude`, or `None` if
    /// there is none.
    pub fn random_open(&mut self, grid: &Grid, exclude: &[Point]) -> Option<Point> {
        let open: Vec<Point> = grid
            .iter()
            .filter(|c| !c.is_obstacle() && !exclude.contains(&c.pos()))
            .map(|c| c.pos())
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_keep_and_density_bounds() {
        let mut grid = Grid::new(10);
        let keep = [Point::new(0, 0), Point::new(9, 9)];
        let mut mg = MapGen::new(StdRng::seed_from_u64(7));
        let placed = mg.scatter(&mut grid, 1.0, &keep);
        assert_eq!(placed, 98);
        assert!(!grid.is_obstacle(keep[0]));
        assert!(!grid.is_obstacle(keep[1]));
        assert!(grid.neighbors_stale());

        let mut empty = Grid::new(10);
        assert_eq!(mg.scatter(&mut empty, 0.0, &[]), 0);
        assert_eq!(empty.obstacle_count(), 0);
    }

    #[test]
    fn scatter_is_reproducible_for_a_seed() {
        let mut a = Grid::new(8);
        let mut b = Grid::new(8);
        MapGen::new(StdRng::seed_from_u64(42)).scatter(&mut a, 0.3, &[]);
        MapGen::new(StdRng::seed_from_u64(42)).scatter(&mut b, 0.3, &[]);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn random_open_skips_obstacles_and_exclusions() {
        let mut grid = Grid::new(2);
        grid.set_obstacle(Point::new(0, 0), true).unwrap();
        grid.set_obstacle(Point::new(0, 1), true).unwrap();
        let mut mg = MapGen::new(StdRng::seed_from_u64(1));
        for _ in 0..20 {
            let p = mg.random_open(&grid, &[Point::new(1, 0)]);
            assert_eq!(p, Some(Point::new(1, 1)));
        }
        assert_eq!(
            mg.random_open(&grid, &[Point::new(1, 0), Point::new(1, 1)]),
            None
        );
    }
}
