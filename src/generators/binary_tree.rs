use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::options::{Skew, ALL_SKEWS};
use crate::units::{Height, Width};

/// Apply the binary tree maze generation algorithm.
/// Every cell carves a passage in one of two perpendicular directions. The two directions are
/// fixed for the whole maze, otherwise we would get areas with no way in or out and the maze
/// would not be perfect. The cell in the skew's corner has nowhere to go and carves nothing,
/// which leaves exactly `cells - 1` passages.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, skew: Option<Skew>, rng: &mut R) -> Grid {
    let skew = skew.unwrap_or_else(|| ALL_SKEWS[rng.gen_range(0..ALL_SKEWS.len())]);
    let directions = skew.directions();
    let mut grid = Grid::new(width, height, CellState::Wall);

    for cell in grid.iter_passages() {
        grid.set(cell, CellState::Road);

        let neighbours = directions.iter()
            .filter_map(|dir| grid.passage_neighbour(cell, *dir))
            .collect::<SmallVec<[GridCoordinate; 2]>>();

        if let Some(&link) = neighbours.choose(rng) {
            grid.set(GridCoordinate::midpoint(cell, link), CellState::Road);
        }
    }

    grid
}
