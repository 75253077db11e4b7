use rand::Rng;

use crate::cells::CellState;
use crate::grid::Grid;
use crate::symmetry::{apply_mirrored, carve_mirrored, FrontierSet, Symmetry};
use crate::units::{Height, Width};

/// Randomised Prim's.
///
/// Grow the maze outwards from one random cell. The frontier holds unvisited cells next to the
/// maze; each step takes one of them at random, joins it to a random visited neighbour and adds
/// its own unvisited neighbours to the frontier.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, symmetry: Symmetry, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);

    let start = grid.random_position(rng);
    apply_mirrored(&mut grid, start, CellState::Road, symmetry);

    let mut frontier = FrontierSet::with_capacity(grid.size());
    for next in grid.find_neighbours(start, true, rng) {
        frontier.mirror_insert(&grid, next, symmetry);
    }

    while let Some(current) = frontier.take_random(rng) {
        frontier.mirror_evict(&grid, current, symmetry);
        if !grid.is_wall(current) {
            continue;
        }

        if let Some(&visited) = grid.find_neighbours(current, false, rng).first() {
            carve_mirrored(&mut grid, visited, current, symmetry);
        }

        for next in grid.find_neighbours(current, true, rng) {
            frontier.mirror_insert(&grid, next, symmetry);
        }
    }

    grid
}
