use rand::Rng;

use crate::cells::CellState;
use crate::grid::Grid;
use crate::symmetry::{apply_mirrored, carve_mirrored, Symmetry};
use crate::units::{Height, Width};

/// Recursive backtracker with an explicit stack.
///
/// 1. Open a random starting cell and push it.
/// 2. Look at the top of the stack and carve to a random unvisited neighbour, pushing it.
/// 3. With no unvisited neighbour left, pop.
/// 4. Done when the stack is empty.
///
/// Only the carved cells go on the stack, their mirror images are never pushed. The grid stays
/// symmetric after every write, so a cell with no unvisited neighbour has mirrors with none
/// either, and every wall cell is eventually reached from the stacked side.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, symmetry: Symmetry, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);

    let start = grid.random_position(rng);
    apply_mirrored(&mut grid, start, CellState::Road, symmetry);
    let mut track = Vec::with_capacity(grid.size());
    track.push(start);

    while let Some(&current) = track.last() {
        let unvisited = grid.find_neighbours(current, true, rng);
        match unvisited.first() {
            Some(&next) => {
                carve_mirrored(&mut grid, current, next, symmetry);
                track.push(next);
            }
            None => {
                track.pop();
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generators::test_support::{assert_mirror_invariant, assert_perfect};

    #[test]
    fn perfect_without_symmetry() {
        let mut rng = StdRng::seed_from_u64(1);
        for &(w, h) in &[(1, 1), (2, 2), (5, 3), (1, 9), (12, 7)] {
            let g = generate(Width(w), Height(h), Symmetry::None, &mut rng);
            assert_perfect(&g);
        }
    }

    #[test]
    fn mirrored_both_ways() {
        let mut rng = StdRng::seed_from_u64(2);
        let g = generate(Width(7), Height(5), Symmetry::Both, &mut rng);
        assert!(g.is_fully_connected());
        assert_mirror_invariant(&g, Symmetry::Both);
    }
}
