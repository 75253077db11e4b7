use rand::Rng;

use crate::cells::CellState;
use crate::grid::Grid;
use crate::symmetry::{apply_mirrored, carve_mirrored, FrontierSet, Symmetry};
use crate::units::{Height, Width};

/// Growing tree.
///
/// Keep a list of active cells, starting with one random cell. Each step picks the newest active
/// cell with chance `backtrack_chance` (behaving like the recursive backtracker) or else any
/// active cell at random (behaving like Prim's), then carves to one of its unvisited neighbours and
/// makes that neighbour active. Cells without unvisited neighbours leave the list.
pub fn generate<R: Rng + ?Sized>(width: Width,
                                 height: Height,
                                 backtrack_chance: f64,
                                 symmetry: Symmetry,
                                 rng: &mut R)
                                 -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);

    let start = grid.random_position(rng);
    apply_mirrored(&mut grid, start, CellState::Road, symmetry);
    let mut active = FrontierSet::with_capacity(grid.size());
    active.mirror_insert(&grid, start, symmetry);

    loop {
        let picked = if rng.gen::<f64>() < backtrack_chance {
            active.last()
        } else {
            active.choose(rng)
        };
        let current = match picked {
            Some(cell) => cell,
            None => break,
        };

        let unvisited = grid.find_neighbours(current, true, rng);
        match unvisited.first() {
            Some(&next) => {
                carve_mirrored(&mut grid, current, next, symmetry);
                active.mirror_insert(&grid, next, symmetry);
            }
            None => {
                active.mirror_evict(&grid, current, symmetry);
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
    fn perfect_across_backtrack_chances() {
        let mut rng = StdRng::seed_from_u64(31);
        for &chance in &[0.0, 0.25, 0.5, 1.0] {
            for &(w, h) in &[(1, 1), (2, 2), (6, 9)] {
                assert_perfect(&generate(Width(w), Height(h), chance, Symmetry::None, &mut rng));
            }
        }
    }

    #[test]
    fn mirrored_vertically() {
        let mut rng = StdRng::seed_from_u64(32);
        let g = generate(Width(9), Height(4), 0.5, Symmetry::Vertical, &mut rng);
        assert!(g.is_fully_connected());
        assert_mirror_invariant(&g, Symmetry::Vertical);
    }
}
