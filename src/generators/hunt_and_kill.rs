use rand::seq::SliceRandom;
use rand::Rng;

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::options::HuntOrder;
use crate::symmetry::{apply_mirrored, carve_mirrored, Symmetry};
use crate::units::{Height, Width};

/// Hunt and kill.
///
/// Random walk from the current cell, carving into unvisited neighbours until stuck, then hunt for
/// a new place to walk from. A serpentine hunt scans for the first unvisited cell next to the
/// visited region and joins it on. A random hunt probes random cells and restarts the walk from a
/// visited one that still has unvisited neighbours; once the probes outnumber the grid positions
/// a final serpentine sweep picks up anything the probing missed.
pub fn generate<R: Rng + ?Sized>(width: Width,
                                 height: Height,
                                 hunt_order: HuntOrder,
                                 symmetry: Symmetry,
                                 rng: &mut R)
                                 -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);
    let probe_budget = grid.rows().0 * grid.columns().0;
    let mut probes = 0;

    let start = grid.random_position(rng);
    apply_mirrored(&mut grid, start, CellState::Road, symmetry);

    let mut current = Some(start);
    while let Some(cell) = current {
        walk(&mut grid, cell, symmetry, rng);

        current = match hunt_order {
            HuntOrder::Serpentine => None,
            HuntOrder::Random => hunt_random(&grid, &mut probes, probe_budget, rng),
        };
        if current.is_none() {
            current = hunt_serpentine(&mut grid, symmetry, rng);
        }
    }

    grid
}

fn walk<R: Rng + ?Sized>(grid: &mut Grid, start: GridCoordinate, symmetry: Symmetry, rng: &mut R) {
    let mut current = start;
    loop {
        let unvisited = grid.find_neighbours(current, true, rng);
        match unvisited.first() {
            Some(&next) => {
                carve_mirrored(grid, current, next, symmetry);
                current = next;
            }
            None => return,
        }
    }
}

/// A visited cell with unvisited neighbours, if one turns up before the budget runs out.
fn hunt_random<R: Rng + ?Sized>(grid: &Grid,
                                probes: &mut usize,
                                probe_budget: usize,
                                rng: &mut R)
                                -> Option<GridCoordinate> {
    while *probes < probe_budget {
        *probes += 1;
        let candidate = grid.random_position(rng);
        if !grid.is_wall(candidate) && !grid.find_neighbours(candidate, true, rng).is_empty() {
            return Some(candidate);
        }
    }
    None
}

/// The first unvisited cell, in serpentine order, that borders the visited region. It is joined
/// to a random visited neighbour before being returned.
fn hunt_serpentine<R: Rng + ?Sized>(grid: &mut Grid, symmetry: Symmetry, rng: &mut R) -> Option<GridCoordinate> {
    for cell in grid.iter_serpentine() {
        if !grid.is_wall(cell) {
            continue;
        }
        let visited = grid.find_neighbours(cell, false, rng);
        if let Some(&joined) = visited.choose(rng) {
            carve_mirrored(grid, joined, cell, symmetry);
            return Some(cell);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generators::test_support::{assert_mirror_invariant, assert_perfect};

    #[test]
    fn perfect_for_both_hunt_orders() {
        let mut rng = StdRng::seed_from_u64(41);
        for order in &[HuntOrder::Random, HuntOrder::Serpentine] {
            for &(w, h) in &[(1, 1), (2, 2), (3, 8), (11, 5)] {
                assert_perfect(&generate(Width(w), Height(h), *order, Symmetry::None, &mut rng));
            }
        }
    }

    #[test]
    fn mirrored_horizontally() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = generate(Width(6), Height(7), HuntOrder::Serpentine, Symmetry::Horizontal, &mut rng);
        assert!(g.is_fully_connected());
        assert_mirror_invariant(&g, Symmetry::Horizontal);
    }
}
