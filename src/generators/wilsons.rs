use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{CellState, CompassPrimary, GridCoordinate, ALL_DIRECTIONS};
use crate::grid::Grid;
use crate::options::HuntOrder;
use crate::units::{Height, Width};
use crate::utils::{fnv_hashmap, FnvHashMap};

/// Wilson's, with loop-erased random walks.
///
/// One random cell seeds the maze. From an unvisited cell walk randomly until the maze is hit,
/// remembering only the last direction taken out of every cell so loops erase themselves. The
/// walk is then replayed from its first cell and carved in. Repeat until no unvisited cell is
/// left. Unbiased: every spanning tree is equally likely.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, hunt_order: HuntOrder, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);

    let seed = grid.random_position(rng);
    grid.set(seed, CellState::Road);
    let mut remaining = grid.size() - 1;

    let mut serpentine = grid.iter_serpentine();
    while remaining > 0 {
        let start = match hunt_order {
            HuntOrder::Random => random_unvisited(&grid, rng),
            HuntOrder::Serpentine => serpentine.find(|c| grid.is_wall(*c)),
        };
        let start = match start {
            Some(cell) => cell,
            None => break,
        };

        let walk = loop_erased_walk(&grid, start, rng);
        let carved = carve_walk(&mut grid, start, &walk);
        trace!("wilsons walk from {} carved {} cells", start, carved);
        remaining -= carved;
    }

    grid
}

/// Probe random cells until an unvisited one turns up. Only called while one exists.
fn random_unvisited<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<GridCoordinate> {
    loop {
        let candidate = grid.random_position(rng);
        if grid.is_wall(candidate) {
            return Some(candidate);
        }
    }
}

/// Random walk from `start` until an open cell is reached. Maps each cell on the walk to the
/// direction last taken out of it; a revisit overwrites the earlier exit, erasing the loop.
fn loop_erased_walk<R: Rng + ?Sized>(grid: &Grid,
                                     start: GridCoordinate,
                                     rng: &mut R)
                                     -> FnvHashMap<GridCoordinate, CompassPrimary> {
    let mut exits = fnv_hashmap(grid.size());
    let mut current = start;

    while grid.is_wall(current) {
        let moves = ALL_DIRECTIONS.iter()
            .filter_map(|dir| grid.passage_neighbour(current, *dir).map(|next| (*dir, next)))
            .collect::<SmallVec<[(CompassPrimary, GridCoordinate); 4]>>();
        let (dir, next) = match moves.choose(rng) {
            Some(&step) => step,
            None => break,
        };
        exits.insert(current, dir);
        current = next;
    }

    exits
}

/// Follow the recorded exits from `start`, opening each cell and the wall after it, until the
/// maze is joined. Returns the number of cells opened.
fn carve_walk(grid: &mut Grid, start: GridCoordinate, exits: &FnvHashMap<GridCoordinate, CompassPrimary>) -> usize {
    let mut carved = 0;
    let mut current = start;

    while grid.is_wall(current) {
        let next = match exits.get(&current).and_then(|dir| grid.passage_neighbour(current, *dir)) {
            Some(next) => next,
            None => break,
        };
        grid.set(current, CellState::Road);
        grid.set(GridCoordinate::midpoint(current, next), CellState::Road);
        carved += 1;
        current = next;
    }

    carved
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generators::test_support::assert_perfect;

    #[test]
    fn perfect_for_both_hunt_orders() {
        let mut rng = StdRng::seed_from_u64(71);
        for order in &[HuntOrder::Random, HuntOrder::Serpentine] {
            for &(w, h) in &[(1, 1), (2, 1), (4, 4), (10, 3)] {
                assert_perfect(&generate(Width(w), Height(h), *order, &mut rng));
            }
        }
    }

    #[test]
    fn replay_skips_erased_loops() {
        let mut grid = Grid::new(Width(3), Height(2), CellState::Wall);
        let gc = GridCoordinate::new;
        grid.set(gc(3, 1), CellState::Road);

        // (1,1) -> (1,3) -> (1,1) was overwritten by a later exit south
        let mut exits = fnv_hashmap(4);
        exits.insert(gc(1, 1), CompassPrimary::South);
        exits.insert(gc(1, 3), CompassPrimary::West);

        assert_eq!(carve_walk(&mut grid, gc(1, 1), &exits), 1);
        assert!(!grid.is_wall(gc(2, 1)));
        assert!(grid.is_wall(gc(1, 3)));
        assert!(grid.is_wall(gc(1, 2)));
    }
}
