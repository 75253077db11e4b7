use petgraph::unionfind::UnionFind;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Randomised Kruskal's.
///
/// Every passage cell starts in its own tree. Walk the interior walls in a random order and knock
/// down each one whose two sides belong to different trees, joining them. Stops as soon as a
/// single tree is left.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);
    for cell in grid.iter_passages() {
        grid.set(cell, CellState::Road);
    }

    let mut walls = interior_walls(&grid);
    walls.shuffle(rng);

    let mut forest = UnionFind::<usize>::new(grid.size());
    let mut trees = grid.size();
    let logical_index = |c: GridCoordinate| (c.row / 2) * width.0 + c.col / 2;

    for (wall, a, b) in walls {
        if trees <= 1 {
            break;
        }
        if forest.union(logical_index(a), logical_index(b)) {
            grid.set(wall, CellState::Road);
            trees -= 1;
        }
    }

    grid
}

/// Each wall cell between two passage cells, along with the two cells it separates.
fn interior_walls(grid: &Grid) -> Vec<(GridCoordinate, GridCoordinate, GridCoordinate)> {
    let rows = grid.rows().0;
    let columns = grid.columns().0;
    grid.iter_coordinates()
        .filter(|c| c.is_wall_position() && c.row > 0 && c.col > 0 && c.row + 1 < rows && c.col + 1 < columns)
        .map(|wall| {
            if wall.row % 2 == 1 {
                (wall, GridCoordinate::new(wall.row, wall.col - 1), GridCoordinate::new(wall.row, wall.col + 1))
            } else {
                (wall, GridCoordinate::new(wall.row - 1, wall.col), GridCoordinate::new(wall.row + 1, wall.col))
            }
        })
        .collect()
}
