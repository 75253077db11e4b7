use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::{Graph, Undirected};

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::symmetry::Symmetry;

/// A maze is perfect when its logical cells and carved walls form a single spanning tree, all
/// passage cells are open, and every corner and border position is still a wall.
pub fn assert_perfect(grid: &Grid) {
    let (rows, columns) = (grid.rows().0, grid.columns().0);
    let width = grid.base_width().0;

    for coord in grid.iter_coordinates() {
        let on_border = coord.row == 0 || coord.col == 0 || coord.row + 1 == rows || coord.col + 1 == columns;
        let is_corner = coord.row % 2 == 0 && coord.col % 2 == 0;
        if on_border || is_corner {
            assert!(grid.is_wall(coord), "expected a wall at {}\n{:?}", coord, grid);
        }
        if coord.is_passage() {
            assert!(!grid.is_wall(coord), "expected an open passage cell at {}", coord);
        }
    }

    let mut graph = Graph::<(), (), Undirected>::with_capacity(grid.size(), grid.size());
    let nodes = (0..grid.size()).map(|_| graph.add_node(())).collect::<Vec<_>>();
    let node = |c: GridCoordinate| nodes[(c.row / 2) * width + c.col / 2];

    for wall in grid.iter_coordinates().filter(|c| c.is_wall_position() && !grid.is_wall(*c)) {
        let (a, b) = separated_cells(wall);
        graph.add_edge(node(a), node(b), ());
    }

    assert_eq!(graph.edge_count(), grid.size() - 1, "a spanning tree has one edge fewer than nodes");
    assert_eq!(connected_components(&graph), 1);
    assert!(!is_cyclic_undirected(&graph));
}

/// The logical cells of one reflected copy, axis cells included, joined by their carved walls form
/// a spanning tree of that copy. Meant for odd sizes on the mirrored axes.
pub fn assert_copy_is_tree(grid: &Grid, symmetry: Symmetry) {
    let (width, height) = (grid.base_width().0, grid.base_height().0);
    let last_col = if symmetry.mirrors_columns() { (width - 1) / 2 } else { width - 1 };
    let last_row = if symmetry.mirrors_rows() { (height - 1) / 2 } else { height - 1 };
    let copy_width = last_col + 1;
    let in_copy = |c: GridCoordinate| c.row / 2 <= last_row && c.col / 2 <= last_col;

    let cells = (last_row + 1) * copy_width;
    let mut graph = Graph::<(), (), Undirected>::with_capacity(cells, cells);
    let nodes = (0..cells).map(|_| graph.add_node(())).collect::<Vec<_>>();
    let node = |c: GridCoordinate| nodes[(c.row / 2) * copy_width + c.col / 2];

    for wall in grid.iter_coordinates().filter(|c| c.is_wall_position() && !grid.is_wall(*c)) {
        let (a, b) = separated_cells(wall);
        if in_copy(a) && in_copy(b) {
            graph.add_edge(node(a), node(b), ());
        }
    }

    assert_eq!(graph.edge_count(), cells - 1, "{} copy is not spanned by a tree\n{:?}", symmetry, grid);
    assert_eq!(connected_components(&graph), 1);
    assert!(!is_cyclic_undirected(&graph));
}

/// The two passage cells on either side of an interior wall cell.
fn separated_cells(wall: GridCoordinate) -> (GridCoordinate, GridCoordinate) {
    if wall.row % 2 == 1 {
        (GridCoordinate::new(wall.row, wall.col - 1), GridCoordinate::new(wall.row, wall.col + 1))
    } else {
        (GridCoordinate::new(wall.row - 1, wall.col), GridCoordinate::new(wall.row + 1, wall.col))
    }
}

/// Every position holds the same state as each of its reflections.
pub fn assert_mirror_invariant(grid: &Grid, symmetry: Symmetry) {
    for coord in grid.iter_coordinates() {
        let state: Option<CellState> = grid.get(coord);
        for mirrored in symmetry.mirrored_positions(grid, coord) {
            assert_eq!(grid.get(mirrored), state, "{} and its reflection {} differ", coord, mirrored);
        }
    }
}
