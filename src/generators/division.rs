use rand::Rng;

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::units::{Height, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Cut {
    /// A wall running down a column, splitting the region into west and east halves.
    Vertical,
    /// A wall running along a row, splitting the region into north and south halves.
    Horizontal,
}

/// An inclusive rectangle of grid positions. Its corners are always passage cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct Region {
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
}

impl Region {
    fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }
}

/// Recursive division, using a stack of regions rather than recursion.
///
/// Start with every interior position open, then repeatedly bisect a region with a wall that has
/// a single door in it. Regions one logical cell wide or high are left alone. Tall regions are cut
/// horizontally, wide ones vertically and square ones either way at random.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, CellState::Road);
    let (rows, columns) = (grid.rows().0, grid.columns().0);

    for col in 0..columns {
        grid.set(GridCoordinate::new(0, col), CellState::Wall);
        grid.set(GridCoordinate::new(rows - 1, col), CellState::Wall);
    }
    for row in 0..rows {
        grid.set(GridCoordinate::new(row, 0), CellState::Wall);
        grid.set(GridCoordinate::new(row, columns - 1), CellState::Wall);
    }

    let mut region_stack = vec![Region {
        min_row: 1,
        min_col: 1,
        max_row: rows - 2,
        max_col: columns - 2,
    }];

    while let Some(region) = region_stack.pop() {
        let (region_height, region_width) = (region.height(), region.width());
        if region_height <= 1 || region_width <= 1 {
            continue;
        }

        let cut = if region_width < region_height {
            Cut::Horizontal
        } else if region_width > region_height {
            Cut::Vertical
        } else if rng.gen() {
            Cut::Horizontal
        } else {
            Cut::Vertical
        };

        // The cut sits on an odd offset (a wall row/column), the door on an even one (a passage).
        let (cut_length, door_length) = match cut {
            Cut::Vertical => (region_width, region_height),
            Cut::Horizontal => (region_height, region_width),
        };
        let cut_offset = rng.gen_range(0..cut_length / 2) * 2 + 1;
        let door_offset = rng.gen_range(0..=door_length / 2) * 2;

        match cut {
            Cut::Vertical => {
                let col = region.min_col + cut_offset;
                for row in region.min_row..=region.max_row {
                    grid.set(GridCoordinate::new(row, col), CellState::Wall);
                }
                grid.set(GridCoordinate::new(region.min_row + door_offset, col), CellState::Road);

                region_stack.push(Region { max_col: col - 1, ..region });
                region_stack.push(Region { min_col: col + 1, ..region });
            }
            Cut::Horizontal => {
                let row = region.min_row + cut_offset;
                for col in region.min_col..=region.max_col {
                    grid.set(GridCoordinate::new(row, col), CellState::Wall);
                }
                grid.set(GridCoordinate::new(row, region.min_col + door_offset), CellState::Road);

                region_stack.push(Region { max_row: row - 1, ..region });
                region_stack.push(Region { min_row: row + 1, ..region });
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
    use crate::generators::test_support::assert_perfect;

    #[test]
    fn perfect_for_assorted_shapes() {
        let mut rng = StdRng::seed_from_u64(11);
        for &(w, h) in &[(1, 1), (2, 2), (3, 3), (1, 6), (6, 1), (9, 4), (4, 9), (10, 10)] {
            let g = generate(Width(w), Height(h), &mut rng);
            assert_perfect(&g);
        }
    }

    #[test]
    fn single_column_is_one_corridor() {
        let mut rng = StdRng::seed_from_u64(12);
        let g = generate(Width(1), Height(4), &mut rng);
        for row in 1..8 {
            assert_eq!(g.get(GridCoordinate::new(row, 1)), Some(CellState::Road));
        }
    }
}
