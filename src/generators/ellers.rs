use itertools::Itertools;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Eller's algorithm, one logical row at a time.
///
/// 1. Cells of the row not joined from above get a fresh set.
/// 2. Adjacent cells in different sets are joined with chance `xskew`, merging their sets.
/// 3. Every set opens at least one passage down to the next row, plus extra ones with chance
///    `yskew`. Cells below an opening inherit the set.
/// 4. On the last row every adjacent pair still in different sets is joined.
///
/// Set ids only ever need comparing within the current row, so merging relabels that row alone.
pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, xskew: f64, yskew: f64, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, CellState::Wall);
    let row_length = width.0;
    let last_row = height.0.saturating_sub(1);

    let mut carried: Vec<Option<usize>> = vec![None; row_length];
    let mut next_set = 0;

    for (row_index, row) in grid.iter_logical_rows().enumerate() {
        let mut sets = carried.iter()
            .map(|set| {
                set.unwrap_or_else(|| {
                    next_set += 1;
                    next_set - 1
                })
            })
            .collect::<Vec<usize>>();
        for cell in row.iter() {
            grid.set(*cell, CellState::Road);
        }

        let is_last_row = row_index == last_row;
        for col in 1..row_length {
            let (west, east) = (sets[col - 1], sets[col]);
            if west != east && (is_last_row || rng.gen::<f64>() < xskew) {
                grid.set(GridCoordinate::midpoint(row[col - 1], row[col]), CellState::Road);
                merge(&mut sets, east, west);
            }
        }
        if is_last_row {
            break;
        }

        let mut below: Vec<Option<usize>> = vec![None; row_length];
        for set in sets.iter().cloned().unique().collect::<Vec<_>>() {
            let members = (0..row_length)
                .filter(|col| sets[*col] == set)
                .collect::<SmallVec<[usize; 8]>>();
            let chosen = members[rng.gen_range(0..members.len())];
            below[chosen] = Some(set);
        }
        for col in 0..row_length {
            if below[col].is_none() && rng.gen::<f64>() < yskew {
                below[col] = Some(sets[col]);
            }
        }
        for (col, set) in below.iter().enumerate() {
            if set.is_some() {
                let cell = row[col];
                grid.set(GridCoordinate::new(cell.row + 1, cell.col), CellState::Road);
            }
        }

        carried = below;
    }

    grid
}

fn merge(sets: &mut [usize], from: usize, to: usize) {
    for set in sets.iter_mut().filter(|set| **set == from) {
        *set = to;
    }
}
