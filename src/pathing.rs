// Solving works on the doubled grid directly: a step is two positions long, the wall cell in
// between and the next passage cell, and a step is only possible when both are Road.
//
// The walk is a randomised depth first search without a visited set. It only avoids stepping
// straight back to where it came from when there is any other choice, so dead ends get
// re-entered and the raw path is full of loops. `prune` cuts them out afterwards.

use error_chain::bail;
use lazy_static::lazy_static;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp;
use std::fmt;
use std::str::FromStr;

use crate::cells::{CellCoordinate, CoordinateSmallVec, GridCoordinate, ALL_DIRECTIONS};
use crate::errors::*;
use crate::grid::Grid;
use crate::utils::{fnv_hashmap, normalise_name, FnvHashMap};

/// A walk through the grid, one position per element, consecutive elements adjacent.
pub type Path = Vec<GridCoordinate>;

const ITERATIONS_PER_GRID_SPAN: usize = 10_000;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum SolverMethod {
    Backtracking,
}

pub const ALL_SOLVERS: [SolverMethod; 1] = [SolverMethod::Backtracking];

lazy_static! {
    static ref SOLVERS_BY_NAME: FnvHashMap<&'static str, SolverMethod> = {
        let mut registry = fnv_hashmap(ALL_SOLVERS.len());
        for method in ALL_SOLVERS.iter() {
            registry.insert(method.name(), *method);
        }
        registry
    };
}

impl SolverMethod {
    pub fn name(self) -> &'static str {
        match self {
            SolverMethod::Backtracking => "backtracking",
        }
    }

    pub fn names() -> Vec<&'static str> {
        ALL_SOLVERS.iter().map(|m| m.name()).collect()
    }

    pub fn from_name(name: &str) -> Result<SolverMethod> {
        match SOLVERS_BY_NAME.get(normalise_name(name).as_str()) {
            Some(method) => Ok(*method),
            None => bail!(ErrorKind::UnknownSolver(name.to_string(), SolverMethod::names())),
        }
    }
}

impl Default for SolverMethod {
    fn default() -> SolverMethod {
        SolverMethod::Backtracking
    }
}

impl FromStr for SolverMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<SolverMethod> {
        SolverMethod::from_name(name)
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solve from `start` to `end`, both logical cell coordinates, and prune the loops out of the
/// result. Returns a list of solutions, currently always exactly one.
pub fn solve<R: Rng + ?Sized>(grid: &Grid,
                              start: CellCoordinate,
                              end: CellCoordinate,
                              method: SolverMethod,
                              rng: &mut R)
                              -> Result<Vec<Path>> {
    solve_with(grid, start, end, method, true, rng)
}

/// `solve` with pruning optional. Without it the raw walk comes back, loops included.
pub fn solve_with<R: Rng + ?Sized>(grid: &Grid,
                                   start: CellCoordinate,
                                   end: CellCoordinate,
                                   method: SolverMethod,
                                   prune_loops: bool,
                                   rng: &mut R)
                                   -> Result<Vec<Path>> {
    check_in_bounds(grid, start)?;
    check_in_bounds(grid, end)?;

    let path = match method {
        SolverMethod::Backtracking => backtracking_walk(grid, start.to_grid(), end.to_grid(), rng)?,
    };
    let raw_length = path.len();
    let path = if prune_loops { prune(&path) } else { path };

    debug!("{} solve {:?} -> {:?}: walked {} positions, kept {}",
           method, start, end, raw_length, path.len());
    Ok(vec![path])
}

fn check_in_bounds(grid: &Grid, cell: CellCoordinate) -> Result<()> {
    if cell.row >= grid.base_height().0 || cell.col >= grid.base_width().0 {
        bail!(ErrorKind::CoordinateOutOfBounds(cell.row, cell.col));
    }
    Ok(())
}

fn backtracking_walk<R: Rng + ?Sized>(grid: &Grid,
                                      start: GridCoordinate,
                                      end: GridCoordinate,
                                      rng: &mut R)
                                      -> Result<Path> {
    let max_iterations = cmp::max(grid.rows().0, grid.columns().0) * ITERATIONS_PER_GRID_SPAN;
    let mut path = vec![push_off_edge(grid, start)];
    let mut iterations = 0;

    while let Some(&tail) = path.last() {
        if tail.is_within_one(end) {
            break;
        }

        iterations += 1;
        if iterations > max_iterations {
            bail!(ErrorKind::SolverExhausted(max_iterations));
        }

        let mut candidates = unblocked_neighbours(grid, tail);
        if candidates.len() > 1 && path.len() >= 3 {
            let came_from = path[path.len() - 3];
            candidates.retain(|c| *c != came_from);
        }

        match candidates.choose(rng) {
            Some(&next) => {
                path.push(GridCoordinate::midpoint(tail, next));
                path.push(next);
            }
            // walled in on all sides
            None => bail!(ErrorKind::SolverExhausted(iterations)),
        }
    }

    Ok(path)
}

/// A position on the outer wall is moved one step inwards.
fn push_off_edge(grid: &Grid, coord: GridCoordinate) -> GridCoordinate {
    let last_row = grid.rows().0 - 1;
    let last_col = grid.columns().0 - 1;
    let row = if coord.row == 0 {
        1
    } else if coord.row == last_row {
        last_row - 1
    } else {
        coord.row
    };
    let col = if coord.col == 0 {
        1
    } else if coord.col == last_col {
        last_col - 1
    } else {
        coord.col
    };
    GridCoordinate::new(row, col)
}

/// Passage cells two steps away that can be reached through an open wall cell.
fn unblocked_neighbours(grid: &Grid, coord: GridCoordinate) -> CoordinateSmallVec {
    ALL_DIRECTIONS.iter()
        .filter_map(|dir| {
            let wall = coord.offset(*dir, 1)?;
            let next = coord.offset(*dir, 2)?;
            if grid.is_wall(wall) || grid.is_wall(next) {
                None
            } else {
                Some(next)
            }
        })
        .collect()
}

/// Remove every loop from a path. The first position that shows up again later has everything
/// from it up to its last repeat cut out; repeat until nothing repeats. Idempotent.
///
/// Cutting up to the last repeat means the walk can jump straight past it, so one pass over a
/// table of last positions does all the cuts.
pub fn prune(path: &[GridCoordinate]) -> Path {
    let mut last_seen = fnv_hashmap(path.len());
    for (i, coord) in path.iter().enumerate() {
        last_seen.insert(*coord, i);
    }

    let mut pruned = Vec::with_capacity(last_seen.len());
    let mut i = 0;
    while i < path.len() {
        let coord = path[i];
        pruned.push(coord);
        i = last_seen.get(&coord).map_or(i, |&last| last) + 1;
    }
    pruned
}
