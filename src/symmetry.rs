//! Mirrored carving.
//!
//! Every write a symmetric generator makes goes through `apply_mirrored`, which repeats it at the
//! reflected positions. `FrontierSet` lets a generator keep its active list in step with those
//! reflected writes.

use error_chain::bail;
use log::warn;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::cells::{CellState, CoordinateSmallVec, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};
use crate::utils::{fnv_hashset, FnvHashSet};

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Symmetry {
    None,
    /// Mirror across the vertical mid-axis: the column index is reflected.
    Vertical,
    /// Mirror across the horizontal mid-axis: the row index is reflected.
    Horizontal,
    Both,
}

impl Default for Symmetry {
    fn default() -> Symmetry {
        Symmetry::None
    }
}

impl FromStr for Symmetry {
    type Err = Error;

    fn from_str(token: &str) -> Result<Symmetry> {
        match token.trim().to_lowercase().as_str() {
            "n" | "none" => Ok(Symmetry::None),
            "v" | "vertical" => Ok(Symmetry::Vertical),
            "h" | "horizontal" => Ok(Symmetry::Horizontal),
            "b" | "both" => Ok(Symmetry::Both),
            _ => bail!(ErrorKind::InvalidSymmetry(token.to_string())),
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Symmetry::None => "none",
            Symmetry::Vertical => "vertical",
            Symmetry::Horizontal => "horizontal",
            Symmetry::Both => "both",
        };
        f.write_str(name)
    }
}

impl Symmetry {
    #[inline]
    pub fn is_none(self) -> bool {
        self == Symmetry::None
    }

    #[inline]
    pub fn mirrors_rows(self) -> bool {
        self == Symmetry::Horizontal || self == Symmetry::Both
    }

    #[inline]
    pub fn mirrors_columns(self) -> bool {
        self == Symmetry::Vertical || self == Symmetry::Both
    }

    /// `coord` followed by its distinct reflections inside `grid`.
    pub fn mirrored_positions(self, grid: &Grid, coord: GridCoordinate) -> CoordinateSmallVec {
        let last_row = grid.rows().0 - 1;
        let last_col = grid.columns().0 - 1;
        let flip_row = |c: GridCoordinate| GridCoordinate::new(last_row - c.row, c.col);
        let flip_col = |c: GridCoordinate| GridCoordinate::new(c.row, last_col - c.col);

        let mut positions = CoordinateSmallVec::new();
        positions.push(coord);
        if self.mirrors_rows() {
            positions.push(flip_row(coord));
        }
        if self.mirrors_columns() {
            positions.push(flip_col(coord));
        }
        if self == Symmetry::Both {
            positions.push(flip_col(flip_row(coord)));
        }

        let mut distinct = CoordinateSmallVec::new();
        for p in positions {
            if !distinct.contains(&p) {
                distinct.push(p);
            }
        }
        distinct
    }

    /// Log a warning for every mirrored axis with an even number of logical cells: there is no
    /// middle row or column for the two halves to meet in, so they may stay disconnected.
    pub fn warn_on_even_axes(self, width: Width, height: Height) {
        if self.mirrors_columns() && width.0 % 2 == 0 {
            warn!("width {} is even, the {} mirrored halves may not be connected", width.0, self);
        }
        if self.mirrors_rows() && height.0 % 2 == 0 {
            warn!("height {} is even, the {} mirrored halves may not be connected", height.0, self);
        }
    }
}

/// Write `state` at `coord` and at every reflection of it. Returns the positions written.
pub fn apply_mirrored(grid: &mut Grid,
                      coord: GridCoordinate,
                      state: CellState,
                      symmetry: Symmetry)
                      -> CoordinateSmallVec {
    let positions = symmetry.mirrored_positions(grid, coord);
    for p in positions.iter() {
        grid.set(*p, state);
    }
    positions
}

/// Mirrored version of `Grid::carve_between`.
pub fn carve_mirrored(grid: &mut Grid, a: GridCoordinate, b: GridCoordinate, symmetry: Symmetry) {
    apply_mirrored(grid, a, CellState::Road, symmetry);
    apply_mirrored(grid, GridCoordinate::midpoint(a, b), CellState::Road, symmetry);
    apply_mirrored(grid, b, CellState::Road, symmetry);
}

/// An insertion ordered set of grid positions.
#[derive(Debug, Clone)]
pub struct FrontierSet {
    order: Vec<GridCoordinate>,
    members: FnvHashSet<GridCoordinate>,
}

impl Default for FrontierSet {
    fn default() -> FrontierSet {
        FrontierSet::new()
    }
}

impl FrontierSet {
    pub fn new() -> FrontierSet {
        FrontierSet::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> FrontierSet {
        FrontierSet {
            order: Vec::with_capacity(capacity),
            members: fnv_hashset(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: GridCoordinate) -> bool {
        self.members.contains(&coord)
    }

    /// The most recently added member.
    #[inline]
    pub fn last(&self) -> Option<GridCoordinate> {
        self.order.last().cloned()
    }

    /// A uniformly random member, left in place.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GridCoordinate> {
        if self.order.is_empty() {
            None
        } else {
            Some(self.order[rng.gen_range(0..self.order.len())])
        }
    }

    /// Remove and return a uniformly random member.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<GridCoordinate> {
        let picked = self.choose(rng)?;
        self.remove(picked);
        Some(picked)
    }

    pub fn insert(&mut self, coord: GridCoordinate) -> bool {
        if self.members.insert(coord) {
            self.order.push(coord);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, coord: GridCoordinate) -> bool {
        if self.members.remove(&coord) {
            if let Some(i) = self.order.iter().position(|c| *c == coord) {
                self.order.remove(i);
            }
            true
        } else {
            false
        }
    }

    /// Insert `coord` and its reflections. Returns the positions that were not already present.
    pub fn mirror_insert(&mut self, grid: &Grid, coord: GridCoordinate, symmetry: Symmetry) -> CoordinateSmallVec {
        symmetry.mirrored_positions(grid, coord)
            .into_iter()
            .filter(|p| self.insert(*p))
            .collect()
    }

    /// Remove `coord` and its reflections. Returns the positions that were present.
    pub fn mirror_evict(&mut self, grid: &Grid, coord: GridCoordinate, symmetry: Symmetry) -> CoordinateSmallVec {
        symmetry.mirrored_positions(grid, coord)
            .into_iter()
            .filter(|p| self.remove(*p))
            .collect()
    }
}
