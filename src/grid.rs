use bit_set::BitSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::cells::{CellState, CompassPrimary, CoordinateSmallVec, GridCoordinate, ALL_DIRECTIONS};
use crate::grid_iterators::{LogicalRowsIter, PassageIter, SerpentineIter};
use crate::units::{ColumnsCount, Height, RowsCount, Width};

/// The doubled cell array of a maze: (2h+1) rows of (2w+1) columns, row major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, carved walls: {}",
               self.rows, self.columns, self.carved_walls_count())
    }
}

impl Grid {
    /// A grid for `width` x `height` logical cells with every position set to `fill`.
    pub fn new(width: Width, height: Height, fill: CellState) -> Grid {
        let rows = height.grid_rows();
        let columns = width.grid_columns();
        Grid {
            cells: vec![fill; rows.0 * columns.0],
            rows,
            columns,
        }
    }

    /// Rebuild a grid from rows of states. None unless every row has the same odd length and
    /// there is an odd number of rows.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Option<Grid> {
        let rows_count = rows.len();
        let columns_count = rows.first().map_or(0, Vec::len);
        if rows_count % 2 == 0 || columns_count % 2 == 0 || rows.iter().any(|r| r.len() != columns_count) {
            return None;
        }
        Some(Grid {
            cells: rows.into_iter().flatten().collect(),
            rows: RowsCount(rows_count),
            columns: ColumnsCount(columns_count),
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn base_width(&self) -> Width {
        self.columns.base_width()
    }

    #[inline]
    pub fn base_height(&self) -> Height {
        self.rows.base_height()
    }

    /// Number of logical cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.base_width().0 * self.base_height().0
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    #[inline]
    pub fn get(&self, coord: GridCoordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Out of bounds positions count as walls.
    #[inline]
    pub fn is_wall(&self, coord: GridCoordinate) -> bool {
        self.get(coord).map_or(true, CellState::is_wall)
    }

    /// Write `state` at `coord`. Returns false, leaving the grid untouched, when `coord` is
    /// outside the grid.
    #[inline]
    pub fn set(&mut self, coord: GridCoordinate, state: CellState) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Positions two steps away (N/S/E/W) that stay inside the outer wall and whose state is
    /// `Wall` if `want_wall` else `Road`. Shuffled on every call.
    pub fn find_neighbours<R: Rng + ?Sized>(&self,
                                            coord: GridCoordinate,
                                            want_wall: bool,
                                            rng: &mut R)
                                            -> CoordinateSmallVec {
        let mut neighbours = self.passage_neighbours(coord)
            .into_iter()
            .filter(|n| self.is_wall(*n) == want_wall)
            .collect::<CoordinateSmallVec>();
        neighbours.shuffle(rng);
        neighbours
    }

    /// Every in-bounds position two steps away, unshuffled, regardless of state.
    pub fn passage_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|dir| self.passage_neighbour(coord, *dir))
            .collect()
    }

    /// The position two steps away in `dir` if it is inside the outer wall.
    pub fn passage_neighbour(&self, coord: GridCoordinate, dir: CompassPrimary) -> Option<GridCoordinate> {
        coord.offset(dir, 2).filter(|n| {
            n.row >= 1 && n.col >= 1 && n.row + 1 < self.rows.0 && n.col + 1 < self.columns.0
        })
    }

    /// A uniformly random passage cell.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> GridCoordinate {
        let row = rng.gen_range(0..self.base_height().0) * 2 + 1;
        let col = rng.gen_range(0..self.base_width().0) * 2 + 1;
        GridCoordinate::new(row, col)
    }

    /// Open two passage cells and the wall cell between them.
    pub fn carve_between(&mut self, a: GridCoordinate, b: GridCoordinate) {
        self.set(a, CellState::Road);
        self.set(GridCoordinate::midpoint(a, b), CellState::Road);
        self.set(b, CellState::Road);
    }

    /// Count of open wall cells, i.e. the number of passages between logical cells.
    pub fn carved_walls_count(&self) -> usize {
        self.iter_coordinates()
            .filter(|c| c.is_wall_position() && !self.is_wall(*c))
            .count()
    }

    /// Are all passage cells open and reachable from one another through road cells?
    pub fn is_fully_connected(&self) -> bool {
        let start = GridCoordinate::new(1, 1);
        if self.size() == 0 || self.is_wall(start) {
            return false;
        }

        let mut visited = BitSet::with_capacity(self.cells.len());
        let mut frontier = vec![start];
        visited.insert(self.flat_index(start));
        let mut passages_seen = 0;

        while let Some(coord) = frontier.pop() {
            if coord.is_passage() {
                passages_seen += 1;
            }
            for dir in ALL_DIRECTIONS.iter() {
                if let Some(next) = coord.offset(*dir, 1) {
                    if self.is_valid_coordinate(next) && !self.is_wall(next) && visited.insert(self.flat_index(next)) {
                        frontier.push(next);
                    }
                }
            }
        }

        passages_seen == self.size()
    }

    /// Every grid position, row major.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = GridCoordinate> {
        let columns = self.columns.0;
        (0..self.cells.len()).map(move |i| GridCoordinate::new(i / columns, i % columns))
    }

    /// Passage cells in row major order.
    #[inline]
    pub fn iter_passages(&self) -> PassageIter {
        PassageIter::new(self.base_width(), self.base_height())
    }

    /// Passage cells, left to right on even logical rows and right to left on odd ones.
    #[inline]
    pub fn iter_serpentine(&self) -> SerpentineIter {
        SerpentineIter::new(self.base_width(), self.base_height())
    }

    /// Passage cells batched by logical row.
    #[inline]
    pub fn iter_logical_rows(&self) -> LogicalRowsIter {
        LogicalRowsIter::new(self.base_width(), self.base_height())
    }

    #[inline]
    fn index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(self.flat_index(coord))
        } else {
            None
        }
    }

    #[inline]
    fn flat_index(&self, coord: GridCoordinate) -> usize {
        coord.row * self.columns.0 + coord.col
    }
}
