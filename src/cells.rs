use smallvec::SmallVec;
use std::fmt;

/// The state stored at every position of the live grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Road,
    Wall,
}

impl CellState {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }
}

/// Export codes. Start, End and Solution only ever appear in exported data, never in a `Grid`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellCode {
    Road = 0,
    Wall = 1,
    Start = 2,
    End = 3,
    Solution = 4,
}

impl CellCode {
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Back to a storable state. Overlay codes have no stored equivalent.
    pub fn as_state(self) -> Option<CellState> {
        match self {
            CellCode::Road => Some(CellState::Road),
            CellCode::Wall => Some(CellState::Wall),
            CellCode::Start | CellCode::End | CellCode::Solution => None,
        }
    }

    pub fn from_value(value: u8) -> Option<CellCode> {
        match value {
            0 => Some(CellCode::Road),
            1 => Some(CellCode::Wall),
            2 => Some(CellCode::Start),
            3 => Some(CellCode::End),
            4 => Some(CellCode::Solution),
            _ => None,
        }
    }
}

impl From<CellState> for CellCode {
    fn from(state: CellState) -> CellCode {
        match state {
            CellState::Road => CellCode::Road,
            CellState::Wall => CellCode::Wall,
        }
    }
}

/// A position in the doubled grid, walls included.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

/// A logical maze cell, before doubling coordinates to make room for walls.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellCoordinate {
    pub row: usize,
    pub col: usize,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

impl GridCoordinate {
    #[inline]
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    /// Both indices odd: the open space of a logical cell.
    #[inline]
    pub fn is_passage(&self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Exactly one index even: the space between two logical cells.
    #[inline]
    pub fn is_wall_position(&self) -> bool {
        (self.row % 2 == 0) != (self.col % 2 == 0)
    }

    /// The logical cell at a passage position.
    #[inline]
    pub fn to_cell(&self) -> CellCoordinate {
        CellCoordinate::new(self.row / 2, self.col / 2)
    }

    /// Wall cell half way between two passage cells.
    #[inline]
    pub fn midpoint(a: GridCoordinate, b: GridCoordinate) -> GridCoordinate {
        GridCoordinate::new((a.row + b.row) / 2, (a.col + b.col) / 2)
    }

    /// Step `distance` positions in `dir`. None when that would go below zero.
    pub fn offset(&self, dir: CompassPrimary, distance: usize) -> Option<GridCoordinate> {
        let (row, col) = (self.row, self.col);
        match dir {
            CompassPrimary::North => row.checked_sub(distance).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::South => Some(GridCoordinate::new(row + distance, col)),
            CompassPrimary::East => Some(GridCoordinate::new(row, col + distance)),
            CompassPrimary::West => col.checked_sub(distance).map(|c| GridCoordinate::new(row, c)),
        }
    }

    /// Same row or column and less than two positions apart.
    pub fn is_within_one(&self, other: GridCoordinate) -> bool {
        if self.row == other.row {
            abs_diff(self.col, other.col) < 2
        } else if self.col == other.col {
            abs_diff(self.row, other.row) < 2
        } else {
            false
        }
    }

    /// Orthogonally next to `other`.
    pub fn is_adjacent(&self, other: GridCoordinate) -> bool {
        abs_diff(self.row, other.row) + abs_diff(self.col, other.col) == 1
    }
}

impl CellCoordinate {
    #[inline]
    pub fn new(row: usize, col: usize) -> CellCoordinate {
        CellCoordinate { row, col }
    }

    /// The passage cell for this logical cell, (2r+1, 2c+1).
    #[inline]
    pub fn to_grid(&self) -> GridCoordinate {
        GridCoordinate::new(self.row * 2 + 1, self.col * 2 + 1)
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col.0, row_col.1)
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from(row_col: (usize, usize)) -> CellCoordinate {
        CellCoordinate::new(row_col.0, row_col.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[inline]
fn abs_diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [
    CompassPrimary::North,
    CompassPrimary::South,
    CompassPrimary::East,
    CompassPrimary::West,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_kinds() {
        assert!(GridCoordinate::new(1, 1).is_passage());
        assert!(!GridCoordinate::new(1, 1).is_wall_position());
        assert!(GridCoordinate::new(1, 2).is_wall_position());
        assert!(GridCoordinate::new(2, 1).is_wall_position());
        assert!(!GridCoordinate::new(2, 2).is_wall_position());
        assert!(!GridCoordinate::new(2, 2).is_passage());
    }

    #[test]
    fn logical_to_grid() {
        assert_eq!(CellCoordinate::new(0, 0).to_grid(), GridCoordinate::new(1, 1));
        assert_eq!(CellCoordinate::new(2, 1).to_grid(), GridCoordinate::new(5, 3));
        assert_eq!(GridCoordinate::new(5, 3).to_cell(), CellCoordinate::new(2, 1));
    }

    #[test]
    fn offsets_stop_at_zero() {
        let gc = GridCoordinate::new;
        assert_eq!(gc(1, 1).offset(CompassPrimary::North, 2), None);
        assert_eq!(gc(1, 1).offset(CompassPrimary::West, 2), None);
        assert_eq!(gc(1, 1).offset(CompassPrimary::South, 2), Some(gc(3, 1)));
        assert_eq!(gc(1, 1).offset(CompassPrimary::East, 2), Some(gc(1, 3)));
        assert_eq!(gc(3, 3).offset(CompassPrimary::North, 1), Some(gc(2, 3)));
    }

    #[test]
    fn within_one() {
        let gc = GridCoordinate::new;
        assert!(gc(3, 3).is_within_one(gc(3, 3)));
        assert!(gc(3, 3).is_within_one(gc(3, 4)));
        assert!(gc(3, 3).is_within_one(gc(2, 3)));
        assert!(!gc(3, 3).is_within_one(gc(3, 5)));
        assert!(!gc(3, 3).is_within_one(gc(4, 4)));
    }

    #[test]
    fn midpoint_is_the_wall_between() {
        let gc = GridCoordinate::new;
        assert_eq!(GridCoordinate::midpoint(gc(1, 1), gc(1, 3)), gc(1, 2));
        assert_eq!(GridCoordinate::midpoint(gc(3, 5), gc(1, 5)), gc(2, 5));
    }

    #[test]
    fn codes() {
        assert_eq!(CellCode::from(CellState::Road).value(), 0);
        assert_eq!(CellCode::from(CellState::Wall).value(), 1);
        assert_eq!(CellCode::Solution.value(), 4);
        assert_eq!(CellCode::from_value(3), Some(CellCode::End));
        assert_eq!(CellCode::from_value(9), None);
        assert_eq!(CellCode::Start.as_state(), None);
    }
}
