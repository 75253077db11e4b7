use rand::Rng;
use std::fmt;

use crate::cells::{CellCode, CellCoordinate, CellState, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_displays::{display_string, number_grid, Overlay};
use crate::pathing::{self, Path, SolverMethod};
use crate::units::{Height, Width};

/// A generated maze together with the solutions found for it so far.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    solutions: Vec<Path>,
}

impl Maze {
    pub fn new(grid: Grid) -> Maze {
        Maze {
            grid,
            solutions: vec![],
        }
    }

    /// Rebuild a maze from exported codes. Overlay codes are read back as road, any value outside
    /// the code table or a ragged or even sized grid gives None.
    pub fn from_number_grid(numbers: &[Vec<u8>]) -> Option<Maze> {
        let rows = numbers.iter()
            .map(|row| {
                row.iter()
                    .map(|value| CellCode::from_value(*value).map(|code| code.as_state().unwrap_or(CellState::Road)))
                    .collect::<Option<Vec<CellState>>>()
            })
            .collect::<Option<Vec<Vec<CellState>>>>()?;
        Grid::from_rows(rows).map(Maze::new)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn base_width(&self) -> Width {
        self.grid.base_width()
    }

    #[inline]
    pub fn base_height(&self) -> Height {
        self.grid.base_height()
    }

    /// Solutions from the most recent successful `solve`, empty before that.
    #[inline]
    pub fn solutions(&self) -> &[Path] {
        &self.solutions
    }

    /// Solve between two logical cells and keep the result on the maze. A failed solve leaves
    /// earlier solutions untouched.
    pub fn solve<R: Rng + ?Sized>(&mut self,
                                  start: CellCoordinate,
                                  end: CellCoordinate,
                                  method: SolverMethod,
                                  rng: &mut R)
                                  -> Result<&[Path]> {
        self.solutions = pathing::solve(&self.grid, start, end, method, rng)?;
        Ok(&self.solutions)
    }

    /// Export codes, row by row: 0 road, 1 wall, 2 start, 3 end, 4 solution.
    pub fn to_number_grid(&self,
                          start: Option<CellCoordinate>,
                          end: Option<CellCoordinate>,
                          solution: Option<&[GridCoordinate]>)
                          -> Vec<Vec<u8>> {
        number_grid(&self.grid, &Overlay::new(start, end, solution))
    }

    pub fn to_display_string(&self,
                             start: Option<CellCoordinate>,
                             end: Option<CellCoordinate>,
                             solution: Option<&[GridCoordinate]>)
                             -> String {
        display_string(&self.grid, &Overlay::new(start, end, solution))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&display_string(&self.grid, &Overlay::default()))
    }
}
