//! **gridmaze** generates rectangular mazes on a doubled wall/passage grid, optionally mirrored,
//! and finds routes through them.
//!
//! A maze of `width` x `height` logical cells is stored as a grid of `(2 * height + 1)` rows by
//! `(2 * width + 1)` columns. Logical cell `(r, c)` lives at grid position `(2r + 1, 2c + 1)`,
//! the positions between passage cells are walls that generation may open.
//!
//! ```no_run
//! use gridmaze::{generate, CellCoordinate, SolverMethod};
//!
//! let mut maze = generate(10, 8, "prims", "v").unwrap();
//! let mut rng = rand::thread_rng();
//! let start = CellCoordinate::new(0, 0);
//! let end = CellCoordinate::new(7, 9);
//! let path = maze.solve(start, end, SolverMethod::Backtracking, &mut rng).unwrap()[0].clone();
//! println!("{}", maze.to_display_string(Some(start), Some(end), Some(&path)));
//! ```

use error_chain::bail;
use log::debug;
use rand::Rng;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod maze;
pub mod options;
pub mod pathing;
pub mod symmetry;
pub mod units;
mod utils;

pub use crate::cells::{CellCode, CellCoordinate, CellState, GridCoordinate};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::generators::GeneratorMethod;
pub use crate::grid::Grid;
pub use crate::maze::Maze;
pub use crate::options::{GeneratorOptions, GeneratorOptionsBuilder, HuntOrder, Skew};
pub use crate::pathing::{Path, SolverMethod};
pub use crate::symmetry::Symmetry;

use crate::units::{Height, Width};

/// Generate a maze with default tuning and a thread local random source.
///
/// `method` is a generator name such as `"kruskal"` or `"hunt_and_kill"`, `symmetry` one of the
/// tokens `n`, `v`, `h`, `b` or their long forms.
pub fn generate(width: usize, height: usize, method: &str, symmetry: &str) -> Result<Maze> {
    let options = GeneratorOptionsBuilder::new()
        .symmetry(symmetry.parse()?)
        .build();
    generate_with(width, height, method, &options, &mut rand::thread_rng())
}

/// Generate a maze with explicit tuning and random source. A seeded `rng` gives a repeatable
/// maze.
pub fn generate_with<R: Rng + ?Sized>(width: usize,
                                      height: usize,
                                      method: &str,
                                      options: &GeneratorOptions,
                                      rng: &mut R)
                                      -> Result<Maze> {
    if width == 0 || height == 0 {
        bail!(ErrorKind::InvalidDimensions(width, height));
    }
    let method = GeneratorMethod::from_name(method)?;
    method.check_symmetry(options.symmetry)?;
    options.symmetry.warn_on_even_axes(Width(width), Height(height));

    debug!("generating {}x{} maze with {} (symmetry {})", height, width, method, options.symmetry);
    let grid = method.carve(Width(width), Height(height), options, rng);
    Ok(Maze::new(grid))
}
