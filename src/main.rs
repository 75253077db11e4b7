use docopt::Docopt;
use error_chain::bail;
use gridmaze::{CellCoordinate, GeneratorOptionsBuilder, SolverMethod, Symmetry};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::Deserialize;
use std::fs::File;
use std::io::prelude::*;

const USAGE: &str = "Grid mazes

Usage:
    gridmaze_driver -h | --help
    gridmaze_driver [--size=<hxw>] [--method=<m>] [--symmetry=<s>] [--output=<path>] [--seed=<n>] [--solve]

Options:
    -h --help           Show this screen.
    --size=<hxw>        Logical maze size as height x width [default: 10x20].
    --method=<m>        Generation method [default: backtracking]. One of backtracking, binarytree,
                        division, ellers, growingtree, huntandkill, kruskal, prims or wilsons.
    --symmetry=<s>      Mirror the maze: n(one), v(ertical), h(orizontal) or b(oth) [default: n].
    --output=<path>     Write the maze as a JSON array of rows of cell codes instead of printing it.
    --seed=<n>          Seed the random source for a repeatable maze.
    --solve             Mark a route from the top left to the bottom right cell.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: String,
    flag_method: String,
    flag_symmetry: String,
    flag_output: String,
    flag_seed: Option<u64>,
    flag_solve: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::gridmaze::Error, ::gridmaze::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Json(::serde_json::Error);
            ParseInt(::std::num::ParseIntError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (height, width) = parse_size(&args.flag_size)?;
    let options = GeneratorOptionsBuilder::new()
        .symmetry(args.flag_symmetry.parse::<Symmetry>()?)
        .build();

    let mut rng = match args.flag_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut maze = gridmaze::generate_with(width, height, &args.flag_method, &options, &mut rng)?;
    info!("generated {}x{} {} maze", height, width, args.flag_method);

    let (start, end) = (CellCoordinate::new(0, 0), CellCoordinate::new(height - 1, width - 1));
    let solution = if args.flag_solve {
        maze.solve(start, end, SolverMethod::Backtracking, &mut rng)?
            .first()
            .cloned()
    } else {
        None
    };
    let endpoints = if args.flag_solve { (Some(start), Some(end)) } else { (None, None) };

    if args.flag_output.is_empty() {
        println!("{}", maze.to_display_string(endpoints.0, endpoints.1, solution.as_deref()));
    } else {
        let numbers = maze.to_number_grid(endpoints.0, endpoints.1, solution.as_deref());
        write_json_to_file(&numbers, &args.flag_output)
            .chain_err(|| format!("Failed to write maze to {}", args.flag_output))?;
    }

    Ok(())
}

/// "HxW", e.g. "10x20", with either case of x.
fn parse_size(size: &str) -> Result<(usize, usize)> {
    let lowered = size.trim().to_lowercase();
    let mut parts = lowered.splitn(2, 'x');
    match (parts.next(), parts.next()) {
        (Some(h), Some(w)) => Ok((h.trim().parse()?, w.trim().parse()?)),
        _ => bail!("size '{}' should look like <height>x<width>", size),
    }
}

fn write_json_to_file(numbers: &[Vec<u8>], file_name: &str) -> Result<()> {
    let mut f = File::create(file_name)?;
    serde_json::to_writer(&mut f, numbers)?;
    f.write_all(b"\n")?;
    Ok(())
}
