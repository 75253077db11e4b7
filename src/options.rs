use error_chain::bail;
use std::str::FromStr;

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::symmetry::Symmetry;
use crate::utils::clamp_probability;

/// The two fixed directions a binary tree maze carves towards.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Skew {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

pub const ALL_SKEWS: [Skew; 4] = [Skew::NorthWest, Skew::NorthEast, Skew::SouthWest, Skew::SouthEast];

impl Skew {
    pub fn directions(self) -> [CompassPrimary; 2] {
        match self {
            Skew::NorthWest => [CompassPrimary::North, CompassPrimary::West],
            Skew::NorthEast => [CompassPrimary::North, CompassPrimary::East],
            Skew::SouthWest => [CompassPrimary::South, CompassPrimary::West],
            Skew::SouthEast => [CompassPrimary::South, CompassPrimary::East],
        }
    }
}

impl FromStr for Skew {
    type Err = Error;

    fn from_str(token: &str) -> Result<Skew> {
        match token.trim().to_uppercase().as_str() {
            "NW" => Ok(Skew::NorthWest),
            "NE" => Ok(Skew::NorthEast),
            "SW" => Ok(Skew::SouthWest),
            "SE" => Ok(Skew::SouthEast),
            _ => bail!(ErrorKind::InvalidSkew(token.to_string())),
        }
    }
}

/// How hunt and kill and Wilson's find the next cell to start a walk from.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum HuntOrder {
    /// Probe random cells.
    Random,
    /// Scan the grid row by row, alternating direction.
    Serpentine,
}

impl Default for HuntOrder {
    fn default() -> HuntOrder {
        HuntOrder::Random
    }
}

/// Everything a generator can be tuned with. Each algorithm reads only the fields it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    pub symmetry: Symmetry,
    /// Binary tree carving directions, picked at random when `None`.
    pub skew: Option<Skew>,
    /// Growing tree: chance of expanding the newest frontier cell instead of a random one.
    pub backtrack_chance: f64,
    /// Eller's: chance of joining two horizontally adjacent sets.
    pub xskew: f64,
    /// Eller's: chance of an extra vertical passage.
    pub yskew: f64,
    pub hunt_order: HuntOrder,
}

impl Default for GeneratorOptions {
    fn default() -> GeneratorOptions {
        GeneratorOptions {
            symmetry: Symmetry::None,
            skew: None,
            backtrack_chance: 1.0,
            xskew: 0.5,
            yskew: 0.5,
            hunt_order: HuntOrder::Random,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorOptionsBuilder {
    options: GeneratorOptions,
}

impl GeneratorOptionsBuilder {
    pub fn new() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }

    pub fn symmetry(mut self, symmetry: Symmetry) -> GeneratorOptionsBuilder {
        self.options.symmetry = symmetry;
        self
    }

    pub fn skew(mut self, skew: Option<Skew>) -> GeneratorOptionsBuilder {
        self.options.skew = skew;
        self
    }

    pub fn backtrack_chance(mut self, chance: f64) -> GeneratorOptionsBuilder {
        self.options.backtrack_chance = clamp_probability(chance);
        self
    }

    pub fn xskew(mut self, xskew: f64) -> GeneratorOptionsBuilder {
        self.options.xskew = clamp_probability(xskew);
        self
    }

    pub fn yskew(mut self, yskew: f64) -> GeneratorOptionsBuilder {
        self.options.yskew = clamp_probability(yskew);
        self
    }

    pub fn hunt_order(mut self, hunt_order: HuntOrder) -> GeneratorOptionsBuilder {
        self.options.hunt_order = hunt_order;
        self
    }

    pub fn build(self) -> GeneratorOptions {
        self.options
    }
}
