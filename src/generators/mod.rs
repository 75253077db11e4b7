//! Maze generation algorithms.
//!
//! Each submodule exposes one `generate` function that starts from a fresh grid and returns it
//! carved. `GeneratorMethod` names them, looks them up by string and dispatches to them.

use error_chain::bail;
use lazy_static::lazy_static;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::errors::*;
use crate::grid::Grid;
use crate::options::GeneratorOptions;
use crate::symmetry::Symmetry;
use crate::units::{Height, Width};
use crate::utils::{fnv_hashmap, normalise_name, FnvHashMap};

pub mod backtracking;
pub mod binary_tree;
pub mod division;
pub mod ellers;
pub mod growing_tree;
pub mod hunt_and_kill;
pub mod kruskal;
pub mod prims;
pub mod wilsons;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum GeneratorMethod {
    Backtracking,
    BinaryTree,
    Division,
    Ellers,
    GrowingTree,
    HuntAndKill,
    Kruskal,
    Prims,
    Wilsons,
}

pub const ALL_GENERATORS: [GeneratorMethod; 9] = [GeneratorMethod::Backtracking,
                                                   GeneratorMethod::BinaryTree,
                                                   GeneratorMethod::Division,
                                                   GeneratorMethod::Ellers,
                                                   GeneratorMethod::GrowingTree,
                                                   GeneratorMethod::HuntAndKill,
                                                   GeneratorMethod::Kruskal,
                                                   GeneratorMethod::Prims,
                                                   GeneratorMethod::Wilsons];

lazy_static! {
    static ref GENERATORS_BY_NAME: FnvHashMap<&'static str, GeneratorMethod> = {
        let mut registry = fnv_hashmap(ALL_GENERATORS.len());
        for method in ALL_GENERATORS.iter() {
            registry.insert(method.name(), *method);
        }
        registry
    };
}

impl GeneratorMethod {
    /// Lookup name, already normalised.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorMethod::Backtracking => "backtracking",
            GeneratorMethod::BinaryTree => "binarytree",
            GeneratorMethod::Division => "division",
            GeneratorMethod::Ellers => "ellers",
            GeneratorMethod::GrowingTree => "growingtree",
            GeneratorMethod::HuntAndKill => "huntandkill",
            GeneratorMethod::Kruskal => "kruskal",
            GeneratorMethod::Prims => "prims",
            GeneratorMethod::Wilsons => "wilsons",
        }
    }

    pub fn supports_symmetry(self) -> bool {
        match self {
            GeneratorMethod::Backtracking
            | GeneratorMethod::GrowingTree
            | GeneratorMethod::HuntAndKill
            | GeneratorMethod::Prims => true,
            GeneratorMethod::BinaryTree
            | GeneratorMethod::Division
            | GeneratorMethod::Ellers
            | GeneratorMethod::Kruskal
            | GeneratorMethod::Wilsons => false,
        }
    }

    pub fn names() -> Vec<&'static str> {
        ALL_GENERATORS.iter().map(|m| m.name()).collect()
    }

    pub fn symmetric_names() -> Vec<&'static str> {
        ALL_GENERATORS.iter()
            .filter(|m| m.supports_symmetry())
            .map(|m| m.name())
            .collect()
    }

    /// Case-insensitive lookup that ignores `_`, `-` and spaces.
    pub fn from_name(name: &str) -> Result<GeneratorMethod> {
        match GENERATORS_BY_NAME.get(normalise_name(name).as_str()) {
            Some(method) => Ok(*method),
            None => bail!(ErrorKind::UnknownGenerator(name.to_string(), GeneratorMethod::names())),
        }
    }

    /// Fails when `symmetry` is not `None` and this method cannot mirror its carving.
    pub fn check_symmetry(self, symmetry: Symmetry) -> Result<()> {
        if !symmetry.is_none() && !self.supports_symmetry() {
            bail!(ErrorKind::UnsupportedSymmetry(self.name(), GeneratorMethod::symmetric_names()));
        }
        Ok(())
    }

    /// Run the algorithm on a fresh grid. Options an algorithm has no use for are ignored, so
    /// symmetry should already have been checked with `check_symmetry`.
    pub fn carve<R: Rng + ?Sized>(self,
                                  width: Width,
                                  height: Height,
                                  options: &GeneratorOptions,
                                  rng: &mut R)
                                  -> Grid {
        let symmetry = options.symmetry;
        match self {
            GeneratorMethod::Backtracking => backtracking::generate(width, height, symmetry, rng),
            GeneratorMethod::BinaryTree => binary_tree::generate(width, height, options.skew, rng),
            GeneratorMethod::Division => division::generate(width, height, rng),
            GeneratorMethod::Ellers => ellers::generate(width, height, options.xskew, options.yskew, rng),
            GeneratorMethod::GrowingTree => {
                growing_tree::generate(width, height, options.backtrack_chance, symmetry, rng)
            }
            GeneratorMethod::HuntAndKill => {
                hunt_and_kill::generate(width, height, options.hunt_order, symmetry, rng)
            }
            GeneratorMethod::Kruskal => kruskal::generate(width, height, rng),
            GeneratorMethod::Prims => prims::generate(width, height, symmetry, rng),
            GeneratorMethod::Wilsons => wilsons::generate(width, height, options.hunt_order, rng),
        }
    }
}

impl FromStr for GeneratorMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<GeneratorMethod> {
        GeneratorMethod::from_name(name)
    }
}

impl fmt::Display for GeneratorMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generators::test_support::{assert_copy_is_tree, assert_mirror_invariant, assert_perfect};
    use crate::options::GeneratorOptionsBuilder;
    use crate::units::{ColumnsCount, RowsCount};

    #[test]
    fn every_method_produces_the_doubled_dimensions() {
        let mut rng = StdRng::seed_from_u64(101);
        for method in ALL_GENERATORS.iter() {
            let g = method.carve(Width(5), Height(3), &GeneratorOptions::default(), &mut rng);
            assert_eq!(g.rows(), RowsCount(7), "{}", method);
            assert_eq!(g.columns(), ColumnsCount(11), "{}", method);
        }
    }

    #[test]
    fn every_method_is_perfect_without_symmetry() {
        let mut rng = StdRng::seed_from_u64(102);
        for method in ALL_GENERATORS.iter() {
            for &(w, h) in &[(1, 1), (2, 3), (7, 7), (10, 4)] {
                let g = method.carve(Width(w), Height(h), &GeneratorOptions::default(), &mut rng);
                assert_perfect(&g);
            }
        }
    }

    #[test]
    fn symmetric_methods_stay_connected_on_odd_axes() {
        let mut rng = StdRng::seed_from_u64(103);
        for method in ALL_GENERATORS.iter().filter(|m| m.supports_symmetry()) {
            for symmetry in &[Symmetry::Vertical, Symmetry::Horizontal, Symmetry::Both] {
                let options = GeneratorOptionsBuilder::new().symmetry(*symmetry).build();
                let g = method.carve(Width(9), Height(7), &options, &mut rng);
                assert!(g.is_fully_connected(), "{} {}", method, symmetry);
                assert_mirror_invariant(&g, *symmetry);
            }
        }
    }

    #[test]
    fn each_mirrored_copy_is_a_spanning_tree() {
        for method in ALL_GENERATORS.iter().filter(|m| m.supports_symmetry()) {
            for symmetry in &[Symmetry::Vertical, Symmetry::Both] {
                let options = GeneratorOptionsBuilder::new().symmetry(*symmetry).build();
                for seed in 0..20 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let g = method.carve(Width(9), Height(7), &options, &mut rng);
                    assert_copy_is_tree(&g, *symmetry);
                }
            }
        }
    }

    #[test]
    fn copy_check_without_symmetry_covers_the_whole_maze() {
        let mut rng = StdRng::seed_from_u64(104);
        let g = GeneratorMethod::Kruskal.carve(Width(6), Height(5), &GeneratorOptions::default(), &mut rng);
        assert_copy_is_tree(&g, Symmetry::None);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(GeneratorMethod::from_name("prims").unwrap(), GeneratorMethod::Prims);
        assert_eq!(GeneratorMethod::from_name("Hunt_And_Kill").unwrap(), GeneratorMethod::HuntAndKill);
        assert_eq!("growing-tree".parse::<GeneratorMethod>().unwrap(), GeneratorMethod::GrowingTree);
        for method in ALL_GENERATORS.iter() {
            assert_eq!(GeneratorMethod::from_name(method.name()).unwrap(), *method);
        }
    }

    #[test]
    fn unknown_name_lists_the_valid_ones() {
        let err = GeneratorMethod::from_name("sss").unwrap_err();
        match *err.kind() {
            ErrorKind::UnknownGenerator(ref name, ref valid) => {
                assert_eq!(name, "sss");
                assert_eq!(valid.len(), 9);
            }
            ref other => panic!("unexpected error {:?}", other),
        }
        assert!(err.to_string().contains("wilsons"));
    }

    #[test]
    fn symmetry_compatibility() {
        assert_eq!(GeneratorMethod::symmetric_names(),
                   vec!["backtracking", "growingtree", "huntandkill", "prims"]);
        assert!(GeneratorMethod::Kruskal.check_symmetry(Symmetry::None).is_ok());
        assert!(GeneratorMethod::Prims.check_symmetry(Symmetry::Both).is_ok());

        let err = GeneratorMethod::Kruskal.check_symmetry(Symmetry::Vertical).unwrap_err();
        assert!(err.kind().is_configuration());
        assert!(err.to_string().contains("backtracking, growingtree, huntandkill, prims"));
    }

    #[test]
    fn quickcheck_backtracking_is_perfect() {
        fn prop(w: u8, h: u8, seed: u64) -> bool {
            let (w, h) = (w as usize % 12 + 1, h as usize % 12 + 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let g = GeneratorMethod::Backtracking.carve(Width(w), Height(h), &GeneratorOptions::default(), &mut rng);
            g.is_fully_connected() && g.carved_walls_count() == w * h - 1
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }
}
