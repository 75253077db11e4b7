//! Crate error types, generated by `error_chain!`.
//!
//! Configuration errors (names, symmetry, dimensions) are raised before any grid is touched.
//! Validation errors cover solver endpoints. `SolverExhausted` means the maze was not connected.

#![allow(deprecated)]

use error_chain::*;

error_chain! {
    errors {
        UnknownGenerator(name: String, valid: Vec<&'static str>) {
            description("unknown maze generation method")
            display("generation method '{}' is not found, try one of [{}]", name, valid.join(", "))
        }

        UnknownSolver(name: String, valid: Vec<&'static str>) {
            description("unknown maze solving method")
            display("solving method '{}' is not found, try one of [{}]", name, valid.join(", "))
        }

        UnsupportedSymmetry(method: &'static str, compatible: Vec<&'static str>) {
            description("symmetry is not supported by the generation method")
            display("method '{}' does not support symmetry, use one of [{}] or symmetry 'none'",
                    method, compatible.join(", "))
        }

        InvalidSymmetry(token: String) {
            description("unrecognised symmetry")
            display("symmetry '{}' is not recognised, try one of [n, none, v, vertical, h, horizontal, b, both]",
                    token)
        }

        InvalidSkew(token: String) {
            description("unrecognised binary tree skew")
            display("skew '{}' is not recognised, try one of [NW, NE, SW, SE]", token)
        }

        InvalidDimensions(width: usize, height: usize) {
            description("maze dimensions must be non zero")
            display("maze dimensions {}x{} (height x width) must both be at least 1", height, width)
        }

        CoordinateOutOfBounds(row: usize, col: usize) {
            description("coordinate is outside the maze")
            display("coordinate ({}, {}) is outside the maze", row, col)
        }

        SolverExhausted(iterations: usize) {
            description("solving exceeded the maximum iteration count")
            display("solving gave up after {} iterations, the maze may be disconnected", iterations)
        }
    }
}

impl ErrorKind {
    /// True for every failure caused by bad names, tokens or sizes passed in by the caller.
    pub fn is_configuration(&self) -> bool {
        match *self {
            ErrorKind::UnknownGenerator(..)
            | ErrorKind::UnknownSolver(..)
            | ErrorKind::UnsupportedSymmetry(..)
            | ErrorKind::InvalidSymmetry(..)
            | ErrorKind::InvalidSkew(..)
            | ErrorKind::InvalidDimensions(..) => true,
            _ => false,
        }
    }
}
