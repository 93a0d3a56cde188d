//! # Sigmar Solver Library
//!
//! This library models the alchemical garden puzzle, a hexagonal board of 91 cells
//! from which tiles are removed in matching pairs, and a depth-first solver that
//! finds a move sequence clearing the whole board or proves that none exists.
//!
//! It is used by three binaries:
//! - `garden_solver`: reads a board file and prints the moves that clear it.
//! - `garden_player`: interactive play in the terminal, with hints and undo.
//! - `heuristic_evaluator`: compares move orderings and search strategies on
//!   generated boards.
//!
//! ## Modules
//! - `tile`: the tile types and the metal progression.
//! - `coord`: points, cell indices and the hexagonal neighbourhood.
//! - `rules`: which one- or two-tile combinations match.
//! - `engine`: the `Board` (active cells, move generation, move application),
//!   `Move`, and the interactive `Game`.
//! - `heuristics`: move scoring used to order the search.
//! - `solver`: `solve` and its configurable strategies.
//! - `generator`: reproducible, always-solvable layouts.
//! - `utils`: parsing boards from text.

pub mod coord;
pub mod engine;
pub mod generator;
pub mod heuristics;
pub mod rules;
pub mod solver;
pub mod tile;
pub mod utils;

pub use engine::{Board, BoardError, Move};
pub use solver::{solve, Solution};
pub use tile::Tile;
