#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving Sudoku puzzles.
//!
//! The core is split into the puzzle state ([`grid`]), the rule predicates
//! ([`rules`]) and the backtracking search engine ([`solver`]). Around the
//! core sit two collaborators: a text parser for puzzle input ([`parse`])
//! and a read-only renderer for puzzle output ([`render`]).

/// The `grid` module defines the 9x9 puzzle state and its structural queries.
pub mod grid;

/// The `parse` module reads puzzle grids from text and files.
pub mod parse;

/// The `render` module formats a grid as a bordered text block.
pub mod render;

/// The `rules` module implements the Sudoku constraint predicates.
pub mod rules;

/// The `solver` module implements the backtracking search engine.
pub mod solver;
