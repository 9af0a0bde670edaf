//! The command-line surface of the solver binary.

pub(crate) mod cli;
