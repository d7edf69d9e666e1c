//! CLI module for bmicalc
//!
//! Handles command-line argument parsing and verbosity.

pub mod args;

pub use args::{Args, Commands, Conversion, Verbosity};
