//! CLI module for the leave-extract command-line interface.

mod commands;
mod output;

pub use commands::*;
