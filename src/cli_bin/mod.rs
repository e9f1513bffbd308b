//! CLI module for the flatmatter command-line interface
//!
//! Argument parsing and the command handlers that bridge them to the
//! library.

pub mod args;
pub mod commands;
