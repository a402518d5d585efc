//! CLI module for roster - command-line interface and subcommands.
//!
//! Provides the entry point with one subcommand per demo.

pub mod commands;

pub use commands::Cli;
