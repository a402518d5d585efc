//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - hospital: run the animal hospital demo
//! - payroll: run the payroll demo
//! - (none): run both demos in sequence

use clap::{Parser, Subcommand};

/// Roster - polymorphic record-processing demos
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Treat the demo roster of animals
    Hospital,

    /// Process payroll for the demo roster of employees
    Payroll,
}
