//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Interactive course planner: ordered course catalog with prerequisite resolution
#[derive(Parser, Debug)]
#[command(name = "rsplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Catalog file (overrides configured default)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive planner menu (default)
    Shell,

    /// Print the full course list in ascending id order
    List,

    /// Print one course and its prerequisites
    Info {
        /// Course id, e.g., CS300 (case-insensitive)
        course_id: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
