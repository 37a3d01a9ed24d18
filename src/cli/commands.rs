use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `namegauge` - deterministic, rule-based gut check for candidate names.
#[derive(Parser, Debug)]
#[command(name = "namegauge")]
#[command(version = "0.1.0")]
#[command(about = "A rule-based gut check for candidate product and brand names.", long_about = None)]
pub struct Cli {
    /// Emit structured JSON instead of the human-readable report
    #[arg(long, global = true)]
    pub json: bool,

    /// Load alternate vocabularies/thresholds from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress the next-step link block
    #[arg(long, global = true)]
    pub no_links: bool,

    /// Raise log verbosity to DEBUG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single candidate name
    Single {
        /// Candidate name to evaluate
        name: String,
    },

    /// Evaluate two candidates and pick a preferred one
    Compare {
        /// First candidate (wins a full tie)
        name_a: String,

        /// Second candidate
        name_b: String,
    },
}
