//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Fitness tracker.
///
/// Turns raw sensor packages from running, sports walking and swimming
/// sessions into distance, average speed and calories burned.
#[derive(Debug, Parser)]
#[command(name = "fit", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report on the built-in sample packages (the default).
    Run {
        /// Stop at the first package that fails to dispatch.
        #[arg(long)]
        fail_fast: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report on a single package.
    Calc {
        /// Workout code: RUN, WLK or SWM.
        code: String,

        /// Sensor values in positional order (see `fit kinds`).
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List workout codes and the values each expects.
    Kinds,
}

/// Output format flags shared by reporting commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    /// Print one JSON object per workout.
    #[arg(long)]
    pub json: bool,
}
