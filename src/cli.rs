// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "First-person camera trace tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replay a JSON input trace and print per-frame camera state as JSON
    Replay {
        /// Trace file to replay
        trace: PathBuf,

        /// Settings file overriding the trace's settings
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Viewport aspect ratio used for the projection
        #[arg(long, default_value_t = 800.0 / 600.0)]
        aspect: f32,

        /// Only print the last frame
        #[arg(long = "final-only", default_value = "false")]
        final_only: bool,
    },
    /// Print the default camera settings as JSON
    Defaults,
}
