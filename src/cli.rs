use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Upload structured workout plans to the Intervals.icu calendar
#[derive(Parser)]
#[command(
    name = "rustride-plan-sync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Upload a JSON workout plan to Intervals.icu as planned workouts",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format the plan and upload it in one bulk request
    Upload {
        /// Plan file (defaults to input.default_plan from the config)
        file: Option<PathBuf>,
    },

    /// Format the plan and print the events without uploading
    Preview {
        /// Plan file (defaults to input.default_plan from the config)
        file: Option<PathBuf>,
    },

    /// Show or create the configuration file
    Config {
        /// Write a default configuration file if none exists
        #[arg(long = "init")]
        init: bool,

        /// Print the effective configuration (API key redacted)
        #[arg(long = "print")]
        print: bool,
    },
}

impl Cli {
    /// Log filter directive matching the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
