//! Command-line arguments shared by every game binary

use crate::logging::Verbosity;
use crate::runner::RunOptions;
use arcade_core::GameRng;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Options common to all games
#[derive(Debug, Parser)]
#[command(version, long_about = None)]
pub struct GameArgs {
    /// RON file overriding game tunables
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the random number generator (defaults to the clock)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Maximum frames rendered per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
}

impl GameArgs {
    /// Parse the process arguments under the given program name
    pub fn parse_for(name: &'static str, about: &'static str) -> Self {
        let matches = Self::command().name(name).about(about).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// The seeded RNG, or one seeded from the clock
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_time(),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            fps: self.fps,
            ..RunOptions::default()
        }
    }
}
