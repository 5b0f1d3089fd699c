/// Command-line configuration for the terminal front-end.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::TICKS_PER_SECOND;
use crate::error::ConfigError;

pub const MAX_TICK_RATE: u32 = 240;

#[derive(Parser, Debug, Clone)]
#[command(name = "space_invaders")]
#[command(about = "Defend the bunkers against a descending invader swarm")]
pub struct Args {
    /// Simulation ticks per second
    #[arg(long, default_value_t = TICKS_PER_SECOND)]
    pub fps: u32,

    /// Seed for a reproducible game; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ticks a key stays held after its last press/repeat event
    #[arg(long, default_value_t = 8)]
    pub hold_window: u64,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub frame: Duration,
    pub seed: Option<u64>,
    pub hold_window: u64,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.fps == 0 || args.fps > MAX_TICK_RATE {
            return Err(ConfigError::TickRate {
                got: args.fps,
                max: MAX_TICK_RATE,
            });
        }
        if args.hold_window == 0 {
            return Err(ConfigError::HoldWindow);
        }
        Ok(Config {
            frame: Duration::from_secs(1) / args.fps,
            seed: args.seed,
            hold_window: args.hold_window,
            log_file: args.log_file,
        })
    }
}
