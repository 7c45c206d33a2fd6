/// Command-line configuration.

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "terminal_invaders", about = "Wave-based arcade shooter for the terminal")]
pub struct Config {
    /// Milliseconds per simulation tick (≈30 FPS by default)
    #[arg(long, default_value_t = 33, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Seed for enemy placement; omit for a random game
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
