//! Game configuration.

use super::constants::*;
use std::io;

/// Tunable board parameters. Defaults match the fixed game constants; the
/// overrides exist for tests and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: i16,

    /// Scheduler interval in milliseconds
    pub tick_ms: u64,

    /// Points awarded per food eaten
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_ms: TICK_INTERVAL_MS,
            food_reward: FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Row the snake starts on after a reset.
    pub fn start_row(&self) -> i16 {
        self.grid_size / 2
    }

    /// Reject parameters the game cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "grid size {} is outside {}..={}",
                    self.grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE
                ),
            ));
        }
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "tick interval {}ms is outside {}..={}",
                    self.tick_ms, MIN_TICK_MS, MAX_TICK_MS
                ),
            ));
        }
        if !(MIN_FOOD_REWARD..=MAX_FOOD_REWARD).contains(&self.food_reward) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "food reward {} is outside {}..={}",
                    self.food_reward, MIN_FOOD_REWARD, MAX_FOOD_REWARD
                ),
            ));
        }
        Ok(())
    }
}
