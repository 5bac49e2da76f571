//! Snake - Terminal Grid Snake Library
//!
//! This module exposes the game logic for testing and for the binary.

pub mod build_info;
pub mod core;
pub mod input;
pub mod scores;
pub mod session;
pub mod ui;
pub mod utils;

pub use crate::core::{
    Cell, CommandOutcome, Direction, GameCommand, GameConfig, GameState, Phase, Scheduler,
    TickResult, FOOD_REWARD, GRID_SIZE, INITIAL_SNAKE_LENGTH, TICK_INTERVAL_MS,
};
pub use scores::{HighScore, JsonScoreStore, MemoryScoreStore, ScoreBackend, ScoreStore};
pub use session::{GameEvent, GameView, Session};
