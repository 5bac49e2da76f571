//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod controls;
pub mod engine;
pub mod game_state;
pub mod scheduler;
pub mod types;

pub use config::GameConfig;
pub use constants::*;
pub use controls::{apply_command, CommandOutcome, GameCommand};
pub use engine::{tick, TickResult};
pub use game_state::GameState;
pub use scheduler::Scheduler;
pub use types::{Cell, Direction, Phase};
