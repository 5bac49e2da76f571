//! High score tracking and persistence.

pub mod high_score;
pub mod store;

pub use high_score::HighScore;
pub use store::{JsonScoreStore, MemoryScoreStore, ScoreBackend, ScoreRecord, ScoreStore};
