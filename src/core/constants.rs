// Board
pub const GRID_SIZE: i16 = 20;
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
/// Upper bound on elapsed time fed to the scheduler per poll.
pub const MAX_FRAME_DT_MS: u64 = 500;
pub const INPUT_POLL_MS: u64 = 16;

// Scoring
pub const FOOD_REWARD: u32 = 10;

// Persistence
pub const HIGH_SCORE_SLOT: &str = "snakeHighScore";
pub const HIGH_SCORE_FILE: &str = "high_scores.json";
pub const LOG_FILE: &str = "snake.log";

// Accepted ranges for the CLI overrides
pub const MIN_GRID_SIZE: i16 = 8;
pub const MAX_GRID_SIZE: i16 = 60;
pub const MIN_TICK_MS: u64 = 20;
pub const MAX_TICK_MS: u64 = 1000;
pub const MIN_FOOD_REWARD: u32 = 1;
pub const MAX_FOOD_REWARD: u32 = 1000;
