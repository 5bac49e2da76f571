//! Snake game data structures.
//!
//! One `GameState` describes a single game session: the snake, its food, the
//! direction pair, the score, and the phase. It is owned by the session and
//! passed explicitly to the engine and the controls.

use super::config::GameConfig;
use super::constants::INITIAL_SNAKE_LENGTH;
use super::types::{Cell, Direction, Phase};
use rand::Rng;
use std::collections::VecDeque;

/// Main game state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,

    // Snake state
    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Cell>,
    /// Direction applied on the last tick.
    pub direction: Direction,
    /// Buffered next direction, latched at the start of the next tick.
    pub next_direction: Direction,

    pub food: Cell,
    pub score: u32,

    /// Movement steps taken in this game.
    pub tick_count: u64,
}

impl GameState {
    /// Create a fresh board in the Ready phase.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let mut state = Self {
            config,
            phase: Phase::Ready,
            snake: VecDeque::with_capacity(INITIAL_SNAKE_LENGTH),
            direction: Direction::Right,
            next_direction: Direction::Right,
            // Overwritten by reset
            food: Cell::new(0, 0),
            score: 0,
            tick_count: 0,
        };
        state.reset(rng);
        state
    }

    /// Put the board back to its starting layout and enter Ready.
    ///
    /// The snake lies horizontally on the middle row with its head at the
    /// rightmost cell, facing right.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let row = self.config.start_row();
        self.snake.clear();
        for x in (0..INITIAL_SNAKE_LENGTH as i16).rev() {
            self.snake.push_back(Cell::new(x, row));
        }
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.tick_count = 0;
        self.phase = Phase::Ready;
        self.place_food(rng);
    }

    /// Move the food to a random free cell.
    pub fn place_food<R: Rng>(&mut self, rng: &mut R) {
        self.food = spawn_food(&self.snake, self.config.grid_size, rng);
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Find a random cell not occupied by the snake.
///
/// Draws uniformly over the whole grid and redraws on a hit. This never
/// returns if the snake covers every cell.
pub fn spawn_food<R: Rng>(snake: &VecDeque<Cell>, grid_size: i16, rng: &mut R) -> Cell {
    loop {
        let x = rng.gen_range(0..grid_size);
        let y = rng.gen_range(0..grid_size);
        let cell = Cell::new(x, y);
        if !snake.contains(&cell) {
            return cell;
        }
    }
}
