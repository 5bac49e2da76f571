//! One play session: a game, its scheduler, and the high score.
//!
//! The session is the single owner of all mutable game data. The binary feeds
//! it commands and elapsed time; it hands back events for the display.

use crate::core::{
    apply_command, tick, CommandOutcome, GameCommand, GameConfig, GameState, Phase, Scheduler,
};
use crate::scores::{HighScore, ScoreStore};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Notifications for the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Restarted,
    Paused,
    Resumed,
    Reset,
    FoodEaten { score: u32 },
    NewHighScore(u32),
    GameOver { score: u32, length: usize },
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub game: &'a GameState,
    pub high_score: u32,
    /// False when the high score only lives in memory
    pub high_score_saved: bool,
    pub last_event: Option<GameEvent>,
}

pub struct Session<S: ScoreStore> {
    game: GameState,
    high_score: HighScore<S>,
    scheduler: Scheduler,
    rng: StdRng,
    last_event: Option<GameEvent>,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Session with a caller-supplied RNG, for reproducible games.
    pub fn with_rng(config: GameConfig, store: S, mut rng: StdRng) -> Self {
        let game = GameState::new(config, &mut rng);
        let high_score = HighScore::load(store);
        info!(
            "Session ready: {}x{} grid, {}ms ticks, {} points per food, high score {}",
            config.grid_size,
            config.grid_size,
            config.tick_ms,
            config.food_reward,
            high_score.best()
        );
        Self {
            game,
            high_score,
            scheduler: Scheduler::new(config.tick_ms),
            rng,
            last_event: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Direct access for tests and tools that need to stage a board.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.last_event
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            game: &self.game,
            high_score: self.high_score.best(),
            high_score_saved: self.high_score.is_persistent()
                && self.high_score.store().is_durable(),
            last_event: self.last_event,
        }
    }

    /// Apply a player command and keep the scheduler in step with the phase.
    pub fn handle(&mut self, command: GameCommand) -> Option<GameEvent> {
        let outcome = apply_command(&mut self.game, command, &mut self.rng);
        let event = match outcome {
            CommandOutcome::Ignored => None,
            CommandOutcome::Turned(direction) => {
                debug!("Queued direction {}", direction.name());
                None
            }
            CommandOutcome::Started => {
                self.scheduler.start();
                info!("Game started");
                Some(GameEvent::Started)
            }
            CommandOutcome::Restarted => {
                self.scheduler.start();
                info!("Game restarted");
                Some(GameEvent::Restarted)
            }
            CommandOutcome::Paused => Some(GameEvent::Paused),
            CommandOutcome::Resumed => Some(GameEvent::Resumed),
            CommandOutcome::Reset => {
                self.scheduler.stop();
                info!("Game reset");
                Some(GameEvent::Reset)
            }
        };
        if event.is_some() {
            self.last_event = event;
        }
        event
    }

    /// Feed elapsed time and run every tick that came due.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let due = self.scheduler.advance(dt_ms);
        let mut events = Vec::new();
        for _ in 0..due {
            events.extend(self.step());
            if self.game.phase == Phase::GameOver {
                break;
            }
        }
        events
    }

    /// Run exactly one tick, regardless of the scheduler.
    pub fn step(&mut self) -> Vec<GameEvent> {
        let result = tick(&mut self.game, &mut self.high_score, &mut self.rng);
        let mut events = Vec::new();

        if result.ate_food {
            events.push(GameEvent::FoodEaten {
                score: self.game.score,
            });
        }
        if let Some(score) = result.new_high_score {
            events.push(GameEvent::NewHighScore(score));
        }
        if result.game_over {
            self.scheduler.stop();
            info!(
                "Game over: score {}, length {}, {} moves",
                self.game.score,
                self.game.snake.len(),
                self.game.tick_count
            );
            events.push(GameEvent::GameOver {
                score: self.game.score,
                length: self.game.snake.len(),
            });
        }

        if let Some(&last) = events.last() {
            self.last_event = Some(last);
        }
        events
    }

    /// Forget the stored high score.
    pub fn clear_high_score(&mut self) {
        self.high_score.clear();
        info!("High score cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Direction};
    use crate::scores::MemoryScoreStore;

    fn session() -> Session<MemoryScoreStore> {
        Session::with_rng(
            GameConfig::default(),
            MemoryScoreStore::default(),
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_new_session_is_ready_and_idle() {
        let s = session();
        assert_eq!(s.game().phase, Phase::Ready);
        assert!(!s.scheduler().is_running());
        assert_eq!(s.last_event(), None);
    }

    #[test]
    fn test_time_does_not_move_snake_before_start() {
        let mut s = session();
        let before = s.game().snake.clone();
        assert!(s.advance(1000).is_empty());
        assert_eq!(s.game().snake, before);
    }

    #[test]
    fn test_start_arms_scheduler_and_ticks() {
        let mut s = session();
        s.game_mut().food = Cell::new(0, 0);
        assert_eq!(s.handle(GameCommand::Start), Some(GameEvent::Started));
        assert!(s.scheduler().is_running());

        s.advance(100);
        assert_eq!(s.game().head(), Cell::new(3, 10));
    }

    #[test]
    fn test_paused_consumes_ticks_without_moving() {
        let mut s = session();
        s.game_mut().food = Cell::new(0, 0);
        s.handle(GameCommand::Start);
        s.handle(GameCommand::TogglePause);
        let before = s.game().snake.clone();

        s.advance(300);

        assert_eq!(s.game().snake, before);
        assert!(s.scheduler().is_running());

        s.handle(GameCommand::TogglePause);
        s.advance(100);
        assert_eq!(s.game().head(), Cell::new(3, 10));
    }

    #[test]
    fn test_game_over_stops_scheduler_and_reports_score() {
        let mut s = session();
        s.handle(GameCommand::Start);
        {
            let game = s.game_mut();
            game.snake = [Cell::new(19, 10), Cell::new(18, 10), Cell::new(17, 10)]
                .into_iter()
                .collect();
            game.score = 30;
            game.food = Cell::new(0, 0);
        }

        let events = s.advance(500);

        assert_eq!(events, vec![GameEvent::GameOver { score: 30, length: 3 }]);
        assert!(!s.scheduler().is_running());
        assert_eq!(s.last_event(), Some(GameEvent::GameOver { score: 30, length: 3 }));
    }

    #[test]
    fn test_food_event_and_high_score_event() {
        let mut s = session();
        s.handle(GameCommand::Start);
        s.game_mut().food = Cell::new(3, 10);

        let events = s.step();

        assert_eq!(
            events,
            vec![GameEvent::FoodEaten { score: 10 }, GameEvent::NewHighScore(10)]
        );
        assert_eq!(s.view().high_score, 10);
        assert_eq!(s.high_score().store().saves, 1);
    }

    #[test]
    fn test_reset_stops_scheduler() {
        let mut s = session();
        s.handle(GameCommand::Start);
        assert_eq!(s.handle(GameCommand::Reset), Some(GameEvent::Reset));
        assert!(!s.scheduler().is_running());
        assert_eq!(s.game().phase, Phase::Ready);
    }

    #[test]
    fn test_ignored_command_keeps_last_event() {
        let mut s = session();
        s.handle(GameCommand::Start);
        assert_eq!(s.handle(GameCommand::Turn(Direction::Left)), None);
        assert_eq!(s.last_event(), Some(GameEvent::Started));
    }

    #[test]
    fn test_clear_high_score() {
        let mut s = Session::with_rng(
            GameConfig::default(),
            MemoryScoreStore::with_score(90),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(s.view().high_score, 90);
        s.clear_high_score();
        assert_eq!(s.view().high_score, 0);
    }
}
