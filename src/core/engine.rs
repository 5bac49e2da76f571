//! Snake movement, collision detection, and food consumption.

use super::game_state::GameState;
use super::types::Phase;
use crate::scores::{HighScore, ScoreStore};
use rand::Rng;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The snake advanced one cell
    pub moved: bool,
    /// The head landed on the food
    pub ate_food: bool,
    /// Set when this tick's score beat the high score
    pub new_high_score: Option<u32>,
    /// The snake hit a wall or itself
    pub game_over: bool,
}

/// Advance the game by one step.
///
/// Does nothing unless the phase is Running. Collisions end the game and leave
/// the snake exactly as it was before the tick.
pub fn tick<S: ScoreStore, R: Rng>(
    game: &mut GameState,
    high_score: &mut HighScore<S>,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if !game.is_running() {
        return result;
    }

    // Latch the queued direction before any movement math
    game.direction = game.next_direction;

    let new_head = game.head().step(game.direction);

    if !new_head.in_bounds(game.config.grid_size) {
        game.phase = Phase::GameOver;
        result.game_over = true;
        return result;
    }

    // The whole body counts, tail included, even though the tail would move
    // out of the way on a non-eating step.
    if game.occupies(new_head) {
        game.phase = Phase::GameOver;
        result.game_over = true;
        return result;
    }

    game.snake.push_front(new_head);
    game.tick_count += 1;
    result.moved = true;

    if new_head == game.food {
        game.score = game.score.saturating_add(game.config.food_reward);
        result.ate_food = true;
        if high_score.record(game.score) {
            result.new_high_score = Some(game.score);
        }
        game.place_food(rng);
    } else {
        game.snake.pop_back();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::types::{Cell, Direction};
    use crate::scores::MemoryScoreStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn setup() -> (GameState, HighScore<MemoryScoreStore>, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut game = GameState::new(GameConfig::default(), &mut rng);
        game.phase = Phase::Running;
        // Keep food out of the default path along row 10
        game.food = Cell::new(0, 0);
        (game, HighScore::load(MemoryScoreStore::default()), rng)
    }

    fn set_snake(game: &mut GameState, cells: &[(i16, i16)], direction: Direction) {
        game.snake = cells.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        game.direction = direction;
        game.next_direction = direction;
    }

    #[test]
    fn test_snake_moves_right() {
        let (mut game, mut high, mut rng) = setup();

        let result = tick(&mut game, &mut high, &mut rng);

        assert!(result.moved);
        assert_eq!(game.head(), Cell::new(3, 10));
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.snake.back(), Some(&Cell::new(1, 10)));
    }

    #[test]
    fn test_snake_moves_up_after_latch() {
        let (mut game, mut high, mut rng) = setup();
        game.next_direction = Direction::Up;

        tick(&mut game, &mut high, &mut rng);

        assert_eq!(game.direction, Direction::Up);
        assert_eq!(game.head(), Cell::new(2, 9));
    }

    #[test]
    fn test_no_movement_unless_running() {
        for phase in [Phase::Ready, Phase::Paused, Phase::GameOver] {
            let (mut game, mut high, mut rng) = setup();
            game.phase = phase;
            game.next_direction = Direction::Down;
            let before = game.snake.clone();

            let result = tick(&mut game, &mut high, &mut rng);

            assert_eq!(result, TickResult::default());
            assert_eq!(game.snake, before);
            assert_eq!(game.phase, phase);
            // Direction is not latched on a skipped tick
            assert_eq!(game.direction, Direction::Right);
        }
    }

    #[test]
    fn test_wall_collision_right() {
        let (mut game, mut high, mut rng) = setup();
        set_snake(&mut game, &[(19, 10), (18, 10), (17, 10)], Direction::Right);
        let before = game.snake.clone();

        let result = tick(&mut game, &mut high, &mut rng);

        assert!(result.game_over);
        assert!(!result.moved);
        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.snake, before);
    }

    #[test]
    fn test_wall_collision_top_and_left() {
        let (mut game, mut high, mut rng) = setup();
        set_snake(&mut game, &[(10, 0), (10, 1), (10, 2)], Direction::Up);
        tick(&mut game, &mut high, &mut rng);
        assert_eq!(game.phase, Phase::GameOver);

        let (mut game, mut high, mut rng) = setup();
        set_snake(&mut game, &[(0, 5), (1, 5), (2, 5)], Direction::Left);
        tick(&mut game, &mut high, &mut rng);
        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn test_self_collision() {
        let (mut game, mut high, mut rng) = setup();
        // Moving right from (5,5) goes to (6,5), which is body
        set_snake(
            &mut game,
            &[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6)],
            Direction::Right,
        );
        let before = game.snake.clone();

        let result = tick(&mut game, &mut high, &mut rng);

        assert!(result.game_over);
        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.snake, before);
    }

    #[test]
    fn test_entering_vacating_tail_is_collision() {
        let (mut game, mut high, mut rng) = setup();
        // Head (5,5) moving down lands on the tail at (5,6)
        set_snake(&mut game, &[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Down);

        tick(&mut game, &mut high, &mut rng);

        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.snake.len(), 4);
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let (mut game, mut high, mut rng) = setup();
        game.food = Cell::new(3, 10);

        let result = tick(&mut game, &mut high, &mut rng);

        assert!(result.ate_food);
        assert_eq!(game.score, 10);
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.snake.back(), Some(&Cell::new(0, 10)));
        assert!(!game.occupies(game.food));
        assert_eq!(result.new_high_score, Some(10));
        assert_eq!(high.best(), 10);
        assert_eq!(high.store().saves, 1);
    }

    #[test]
    fn test_eating_below_high_score_does_not_persist() {
        let (mut game, _, mut rng) = setup();
        let mut high = HighScore::load(MemoryScoreStore::with_score(500));
        game.food = Cell::new(3, 10);

        let result = tick(&mut game, &mut high, &mut rng);

        assert!(result.ate_food);
        assert_eq!(result.new_high_score, None);
        assert_eq!(high.best(), 500);
        assert_eq!(high.store().saves, 0);
    }

    #[test]
    fn test_custom_food_reward() {
        let (mut game, mut high, mut rng) = setup();
        game.config.food_reward = 25;
        game.food = Cell::new(3, 10);

        tick(&mut game, &mut high, &mut rng);

        assert_eq!(game.score, 25);
    }

    #[test]
    fn test_score_saturates_instead_of_wrapping() {
        let (mut game, mut high, mut rng) = setup();
        game.config.food_reward = u32::MAX;
        game.food = Cell::new(3, 10);
        tick(&mut game, &mut high, &mut rng);
        assert_eq!(game.score, u32::MAX);

        game.food = Cell::new(4, 10);
        tick(&mut game, &mut high, &mut rng);

        assert_eq!(game.score, u32::MAX);
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(high.best(), u32::MAX);
    }

    #[test]
    fn test_body_stays_contiguous_and_unique() {
        let (mut game, mut high, mut rng) = setup();
        let turns = [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Right,
        ];
        for turn in turns {
            game.next_direction = turn;
            game.food = game.head().step(turn);
            tick(&mut game, &mut high, &mut rng);
            assert_eq!(game.phase, Phase::Running);

            let cells: Vec<Cell> = game.snake.iter().copied().collect();
            for pair in cells.windows(2) {
                let dist = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(dist, 1, "segments must be orthogonally adjacent");
            }
            let unique: std::collections::HashSet<Cell> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());
            assert!(!game.occupies(game.food));
        }
        assert_eq!(game.snake.len(), 3 + turns.len());
    }

    #[test]
    fn test_single_cell_snake_moves() {
        let (mut game, mut high, mut rng) = setup();
        game.snake = VecDeque::from([Cell::new(4, 4)]);

        tick(&mut game, &mut high, &mut rng);

        assert_eq!(game.snake, VecDeque::from([Cell::new(5, 4)]));
    }
}
