//! Player commands: steering, pause, start, and reset.

use super::game_state::GameState;
use super::types::{Direction, Phase};
use rand::Rng;

/// UI-agnostic commands accepted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    TogglePause,
    Start,
    Reset,
}

/// Effect of a command on the game, for the caller to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command did not change anything
    Ignored,
    /// A direction was queued for the next tick
    Turned(Direction),
    Paused,
    Resumed,
    /// Entered Running from Ready
    Started,
    /// Entered Running from GameOver, after a fresh reset
    Restarted,
    /// Back to Ready
    Reset,
}

/// Apply one command to the game.
pub fn apply_command<R: Rng>(
    game: &mut GameState,
    command: GameCommand,
    rng: &mut R,
) -> CommandOutcome {
    match command {
        GameCommand::Turn(direction) => request_direction(game, direction, rng),
        GameCommand::TogglePause => request_pause_toggle(game),
        GameCommand::Start => request_start(game, rng),
        GameCommand::Reset => {
            game.reset(rng);
            CommandOutcome::Reset
        }
    }
}

/// Queue a direction for the next tick.
///
/// A request opposite to the applied direction is dropped. After a game over,
/// any direction restarts the game instead and is not carried into it.
pub fn request_direction<R: Rng>(
    game: &mut GameState,
    direction: Direction,
    rng: &mut R,
) -> CommandOutcome {
    if game.phase == Phase::GameOver {
        return request_start(game, rng);
    }
    if direction == game.direction.opposite() {
        return CommandOutcome::Ignored;
    }
    game.next_direction = direction;
    CommandOutcome::Turned(direction)
}

/// Flip between Running and Paused. No effect in Ready or GameOver.
pub fn request_pause_toggle(game: &mut GameState) -> CommandOutcome {
    match game.phase {
        Phase::Running => {
            game.phase = Phase::Paused;
            CommandOutcome::Paused
        }
        Phase::Paused => {
            game.phase = Phase::Running;
            CommandOutcome::Resumed
        }
        Phase::Ready | Phase::GameOver => CommandOutcome::Ignored,
    }
}

/// Begin play. A finished game is reset first. Running and Paused games are
/// left alone.
pub fn request_start<R: Rng>(game: &mut GameState, rng: &mut R) -> CommandOutcome {
    match game.phase {
        Phase::Ready => {
            game.phase = Phase::Running;
            CommandOutcome::Started
        }
        Phase::GameOver => {
            game.reset(rng);
            game.phase = Phase::Running;
            CommandOutcome::Restarted
        }
        Phase::Running | Phase::Paused => CommandOutcome::Ignored,
    }
}
