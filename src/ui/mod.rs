//! Terminal rendering. Everything here is a pure function of a `GameView`.

pub mod board_scene;
pub mod game_common;

use crate::session::GameView;
use ratatui::Frame;

/// Draw one full frame.
pub fn draw_ui(frame: &mut Frame, view: &GameView) {
    let area = frame.size();
    board_scene::render_game(frame, area, view);
}
