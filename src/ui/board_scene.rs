//! Board rendering: grid, food, snake, and the phase overlays.
//!
//! Each grid cell is drawn as two terminal columns by one row, which keeps the
//! board roughly square in most terminal fonts. The head carries a pair of
//! eyes on the side it is facing.

use super::game_common::{
    create_game_layout, info_line, render_centered_banner, render_info_panel_frame,
    render_status_bar,
};
use crate::core::{Cell, Direction, Phase};
use crate::session::{GameEvent, GameView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Palette ──────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(45, 80, 22);
const BODY_BRIGHT: (f64, f64, f64) = (76.0, 175.0, 80.0);
const BODY_DIM: (f64, f64, f64) = (30.0, 90.0, 35.0);
const EYE_COLOR: Color = Color::White;
const FOOD_COLOR: Color = Color::Rgb(255, 68, 68);
const GRID_LIGHT: Color = Color::Rgb(22, 22, 28);
const GRID_DARK: Color = Color::Rgb(16, 16, 20);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

const FOOD_GLYPH: &str = "()";
const BODY_GLYPH: &str = "  ";

const INFO_PANEL_WIDTH: u16 = 24;

/// (key, action) pair shown in the status bar.
type Control = (&'static str, &'static str);

/// Render the whole game screen from a session snapshot.
pub fn render_game(frame: &mut Frame, area: Rect, view: &GameView) {
    let grid = view.game.config.grid_size as u16;
    let layout = create_game_layout(
        frame,
        area,
        " Snake ",
        Color::LightGreen,
        grid + 2,
        INFO_PANEL_WIDTH,
    );

    let board_area = render_board(frame, layout.content, view);

    match view.game.phase {
        Phase::Ready => render_ready_prompt(frame, board_area),
        Phase::Paused => render_centered_banner(
            frame,
            board_area,
            Color::Yellow,
            "PAUSED",
            &[Line::from(Span::styled(
                "Press Space to resume",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        Phase::GameOver => render_game_over(frame, board_area, view),
        Phase::Running => {}
    }

    let (status, color, controls) = status_for_phase(view.game.phase);
    render_status_bar(frame, layout.status_bar, status, color, controls);
    render_info_panel(frame, layout.info_panel, view);
}

/// Status message, its color, and the offered controls for each phase.
///
/// Start is only offered when a game is not in progress, and Pause only
/// while one is.
pub fn status_for_phase(phase: Phase) -> (&'static str, Color, &'static [Control]) {
    match phase {
        Phase::Ready => (
            "Ready",
            Color::LightGreen,
            &[("[Enter]", "Start"), ("[Arrows]", "Steer"), ("[Q]", "Quit")],
        ),
        Phase::Running => (
            "Slither!",
            Color::Green,
            &[("[Space]", "Pause"), ("[R]", "Reset"), ("[Q]", "Quit")],
        ),
        Phase::Paused => (
            "Paused",
            Color::Yellow,
            &[("[Space]", "Resume"), ("[R]", "Reset"), ("[Q]", "Quit")],
        ),
        Phase::GameOver => (
            "Game over",
            Color::Red,
            &[("[Arrows/Enter]", "Restart"), ("[R]", "Reset"), ("[Q]", "Quit")],
        ),
    }
}

/// Two-character head glyph with the eyes on the facing side.
pub fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "\u{02D9}\u{02D9}", // ˙˙
        Direction::Down => "..",
        Direction::Left => ": ",
        Direction::Right => " :",
    }
}

/// Calculate interpolated RGB color for a snake body segment.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn grid_color(cell: Cell) -> Color {
    if (cell.x + cell.y) % 2 == 0 {
        GRID_LIGHT
    } else {
        GRID_DARK
    }
}

/// Render the bordered board. Returns the area the board occupies so
/// overlays can be centered on it.
fn render_board(frame: &mut Frame, area: Rect, view: &GameView) -> Rect {
    let game = view.game;
    let grid = game.config.grid_size as usize;
    let render_w = (grid * 2 + 2) as u16;
    let render_h = (grid + 2) as u16;

    if area.width < render_w || area.height < render_h {
        let msg = Paragraph::new(Line::from(Span::styled(
            format!("Terminal too small: board needs {}x{}", render_w, render_h),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(msg, area);
        return area;
    }

    let x_off = area.x + (area.width - render_w) / 2;
    let y_off = area.y + (area.height - render_h) / 2;
    let border = Style::default().fg(BORDER_COLOR);

    // ── Cell styles (game coordinates) ──────────────────────────
    let mut cells: Vec<Vec<(&str, Style)>> = (0..grid)
        .map(|y| {
            (0..grid)
                .map(|x| {
                    let bg = grid_color(Cell::new(x as i16, y as i16));
                    (BODY_GLYPH, Style::default().bg(bg))
                })
                .collect()
        })
        .collect();

    let food = game.food;
    if food.in_bounds(game.config.grid_size) {
        let bg = grid_color(food);
        cells[food.y as usize][food.x as usize] = (
            FOOD_GLYPH,
            Style::default()
                .fg(FOOD_COLOR)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        );
    }

    let snake_len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate() {
        if !seg.in_bounds(game.config.grid_size) {
            continue;
        }
        let slot = &mut cells[seg.y as usize][seg.x as usize];
        *slot = if i == 0 {
            (
                head_glyph(game.direction),
                Style::default().fg(EYE_COLOR).bg(HEAD_COLOR),
            )
        } else {
            (BODY_GLYPH, Style::default().bg(body_color(i, snake_len)))
        };
    }

    // ── Top border with score ───────────────────────────────────
    let inner_w = grid * 2;
    let score_text = format!(" {} ", view.game.score);
    let pad_before = inner_w.saturating_sub(score_text.len() + 1);
    let pad_after = inner_w.saturating_sub(pad_before + score_text.len());
    let top = Line::from(vec![
        Span::styled("\u{250C}", border),
        Span::styled("\u{2500}".repeat(pad_before), border),
        Span::styled(score_text, Style::default().fg(Color::White)),
        Span::styled("\u{2500}".repeat(pad_after), border),
        Span::styled("\u{2510}", border),
    ]);
    frame.render_widget(Paragraph::new(top), Rect::new(x_off, y_off, render_w, 1));

    // ── Rows ────────────────────────────────────────────────────
    for (y, row) in cells.into_iter().enumerate() {
        let mut spans = Vec::with_capacity(grid + 2);
        spans.push(Span::styled("\u{2502}", border));
        for (glyph, style) in row {
            spans.push(Span::styled(glyph, style));
        }
        spans.push(Span::styled("\u{2502}", border));
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off + 1 + y as u16, render_w, 1),
        );
    }

    // ── Bottom border ───────────────────────────────────────────
    let bottom = format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_w));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(bottom, border))),
        Rect::new(x_off, y_off + render_h - 1, render_w, 1),
    );

    Rect::new(x_off, y_off, render_w, render_h)
}

/// Render the "Press Enter to Start" prompt centered on the board.
fn render_ready_prompt(frame: &mut Frame, area: Rect) {
    let prompt = "[ Press Enter to Start ]";
    if area.height < 5 || area.width < prompt.len() as u16 {
        return;
    }
    let x = area.x + (area.width - prompt.len() as u16) / 2;
    let y = area.y + area.height / 2 + 2;

    let line = Paragraph::new(Line::from(Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, Rect::new(x, y, prompt.len() as u16, 1));
}

fn render_game_over(frame: &mut Frame, area: Rect, view: &GameView) {
    let mut lines = vec![Line::from(Span::styled(
        format!("Score: {}", view.game.score),
        Style::default().fg(Color::White),
    ))];
    if view.game.score > 0 && view.game.score == view.high_score {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press arrow key to restart",
        Style::default().fg(Color::DarkGray),
    )));

    render_centered_banner(frame, area, Color::Red, "GAME OVER", &lines);
}

/// Short message for the most recent event, if it is worth showing.
pub fn event_message(event: GameEvent) -> Option<String> {
    match event {
        GameEvent::NewHighScore(score) => Some(format!("New high score: {}", score)),
        GameEvent::FoodEaten { score } => Some(format!("Yum! Score {}", score)),
        GameEvent::GameOver { score, length } => {
            Some(format!("Final score {} (length {})", score, length))
        }
        GameEvent::Restarted => Some("New game".to_string()),
        GameEvent::Started | GameEvent::Paused | GameEvent::Resumed | GameEvent::Reset => None,
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, view: &GameView) {
    let inner = render_info_panel_frame(frame, area);
    let game = view.game;
    let value = Style::default().fg(Color::White);

    let high_score = if view.high_score_saved {
        view.high_score.to_string()
    } else {
        format!("{} (unsaved)", view.high_score)
    };

    let mut lines: Vec<Line> = vec![
        info_line(
            "Score",
            game.score.to_string(),
            value.add_modifier(Modifier::BOLD),
        ),
        info_line("High", high_score, Style::default().fg(Color::Yellow)),
        info_line("Length", game.snake.len().to_string(), value),
        info_line("Moves", game.tick_count.to_string(), value),
        info_line(
            "Phase",
            game.phase.label().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Line::from(""),
        info_line(
            "Grid",
            format!("{}x{}", game.config.grid_size, game.config.grid_size),
            value,
        ),
        info_line("Speed", format!("{}ms", game.config.tick_ms), value),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                head_glyph(Direction::Right),
                Style::default().fg(EYE_COLOR).bg(HEAD_COLOR),
            ),
            Span::styled(" Head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(BODY_GLYPH, Style::default().bg(body_color(0, 2))),
            Span::styled(" Body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(FOOD_GLYPH, Style::default().fg(FOOD_COLOR)),
            Span::styled(" Food", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if let Some(message) = view.last_event.and_then(event_message) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::LightGreen),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameState};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn view_of(game: &GameState, high_score: u32) -> GameView<'_> {
        GameView {
            game,
            high_score,
            high_score_saved: true,
            last_event: None,
        }
    }

    fn rendered_text(game: &GameState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_game(f, f.size(), &view_of(game, 0)))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_head_glyph_faces_direction() {
        assert_eq!(head_glyph(Direction::Right), " :");
        assert_eq!(head_glyph(Direction::Left), ": ");
        assert_eq!(head_glyph(Direction::Down), "..");
        for d in Direction::ALL {
            assert_eq!(head_glyph(d).chars().count(), 2);
        }
    }

    #[test]
    fn test_status_offers_start_only_when_idle() {
        let has = |phase: Phase, action: &str| {
            status_for_phase(phase)
                .2
                .iter()
                .any(|(_, a)| *a == action)
        };
        assert!(has(Phase::Ready, "Start"));
        assert!(!has(Phase::Running, "Start"));
        assert!(has(Phase::Running, "Pause"));
        assert!(has(Phase::Paused, "Resume"));
        assert!(has(Phase::GameOver, "Restart"));
        assert!(!has(Phase::GameOver, "Pause"));
    }

    #[test]
    fn test_body_gradient_endpoints() {
        assert_eq!(body_color(0, 5), Color::Rgb(76, 175, 80));
        assert_eq!(body_color(4, 5), Color::Rgb(30, 90, 35));
    }

    #[test]
    fn test_event_messages() {
        assert_eq!(
            event_message(GameEvent::NewHighScore(50)).as_deref(),
            Some("New high score: 50")
        );
        assert_eq!(event_message(GameEvent::Paused), None);
    }

    #[test]
    fn test_render_overlays_by_phase() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = GameState::new(GameConfig::default(), &mut rng);

        let text = rendered_text(&game, 80, 30);
        assert!(text.contains("Press Enter to Start"));

        game.phase = Phase::Paused;
        assert!(rendered_text(&game, 80, 30).contains("PAUSED"));

        game.phase = Phase::GameOver;
        game.score = 30;
        let text = rendered_text(&game, 80, 30);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Score: 30"));
    }

    #[test]
    fn test_info_panel_shows_move_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = GameState::new(GameConfig::default(), &mut rng);
        game.phase = Phase::Running;
        game.tick_count = 37;

        let text = rendered_text(&game, 80, 30);
        assert!(text.contains("Moves: 37"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = GameState::new(GameConfig::default(), &mut rng);
        let text = rendered_text(&game, 40, 12);
        assert!(!text.is_empty());
    }
}
