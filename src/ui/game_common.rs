//! Shared layout and chrome for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area (board) - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create the game layout with an outer border.
///
/// The board goes in the content area, phase status and key hints in the
/// status bar, score and legend in the info panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full terminal area
/// * `title` - Title for the outer border (e.g., " Snake ")
/// * `border_color` - Color for the outer border
/// * `content_min_height` - Rows the board needs, borders included
/// * `info_panel_width` - Width of the info panel on the right
///
/// # Returns
/// A `GameLayout` with the board, status bar, and info panel areas.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    // Outer border around the whole screen
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Board column (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    // Board (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render the status bar (2 lines: phase message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area under the board
/// * `status_text` - The phase message (line 1)
/// * `status_color` - Color for the phase message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Enter]", "Start"), ("[Q]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    // Line 1: phase message (centered)
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: controls offered in this phase (centered)
    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a boxed message centered in `area`. Only the box is cleared, so
/// the board stays visible around it.
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The board area to center on
/// * `border_color` - Color for the box border and the title
/// * `title` - Bold first line (e.g., "PAUSED")
/// * `lines` - Body lines under the title
///
/// Does nothing if `area` cannot fit a box.
pub fn render_centered_banner(
    frame: &mut Frame,
    area: Rect,
    border_color: Color,
    title: &str,
    lines: &[Line],
) {
    let content_width = lines
        .iter()
        .map(|l| l.width())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 6).min(area.width);
    let height = (lines.len() as u16 + 4).min(area.height);
    if width < 4 || height < 3 {
        return;
    }

    let banner_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(lines.iter().cloned());

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Render the info panel frame with the " Info " title and DarkGray border.
///
/// # Returns
/// The inner Rect for the score lines and legend.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One "Label: value" line for the info panel.
pub fn info_line(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, value_style),
    ])
}
