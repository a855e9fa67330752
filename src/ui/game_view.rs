//! Frame rendering.
//!
//! Draws one frame from a [`RenderView`] plus the app's navigation
//! state. Nothing here reads the session directly.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::Focus;
use crate::core::{Mark, Square, SIZE};
use crate::rules::Status;
use crate::session::SortOrder;
use crate::view::RenderView;

pub fn render(
    frame: &mut Frame,
    view: &RenderView,
    selected: Square,
    history_sel: usize,
    focus: Focus,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(25), Constraint::Length(34)])
        .split(chunks[1]);

    render_status(frame, view, chunks[0]);
    render_board(frame, view, selected, focus, panes[0]);
    render_history(frame, view, history_sel, focus, panes[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::Magenta,
    }
}

fn render_status(frame: &mut Frame, view: &RenderView, area: Rect) {
    let color = match view.status {
        Status::Won(_) => Color::Green,
        Status::Draw => Color::Yellow,
        Status::Next(mark) => mark_color(mark),
    };

    let status = Paragraph::new(view.status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tic-Tac-Four"),
        );

    frame.render_widget(status, area);
}

fn render_board(
    frame: &mut Frame,
    view: &RenderView,
    selected: Square,
    focus: Focus,
    area: Rect,
) {
    let mut lines = Vec::new();

    for row in 0..SIZE {
        if row > 0 {
            lines.push(Line::from("---+---+---+---"));
        }

        let mut row_spans = Vec::new();
        for col in 0..SIZE {
            if col > 0 {
                row_spans.push(Span::raw("|"));
            }

            let square = Square::from_coords(row, col);
            let (symbol, mut style) = match view.board.get(square) {
                Some(mark) => (
                    format!(" {} ", mark),
                    Style::default().fg(mark_color(mark)),
                ),
                None => (" . ".to_string(), Style::default().fg(Color::DarkGray)),
            };

            if view.highlights.contains(&square) {
                style = Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD);
            }
            if focus == Focus::Board && square == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }

            row_spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(row_spans));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Board")
            .border_style(focus_style(focus == Focus::Board)),
    );

    frame.render_widget(board_widget, area);
}

fn render_history(
    frame: &mut Frame,
    view: &RenderView,
    history_sel: usize,
    focus: Focus,
    area: Rect,
) {
    let mut lines = Vec::new();

    for entry in &view.moves {
        let mut style = Style::default();
        if entry.current {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        if focus == Focus::History && entry.step == history_sel {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let marker = if entry.current { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, entry.label),
            style,
        )));
    }

    let title = match view.sort {
        SortOrder::Ascending => "History (oldest first)",
        SortOrder::Descending => "History (newest first)",
    };

    let history_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(focus == Focus::History)),
    );

    frame.render_widget(history_widget, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("↑/↓/←/→: Select  |  Enter: Play  |  Tab: Focus history");
    let line2 = Line::from("S: Sort order  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
