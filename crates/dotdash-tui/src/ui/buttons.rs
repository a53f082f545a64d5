//! Buttons
//!
//! Signal buttons on one row, reset underneath. The focused button is filled.

use dotdash_app::button::{self, BUTTONS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::App;

/// Render the signal row into `row_area` and reset into `reset_area`.
pub fn render(frame: &mut Frame, app: &App, row_area: Rect, reset_area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(row_area);

    for (index, area) in chunks.iter().enumerate().take(button::ROW_LEN) {
        render_button(frame, app, index, *area);
    }
    render_button(frame, app, button::RESET_INDEX, reset_area);
}

fn render_button(frame: &mut Frame, app: &App, index: usize, area: Rect) {
    let Some(action) = BUTTONS.get(index) else {
        return;
    };

    let style = if app.focus() == index {
        Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);
    let paragraph =
        Paragraph::new(action.label()).style(style).alignment(Alignment::Center).block(block);

    frame.render_widget(paragraph, area);
}
