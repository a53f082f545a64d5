//! Result label
//!
//! Displays the decoded text (or the placeholder) and the symbol in progress.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

/// Render the result label.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.result().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    };

    let block = Block::default().borders(Borders::ALL).title(" dotdash ");
    let paragraph =
        Paragraph::new(app.display_text()).style(style).alignment(Alignment::Center).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the symbol in progress.
pub fn render_symbol(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled("symbol ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.current_symbol().to_string(), Style::default().fg(Color::Cyan)),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
