//! Decode failure alert
//!
//! Modal popup shown while the processor's error flag is set.

use dotdash_core::Action;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Alert title.
pub const ALERT_TITLE: &str = "Bad symbols";

/// Alert body.
pub const ALERT_MESSAGE: &str = "Symbols cannot parse";

const ALERT_WIDTH: u16 = 28;
const ALERT_HEIGHT: u16 = 5;

/// Render the alert centred over `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup = super::centered(area, ALERT_WIDTH, ALERT_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {ALERT_TITLE} "));

    let close = format!("[ {} ]", Action::CloseAlert.label());
    let lines = vec![
        Line::from(ALERT_MESSAGE),
        Line::default(),
        Line::from(Span::styled(
            close,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), popup);
}
