//! Status bar
//!
//! Displays the transient status message, or key hints when there is none.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Key hints for the current mode.
pub fn key_hints(alert_visible: bool) -> &'static str {
    if alert_visible {
        "Enter/Esc/c close alert"
    } else {
        ". dot  - hyphen  _ space  r reset  q quit"
    }
}

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.status_message() {
        Some(message) => Span::styled(message.to_string(), Style::default().fg(Color::Yellow)),
        None => Span::raw(key_hints(app.is_alert_visible())),
    };

    let status_line = Line::from(vec![Span::raw(" "), content]);
    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
