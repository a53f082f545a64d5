//! Morse reference panel

use dotdash_core::morse;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
};

/// One `"<char> <pattern>"` line per table entry.
pub fn reference_lines() -> Vec<String> {
    morse::entries().map(|(pattern, c)| format!("{c} {pattern}")).collect()
}

/// Render the reference panel.
pub fn render(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = reference_lines()
        .into_iter()
        .map(|line| ListItem::new(line).style(Style::default().fg(Color::Gray)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Morse "));
    frame.render_widget(list, area);
}
