//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod alert;
mod buttons;
mod reference;
mod result;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

pub use alert::{ALERT_MESSAGE, ALERT_TITLE};
pub use reference::reference_lines;
pub use status::key_hints;

use crate::App;

/// Presentation switches that are not part of the App state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the Morse reference panel.
    pub show_reference: bool,
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, options: RenderOptions) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 10;
    const STATUS_HEIGHT: u16 = 1;
    const REFERENCE_WIDTH: u16 = 14;
    const COMPOSER_MIN_WIDTH: u16 = 30;

    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    if options.show_reference {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(COMPOSER_MIN_WIDTH), Constraint::Length(REFERENCE_WIDTH)])
            .split(*main_area);

        let [composer_area, reference_area] = chunks.as_ref() else {
            return;
        };

        render_composer(frame, app, *composer_area);
        reference::render(frame, *reference_area);
    } else {
        render_composer(frame, app, *main_area);
    }

    status::render(frame, app, *status_area);

    if app.is_alert_visible() {
        alert::render(frame, area);
    }
}

/// Render the centred composer column (result, symbol, buttons).
fn render_composer(frame: &mut Frame, app: &App, area: Rect) {
    const COLUMN_WIDTH: u16 = 30;
    const RESULT_HEIGHT: u16 = 3;
    const SYMBOL_HEIGHT: u16 = 1;
    const BUTTON_HEIGHT: u16 = 3;
    const COLUMN_HEIGHT: u16 = RESULT_HEIGHT + SYMBOL_HEIGHT + 2 * BUTTON_HEIGHT;

    let column = centered(area, COLUMN_WIDTH, COLUMN_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(RESULT_HEIGHT),
            Constraint::Length(SYMBOL_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(column);

    let [result_area, symbol_area, row_area, reset_area] = chunks.as_ref() else {
        return;
    };

    result::render(frame, app, *result_area);
    result::render_symbol(frame, app, *symbol_area);
    buttons::render(frame, app, *row_area, *reset_area);
}

/// Rectangle of at most `width` x `height` centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x.saturating_add(area.width.saturating_sub(width) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(height) / 2);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 30, 10), Rect::new(25, 7, 30, 10));
    }

    #[test]
    fn centered_clamps_to_small_area() {
        let area = Rect::new(2, 1, 10, 4);
        assert_eq!(centered(area, 30, 10), area);
    }
}
