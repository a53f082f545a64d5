//! Rendering tests against ratatui's in-memory backend.
//!
//! Each test drives the App through the same key presses a user would make,
//! renders one frame and inspects the resulting screen text.

use dotdash_app::{App, AppEvent, KeyInput, PLACEHOLDER};
use dotdash_tui::ui::{self, ALERT_MESSAGE, ALERT_TITLE, RenderOptions};
use ratatui::{Terminal, backend::TestBackend};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
}

/// Render one frame and return the screen as lines.
fn screen(app: &App, options: RenderOptions) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, app, options)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn fresh_screen_shows_placeholder_and_buttons() {
    let app = App::new();
    let lines = screen(&app, RenderOptions::default());

    assert!(contains(&lines, PLACEHOLDER));
    assert!(contains(&lines, "Reset"));
    assert!(contains(&lines, "_"));
    assert!(contains(&lines, "q quit"));
    assert!(!contains(&lines, ALERT_TITLE));
}

#[test]
fn decoded_text_replaces_placeholder() {
    let mut app = App::new();
    type_keys(&mut app, "... --- ... ");

    let lines = screen(&app, RenderOptions::default());

    assert!(contains(&lines, "SOS"));
    assert!(!contains(&lines, PLACEHOLDER));
}

#[test]
fn symbol_in_progress_is_shown() {
    let mut app = App::new();
    type_keys(&mut app, "-.-");

    let lines = screen(&app, RenderOptions::default());
    assert!(contains(&lines, "symbol -.-"));
}

#[test]
fn alert_shows_over_composer() {
    let mut app = App::new();
    type_keys(&mut app, "-.-.- ");

    let lines = screen(&app, RenderOptions::default());

    assert!(contains(&lines, ALERT_TITLE));
    assert!(contains(&lines, ALERT_MESSAGE));
    assert!(contains(&lines, "[ Close ]"));
    assert!(contains(&lines, "close alert"));
}

#[test]
fn alert_gone_after_close() {
    let mut app = App::new();
    type_keys(&mut app, "-.-.- ");
    let _ = app.handle(AppEvent::Key(KeyInput::Enter));

    let lines = screen(&app, RenderOptions::default());
    assert!(!contains(&lines, ALERT_TITLE));
    assert!(contains(&lines, PLACEHOLDER));
}

#[test]
fn status_message_replaces_hints() {
    let mut app = App::new();
    let _ = app.handle(AppEvent::ButtonPressed { tag: 12 });

    let lines = screen(&app, RenderOptions::default());
    assert!(contains(&lines, "Unknown button tag 12"));
    assert!(!contains(&lines, "q quit"));
}

#[test]
fn reference_panel_lists_table() {
    let app = App::new();

    let with_panel = screen(&app, RenderOptions { show_reference: true });
    assert!(contains(&with_panel, "Morse"));
    assert!(contains(&with_panel, "A .-"));

    let without_panel = screen(&app, RenderOptions::default());
    assert!(!contains(&without_panel, "A .-"));
}

#[test]
fn reference_lines_start_with_letters() {
    let lines = ui::reference_lines();
    insta::assert_snapshot!(lines[..5].join("\n"), @r"
    A .-
    B -...
    C -.-.
    D -..
    E .
    ");
}
