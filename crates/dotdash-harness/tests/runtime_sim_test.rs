//! End-to-end tests driving the real Runtime through the SimDriver.
//!
//! # Test Strategy
//!
//! Each test simulates what a user does on the screen:
//! 1. Press keys or buttons
//! 2. Run the production Runtime loop over the scripted input
//! 3. Verify the rendered snapshots match the expected screen states
//!
//! Invariants are checked at every render.

use dotdash_app::{AppEvent, KeyInput, Runtime};
use dotdash_core::Action;
use dotdash_harness::{AppSnapshot, InvariantRegistry, SimDriver};

fn driver() -> SimDriver {
    SimDriver::new().with_invariants(InvariantRegistry::standard())
}

/// Step the runtime until the scripted input is exhausted.
async fn drain(runtime: &mut Runtime<SimDriver>, driver: &SimDriver) -> bool {
    while driver.has_pending() {
        if runtime.step().await.unwrap() {
            return true;
        }
    }
    false
}

#[tokio::test]
async fn decodes_sos_and_renders_each_step() {
    let driver = driver();
    let mut runtime = Runtime::new(driver.clone());

    driver.inject_keys("... --- ... ");
    let quit = drain(&mut runtime, &driver).await;

    assert!(!quit);
    assert_eq!(runtime.app().result(), "SOS");
    // One render per processed key
    assert_eq!(driver.render_count(), 12);
}

#[tokio::test]
async fn decode_failure_then_close_alert() {
    let driver = driver();
    let mut runtime = Runtime::new(driver.clone());

    driver.inject_keys("-.-.- ");
    drain(&mut runtime, &driver).await;
    assert!(runtime.app().is_alert_visible());

    // Swallowed by the modal alert
    driver.inject_keys("...");
    drain(&mut runtime, &driver).await;
    assert_eq!(runtime.app().current_symbol(), "");

    driver.inject_key(KeyInput::Enter);
    drain(&mut runtime, &driver).await;

    let last = driver.renders().pop().unwrap();
    assert_eq!(last, AppSnapshot::default());
}

#[tokio::test]
async fn button_presses_follow_tags() {
    let driver = driver();
    let mut runtime = Runtime::new(driver.clone());

    for action in [Action::Hyphen, Action::Dot, Action::Space, Action::Dot, Action::Space] {
        driver.inject_event(AppEvent::ButtonPressed { tag: action.tag() });
    }
    drain(&mut runtime, &driver).await;
    assert_eq!(runtime.app().result(), "NE");

    driver.inject_event(AppEvent::ButtonPressed { tag: Action::Reset.tag() });
    drain(&mut runtime, &driver).await;
    assert_eq!(runtime.app().result(), "");
}

#[tokio::test]
async fn alert_ignores_signal_buttons_until_closed() {
    let driver = driver();
    let mut runtime = Runtime::new(driver.clone());

    driver.inject_keys("-.-.- ");
    drain(&mut runtime, &driver).await;
    assert!(runtime.app().is_alert_visible());
    let renders_with_alert = driver.render_count();

    driver.inject_event(AppEvent::ButtonPressed { tag: Action::Dot.tag() });
    drain(&mut runtime, &driver).await;

    assert_eq!(runtime.app().current_symbol(), "");
    assert!(runtime.app().is_alert_visible());
    assert_eq!(driver.render_count(), renders_with_alert);

    driver.inject_event(AppEvent::ButtonPressed { tag: Action::CloseAlert.tag() });
    drain(&mut runtime, &driver).await;

    assert!(!runtime.app().is_alert_visible());
    assert_eq!(driver.renders().last(), Some(&AppSnapshot::default()));

    let registry = InvariantRegistry::standard();
    for snapshot in driver.renders() {
        assert!(registry.check_all(&snapshot).is_ok());
    }
}

#[tokio::test]
async fn unknown_tag_still_renders() {
    let driver = driver();
    let mut runtime = Runtime::new(driver.clone());

    driver.inject_event(AppEvent::ButtonPressed { tag: 77 });
    drain(&mut runtime, &driver).await;

    assert_eq!(driver.render_count(), 1);
    assert_eq!(driver.renders()[0], AppSnapshot::default());
    assert_eq!(runtime.app().status_message(), Some("Unknown button tag 77"));
}

#[tokio::test]
async fn ticks_do_not_render() {
    let driver = driver();
    let mut runtime = Runtime::new(driver.clone());

    driver.inject_tick();
    driver.inject_tick();
    drain(&mut runtime, &driver).await;

    assert_eq!(driver.render_count(), 0);
}

#[tokio::test]
async fn run_renders_once_then_quits_and_stops() {
    let driver = driver();
    let runtime = Runtime::new(driver.clone());

    driver.inject_keys(".- ");
    driver.inject_key(KeyInput::Esc);
    runtime.run().await.unwrap();

    // Initial render plus one per processed key
    assert_eq!(driver.render_count(), 4);
    assert_eq!(driver.renders().last().map(|s| s.result.as_str()), Some("A"));
    assert!(driver.is_stopped());
}
