use crate::common::harness::PortfolioTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use folio::app::intro::IntroPhase;
use std::time::Duration;

fn phase(harness: &PortfolioTestHarness) -> Option<IntroPhase> {
    harness.app().intro().map(|intro| intro.phase())
}

#[test]
fn test_intro_runs_then_hands_off() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();
    assert_eq!(phase(&harness), Some(IntroPhase::Dark));

    let mut last = IntroPhase::Dark;
    let mut seen = vec![last];
    while let Some(current) = phase(&harness) {
        assert!(current >= last, "phase went back from {last:?} to {current:?}");
        if current != last {
            seen.push(current);
            last = current;
        }
        harness.advance(Duration::from_millis(16));
    }

    assert_eq!(
        seen,
        vec![
            IntroPhase::Dark,
            IntroPhase::Backdrop,
            IntroPhase::Rain,
            IntroPhase::Typing,
            IntroPhase::Ready,
            IntroPhase::Glow,
        ]
    );
    let elapsed = harness.time().elapsed();
    assert!(
        elapsed >= Duration::from_millis(6000) && elapsed < Duration::from_millis(6100),
        "handoff at {elapsed:?}"
    );

    harness.render().unwrap();
    harness.assert_screen_contains("Welcome to Yash Gandhi's Portfolio Terminal.");
}

#[test]
fn test_title_and_status_line() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();

    harness.advance(Duration::from_millis(1000));
    harness.render().unwrap();
    harness.assert_screen_not_contains("YASH");

    harness.advance(Duration::from_millis(1800));
    harness.render().unwrap();
    harness.assert_screen_contains("YASH GANDHI");
    harness.assert_screen_not_contains("System ready");

    harness.advance(Duration::from_millis(300));
    harness.render().unwrap();
    harness.assert_screen_contains("> System ready");
    harness.assert_screen_contains("Press any key to continue");
}

#[test]
fn test_subtitle_typed_before_handoff() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();
    harness.advance(Duration::from_millis(5900));
    harness.render().unwrap();
    harness.assert_screen_contains("FULL-STACK DEVELOPER");
}

#[test]
fn test_key_before_ready_is_ignored() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();
    harness.advance(Duration::from_millis(1500));
    harness.type_text("x").unwrap();

    assert_eq!(phase(&harness), Some(IntroPhase::Typing));
}

#[test]
fn test_key_after_ready_skips_to_terminal() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();
    harness.advance(Duration::from_millis(3100));
    assert_eq!(phase(&harness), Some(IntroPhase::Ready));

    harness.type_text("x").unwrap();
    assert!(harness.app().intro().is_none());
    // The skipping key is not typed into the terminal
    assert_eq!(harness.app().console().input(), "");

    // Scheduled phases were cancelled with the intro
    harness.advance(Duration::from_secs(5));
    assert!(harness.app().intro().is_none());
}

#[test]
fn test_ctrl_c_quits_during_intro() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();
    harness.advance(Duration::from_millis(500));
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_card_swings_after_handoff() {
    let mut harness = PortfolioTestHarness::with_intro(100, 30).unwrap();
    harness.wait_for_terminal();
    assert!(harness.app().console().pendulum().is_settling());
}
