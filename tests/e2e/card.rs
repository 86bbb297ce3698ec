use crate::common::harness::PortfolioTestHarness;
use std::collections::HashSet;
use std::time::Duration;

fn settle(harness: &mut PortfolioTestHarness) {
    harness.wait_until(|app| !app.console().pendulum().is_settling());
}

#[test]
fn test_card_shown_beside_terminal() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    settle(&mut harness);
    harness.render().unwrap();

    harness.assert_screen_contains("Yash Gandhi");
    harness.assert_screen_contains("STUDENT ID");
    harness.assert_screen_contains("EnrollMent_No : 2301201713");
    harness.assert_screen_contains("Signature:");

    let card = harness.app().card_layout().card_area;
    assert!(card.x + card.width <= 40, "card at {card:?}");
}

#[test]
fn test_narrow_terminal_hides_card() {
    let mut harness = PortfolioTestHarness::new(60, 30).unwrap();
    harness.render().unwrap();

    harness.assert_screen_not_contains("STUDENT ID");
    assert_eq!(harness.app().card_layout().card_area.width, 0);
}

#[test]
fn test_click_on_card_swings_it() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    settle(&mut harness);
    harness.render().unwrap();

    let card = harness.app().card_layout().card_area;
    assert!(harness.click(card.x + card.width / 2, card.y + 2));
    assert!(harness.app().console().pendulum().is_settling());

    // The card moves sideways while it swings
    let mut positions = HashSet::new();
    for _ in 0..30 {
        harness.advance(Duration::from_millis(16));
        harness.render().unwrap();
        positions.insert(harness.app().card_layout().card_area.x);
    }
    assert!(positions.len() > 1, "card never moved: {positions:?}");

    settle(&mut harness);
    let state = harness.app().console().pendulum().state();
    assert_eq!(state.angle, 0.0);
    assert_eq!(state.angular_velocity, 0.0);
}

#[test]
fn test_click_outside_card_does_nothing() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    settle(&mut harness);
    harness.render().unwrap();

    assert!(!harness.click(70, 10));
    assert!(!harness.app().console().pendulum().is_settling());
}
