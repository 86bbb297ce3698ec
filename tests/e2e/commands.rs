use crate::common::harness::PortfolioTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use folio::content;
use std::time::Duration;

fn last_output(harness: &PortfolioTestHarness) -> String {
    harness
        .app()
        .console()
        .history()
        .last()
        .map(|entry| entry.output.clone())
        .unwrap_or_default()
}

/// Welcome record, title and prompt are on screen at start
#[test]
fn test_initial_screen() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("~ Yash Terminal Portfolio");
    harness.assert_screen_contains("Welcome to Yash Gandhi's Portfolio Terminal.");
    harness.assert_screen_contains("Yash@portfolio:~/desktop$");
}

#[test]
fn test_typed_text_shows_on_input_line() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.type_text("abc").unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Yash@portfolio:~/desktop$ abc");
}

#[test]
fn test_backspace_edits_input() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.type_text("abcd").unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().console().input(), "abc");
}

/// Every table command reveals exactly its static text
#[test]
fn test_table_commands_reveal_full_text() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    let cases = [
        ("help", content::HELP),
        ("about", content::ABOUT),
        ("skills", content::SKILLS),
        ("projects", content::PROJECTS),
        ("contact", content::CONTACT),
        ("ascii", content::ASCII),
    ];
    for (command, expected) in cases {
        harness.run_command(command).unwrap();
        assert_eq!(last_output(&harness), expected, "output of {command}");
    }
}

#[test]
fn test_commands_are_case_insensitive() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("  ABOUT ").unwrap();
    assert_eq!(last_output(&harness), content::ABOUT);

    let entry = harness.app().console().history().last().unwrap().clone();
    assert_eq!(entry.command.as_deref(), Some("ABOUT"));
}

#[test]
fn test_about_is_rendered() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("about").unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Yash@portfolio:~/desktop$ about");
    harness.assert_screen_contains("Hey, I'm Yash Gandhi.");
}

#[test]
fn test_echo_is_verbatim() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("echo Hello   World").unwrap();
    assert_eq!(last_output(&harness), "Hello   World");
}

#[test]
fn test_unknown_command() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("FooBar").unwrap();
    assert_eq!(
        last_output(&harness),
        "❌ Command not found: FooBar\nType \"help\" to see available commands."
    );

    harness.render().unwrap();
    harness.assert_screen_contains("Command not found: FooBar");
}

#[test]
fn test_date_uses_fixed_format() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("date").unwrap();
    let first = last_output(&harness);
    assert!(first.contains(" GMT"), "{first}");

    // Computed once when the terminal was built
    harness.advance(Duration::from_secs(5));
    harness.run_command("date").unwrap();
    assert_eq!(last_output(&harness), first);
}

/// The reveal writes one character per 20 ms
#[test]
fn test_reveal_is_paced() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.submit("echo abcdef").unwrap();
    assert_eq!(last_output(&harness), "");

    harness.advance(Duration::from_millis(60));
    assert_eq!(last_output(&harness), "abc");

    harness.advance(Duration::from_millis(60));
    assert_eq!(last_output(&harness), "abcdef");
    assert!(!harness.app().console().is_revealing());
}

#[test]
fn test_blank_submission_is_ignored() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.submit("   ").unwrap();
    assert_eq!(harness.app().console().history().entries().len(), 1);
}

#[test]
fn test_clear_resets_after_delay() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("help").unwrap();
    harness.submit("clear").unwrap();

    // History is hidden while the reset is pending
    harness.advance(Duration::from_millis(400));
    harness.render().unwrap();
    harness.assert_screen_not_contains("Available Commands");
    assert_eq!(harness.app().console().history().entries().len(), 2);

    harness.advance(Duration::from_millis(200));
    harness.render().unwrap();
    let history = harness.app().console().history();
    assert_eq!(history.entries().len(), 1);
    assert!(history.entries()[0].command.is_none());
    harness.assert_screen_contains("Welcome to Yash Gandhi's Portfolio Terminal.");
}

/// A reveal started just before a pending clear fires is abandoned
#[test]
fn test_clear_abandons_in_flight_reveal() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.submit("clear").unwrap();
    harness.advance(Duration::from_millis(450));
    harness.submit("skills").unwrap();

    harness.advance(Duration::from_secs(2));
    let console = harness.app().console();
    assert!(!console.is_revealing());
    assert_eq!(console.history().entries().len(), 1);
}

/// Submitting while a reveal runs finishes the older output at once
#[test]
fn test_submission_flushes_running_reveal() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.submit("projects").unwrap();
    harness.advance(Duration::from_millis(100));
    harness.submit("echo next").unwrap();

    let entries = harness.app().console().history().entries().to_vec();
    assert_eq!(entries[1].output, content::PROJECTS);
    assert_eq!(entries[2].command.as_deref(), Some("echo next"));
}

#[test]
fn test_page_up_scrolls_history() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("skills").unwrap();
    harness.run_command("projects").unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("Tech Stack I Use");

    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("Tech Stack I Use");
}

#[test]
fn test_escape_quits() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_ctrl_c_quits_without_typing() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
    assert_eq!(harness.app().console().input(), "");
}
