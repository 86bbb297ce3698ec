use crate::common::harness::PortfolioTestHarness;
use folio::config::Config;

const THEME_IDS: [&str; 10] = [
    "default",
    "hacker",
    "matrix",
    "dracula",
    "solarized",
    "nord",
    "monokai",
    "gruvbox",
    "synthwave",
    "ocean",
];

fn last_output(harness: &PortfolioTestHarness) -> String {
    harness
        .app()
        .console()
        .history()
        .last()
        .map(|entry| entry.output.clone())
        .unwrap_or_default()
}

#[test]
fn test_theme_set_switches_theme() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    assert_eq!(harness.app().console().theme().id, "default");

    harness.run_command("theme set hacker").unwrap();
    assert_eq!(harness.app().console().theme().id, "hacker");
    assert!(last_output(&harness).contains("hacker"));

    harness.render().unwrap();
    harness.assert_screen_contains("Theme switched to");
}

#[test]
fn test_theme_names_are_case_insensitive() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("THEME SET Dracula").unwrap();
    assert_eq!(harness.app().console().theme().id, "dracula");
}

#[test]
fn test_unknown_theme_keeps_current() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("theme set nord").unwrap();
    harness.run_command("theme set bogus").unwrap();

    assert_eq!(harness.app().console().theme().id, "nord");
    let output = last_output(&harness);
    assert!(output.contains("bogus"), "{output}");
    assert!(output.contains("themes"), "{output}");
}

#[test]
fn test_bare_theme_set_prints_usage() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.run_command("theme set").unwrap();
    assert_eq!(last_output(&harness), "Usage: theme set <name>");
}

/// Both listing commands name every theme exactly once
#[test]
fn test_theme_listing_names_each_theme_once() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    for command in ["themes", "theme"] {
        harness.run_command(command).unwrap();
        let output = last_output(&harness);
        for id in THEME_IDS {
            let needle = format!("• {id} ");
            assert_eq!(output.matches(&needle).count(), 1, "{id} in {output}");
        }
    }
}

#[test]
fn test_config_selects_starting_theme() {
    let config = Config {
        theme: "ocean".to_string(),
        skip_intro: true,
        ..Config::default()
    };
    let harness = PortfolioTestHarness::with_config(100, 30, config).unwrap();
    assert_eq!(harness.app().console().theme().id, "ocean");
}
