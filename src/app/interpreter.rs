//! Line interpreter for the simulated terminal.
//!
//! [`parse`] is pure: it maps a submitted line onto a [`Dispatch`] and never
//! touches history or timers. The console applies the result.

use crate::model::command_table::CommandTable;
use crate::view::theme::ThemeRegistry;

const ECHO_PREFIX: &str = "echo ";
const THEME_SET: &str = "theme set";

/// What a submitted line asks the console to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Wipe the history after the clear delay. Nothing is revealed.
    Clear,
    /// Append `command` to the history and reveal `text` under it.
    Reveal {
        command: String,
        text: String,
        /// Theme to make active before the reveal starts
        activate_theme: Option<&'static str>,
    },
}

impl Dispatch {
    fn reveal(command: &str, text: impl Into<String>) -> Self {
        Self::Reveal {
            command: command.to_string(),
            text: text.into(),
            activate_theme: None,
        }
    }
}

/// `prefix` is matched ASCII case-insensitively; the remainder keeps its case.
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

/// Interpret one submitted line.
///
/// Returns `None` for blank input, which is ignored entirely.
pub fn parse(raw: &str, table: &CommandTable, themes: &ThemeRegistry) -> Option<Dispatch> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    let key = line.to_lowercase();

    if key == "clear" {
        return Some(Dispatch::Clear);
    }

    if let Some(rest) = strip_prefix_ignore_case(line, ECHO_PREFIX) {
        return Some(Dispatch::reveal(line, rest));
    }

    if key == THEME_SET {
        return Some(Dispatch::reveal(line, "Usage: theme set <name>"));
    }

    if let Some(rest) = strip_prefix_ignore_case(line, "theme set ") {
        let name = rest.trim().to_lowercase();
        return Some(match themes.get(&name) {
            Some(theme) => Dispatch::Reveal {
                command: line.to_string(),
                text: format!(
                    "✅ Theme switched to {} ({})",
                    theme.display_name, theme.id
                ),
                activate_theme: Some(theme.id),
            },
            None => Dispatch::reveal(
                line,
                format!(
                    "❌ Theme not found: {name}\nType \"themes\" to see available themes."
                ),
            ),
        });
    }

    if key == "theme" || key == "themes" {
        return Some(Dispatch::reveal(line, themes.listing()));
    }

    let text = match table.lookup(&key) {
        Some(output) => output.to_string(),
        None => CommandTable::not_found(line),
    };
    Some(Dispatch::reveal(line, text))
}
