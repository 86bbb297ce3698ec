//! Keyword → output lookup for the plain commands.
//!
//! Reserved directives (`clear`, `echo`, the theme commands) are not in the
//! table; the interpreter handles them before falling back to a lookup.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::content;

#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: HashMap<&'static str, String>,
}

impl CommandTable {
    /// Build the table. The `date` entry is rendered from `now` once and does
    /// not change afterwards.
    pub fn new(now: DateTime<Local>) -> Self {
        let date = now.format(content::DATE_FORMAT).to_string();
        let entries = HashMap::from([
            ("help", content::HELP.to_string()),
            ("about", content::ABOUT.to_string()),
            ("skills", content::SKILLS.to_string()),
            ("projects", content::PROJECTS.to_string()),
            ("contact", content::CONTACT.to_string()),
            ("ascii", content::ASCII.to_string()),
            ("date", date),
        ]);
        Self { entries }
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key.to_lowercase().as_str())
            .map(String::as_str)
    }

    /// Sorted command keywords.
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Message shown for input that matches nothing.
    pub fn not_found(input: &str) -> String {
        format!("❌ Command not found: {input}\n{}", content::HELP_HINT)
    }
}
