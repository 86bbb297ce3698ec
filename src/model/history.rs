//! Command history of the simulated terminal.
//!
//! The history is append-only, with two exceptions: `reset` replaces it with
//! the welcome record, and the entry currently being revealed has its output
//! overwritten step by step. Every reset bumps a generation counter so that a
//! writer holding an [`EntryRef`] from before the reset can detect that its
//! entry no longer exists.

/// One prompt + output block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Text typed at the prompt; `None` for the welcome record.
    pub command: Option<String>,
    pub output: String,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            output: String::new(),
        }
    }

    pub fn banner(output: impl Into<String>) -> Self {
        Self {
            command: None,
            output: output.into(),
        }
    }
}

/// Address of an entry that stays valid until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    index: usize,
    generation: u64,
}

impl EntryRef {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    welcome: HistoryEntry,
    generation: u64,
}

impl History {
    /// Create a history holding only the welcome record.
    pub fn new(welcome: impl Into<String>) -> Self {
        let welcome = HistoryEntry::banner(welcome);
        Self {
            entries: vec![welcome.clone()],
            welcome,
            generation: 0,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Append an entry for `command` with empty output.
    pub fn push_command(&mut self, command: impl Into<String>) -> EntryRef {
        self.entries.push(HistoryEntry::new(command));
        EntryRef {
            index: self.entries.len() - 1,
            generation: self.generation,
        }
    }

    /// Whether `entry` still refers to a live record.
    pub fn is_current(&self, entry: EntryRef) -> bool {
        entry.generation == self.generation && entry.index < self.entries.len()
    }

    /// Overwrite the output of `entry`.
    ///
    /// Returns false, writing nothing, when the history was reset after
    /// `entry` was handed out.
    pub fn write_output(&mut self, entry: EntryRef, output: &str) -> bool {
        if !self.is_current(entry) {
            return false;
        }
        let slot = &mut self.entries[entry.index].output;
        slot.clear();
        slot.push_str(output);
        true
    }

    /// Drop everything and start over from the welcome record.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(self.welcome.clone());
        self.generation += 1;
    }
}
