//! Character-by-character output reveal.
//!
//! A [`Reveal`] owns the full text of one history entry and writes successive
//! prefixes into it, one grapheme cluster per `delay`. Before every write it
//! checks that the entry still exists; after a `clear` the reveal aborts
//! without touching the new history.

use std::time::{Duration, Instant};

use unicode_segmentation::UnicodeSegmentation;

use crate::model::history::{EntryRef, History};

/// Byte offsets at which each successive prefix of `text` ends.
///
/// The first prefix is empty, the last is `text` itself.
pub fn prefix_ends(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(
            text.grapheme_indices(true)
                .map(|(start, grapheme)| start + grapheme.len()),
        )
        .collect()
}

/// Every intermediate state of revealing `text`, from empty to full.
pub fn prefixes(text: &str) -> impl Iterator<Item = &str> + '_ {
    prefix_ends(text).into_iter().map(move |end| &text[..end])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealProgress {
    Pending,
    Complete,
    /// The target entry was wiped by a reset
    Aborted,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    target: EntryRef,
    text: String,
    ends: Vec<usize>,
    /// Index into `ends` of the prefix currently shown
    shown: usize,
    delay: Duration,
    next_step: Instant,
}

impl Reveal {
    /// Begin revealing `text` into `target`, whose output is expected to be
    /// empty. The first character appears one `delay` after `now`.
    pub fn start(target: EntryRef, text: impl Into<String>, now: Instant, delay: Duration) -> Self {
        let text = text.into();
        let ends = prefix_ends(&text);
        Self {
            target,
            text,
            ends,
            shown: 0,
            delay,
            next_step: now + delay,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shown + 1 == self.ends.len()
    }

    /// When the next character is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        (!self.is_complete()).then_some(self.next_step)
    }

    /// Emit every step that is due at `now`.
    pub fn step(&mut self, history: &mut History, now: Instant) -> RevealProgress {
        if !history.is_current(self.target) {
            return RevealProgress::Aborted;
        }

        while !self.is_complete() && self.next_step <= now {
            self.shown += 1;
            let prefix = &self.text[..self.ends[self.shown]];
            if !history.write_output(self.target, prefix) {
                return RevealProgress::Aborted;
            }
            self.next_step += self.delay;
        }

        if self.is_complete() {
            RevealProgress::Complete
        } else {
            RevealProgress::Pending
        }
    }

    /// Skip the remaining steps and write the full text.
    pub fn flush(&mut self, history: &mut History) -> RevealProgress {
        self.shown = self.ends.len() - 1;
        if history.write_output(self.target, &self.text) {
            RevealProgress::Complete
        } else {
            RevealProgress::Aborted
        }
    }
}
