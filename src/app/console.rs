//! The simulated terminal.
//!
//! Owns everything the terminal view renders: history, the input line, the
//! in-flight reveal, the active theme and the ID-card pendulum. Time only
//! enters through the `now` arguments, so the console is driven the same way
//! by the real event loop and by tests.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use rand::rngs::StdRng;

use crate::app::interpreter::{self, Dispatch};
use crate::app::reveal::{Reveal, RevealProgress};
use crate::config::{Config, PhysicsConfig};
use crate::content;
use crate::model::command_table::CommandTable;
use crate::model::history::History;
use crate::model::physics::{CardPose, Pendulum};
use crate::services::timers::{TimerId, TimerQueue};
use crate::view::theme::{Theme, ThemeRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleTimer {
    ClearHistory,
}

pub struct Console {
    history: History,
    table: CommandTable,
    themes: ThemeRegistry,
    pendulum: Pendulum,
    physics: PhysicsConfig,
    input: String,
    reveal: Option<Reveal>,
    timers: TimerQueue<ConsoleTimer>,
    pending_clear: Option<TimerId>,
    typing_delay: Duration,
    clear_delay: Duration,
    caret_blink: Duration,
    /// The caret restarts its blink cycle from here after every edit
    caret_epoch: Instant,
    prompt: String,
    /// Lines scrolled up from the bottom of the history
    scroll: usize,
    rng: StdRng,
}

impl Console {
    pub fn new(config: &Config, now: Instant, wall_clock: DateTime<Local>, rng: StdRng) -> Self {
        let mut themes = ThemeRegistry::builtin();
        if themes.activate(&config.theme).is_none() {
            tracing::warn!(theme = %config.theme, "unknown theme in config, keeping default");
        }

        Self {
            history: History::new(content::welcome_message(&config.profile)),
            table: CommandTable::new(wall_clock),
            themes,
            pendulum: Pendulum::new(config.physics, now),
            physics: config.physics,
            input: String::new(),
            reveal: None,
            timers: TimerQueue::new(),
            pending_clear: None,
            typing_delay: Duration::from_millis(config.terminal.typing_delay_ms),
            clear_delay: Duration::from_millis(config.terminal.clear_delay_ms),
            caret_blink: Duration::from_millis(config.terminal.caret_blink_ms),
            caret_epoch: now,
            prompt: config.profile.prompt(),
            scroll: 0,
            rng,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn theme(&self) -> &Theme {
        self.themes.active()
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn pose(&self) -> CardPose {
        self.pendulum.pose()
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    /// True between a `clear` and the reset it triggers. The view hides the
    /// history meanwhile.
    pub fn is_clearing(&self) -> bool {
        self.pending_clear.is_some()
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Whether the host should keep redrawing at frame rate.
    pub fn is_animating(&self) -> bool {
        self.is_revealing() || self.pendulum.is_settling()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn caret_visible(&self, now: Instant) -> bool {
        let period = self.caret_blink.as_millis().max(1);
        let elapsed = now.saturating_duration_since(self.caret_epoch).as_millis();
        (elapsed / period) % 2 == 0
    }

    pub fn insert_char(&mut self, c: char, now: Instant) {
        self.input.push(c);
        self.caret_epoch = now;
    }

    pub fn backspace(&mut self, now: Instant) {
        self.input.pop();
        self.caret_epoch = now;
    }

    /// Submit the input line. Whitespace-only input is left in place and
    /// ignored.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let line = std::mem::take(&mut self.input);
        self.caret_epoch = now;
        self.scroll = 0;
        self.interpret(&line, now);
        true
    }

    /// Run one line through the interpreter and apply the result.
    pub fn interpret(&mut self, line: &str, now: Instant) {
        let Some(dispatch) = interpreter::parse(line, &self.table, &self.themes) else {
            return;
        };

        // At most one reveal in flight: finish the previous one at once
        if let Some(mut previous) = self.reveal.take() {
            if previous.flush(&mut self.history) == RevealProgress::Aborted {
                tracing::debug!("dropped stale reveal");
            }
        }

        match dispatch {
            Dispatch::Clear => {
                tracing::debug!("clear requested");
                if self.pending_clear.is_none() {
                    let id = self.timers.schedule_after(
                        now,
                        self.clear_delay,
                        ConsoleTimer::ClearHistory,
                    );
                    self.pending_clear = Some(id);
                }
            }
            Dispatch::Reveal {
                command,
                text,
                activate_theme,
            } => {
                tracing::debug!(command = %command, "dispatch");
                if let Some(id) = activate_theme {
                    self.themes.activate(id);
                }
                let target = self.history.push_command(command);
                self.reveal = Some(Reveal::start(target, text, now, self.typing_delay));
            }
        }
    }

    /// Left click on the ID card.
    pub fn click_card(&mut self, now: Instant) {
        let strength = self.physics.click_impulse;
        self.pendulum.impulse(strength, now, &mut self.rng);
    }

    /// The small swing played when the terminal first appears.
    pub fn nudge(&mut self, now: Instant) {
        let strength = self.physics.nudge_impulse;
        self.pendulum.impulse(strength, now, &mut self.rng);
    }

    /// Fire due timers, advance the reveal and the pendulum.
    ///
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for timer in self.timers.drain_due(now) {
            match timer {
                ConsoleTimer::ClearHistory => {
                    self.history.reset();
                    self.pending_clear = None;
                    self.scroll = 0;
                    tracing::debug!(generation = self.history.generation(), "history cleared");
                    changed = true;
                }
            }
        }

        if let Some(reveal) = self.reveal.as_mut() {
            let before = self.history.last().map(|entry| entry.output.len());
            match reveal.step(&mut self.history, now) {
                RevealProgress::Pending => {}
                RevealProgress::Complete => self.reveal = None,
                RevealProgress::Aborted => {
                    tracing::debug!("dropped stale reveal");
                    self.reveal = None;
                }
            }
            changed |= self.history.last().map(|entry| entry.output.len()) != before;
        }

        if self.pendulum.is_settling() {
            self.pendulum.step(now);
            changed = true;
        }

        changed
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let reveal = self.reveal.as_ref().and_then(Reveal::next_deadline);
        match (self.timers.next_deadline(), reveal) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// When the caret next changes state.
    pub fn next_blink(&self, now: Instant) -> Instant {
        let period = self.caret_blink.max(Duration::from_millis(1));
        let elapsed = now.saturating_duration_since(self.caret_epoch);
        let cycles = elapsed.as_millis() / period.as_millis() + 1;
        self.caret_epoch + period * cycles as u32
    }
}
