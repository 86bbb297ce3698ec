//! Splash sequence shown before the terminal.
//!
//! Six timers scheduled on [`IntroSequencer::activate`] move the phase
//! forward. The phase never goes backwards, and reaching
//! [`IntroPhase::Handoff`] cancels everything still pending.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;

use crate::app::matrix_rain::MatrixRain;
use crate::app::reveal::prefix_ends;
use crate::config::{IntroConfig, Profile};
use crate::services::timers::TimerQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntroPhase {
    Dark,
    Backdrop,
    Rain,
    Typing,
    Ready,
    Glow,
    Handoff,
}

impl IntroPhase {
    const ALL: [IntroPhase; 7] = [
        IntroPhase::Dark,
        IntroPhase::Backdrop,
        IntroPhase::Rain,
        IntroPhase::Typing,
        IntroPhase::Ready,
        IntroPhase::Glow,
        IntroPhase::Handoff,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroTimer {
    Phase(IntroPhase),
    TypeNext,
    RainFrame,
}

/// Types the title, then the subtitle, one character per timer tick.
#[derive(Debug, Clone)]
pub struct TitleTyper {
    title: String,
    subtitle: String,
    title_ends: Vec<usize>,
    subtitle_ends: Vec<usize>,
    title_shown: usize,
    subtitle_shown: usize,
    title_delay: Duration,
    subtitle_delay: Duration,
    line_pause: Duration,
}

/// Random offset applied to every third title character.
const JITTER_MS: i64 = 20;

impl TitleTyper {
    pub fn new(title: &str, subtitle: &str, config: &IntroConfig) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            title_ends: prefix_ends(title),
            subtitle_ends: prefix_ends(subtitle),
            title_shown: 0,
            subtitle_shown: 0,
            title_delay: Duration::from_millis(config.title_char_ms),
            subtitle_delay: Duration::from_millis(config.subtitle_char_ms),
            line_pause: Duration::from_millis(config.line_pause_ms),
        }
    }

    pub fn title(&self) -> &str {
        &self.title[..self.title_ends[self.title_shown]]
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle[..self.subtitle_ends[self.subtitle_shown]]
    }

    fn title_done(&self) -> bool {
        self.title_shown + 1 == self.title_ends.len()
    }

    fn subtitle_done(&self) -> bool {
        self.subtitle_shown + 1 == self.subtitle_ends.len()
    }

    pub fn is_complete(&self) -> bool {
        self.title_done() && self.subtitle_done()
    }

    /// Delay before the first character appears.
    pub fn first_delay(&self) -> Duration {
        self.title_delay
    }

    /// Show one more character. Returns how long to wait before the next
    /// one, or `None` once both lines are complete.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Duration> {
        if !self.title_done() {
            self.title_shown += 1;
            if self.title_done() {
                return (!self.subtitle_done()).then_some(self.line_pause);
            }
            if self.title_shown % 3 == 0 {
                let jitter = rng.random_range(-JITTER_MS..=JITTER_MS);
                let base = self.title_delay.as_millis() as i64;
                return Some(Duration::from_millis((base + jitter).max(0) as u64));
            }
            return Some(self.title_delay);
        }

        if !self.subtitle_done() {
            self.subtitle_shown += 1;
            return (!self.subtitle_done()).then_some(self.subtitle_delay);
        }

        None
    }
}

pub struct IntroSequencer {
    phase: IntroPhase,
    timers: TimerQueue<IntroTimer>,
    offsets: [Duration; 6],
    rain_interval: Duration,
    typer: TitleTyper,
    rain: MatrixRain,
    rng: StdRng,
}

impl IntroSequencer {
    pub fn new(config: &IntroConfig, profile: &Profile, size: (u16, u16), rng: StdRng) -> Self {
        Self {
            phase: IntroPhase::Dark,
            timers: TimerQueue::new(),
            offsets: config.phase_offsets_ms.map(Duration::from_millis),
            rain_interval: Duration::from_millis(config.rain_interval_ms),
            typer: TitleTyper::new(&profile.name.to_uppercase(), &profile.subtitle, config),
            rain: MatrixRain::new(size.0, size.1),
            rng,
        }
    }

    /// Schedule the phase transitions relative to `now`.
    pub fn activate(&mut self, now: Instant) {
        for (offset, phase) in self.offsets.iter().zip(&IntroPhase::ALL[1..]) {
            self.timers
                .schedule_at(now + *offset, IntroTimer::Phase(*phase));
        }
        tracing::info!("intro started");
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == IntroPhase::Handoff
    }

    pub fn typer(&self) -> &TitleTyper {
        &self.typer
    }

    pub fn rain(&self) -> &MatrixRain {
        &self.rain
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.rain.resize(width, height);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Fire every timer due at `now`. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.timers.drain_due(now);
        let changed = !due.is_empty();
        for timer in due {
            if self.is_finished() {
                break;
            }
            match timer {
                IntroTimer::Phase(phase) => self.advance_to(phase, now),
                IntroTimer::TypeNext => {
                    if let Some(delay) = self.typer.advance(&mut self.rng) {
                        self.timers
                            .schedule_after(now, delay, IntroTimer::TypeNext);
                    }
                }
                IntroTimer::RainFrame => {
                    self.rain.update(&mut self.rng);
                    self.timers
                        .schedule_after(now, self.rain_interval, IntroTimer::RainFrame);
                }
            }
        }
        changed
    }

    /// Jump to the handoff. Only allowed once the status line is up.
    pub fn skip(&mut self, now: Instant) -> bool {
        if self.phase < IntroPhase::Ready || self.is_finished() {
            return false;
        }
        tracing::debug!(from = self.phase.index(), "intro skipped");
        self.advance_to(IntroPhase::Handoff, now);
        true
    }

    fn advance_to(&mut self, phase: IntroPhase, now: Instant) {
        if phase <= self.phase {
            return;
        }
        let previous = self.phase;
        self.phase = phase;
        tracing::debug!(phase = phase.index(), "intro phase");

        if previous < IntroPhase::Rain && phase >= IntroPhase::Rain && phase < IntroPhase::Handoff {
            self.timers.schedule_at(now, IntroTimer::RainFrame);
        }
        if previous < IntroPhase::Typing && phase >= IntroPhase::Typing && phase < IntroPhase::Handoff {
            let delay = self.typer.first_delay();
            self.timers
                .schedule_after(now, delay, IntroTimer::TypeNext);
        }
        if phase == IntroPhase::Handoff {
            self.teardown();
        }
    }

    /// Cancel everything still scheduled.
    pub fn teardown(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.rain.clear();
        tracing::debug!(cancelled, "intro torn down");
    }
}
