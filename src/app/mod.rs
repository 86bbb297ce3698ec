//! Application state and input handling.
//!
//! [`Portfolio`] is what the event loop in `main` drives: it routes input to
//! the intro or the console, ticks whichever one is active and renders it.

pub mod console;
pub mod interpreter;
pub mod intro;
pub mod matrix_rain;
pub mod reveal;

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::config::Config;
use crate::services::time_source::SharedTimeSource;
use crate::view::id_card::{render_card, CardLayout, IdCard};
use crate::view::intro_view::render_intro;
use crate::view::terminal_view::render_terminal;

use self::console::Console;
use self::intro::IntroSequencer;

/// Redraw interval while something is moving.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Below this width the card is hidden and the terminal takes the screen.
const SPLIT_MIN_WIDTH: u16 = 70;

const PAGE_LINES: usize = 10;

pub struct Portfolio {
    time: SharedTimeSource,
    intro: Option<IntroSequencer>,
    console: Console,
    card: IdCard,
    card_layout: CardLayout,
    title: String,
    should_quit: bool,
}

impl Portfolio {
    /// Build the app. `seed` drives every random choice (rain, barcode,
    /// swing direction), so a fixed seed gives a reproducible session.
    pub fn new(config: &Config, time: SharedTimeSource, size: (u16, u16), seed: u64) -> Self {
        let now = time.now();
        let mut rng = StdRng::seed_from_u64(seed);

        let card = IdCard::new(&config.profile, &mut rng);
        let mut console = Console::new(
            config,
            now,
            time.wall_clock(),
            StdRng::from_rng(&mut rng),
        );

        let intro = if config.skip_intro {
            console.nudge(now);
            None
        } else {
            let mut intro = IntroSequencer::new(
                &config.intro,
                &config.profile,
                size,
                StdRng::from_rng(&mut rng),
            );
            intro.activate(now);
            Some(intro)
        };

        Self {
            time,
            intro,
            console,
            card,
            card_layout: CardLayout::default(),
            title: format!("~ {} Terminal Portfolio", config.profile.handle),
            should_quit: false,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn intro(&self) -> Option<&IntroSequencer> {
        self.intro.as_ref()
    }

    pub fn card_layout(&self) -> CardLayout {
        self.card_layout
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one key press. Returns whether a redraw is needed.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            tracing::info!("quit requested");
            self.should_quit = true;
            return false;
        }

        let now = self.time.now();

        if let Some(intro) = self.intro.as_mut() {
            if intro.skip(now) {
                self.finish_intro(now);
                return true;
            }
            return false;
        }

        match code {
            KeyCode::Esc => {
                tracing::info!("quit requested");
                self.should_quit = true;
                false
            }
            KeyCode::Enter => self.console.submit(now),
            KeyCode::Backspace => {
                self.console.backspace(now);
                true
            }
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.console.insert_char(c, now);
                true
            }
            KeyCode::PageUp => {
                self.console.scroll_up(PAGE_LINES);
                true
            }
            KeyCode::PageDown => {
                self.console.scroll_down(PAGE_LINES);
                true
            }
            KeyCode::Up => {
                self.console.scroll_up(1);
                true
            }
            KeyCode::Down => {
                self.console.scroll_down(1);
                true
            }
            _ => false,
        }
    }

    /// Handle one mouse event. Returns whether a redraw is needed.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if self.intro.is_some() {
            return false;
        }
        match event.kind {
            MouseEventKind::Down(MouseButton::Left)
                if self.card_layout.contains(event.column, event.row) =>
            {
                tracing::debug!("card clicked");
                self.console.click_card(self.time.now());
                true
            }
            MouseEventKind::ScrollUp => {
                self.console.scroll_up(1);
                true
            }
            MouseEventKind::ScrollDown => {
                self.console.scroll_down(1);
                true
            }
            _ => false,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if let Some(intro) = self.intro.as_mut() {
            intro.resize(width, height);
        }
    }

    /// Advance timers and animations to the current time. Returns whether a
    /// redraw is needed.
    pub fn tick(&mut self) -> bool {
        let now = self.time.now();
        match self.intro.as_mut() {
            Some(intro) => {
                let changed = intro.tick(now);
                if intro.is_finished() {
                    self.finish_intro(now);
                    return true;
                }
                changed
            }
            None => self.console.tick(now),
        }
    }

    fn finish_intro(&mut self, now: Instant) {
        self.intro = None;
        self.console.nudge(now);
        tracing::info!("intro finished, terminal ready");
    }

    /// How long the event loop may wait for input before the next tick.
    pub fn next_wakeup(&self) -> Duration {
        let now = self.time.now();
        let deadline = match &self.intro {
            Some(intro) => intro.next_deadline(),
            None => {
                if self.console.is_animating() {
                    return FRAME_DURATION;
                }
                let blink = self.console.next_blink(now);
                Some(
                    self.console
                        .next_deadline()
                        .map_or(blink, |deadline| deadline.min(blink)),
                )
            }
        };
        deadline.map_or(FRAME_DURATION, |deadline| {
            deadline.saturating_duration_since(now)
        })
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let now = self.time.now();

        if let Some(intro) = &self.intro {
            render_intro(frame, area, intro);
            return;
        }

        let (card_area, terminal_area) = split_screen(area);
        self.card_layout = match card_area {
            Some(card_area) => render_card(
                frame,
                card_area,
                &self.card,
                &self.console.pose(),
                self.console.theme(),
            ),
            None => CardLayout::default(),
        };
        render_terminal(frame, terminal_area, &self.console, &self.title, now);
    }
}

/// Card on the left 40%, terminal on the right, when there is room.
fn split_screen(area: Rect) -> (Option<Rect>, Rect) {
    if area.width < SPLIT_MIN_WIDTH {
        return (None, area);
    }
    let [card, terminal] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    (Some(card), terminal)
}
