use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::app::{Portfolio, FRAME_DURATION};
use folio::config::Config;
use folio::services::time_source::TestTimeSource;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::tracing::init_tracing_from_env;

/// Fixed seed so rain, barcode and swing direction repeat between runs.
const SEED: u64 = 0x5eed;

/// Upper bound on simulated time spent waiting for an animation.
const MAX_WAIT: Duration = Duration::from_secs(120);

/// Drives a [`Portfolio`] against ratatui's `TestBackend` on a logical clock.
pub struct PortfolioTestHarness {
    app: Portfolio,
    terminal: Terminal<TestBackend>,
    time: Arc<TestTimeSource>,
}

impl PortfolioTestHarness {
    /// A harness that starts directly in the terminal view.
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        let config = Config {
            skip_intro: true,
            ..Config::default()
        };
        Self::with_config(width, height, config)
    }

    /// A harness that plays the intro first.
    pub fn with_intro(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> anyhow::Result<Self> {
        init_tracing_from_env();
        let time = TestTimeSource::shared();
        let app = Portfolio::new(&config, time.clone(), (width, height), SEED);
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app,
            terminal,
            time,
        })
    }

    pub fn app(&self) -> &Portfolio {
        &self.app
    }

    pub fn time(&self) -> &TestTimeSource {
        &self.time
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(code, modifiers);
        self.app.tick();
        Ok(())
    }

    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    /// Type `line` and press Enter.
    pub fn submit(&mut self, line: &str) -> anyhow::Result<()> {
        self.type_text(line)?;
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)
    }

    /// Submit `line` and wait until its output is fully revealed.
    pub fn run_command(&mut self, line: &str) -> anyhow::Result<()> {
        self.submit(line)?;
        self.wait_for_reveal();
        Ok(())
    }

    pub fn click(&mut self, column: u16, row: u16) -> bool {
        self.app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Move the clock forward one frame at a time, ticking after each frame.
    pub fn advance(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let step = remaining.min(FRAME_DURATION);
            self.time.advance(step);
            self.app.tick();
            remaining -= step;
        }
    }

    pub fn wait_for_reveal(&mut self) {
        self.wait_until(|app| !app.console().is_revealing());
    }

    pub fn wait_for_terminal(&mut self) {
        self.wait_until(|app| app.intro().is_none());
    }

    /// Advance frame by frame until `condition` holds.
    pub fn wait_until(&mut self, condition: impl Fn(&Portfolio) -> bool) {
        let mut waited = Duration::ZERO;
        while !condition(&self.app) {
            assert!(waited < MAX_WAIT, "condition not met after {waited:?}");
            self.advance(FRAME_DURATION);
            waited += FRAME_DURATION;
        }
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn row_text(&self, row: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol())
            .collect()
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {text:?}\nScreen:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {text:?}\nScreen:\n{screen}"
        );
    }
}
