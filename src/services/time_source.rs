//! Clocks the portfolio reads time from.
//!
//! Every animation (intro phases, reveal steps, caret blink, pendulum frames)
//! asks a [`TimeSource`] for `now` instead of calling `Instant::now`, so the
//! test harness can run a whole session on a [`TestTimeSource`] that only
//! moves when told to.

use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Monotonic time for scheduling.
    fn now(&self) -> Instant;

    /// Calendar time, read once when the `date` output is built.
    fn wall_clock(&self) -> DateTime<Local>;

    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

pub type SharedTimeSource = Arc<dyn TimeSource>;

/// The system clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall_clock(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A logical clock frozen at its creation time until [`advance`]d.
///
/// Both `now` and `wall_clock` move together.
///
/// ```
/// use folio::services::time_source::{TestTimeSource, TimeSource};
/// use std::time::Duration;
///
/// let clock = TestTimeSource::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(20));
/// assert_eq!(clock.elapsed_since(start), Duration::from_millis(20));
/// ```
///
/// [`advance`]: TestTimeSource::advance
#[derive(Debug)]
pub struct TestTimeSource {
    offset_nanos: AtomicU64,
    origin: Instant,
    origin_wall_clock: DateTime<Local>,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    pub fn new() -> Self {
        Self {
            offset_nanos: AtomicU64::new(0),
            origin: Instant::now(),
            origin_wall_clock: Local::now(),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn advance(&self, by: Duration) {
        self.offset_nanos
            .fetch_add(by.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Total logical time advanced so far.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.offset_nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn wall_clock(&self) -> DateTime<Local> {
        let offset = chrono::Duration::from_std(self.elapsed()).unwrap_or_default();
        self.origin_wall_clock + offset
    }
}
