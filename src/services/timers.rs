//! Owned one-shot timers for the cooperative event loop.
//!
//! Components never register global callbacks. Each one owns a
//! [`TimerQueue`] of the events it wants delivered later and drains it from
//! its `tick`. [`TimerQueue::cancel_all`] drops everything still pending, as
//! does dropping the queue itself.

use std::time::{Duration, Instant};

/// Handle returned by [`TimerQueue::schedule_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct PendingTimer<E> {
    id: TimerId,
    deadline: Instant,
    event: E,
}

/// A queue of pending one-shot timers carrying events of type `E`.
#[derive(Debug)]
pub struct TimerQueue<E> {
    pending: Vec<PendingTimer<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            deadline,
            event,
        });
        id
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, event: E) -> TimerId {
        self.schedule_at(now + delay, event)
    }

    /// Cancel every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending deadline, used to size the event-loop poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Remove and return every event whose deadline is at or before `now`,
    /// ordered by deadline and then by scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|t| t.deadline <= now);
        self.pending = rest;
        due.sort_by_key(|t| (t.deadline, t.id));
        due.into_iter().map(|t| t.event).collect()
    }
}
