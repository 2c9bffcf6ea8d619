//! Timer module - countdown/interval primitive for gravity and input debounce
//!
//! Timers never read a clock themselves: the owner passes the current time in
//! milliseconds to [`Timer::activate`] and [`Timer::update`]. This keeps the core
//! deterministic and lets tests step time explicitly.
//!
//! Instead of holding a callback, a timer may carry an event value that
//! [`Timer::update`] hands back when the deadline passes. The owner dispatches it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer<E = ()> {
    duration_ms: u32,
    repeat: bool,
    event: Option<E>,
    /// Set while the timer is running.
    started_at_ms: Option<u64>,
}

impl<E: Copy> Timer<E> {
    pub fn new(duration_ms: u32, repeat: bool, event: Option<E>) -> Self {
        Self {
            duration_ms,
            repeat,
            event,
            started_at_ms: None,
        }
    }

    /// One-shot timer without an event, used as an input debounce.
    pub fn one_shot(duration_ms: u32) -> Self {
        Self::new(duration_ms, false, None)
    }

    /// Repeating timer that yields `event` every `duration_ms`.
    pub fn repeating(duration_ms: u32, event: E) -> Self {
        Self::new(duration_ms, true, Some(event))
    }

    pub fn activate(&mut self, now_ms: u64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn deactivate(&mut self) {
        self.started_at_ms = None;
    }

    pub fn is_active(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Change the duration. A running timer keeps its start time.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Advance the timer.
    ///
    /// When active and at least `duration_ms` have elapsed, the timer stops and returns
    /// its event (if any). A repeating timer restarts at `now_ms`, so late frames do not
    /// accumulate drift.
    pub fn update(&mut self, now_ms: u64) -> Option<E> {
        let started = self.started_at_ms?;
        if now_ms.saturating_sub(started) < u64::from(self.duration_ms) {
            return None;
        }

        let fired = self.event;
        self.deactivate();
        if self.repeat {
            self.activate(now_ms);
        }
        fired
    }
}
