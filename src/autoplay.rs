use tracing::debug;

use crate::error::{LoopstripError, LoopstripResult};

/// Phase-aligned autoplay schedule. The host owns the real timer and asks
/// `due(now)` at each fire; pause and resume flip a flag checked at fire time
/// and never reset the schedule, so fires stay aligned to `start()`.
///
/// Timestamps are host-supplied milliseconds, never a global clock, which
/// keeps the engine deterministic and simulable.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval_ms: u64,
    next_fire_at: Option<u64>,
    paused: bool,
}

impl Autoplay {
    /// The interval must be positive: `due()` consumes elapsed periods one
    /// interval at a time, so a zero period could never terminate.
    pub fn new(interval_ms: u64) -> LoopstripResult<Self> {
        if interval_ms == 0 {
            return Err(LoopstripError::config("autoplay interval must be > 0"));
        }
        Ok(Self {
            interval_ms,
            next_fire_at: None,
            paused: false,
        })
    }

    /// Arm the schedule; first fire at `now + interval`.
    pub fn start(&mut self, now: u64) {
        self.next_fire_at = Some(now + self.interval_ms);
        debug!(interval_ms = self.interval_ms, "autoplay started");
    }

    /// Release the schedule. Later `due()` calls report nothing.
    pub fn stop(&mut self) {
        self.next_fire_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_fire_at.is_some()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether an un-paused fire is due at `now`. Every elapsed period is
    /// consumed (missed periods collapse into one decision, paused fires are
    /// swallowed), so the schedule never drifts and never queues a burst.
    pub fn due(&mut self, now: u64) -> bool {
        let Some(mut at) = self.next_fire_at else {
            return false;
        };
        if now < at {
            return false;
        }
        while at <= now {
            at += self.interval_ms;
        }
        self.next_fire_at = Some(at);
        !self.paused
    }
}
