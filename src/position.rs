use tracing::debug;

/// Frame ticks the silent re-center holds transitions disabled for. One tick
/// risks the compositor seeing the new position and the re-armed transition
/// in the same paint; two guarantees the position is committed first.
pub const RECENTER_TICKS: u8 = 2;

/// Where the controller is in its advance cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Settled; the next advance is accepted.
    Idle,
    /// A horizontal translation is in flight.
    Advancing,
    /// Silent re-center window: transitions disabled until `ticks_left`
    /// frame ticks have elapsed.
    Recentering { ticks_left: u8 },
}

/// Owns the single authoritative center position and the
/// Idle -> Advancing -> (Recentering) -> Idle state machine.
///
/// The settle invariant is `N <= center < 2N` (the canonical middle copy of
/// the track); the center transiently reaches `2N` while a wrap transition is
/// in flight and is silently remapped before the next paint-visible move.
#[derive(Clone, Debug)]
pub struct PositionController {
    n: usize,
    center: usize,
    phase: Phase,
    transition_enabled: bool,
}

impl PositionController {
    /// Starts settled on the first slot of the middle copy.
    pub fn new(source_len: usize) -> Self {
        Self {
            n: source_len,
            center: source_len,
            phase: Phase::Idle,
            transition_enabled: true,
        }
    }

    pub fn center(&self) -> usize {
        self.center
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Advancing
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Request a forward advance. Refused unless settled: at most one
    /// transition is ever in flight, and the re-center window must close
    /// before the next move. Returns whether the advance was accepted.
    pub fn advance(&mut self) -> bool {
        if self.n == 0 || self.phase != Phase::Idle {
            return false;
        }
        self.transition_enabled = true;
        self.center += 1;
        self.phase = Phase::Advancing;
        debug!(center = self.center, "advance");
        true
    }

    /// Host notification that the horizontal translation finished. Returns
    /// true when a silent re-center window was opened.
    pub fn transition_finished(&mut self) -> bool {
        if self.phase != Phase::Advancing {
            return false;
        }
        if self.center >= 2 * self.n {
            self.begin_recenter(self.center - self.n);
            true
        } else if self.center < self.n {
            self.begin_recenter(self.center + self.n);
            true
        } else {
            self.phase = Phase::Idle;
            false
        }
    }

    fn begin_recenter(&mut self, to: usize) {
        self.transition_enabled = false;
        debug!(from = self.center, to, "silent re-center");
        self.center = to;
        self.phase = Phase::Recentering {
            ticks_left: RECENTER_TICKS,
        };
    }

    /// One display-refresh tick. Returns true when the re-center window
    /// closed and transitions were re-armed.
    pub fn frame_tick(&mut self) -> bool {
        let Phase::Recentering { ticks_left } = self.phase else {
            return false;
        };
        let left = ticks_left.saturating_sub(1);
        if left == 0 {
            self.transition_enabled = true;
            self.phase = Phase::Idle;
            true
        } else {
            self.phase = Phase::Recentering { ticks_left: left };
            false
        }
    }
}
