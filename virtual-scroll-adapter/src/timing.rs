//! Clock-driven helpers. Time is always supplied by the caller (`now_ms`), so both helpers are
//! deterministic and independent of any event loop.

/// Rate-limits a recurring pass to at most once per `interval_ms`.
///
/// A request that arrives too early is remembered as pending and picked up by [`Self::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameThrottle {
    interval_ms: u64,
    last_run_ms: Option<u64>,
    pending: bool,
}

impl FrameThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
            pending: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Requests a pass at `now_ms`. Returns `true` when the caller should run it now.
    pub fn request(&mut self, now_ms: u64) -> bool {
        if self.ready(now_ms) {
            self.last_run_ms = Some(now_ms);
            self.pending = false;
            return true;
        }
        self.pending = true;
        false
    }

    /// Returns `true` when a deferred pass is pending and may run now.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        self.request(now_ms)
    }

    /// Drops a pending pass (e.g. after the caller ran it through another path).
    pub fn clear_pending(&mut self) {
        self.pending = false;
    }

    fn ready(&self, now_ms: u64) -> bool {
        match self.last_run_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }
}

/// Detects the end of a burst of events after `delay_ms` of quiescence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTimer {
    delay_ms: u64,
    last_event_ms: Option<u64>,
}

impl SettleTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_event_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// `true` between the first event of a burst and the moment it settles.
    pub fn is_active(&self) -> bool {
        self.last_event_ms.is_some()
    }

    pub fn touch(&mut self, now_ms: u64) {
        self.last_event_ms = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.last_event_ms = None;
    }

    /// Returns `true` exactly once per burst, when `delay_ms` has passed since the last event.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(last) = self.last_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.delay_ms {
            return false;
        }
        self.last_event_ms = None;
        true
    }
}
