/// An adapter-driven smooth scroll between two offsets.
///
/// The host advances it by calling [`crate::VirtualScroll::tick`] once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimation {
    pub from: u64,
    pub to: u64,
    pub started_at_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollAnimation {
    /// A zero duration is bumped to 1 ms so the animation still completes on the next tick.
    pub fn new(from: u64, to: u64, started_at_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms
    }

    pub fn offset_at(&self, now_ms: u64) -> u64 {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        let progress = self.easing.apply(elapsed as f64 / self.duration_ms as f64);

        if self.to >= self.from {
            let travelled = ((self.to - self.from) as f64 * progress) as u64;
            self.from.saturating_add(travelled).min(self.to)
        } else {
            let travelled = ((self.from - self.to) as f64 * progress) as u64;
            self.from.saturating_sub(travelled).max(self.to)
        }
    }

    /// Moves both endpoints, e.g. when rows were inserted above the viewport mid-flight.
    pub fn translate(&mut self, delta: i64) {
        let shift = delta.unsigned_abs();
        if delta >= 0 {
            self.from = self.from.saturating_add(shift);
            self.to = self.to.saturating_add(shift);
        } else {
            self.from = self.from.saturating_sub(shift);
            self.to = self.to.saturating_sub(shift);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Fast start, gentle landing. Closest to browser `scroll-behavior: smooth`.
    EaseOutCubic,
    EaseInOutQuad,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `[0, 1]`) to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}
