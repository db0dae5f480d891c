/// Timing configuration for [`crate::VirtualScroll`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualScrollOptions {
    /// Minimum spacing between two scroll-driven recomputations (one animation frame).
    pub frame_interval_ms: u64,
    /// Quiescence after the last scroll event before scrolling counts as settled.
    ///
    /// Only drives `is_scrolling` and `ScrollEnd`; window correctness never depends on it.
    pub settle_delay_ms: u64,
}

impl Default for VirtualScrollOptions {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            settle_delay_ms: 150,
        }
    }
}

impl VirtualScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_interval_ms(mut self, frame_interval_ms: u64) -> Self {
        self.frame_interval_ms = frame_interval_ms;
        self
    }

    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }
}
