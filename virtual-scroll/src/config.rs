use crate::ConfigError;

/// Viewport configuration for a [`crate::Viewport`].
///
/// All heights are in the host's scroll units (typically pixels or terminal rows).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Height of every item. Must be non-zero.
    pub item_height: u32,
    /// Height of the scroll container. Must be non-zero.
    pub container_height: u32,
    /// Items rendered beyond the viewport on each side.
    pub buffer: usize,
    /// Fraction of the scrollable height at which more items are requested, in `(0, 1]`.
    pub threshold: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            item_height: 50,
            container_height: 400,
            buffer: 5,
            threshold: 0.8,
        }
    }
}

impl ViewportConfig {
    /// Creates a configuration with the default `buffer` (5) and `threshold` (0.8).
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            ..Self::default()
        }
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Checks every constraint. A `NaN` threshold is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.container_height == 0 {
            return Err(ConfigError::ZeroContainerHeight);
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }

    /// Number of items that fit in the container, rounded up.
    ///
    /// Returns 0 for an unvalidated config with `item_height == 0`.
    pub fn visible_count(&self) -> usize {
        if self.item_height == 0 {
            return 0;
        }
        self.container_height.div_ceil(self.item_height) as usize
    }

    /// Upper bound on the number of items in a computed window.
    pub fn max_window_len(&self) -> usize {
        self.visible_count()
            .saturating_add(self.buffer.saturating_mul(2))
    }
}
