use core::cmp;

use crate::{ConfigError, ScrollDirection, ViewportConfig, VisibleRange, Window};

/// Windowing state for a fixed-height list.
///
/// This type is a plain state holder:
/// - It does not own the items, only their count.
/// - Setters record state; nothing is recomputed until [`Self::recompute`] or
///   [`Self::refresh`] is called, so a host can apply several changes per event and pay for a
///   single pass.
/// - [`Self::compute`] is pure and can be called at any time.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    len: usize,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
    window: Window,
}

impl Viewport {
    /// Creates a viewport over `len` items at offset 0 and computes the initial window.
    pub fn new(config: ViewportConfig, len: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        vdebug!(
            len,
            item_height = config.item_height,
            container_height = config.container_height,
            buffer = config.buffer,
            "Viewport::new"
        );
        let mut v = Self {
            config,
            len,
            scroll_offset: 0,
            scroll_direction: None,
            window: Window::default(),
        };
        v.window = v.compute();
        Ok(v)
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Validates and applies a new configuration.
    ///
    /// On error the current configuration is kept as-is.
    pub fn configure(&mut self, config: ViewportConfig) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            vwarn!(?err, "Viewport::configure: rejected");
            return Err(err);
        }
        vdebug!(
            item_height = config.item_height,
            container_height = config.container_height,
            buffer = config.buffer,
            threshold = config.threshold,
            "Viewport::configure"
        );
        self.config = config;
        Ok(())
    }

    /// Updates the container height only (e.g. from a resize observer).
    pub fn set_container_height(&mut self, container_height: u32) -> Result<(), ConfigError> {
        self.configure(self.config.with_container_height(container_height))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        vtrace!(offset, prev = self.scroll_offset, "set_scroll_offset");
        self.scroll_direction = match offset.cmp(&self.scroll_offset) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.scroll_offset = offset;
    }

    /// Same as `set_scroll_offset`, but clamps to `[0, max_scroll_offset]`.
    ///
    /// Returns the applied offset.
    pub fn set_scroll_offset_clamped(&mut self, offset: u64) -> u64 {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
        clamped
    }

    /// Full height of the collection: `len * item_height`.
    pub fn scroll_height(&self) -> u64 {
        (self.len as u64).saturating_mul(self.config.item_height as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.scroll_height()
            .saturating_sub(self.config.container_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The (clamped) offset that puts `index` at the top of the viewport.
    pub fn offset_for_index(&self, index: usize) -> u64 {
        if self.len == 0 {
            return 0;
        }
        let index = index.min(self.len - 1) as u64;
        self.clamp_scroll_offset(index.saturating_mul(self.config.item_height as u64))
    }

    /// Index of the item at the top edge of the viewport (no buffer).
    pub fn first_visible_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        let first = self.scroll_offset / self.config.item_height as u64;
        usize::try_from(first)
            .unwrap_or(usize::MAX)
            .min(self.len - 1)
    }

    /// Records `count` items inserted at `at` (clamped to `len`).
    ///
    /// When the insertion lands at or above the first visible item, the tracked offset moves
    /// down by `count * item_height` so that item stays where it was on screen. Returns the
    /// applied shift.
    pub fn insert(&mut self, at: usize, count: usize) -> u64 {
        if count == 0 {
            return 0;
        }
        let at = at.min(self.len);
        let anchored = self.len > 0 && at <= self.first_visible_index();
        self.len = self.len.saturating_add(count);
        if !anchored {
            vtrace!(at, count, len = self.len, "insert");
            return 0;
        }

        let shift = (count as u64).saturating_mul(self.config.item_height as u64);
        self.scroll_offset = self.scroll_offset.saturating_add(shift);
        vtrace!(at, count, shift, offset = self.scroll_offset, "insert (anchored)");
        shift
    }

    /// Records `count` items removed starting at `at`.
    ///
    /// Removed items above the first visible item pull the tracked offset up by their height.
    /// An out-of-range `at` is ignored. Returns the applied shift.
    pub fn remove(&mut self, at: usize, count: usize) -> u64 {
        if at >= self.len {
            vwarn!(at, len = self.len, "Viewport::remove: out-of-range index");
            return 0;
        }
        let count = count.min(self.len - at);
        if count == 0 {
            return 0;
        }

        let first = self.first_visible_index();
        let removed_above = cmp::min(at + count, first).saturating_sub(at);
        let shift = (removed_above as u64).saturating_mul(self.config.item_height as u64);
        self.scroll_offset = self.scroll_offset.saturating_sub(shift);
        self.len -= count;
        vtrace!(at, count, shift, len = self.len, "remove");
        shift
    }

    /// `(scroll_offset + container_height) / scroll_height`, or `None` for an empty list.
    pub fn scroll_ratio(&self) -> Option<f64> {
        let scroll_height = self.scroll_height();
        if scroll_height == 0 {
            return None;
        }
        let bottom = self
            .scroll_offset
            .saturating_add(self.config.container_height as u64);
        Some(bottom as f64 / scroll_height as f64)
    }

    /// Whether the bottom edge of the viewport has reached the load-more threshold.
    pub fn crosses_threshold(&self) -> bool {
        self.scroll_ratio()
            .is_some_and(|ratio| ratio >= self.config.threshold)
    }

    /// Computes the window for the current state without storing it.
    pub fn compute(&self) -> Window {
        Window::compute(&self.config, self.len, self.scroll_offset)
    }

    /// Recomputes the window and returns it only if it differs from the stored one.
    pub fn recompute(&mut self) -> Option<Window> {
        let next = self.compute();
        if next == self.window {
            return None;
        }
        vtrace!(
            start = next.range.start_index,
            end = next.range.end_index,
            "recompute"
        );
        self.window = next;
        Some(next)
    }

    /// Recomputes and stores the window unconditionally.
    pub fn refresh(&mut self) -> Window {
        self.window = self.compute();
        self.window
    }

    /// The window from the last `recompute`/`refresh`.
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.window.range
    }
}
