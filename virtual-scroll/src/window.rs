use core::cmp;

use crate::{ViewportConfig, VisibleRange, Window};

impl Window {
    /// Computes the buffered window for `len` items at `scroll_offset`.
    ///
    /// The buffer is applied on both sides of the nominal viewport. When the offset points past
    /// the last full page (e.g. the collection shrank under the user), the first visible index
    /// is clamped to `len - visible_count`, so the window still ends at `len`.
    ///
    /// `config` is expected to be validated; a zero `item_height` yields an empty window.
    pub fn compute(config: &ViewportConfig, len: usize, scroll_offset: u64) -> Self {
        let visible_count = config.visible_count();
        if len == 0 || config.item_height == 0 {
            return Self {
                range: VisibleRange::default(),
                visible_count,
                top_spacer: 0,
                bottom_spacer: 0,
            };
        }

        let item_height = config.item_height as u64;
        let buffer = config.buffer;

        let first = usize::try_from(scroll_offset / item_height).unwrap_or(usize::MAX);
        let first = cmp::min(first, len.saturating_sub(visible_count));

        let start_index = first.saturating_sub(buffer);
        let end_index = cmp::min(
            len,
            start_index
                .saturating_add(visible_count)
                .saturating_add(buffer.saturating_mul(2)),
        );

        Self {
            range: VisibleRange::new(start_index, end_index),
            visible_count,
            top_spacer: (start_index as u64).saturating_mul(item_height),
            bottom_spacer: ((len - end_index) as u64).saturating_mul(item_height),
        }
    }
}
