#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(start_index <= end_index, "VisibleRange: start > end");
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn as_range(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }
}

/// The buffered slice of the collection selected for rendering, plus the spacer heights that
/// stand in for the un-rendered prefix and suffix.
///
/// Invariant: `top_spacer + range.len() * item_height + bottom_spacer == len * item_height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub range: VisibleRange,
    /// `ceil(container_height / item_height)`, without buffer.
    pub visible_count: usize,
    pub top_spacer: u64,
    pub bottom_spacer: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.range.start_index
    }

    pub fn end_index(&self) -> usize {
        self.range.end_index
    }
}
