use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use virtual_scroll::VisibleRange;

/// The slice of the collection selected for rendering, as reported to the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow<T> {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// `items[start_index..end_index]` at the time of emission.
    pub items: Vec<T>,
}

impl<T> VisibleWindow<T> {
    pub fn range(&self) -> VisibleRange {
        VisibleRange::new(self.start_index, self.end_index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Output of [`crate::VirtualScroll`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent<T> {
    /// The visible window changed (or its contents did).
    ItemsVisible(VisibleWindow<T>),
    /// The viewport crossed the load-more threshold.
    LoadMore { current_len: usize },
    /// Scrolling settled: a programmatic scroll landed, a smooth scroll finished, or user
    /// scrolling went quiet.
    ScrollEnd,
}

/// Receives events from a [`crate::VirtualScroll`].
///
/// Implemented for [`EventQueue`] (pull-based), [`FnSink`] (callbacks) and, with
/// `feature = "channel"`, `crossbeam_channel::Sender`.
pub trait ScrollEventSink<T> {
    fn emit(&mut self, event: ScrollEvent<T>);
}

impl<T, S: ScrollEventSink<T> + ?Sized> ScrollEventSink<T> for Box<S> {
    fn emit(&mut self, event: ScrollEvent<T>) {
        (**self).emit(event);
    }
}

/// A FIFO buffer of events for hosts that drain once per frame.
#[derive(Clone, Debug)]
pub struct EventQueue<T> {
    events: VecDeque<ScrollEvent<T>>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn pop(&mut self) -> Option<ScrollEvent<T>> {
        self.events.pop_front()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ScrollEvent<T>> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScrollEvent<T>> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> ScrollEventSink<T> for EventQueue<T> {
    fn emit(&mut self, event: ScrollEvent<T>) {
        self.events.push_back(event);
    }
}

/// Adapts a closure into a [`ScrollEventSink`].
pub struct FnSink<F>(pub F);

impl<F> core::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnSink(..)")
    }
}

impl<T, F: FnMut(ScrollEvent<T>)> ScrollEventSink<T> for FnSink<F> {
    fn emit(&mut self, event: ScrollEvent<T>) {
        (self.0)(event);
    }
}

#[cfg(feature = "channel")]
impl<T> ScrollEventSink<T> for crossbeam_channel::Sender<ScrollEvent<T>> {
    fn emit(&mut self, event: ScrollEvent<T>) {
        if self.send(event).is_err() {
            vwarn!("ScrollEventSink: receiver disconnected, dropping event");
        }
    }
}
