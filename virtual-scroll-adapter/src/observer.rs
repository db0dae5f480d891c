use alloc::sync::Arc;
use core::sync::atomic::{AtomicU32, Ordering};

/// An injected source of viewport geometry, polled from [`crate::VirtualScroll::tick`].
///
/// This stands in for platform resize observers so the component stays independent of any
/// rendering surface.
pub trait ViewportObserver {
    /// Returns the container height if it changed since the previous poll.
    fn poll_container_height(&mut self) -> Option<u32>;
}

impl<F: FnMut() -> Option<u32>> ViewportObserver for F {
    fn poll_container_height(&mut self) -> Option<u32> {
        self()
    }
}

/// A shared container height that a UI thread can publish and the component can observe.
#[derive(Clone, Debug, Default)]
pub struct ResizeFeed {
    height: Arc<AtomicU32>,
}

impl ResizeFeed {
    pub fn new(initial_height: u32) -> Self {
        Self {
            height: Arc::new(AtomicU32::new(initial_height)),
        }
    }

    pub fn set(&self, height: u32) {
        self.height.store(height, Ordering::Relaxed);
    }

    pub fn get(&self) -> u32 {
        self.height.load(Ordering::Relaxed)
    }

    /// Creates an observer that reports heights published after this call.
    pub fn observer(&self) -> ResizeFeedObserver {
        ResizeFeedObserver {
            height: Arc::clone(&self.height),
            last_seen: self.get(),
        }
    }
}

#[derive(Debug)]
pub struct ResizeFeedObserver {
    height: Arc<AtomicU32>,
    last_seen: u32,
}

impl ViewportObserver for ResizeFeedObserver {
    fn poll_container_height(&mut self) -> Option<u32> {
        let height = self.height.load(Ordering::Relaxed);
        if height == self.last_seen {
            return None;
        }
        self.last_seen = height;
        Some(height)
    }
}
