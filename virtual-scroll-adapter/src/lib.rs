//! Host-facing virtual-scroll component built on the `virtual-scroll` crate.
//!
//! The `virtual-scroll` crate is pure windowing math and state. This crate wraps it into a
//! component a UI layer can drop in:
//!
//! - Scroll-driven recomputation throttled to one pass per frame, with a separate settle
//!   detector for UI chrome
//! - `ItemsVisible` / `LoadMore` / `ScrollEnd` events through a pluggable sink
//! - Collection mutations (append, prepend, splice, update, remove) that keep visible rows
//!   anchored
//! - A render delegate with an explicit empty state
//! - Smooth scrolling and an injected viewport observer
//!
//! Everything is driven by caller-supplied timestamps; the crate never reads a clock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod component;
mod event;
mod key;
mod observer;
mod options;
mod render;
mod timing;


pub use animation::{Easing, ScrollAnimation};
pub use component::VirtualScroll;
pub use event::{EventQueue, FnSink, ScrollEvent, ScrollEventSink, VisibleWindow};
pub use key::{ItemKey, KeyFn};
pub use observer::{ResizeFeed, ResizeFeedObserver, ViewportObserver};
pub use options::VirtualScrollOptions;
pub use render::{ItemRenderer, Rendered};
pub use timing::{FrameThrottle, SettleTimer};
