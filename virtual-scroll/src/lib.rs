//! A headless virtual-scroll engine for fixed-height item lists.
//!
//! For the host-facing component (event emission, frame throttling, load-more, render
//! delegation), see the `virtual-scroll-adapter` crate.
//!
//! This crate holds the arithmetic and the state that drives it: which slice of a long
//! collection sits near the viewport, how tall the spacers around that slice must be so the
//! scrollbar reflects the full collection, and how the tracked scroll offset shifts when items
//! are inserted above the visible area.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the item count and a fixed item height
//! - the container (viewport) height
//! - scroll offsets as the user scrolls
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod types;
mod viewport;
mod window;

#[cfg(test)]
mod tests;

pub use config::ViewportConfig;
pub use error::ConfigError;
pub use types::{ScrollDirection, VisibleRange, Window};
pub use viewport::Viewport;
