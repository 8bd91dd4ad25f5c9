//! Adapter utilities for the `trackscroll` crate.
//!
//! The `trackscroll` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by hosts:
//!
//! - Frame-coalesced event delivery (many scroll events, one recompute)
//! - Infinite-scroll end detection with early triggering
//! - An in-memory viewport for tests and host prototyping
//!
//! This crate is intentionally framework-agnostic (no DOM/GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod coalescer;
mod controller;
mod end_watcher;
#[cfg(any(feature = "std", test))]
mod sim;

#[cfg(test)]
mod tests;

pub use coalescer::FrameCoalescer;
pub use controller::Controller;
pub use end_watcher::EndWatcher;
#[cfg(any(feature = "std", test))]
pub use sim::SimViewport;
