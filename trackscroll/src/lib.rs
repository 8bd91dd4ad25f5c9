//! A headless virtual scrolling engine for lists of tracks with
//! heterogeneous, a-priori-unknown sizes grouped into a small number of
//! size classes.
//!
//! Instead of estimating every item, the engine measures one *example* per
//! size class from the currently rendered subset and derives everything
//! else: a cumulative offset index for O(log n) offset → index lookups, a
//! direction-aware buffered rendering range, a wider asset-preparation
//! range for pre-staging heavy resources, and scroll-position preservation
//! when late measurements shift the total content size.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport geometry and scroll offsets (the [`Viewport`] trait)
//! - measured sizes of rendered tracks (the [`MeasurementSource`] trait)
//! - scroll / resize / data-change signals driving the [`ScrollEngine`]
//!
//! For host-side helpers (frame-coalesced updates, an in-memory simulation
//! host, end-of-list detection), see the `trackscroll-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod engine;
mod offsets;
mod options;
mod range;
mod types;
mod util;
mod viewport;


pub use cache::SizeCache;
pub use engine::ScrollEngine;
pub use offsets::OffsetIndex;
pub use options::{
    AssetRangeSink, CurrentIndexSink, EngineOptions, RangeChangeSink, ViewportResizeSink,
};
pub use range::{Range, updated_range};
pub use types::{ScrollBehavior, Track};
pub use util::{distinct_size_classes, grid_tracks, responsive_orthogonal_track_count};
pub use viewport::{MeasurementSource, Viewport};
