use core::ops::ControlFlow;

use crate::{Range, ScrollBehavior};

/// The scrollable surface the engine drives.
///
/// Implemented by the host UI layer (a DOM scroll container, a TUI pane, a
/// test double). All offsets are pixels along the single virtualized axis.
///
/// Coordinate convention: [`Viewport::scroll_offset`] is *content-relative*
/// (zero at the start of the track list), while
/// [`Viewport::scroll_to_offset`] takes *container* coordinates, i.e. the
/// engine adds [`Viewport::viewport_offset`] before issuing a programmatic
/// scroll.
pub trait Viewport {
    /// Current scroll position, relative to the start of the list content.
    fn scroll_offset(&self) -> f64;

    /// Size of the viewport along the scroll axis.
    fn viewport_size(&self) -> f64;

    /// Total number of tracks the host currently presents.
    fn data_length(&self) -> usize;

    /// Fixed lead-in before the list content inside the scroll container
    /// (headers, toolbars). Zero for most hosts.
    fn viewport_offset(&self) -> f64;

    /// Publishes the total content size so the host can size its scrollbar.
    fn set_total_content_size(&mut self, size: f64);

    /// Publishes the range of tracks the host must materialize.
    fn set_rendered_range(&mut self, range: Range);

    /// Publishes the pixel offset at which the rendered content starts.
    fn set_rendered_content_offset(&mut self, offset: f64);

    /// Scrolls the container to `offset` (container coordinates).
    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior);
}

/// Measurement access to the currently materialized tracks.
///
/// The host walks its rendered nodes in materialization order and reports
/// `(size_class, measured_size)` for each. Keeping this behind a trait
/// keeps the engine free of any rendering-surface dependency; tests drive
/// it with synthetic measurements.
pub trait MeasurementSource {
    /// Visits every rendered item. The visitor returns
    /// [`ControlFlow::Break`] to stop the walk early (used once the
    /// expected number of distinct size classes has been observed).
    fn for_each_rendered(&self, visit: &mut dyn FnMut(&str, f64) -> ControlFlow<()>);
}
