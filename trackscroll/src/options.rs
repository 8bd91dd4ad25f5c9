use alloc::sync::Arc;

use crate::Range;

/// Sink for rendered-range changes.
///
/// Receives the previously published range (`None` before the first
/// emission) and the new one. Only fired when the two differ.
pub type RangeChangeSink = Arc<dyn Fn(Option<Range>, Range) + Send + Sync>;

/// Sink for asset-preparation range changes.
pub type AssetRangeSink = Arc<dyn Fn(Range) + Send + Sync>;

/// Sink for the current (topmost visible) track index, deduplicated.
pub type CurrentIndexSink = Arc<dyn Fn(usize) + Send + Sync>;

/// Sink for viewport content-box resizes, `(width, height)`.
pub type ViewportResizeSink = Arc<dyn Fn(f64, f64) + Send + Sync>;

/// Configuration for [`crate::ScrollEngine`].
///
/// Cheap to clone: sinks are stored in `Arc`s, so adapters can tweak a few
/// fields and call `set_options` without reallocating closures.
pub struct EngineOptions {
    /// Exact number of distinct size classes occurring among rendered
    /// tracks, when the host knows it. Lets the measurement pass stop early
    /// once that many classes have been observed.
    pub expected_size_class_count: Option<usize>,

    /// How much of the visible window, as a factor of the visible item
    /// count, stays materialized on the side being scrolled *away from*.
    pub outgoing_buffer_factor: f64,

    /// How much of the visible window, as a factor of the visible item
    /// count, is prepared on the side being scrolled *towards*.
    pub incoming_buffer_factor: f64,

    /// Look-ahead factor for the asset-preparation range, used to pre-stage
    /// heavier resources (e.g. media) before they become visible.
    ///
    /// Must be at least `incoming_buffer_factor`; smaller values are
    /// corrected upward with a warning when the engine takes the options.
    pub asset_preparation_factor: f64,

    /// Fired with `(previous, current)` whenever the rendering range
    /// changes. Required once the engine has a change to report: delivering
    /// without a registered sink is a programming error and panics.
    pub on_rendered_range_change: Option<RangeChangeSink>,

    /// Fired when the asset-preparation range changes. Optional.
    pub on_asset_range_change: Option<AssetRangeSink>,

    /// Fired when the resolved scroll index changes. Optional.
    pub on_current_index: Option<CurrentIndexSink>,

    /// Fired when the host reports a viewport resize. Optional.
    pub on_viewport_resize: Option<ViewportResizeSink>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            expected_size_class_count: None,
            outgoing_buffer_factor: 0.5,
            incoming_buffer_factor: 1.5,
            asset_preparation_factor: 3.5,
            on_rendered_range_change: None,
            on_asset_range_change: None,
            on_current_index: None,
            on_viewport_resize: None,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expected_size_class_count(mut self, count: Option<usize>) -> Self {
        self.expected_size_class_count = count;
        self
    }

    pub fn with_buffer_factors(mut self, outgoing: f64, incoming: f64) -> Self {
        self.outgoing_buffer_factor = outgoing;
        self.incoming_buffer_factor = incoming;
        self
    }

    pub fn with_asset_preparation_factor(mut self, factor: f64) -> Self {
        self.asset_preparation_factor = factor;
        self
    }

    pub fn with_on_rendered_range_change(
        mut self,
        sink: impl Fn(Option<Range>, Range) + Send + Sync + 'static,
    ) -> Self {
        self.on_rendered_range_change = Some(Arc::new(sink));
        self
    }

    pub fn with_on_asset_range_change(
        mut self,
        sink: impl Fn(Range) + Send + Sync + 'static,
    ) -> Self {
        self.on_asset_range_change = Some(Arc::new(sink));
        self
    }

    pub fn with_on_current_index(mut self, sink: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_current_index = Some(Arc::new(sink));
        self
    }

    pub fn with_on_viewport_resize(
        mut self,
        sink: impl Fn(f64, f64) + Send + Sync + 'static,
    ) -> Self {
        self.on_viewport_resize = Some(Arc::new(sink));
        self
    }

    /// Corrects invalid combinations in place.
    ///
    /// The asset-preparation range must never be narrower than the
    /// rendering range, so a factor below `incoming_buffer_factor` is
    /// clamped up to it.
    pub(crate) fn validate(&mut self) {
        if self.asset_preparation_factor < self.incoming_buffer_factor {
            swarn!(
                asset_preparation_factor = self.asset_preparation_factor,
                incoming_buffer_factor = self.incoming_buffer_factor,
                "asset_preparation_factor below incoming_buffer_factor; clamping up"
            );
            self.asset_preparation_factor = self.incoming_buffer_factor;
        }
    }
}

impl Clone for EngineOptions {
    fn clone(&self) -> Self {
        Self {
            expected_size_class_count: self.expected_size_class_count,
            outgoing_buffer_factor: self.outgoing_buffer_factor,
            incoming_buffer_factor: self.incoming_buffer_factor,
            asset_preparation_factor: self.asset_preparation_factor,
            on_rendered_range_change: self.on_rendered_range_change.clone(),
            on_asset_range_change: self.on_asset_range_change.clone(),
            on_current_index: self.on_current_index.clone(),
            on_viewport_resize: self.on_viewport_resize.clone(),
        }
    }
}

impl core::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("expected_size_class_count", &self.expected_size_class_count)
            .field("outgoing_buffer_factor", &self.outgoing_buffer_factor)
            .field("incoming_buffer_factor", &self.incoming_buffer_factor)
            .field("asset_preparation_factor", &self.asset_preparation_factor)
            .finish_non_exhaustive()
    }
}
