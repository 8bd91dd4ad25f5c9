use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    EngineOptions, MeasurementSource, OffsetIndex, Range, ScrollBehavior, SizeCache, Track,
    Viewport, updated_range,
};

/// Owned per-track snapshot taken when the host hands over a track list.
#[derive(Clone, Debug)]
struct TrackSnapshot {
    track_id: String,
    size_class: String,
}

impl Track for TrackSnapshot {
    fn track_id(&self) -> &str {
        &self.track_id
    }

    fn size_class(&self) -> &str {
        &self.size_class
    }
}

struct Attachment<V, M> {
    viewport: V,
    measurements: M,
}

/// The orchestrating state machine: Detached until a viewport is bound,
/// Attached afterwards.
///
/// While Attached, the engine reacts to three external signals
/// ([`ScrollEngine::on_content_scrolled`],
/// [`ScrollEngine::on_data_length_changed`] and
/// [`ScrollEngine::on_viewport_resized`]) plus track-list replacement via
/// [`ScrollEngine::update_tracks`]. Every signal handler is a silent no-op
/// while Detached; attachment is a normal lifecycle transition, not a
/// failure.
///
/// The engine exclusively owns its [`SizeCache`], [`OffsetIndex`] and the
/// last published ranges; hosts only reach them through these operations.
pub struct ScrollEngine<V, M> {
    options: EngineOptions,
    tracks: Vec<TrackSnapshot>,
    sizes: SizeCache,
    offsets: OffsetIndex,
    offsets_generation: u64,
    last_scroll_offset: f64,
    scrolling_forward: bool,
    last_range: Option<Range>,
    last_asset_range: Option<Range>,
    last_index: Option<usize>,
    attached: Option<Attachment<V, M>>,
}

impl<V: Viewport, M: MeasurementSource> ScrollEngine<V, M> {
    pub fn new(mut options: EngineOptions) -> Self {
        options.validate();
        sdebug!(
            expected_size_class_count = ?options.expected_size_class_count,
            outgoing = options.outgoing_buffer_factor,
            incoming = options.incoming_buffer_factor,
            asset = options.asset_preparation_factor,
            "ScrollEngine::new"
        );
        Self {
            options,
            tracks: Vec::new(),
            sizes: SizeCache::new(),
            offsets: OffsetIndex::empty(),
            offsets_generation: 0,
            last_scroll_offset: 0.0,
            scrolling_forward: true,
            last_range: None,
            last_asset_range: None,
            last_index: None,
            attached: None,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Replaces the configuration and, when attached, recomputes with it.
    pub fn set_options(&mut self, mut options: EngineOptions) {
        options.validate();
        self.options = options;
        let Some(mut att) = self.attached.take() else {
            return;
        };
        self.recompute(&mut att);
        self.attached = Some(att);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total content size derived from the current offset index. Infinite
    /// while any present size class is unmeasured.
    pub fn total_size(&self) -> f64 {
        self.offsets.total()
    }

    pub fn size_cache(&self) -> &SizeCache {
        &self.sizes
    }

    pub fn offset_index(&self) -> &OffsetIndex {
        &self.offsets
    }

    /// Bumped every time the offset index is rebuilt. Lets callers observe
    /// that an idempotent measurement pass left the index untouched.
    pub fn offsets_generation(&self) -> u64 {
        self.offsets_generation
    }

    pub fn scrolling_forward(&self) -> bool {
        self.scrolling_forward
    }

    /// The last published rendering range, if any.
    pub fn rendered_range(&self) -> Option<Range> {
        self.last_range
    }

    /// The last published asset-preparation range, if any.
    pub fn asset_range(&self) -> Option<Range> {
        self.last_asset_range
    }

    /// Binds a viewport and measurement source, rebuilds derived state and
    /// emits the initial range. Replaces any previous attachment.
    pub fn attach(&mut self, viewport: V, measurements: M) {
        sdebug!(tracks = self.tracks.len(), "attach");
        let mut att = Attachment {
            viewport,
            measurements,
        };
        self.last_scroll_offset = att.viewport.scroll_offset();
        self.scrolling_forward = true;
        // The track list may have been replaced while detached.
        self.rebuild_offsets();
        self.recompute(&mut att);
        self.attached = Some(att);
    }

    /// Unbinds the host, returning it. Derived state survives and is reused
    /// on the next attach.
    pub fn detach(&mut self) -> Option<(V, M)> {
        sdebug!("detach");
        self.attached.take().map(|att| (att.viewport, att.measurements))
    }

    /// Signal: the user scrolled the content.
    pub fn on_content_scrolled(&mut self) {
        let Some(mut att) = self.attached.take() else {
            return;
        };
        let offset = att.viewport.scroll_offset();
        self.scrolling_forward = offset >= self.last_scroll_offset;
        self.last_scroll_offset = offset;
        strace!(offset, forward = self.scrolling_forward, "content scrolled");

        self.recompute(&mut att);
        self.attached = Some(att);
    }

    /// Signal: the host's data length changed without a full track-list
    /// handover (e.g. in-place append). Forces an offset rebuild.
    pub fn on_data_length_changed(&mut self) {
        let Some(mut att) = self.attached.take() else {
            return;
        };
        self.rebuild_offsets();
        self.recompute(&mut att);
        self.attached = Some(att);
    }

    /// Signal: the viewport's content box was resized.
    ///
    /// Only surfaces the new size to the resize sink; ranges change when a
    /// subsequent scroll or remeasure signal arrives.
    pub fn on_viewport_resized(&mut self, width: f64, height: f64) {
        if self.attached.is_none() {
            return;
        }
        strace!(width, height, "viewport resized");
        if let Some(sink) = &self.options.on_viewport_resize {
            sink(width, height);
        }
    }

    /// Replaces the active track list.
    ///
    /// When the track currently under the viewport survives the replacement
    /// by identity, the scroll offset is relocated so that the same track
    /// shows at the same intra-track pixel offset as before, even if its
    /// index moved. Without a surviving counterpart the scroll position is
    /// left exactly as-is.
    pub fn update_tracks<T: Track>(&mut self, tracks: &[T]) {
        let snapshot: Vec<TrackSnapshot> = tracks
            .iter()
            .map(|track| TrackSnapshot {
                track_id: track.track_id().to_string(),
                size_class: track.size_class().to_string(),
            })
            .collect();
        sdebug!(
            old = self.tracks.len(),
            new = snapshot.len(),
            "update_tracks"
        );

        let Some(mut att) = self.attached.take() else {
            self.tracks = snapshot;
            return;
        };

        let scroll_offset = att.viewport.scroll_offset();
        let anchor_index = self.offsets.index_at(scroll_offset);
        let anchor = self.tracks.get(anchor_index).map(|track| {
            let start = self.offsets.offset_of(anchor_index);
            let intra = if start.is_finite() {
                scroll_offset - start
            } else {
                0.0
            };
            (track.track_id.clone(), intra)
        });

        self.tracks = snapshot;
        self.rebuild_offsets();

        if let Some((track_id, intra)) = anchor {
            let counterpart = self
                .tracks
                .iter()
                .position(|track| track.track_id == track_id);
            if let Some(new_index) = counterpart {
                let start = self.offsets.offset_of(new_index);
                if start.is_finite() {
                    let target = start + intra;
                    strace!(
                        track_id = track_id.as_str(),
                        new_index,
                        target,
                        "relocating anchor track"
                    );
                    att.viewport.scroll_to_offset(
                        att.viewport.viewport_offset() + target,
                        ScrollBehavior::Instant,
                    );
                    self.last_scroll_offset = target;
                }
            }
        }

        self.recompute(&mut att);
        self.attached = Some(att);
    }

    /// Scrolls the host so that `index` sits at the top of the viewport.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        let Some(att) = &mut self.attached else {
            return;
        };
        let start = self.offsets.offset_of(index);
        if !start.is_finite() {
            swarn!(index, "scroll_to_index target has no measured offset yet");
            return;
        }
        att.viewport
            .scroll_to_offset(att.viewport.viewport_offset() + start, behavior);
    }

    fn rebuild_offsets(&mut self) {
        self.offsets = OffsetIndex::from_tracks(&self.tracks, &self.sizes);
        self.offsets_generation += 1;
        strace!(
            generation = self.offsets_generation,
            total = self.offsets.total(),
            "offset index rebuilt"
        );
    }

    /// One full recompute: the shared reaction to any scroll/data/measure
    /// event.
    fn recompute(&mut self, att: &mut Attachment<V, M>) {
        // 1. Resolve the scroll index from the current offset.
        let mut scroll_offset = att.viewport.scroll_offset();
        let mut scroll_index = self.offsets.index_at(scroll_offset);

        // 2. Re-measure rendered tracks; rebuild offsets if anything moved.
        let old_total = self.offsets.total();
        let changed = self
            .sizes
            .measure_from(&att.measurements, self.options.expected_size_class_count);
        if changed {
            self.rebuild_offsets();
        }
        let total = self.offsets.total();

        // 3. When the rebuild shifted the total content size, rescale the
        //    scroll offset proportionally so the anchored track stays under
        //    the viewport. Only meaningful between two finite totals.
        if changed && total != old_total && total.is_finite() && old_total.is_finite() && old_total > 0.0 {
            let scale = total / old_total;
            let rescaled = scroll_offset * scale;
            strace!(old_total, total, rescaled, "rescaling scroll offset");
            att.viewport.scroll_to_offset(
                att.viewport.viewport_offset() + rescaled,
                ScrollBehavior::Instant,
            );
            scroll_offset = rescaled;
            self.last_scroll_offset = rescaled;
            scroll_index = self.offsets.index_at(scroll_offset);
        }

        if total.is_finite() {
            att.viewport.set_total_content_size(total);
        }

        // 4. Visible count at the (possibly updated) index, then both
        //    buffered ranges.
        let visible = self
            .offsets
            .visible_count(scroll_index, att.viewport.viewport_size());
        let total_items = att.viewport.data_length();
        let range = updated_range(
            scroll_index,
            visible,
            total_items,
            self.scrolling_forward,
            self.options.outgoing_buffer_factor,
            self.options.incoming_buffer_factor,
        );
        let asset_range = updated_range(
            scroll_index,
            visible,
            total_items,
            self.scrolling_forward,
            self.options.outgoing_buffer_factor,
            self.options.asset_preparation_factor,
        );

        // 5. Publish, gating sink emissions on actual change.
        att.viewport.set_rendered_range(range);
        att.viewport
            .set_rendered_content_offset(self.offsets.offset_of(range.start));

        if self.last_range != Some(range) {
            let previous = self.last_range;
            self.last_range = Some(range);
            match &self.options.on_rendered_range_change {
                Some(sink) => sink(previous, range),
                None => panic!(
                    "no rendered-range sink registered while a range change must be reported \
                     ({previous:?} -> {range:?})"
                ),
            }
        }

        if self.last_asset_range != Some(asset_range) {
            self.last_asset_range = Some(asset_range);
            if let Some(sink) = &self.options.on_asset_range_change {
                sink(asset_range);
            }
        }

        if self.last_index != Some(scroll_index) {
            self.last_index = Some(scroll_index);
            if let Some(sink) = &self.options.on_current_index {
                sink(scroll_index);
            }
        }
    }
}

impl<V, M> core::fmt::Debug for ScrollEngine<V, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("options", &self.options)
            .field("tracks", &self.tracks.len())
            .field("measured_classes", &self.sizes.len())
            .field("total_size", &self.offsets.total())
            .field("offsets_generation", &self.offsets_generation)
            .field("scrolling_forward", &self.scrolling_forward)
            .field("last_range", &self.last_range)
            .field("last_asset_range", &self.last_asset_range)
            .field("last_index", &self.last_index)
            .field("attached", &self.attached.is_some())
            .finish()
    }
}
