use trackscroll::{
    EngineOptions, MeasurementSource, ScrollBehavior, ScrollEngine, Track, Viewport,
};

use crate::FrameCoalescer;

/// A framework-neutral controller that wraps a [`ScrollEngine`] and defers
/// its recomputes to frame boundaries.
///
/// Hosts report events as they arrive ([`Controller::on_scroll`] possibly
/// many times between frames) and call [`Controller::tick`] once per
/// animation frame or timer tick. The controller coalesces the queued
/// signals into at most one engine recompute per tick, always against the
/// host's most recent state.
///
/// Track-list handovers and explicit scrolls bypass the coalescer: they
/// must act on the offsets the host had at call time.
#[derive(Debug)]
pub struct Controller<V, M> {
    engine: ScrollEngine<V, M>,
    frames: FrameCoalescer,
    data_dirty: bool,
}

impl<V: Viewport, M: MeasurementSource> Controller<V, M> {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            engine: ScrollEngine::new(options),
            frames: FrameCoalescer::new(),
            data_dirty: false,
        }
    }

    pub fn from_engine(engine: ScrollEngine<V, M>) -> Self {
        Self {
            engine,
            frames: FrameCoalescer::new(),
            data_dirty: false,
        }
    }

    pub fn engine(&self) -> &ScrollEngine<V, M> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ScrollEngine<V, M> {
        &mut self.engine
    }

    pub fn into_engine(self) -> ScrollEngine<V, M> {
        self.engine
    }

    pub fn attach(&mut self, viewport: V, measurements: M) {
        self.engine.attach(viewport, measurements);
    }

    pub fn detach(&mut self) -> Option<(V, M)> {
        self.frames.take();
        self.data_dirty = false;
        self.engine.detach()
    }

    /// Queues a scroll signal for the next tick.
    pub fn on_scroll(&mut self) {
        self.frames.request();
    }

    /// Queues a data-length change for the next tick. Outranks a plain
    /// scroll signal queued in the same frame.
    pub fn on_data_length_changed(&mut self) {
        self.data_dirty = true;
        self.frames.request();
    }

    /// Forwarded immediately; resizes only feed the resize sink.
    pub fn on_viewport_resized(&mut self, width: f64, height: f64) {
        self.engine.on_viewport_resized(width, height);
    }

    /// Replaces the track list immediately, then drops any queued signal:
    /// the handover already recomputed against the latest host state.
    pub fn update_tracks<T: Track>(&mut self, tracks: &[T]) {
        self.engine.update_tracks(tracks);
        self.frames.take();
        self.data_dirty = false;
    }

    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        self.engine.scroll_to_index(index, behavior);
        // The programmatic scroll lands as a host scroll event next frame.
        self.frames.request();
    }

    pub fn has_pending_work(&self) -> bool {
        self.frames.is_pending()
    }

    /// Advances the controller by one frame.
    ///
    /// Runs at most one engine recompute, against the host's current state.
    /// Returns whether a recompute happened.
    pub fn tick(&mut self) -> bool {
        if !self.frames.take() {
            return false;
        }
        if core::mem::take(&mut self.data_dirty) {
            self.engine.on_data_length_changed();
        } else {
            self.engine.on_content_scrolled();
        }
        true
    }
}
