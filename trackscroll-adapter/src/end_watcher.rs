/// One-shot detector for "the user is approaching the end of the content".
///
/// Feed it the host's scroll state on every scroll event; it reports `true`
/// exactly once per approach. The latch re-arms when the user scrolls back
/// out of the trigger zone, so an infinite list fires again after more
/// content has been appended.
///
/// `early_trigger_factor` widens the trigger zone by that multiple of the
/// viewport size: at a 1000 px viewport and a factor of 0.5 the end counts
/// as reached 500 px before the actual content end, giving the host time to
/// fetch while the user still has content left to scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndWatcher {
    early_trigger_factor: f64,
    triggered: bool,
}

impl EndWatcher {
    pub fn new(early_trigger_factor: f64) -> Self {
        Self {
            early_trigger_factor: early_trigger_factor.max(0.0),
            triggered: false,
        }
    }

    pub fn early_trigger_factor(&self) -> f64 {
        self.early_trigger_factor
    }

    /// Processes one scroll observation.
    ///
    /// `scroll_offset` and `viewport_size` are in content pixels,
    /// `total_size` is the full content size. While `loading` the watcher
    /// is suppressed and its latch reset, so the fetch triggered by the
    /// previous approach does not immediately re-fire.
    pub fn on_scroll(
        &mut self,
        scroll_offset: f64,
        viewport_size: f64,
        total_size: f64,
        loading: bool,
    ) -> bool {
        if loading {
            self.triggered = false;
            return false;
        }

        let bottom = scroll_offset + viewport_size;
        let trigger_buffer = viewport_size * self.early_trigger_factor;
        let end_reached = total_size.is_finite() && bottom + trigger_buffer >= total_size;

        if !end_reached {
            self.triggered = false;
            return false;
        }
        if self.triggered {
            return false;
        }
        self.triggered = true;
        true
    }

    /// Manually re-arms the latch, e.g. after the track list was replaced.
    pub fn reset(&mut self) {
        self.triggered = false;
    }
}
