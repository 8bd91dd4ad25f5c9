use std::collections::HashMap;
use std::string::String;
use std::sync::{Arc, Mutex, MutexGuard};
use std::vec::Vec;

use trackscroll::{MeasurementSource, Range, ScrollBehavior, Viewport};

use core::ops::ControlFlow;

#[derive(Debug, Default)]
struct SimState {
    viewport_size: f64,
    viewport_offset: f64,
    scroll_offset: f64,
    classes: Vec<String>,
    true_sizes: HashMap<String, f64>,
    total_content_size: Option<f64>,
    rendered_range: Option<Range>,
    rendered_content_offset: Option<f64>,
}

/// In-memory scroll container for tests, examples and host prototyping.
///
/// The sim models a real host faithfully: it only "renders" the tracks the
/// engine asked for via [`Viewport::set_rendered_range`], and its
/// [`MeasurementSource`] only reports sizes for those rendered tracks. An
/// engine attached to a fresh sim therefore starts from an unmeasured
/// state and converges over the first couple of signals, exactly like a
/// DOM-backed host would.
///
/// Cloning yields a second handle to the same container, which is how one
/// sim serves as both the engine's viewport and its measurement source.
#[derive(Clone, Debug, Default)]
pub struct SimViewport(Arc<Mutex<SimState>>);

impl SimViewport {
    pub fn new(viewport_size: f64) -> Self {
        Self(Arc::new(Mutex::new(SimState {
            viewport_size,
            ..SimState::default()
        })))
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets the lead-in content (e.g. a header) before the first track.
    pub fn set_viewport_offset(&self, offset: f64) {
        self.state().viewport_offset = offset;
    }

    /// Replaces the simulated track list, given one size class per track.
    pub fn set_track_classes<I, S>(&self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state().classes = classes.into_iter().map(Into::into).collect();
    }

    /// Sets the size a track of `class` measures at once rendered.
    pub fn set_true_size(&self, class: &str, size: f64) {
        self.state().true_sizes.insert(class.into(), size);
    }

    /// Simulates a user scroll to a content-relative offset.
    pub fn scroll_to(&self, offset: f64) {
        self.state().scroll_offset = offset.max(0.0);
    }

    pub fn scroll_position(&self) -> f64 {
        self.state().scroll_offset
    }

    /// The last range the engine asked the sim to render.
    pub fn rendered_range(&self) -> Option<Range> {
        self.state().rendered_range
    }

    pub fn rendered_content_offset(&self) -> Option<f64> {
        self.state().rendered_content_offset
    }

    /// The last total content size the engine published.
    pub fn total_content_size(&self) -> Option<f64> {
        self.state().total_content_size
    }
}

impl Viewport for SimViewport {
    fn scroll_offset(&self) -> f64 {
        self.state().scroll_offset
    }

    fn viewport_size(&self) -> f64 {
        self.state().viewport_size
    }

    fn data_length(&self) -> usize {
        self.state().classes.len()
    }

    fn viewport_offset(&self) -> f64 {
        self.state().viewport_offset
    }

    fn set_total_content_size(&mut self, size: f64) {
        self.state().total_content_size = Some(size);
    }

    fn set_rendered_range(&mut self, range: Range) {
        self.state().rendered_range = Some(range);
    }

    fn set_rendered_content_offset(&mut self, offset: f64) {
        self.state().rendered_content_offset = Some(offset);
    }

    fn scroll_to_offset(&mut self, offset: f64, _behavior: ScrollBehavior) {
        let mut state = self.state();
        state.scroll_offset = (offset - state.viewport_offset).max(0.0);
    }
}

impl MeasurementSource for SimViewport {
    /// Reports one measurement per currently rendered track. Unrendered
    /// tracks stay unmeasured, as they would in a real host.
    fn for_each_rendered(&self, visit: &mut dyn FnMut(&str, f64) -> ControlFlow<()>) {
        let rendered: Vec<(String, f64)> = {
            let state = self.state();
            let Some(range) = state.rendered_range else {
                return;
            };
            let end = range.end.min(state.classes.len());
            state.classes[range.start.min(end)..end]
                .iter()
                .filter_map(|class| {
                    state
                        .true_sizes
                        .get(class)
                        .map(|&size| (class.clone(), size))
                })
                .collect()
        };
        for (class, size) in rendered {
            if visit(&class, size).is_break() {
                break;
            }
        }
    }
}
