use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::ControlFlow;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::MeasurementSource;

#[cfg(feature = "std")]
type SizeMap = HashMap<String, f64>;
#[cfg(not(feature = "std"))]
type SizeMap = BTreeMap<String, f64>;

/// Last-measured pixel size per size class.
///
/// The cache is populated lazily by measurement passes over the currently
/// rendered subset of tracks. Entries are replaced whole and never deleted;
/// a stale entry for a class that no longer occurs in the list is merely
/// unused.
///
/// A class that has never been measured resolves to [`f64::INFINITY`] (see
/// [`SizeCache::size_of`]): the visible-count scan then treats the first
/// track of that class as the only one fitting the viewport, which keeps
/// the engine from materializing too few items before the class has ever
/// been rendered.
#[derive(Clone, Debug, Default)]
pub struct SizeCache {
    sizes: SizeMap,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the size of a class; unmeasured classes are unbounded.
    pub fn size_of(&self, size_class: &str) -> f64 {
        self.sizes
            .get(size_class)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Returns the measured size of a class, if any.
    pub fn get(&self, size_class: &str) -> Option<f64> {
        self.sizes.get(size_class).copied()
    }

    pub fn is_measured(&self, size_class: &str) -> bool {
        self.sizes.contains_key(size_class)
    }

    /// Number of distinct size classes measured so far.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Seeds or overrides a single measurement.
    pub fn insert(&mut self, size_class: &str, size: f64) {
        self.sizes.insert(size_class.to_string(), size.max(0.0));
    }

    /// Runs a measurement pass over the currently rendered items.
    ///
    /// Items are visited in materialization order. Each observation replaces
    /// the cached value for its class; the pass reports `true` as soon as
    /// any class is observed for the first time or with a size different
    /// from its cached value.
    ///
    /// `expected_distinct_class_count` enables an early exit: once that many
    /// *distinct* classes have been observed this pass, the remaining items
    /// are not visited. This is only valid when the caller knows exactly how
    /// many classes occur among rendered items.
    ///
    /// NaN measurements are skipped; negative sizes clamp to zero.
    pub fn measure<'a>(
        &mut self,
        rendered: impl IntoIterator<Item = (&'a str, f64)>,
        expected_distinct_class_count: Option<usize>,
    ) -> bool {
        let mut pass = MeasurePass::new(self, expected_distinct_class_count);
        for (size_class, size) in rendered {
            if pass.observe(size_class, size).is_break() {
                break;
            }
        }
        pass.changed
    }

    /// Same as [`SizeCache::measure`], but pulls from a host
    /// [`MeasurementSource`].
    pub fn measure_from(
        &mut self,
        source: &dyn MeasurementSource,
        expected_distinct_class_count: Option<usize>,
    ) -> bool {
        let mut pass = MeasurePass::new(self, expected_distinct_class_count);
        source.for_each_rendered(&mut |size_class, size| pass.observe(size_class, size));
        pass.changed
    }
}

/// State of one measurement pass; tracks which classes have been observed
/// so far so the early exit can count *distinct* classes.
struct MeasurePass<'c> {
    cache: &'c mut SizeCache,
    expected: Option<usize>,
    observed: Vec<String>,
    changed: bool,
}

impl<'c> MeasurePass<'c> {
    fn new(cache: &'c mut SizeCache, expected: Option<usize>) -> Self {
        Self {
            cache,
            expected,
            observed: Vec::new(),
            changed: false,
        }
    }

    fn observe(&mut self, size_class: &str, size: f64) -> ControlFlow<()> {
        if size.is_nan() {
            swarn!(size_class, "skipping NaN measurement");
            return self.flow();
        }
        let size = size.max(0.0);

        if !self.observed.iter().any(|c| c == size_class) {
            self.observed.push(size_class.to_string());
        }

        if self.cache.sizes.get(size_class) != Some(&size) {
            strace!(size_class, size, "size class measurement changed");
            self.cache.sizes.insert(size_class.to_string(), size);
            self.changed = true;
        }

        self.flow()
    }

    fn flow(&self) -> ControlFlow<()> {
        match self.expected {
            Some(expected) if self.observed.len() >= expected => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
