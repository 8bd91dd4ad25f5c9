use alloc::vec::Vec;

use crate::{SizeCache, Track};

/// Cumulative track offsets.
///
/// For `n` tracks the index holds `n + 1` offsets where `offsets[i]` is the
/// summed size of tracks `0..i`; `offsets[0]` is `0` and `offsets[n]` is
/// the total content size. The sequence is non-decreasing. Tracks of an
/// unmeasured size class contribute [`f64::INFINITY`], so every offset from
/// the first unmeasured track onward is infinite until a measurement pass
/// fills the cache.
///
/// The index is entirely derived state: it is rebuilt wholesale from the
/// current track list and [`SizeCache`], never patched in place.
#[derive(Clone, Debug)]
pub struct OffsetIndex {
    offsets: Vec<f64>,
}

impl Default for OffsetIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl OffsetIndex {
    /// An index over zero tracks.
    pub fn empty() -> Self {
        Self {
            offsets: alloc::vec![0.0],
        }
    }

    /// Rebuilds the index from a track list and the current measurements.
    pub fn from_tracks<T: Track>(tracks: &[T], cache: &SizeCache) -> Self {
        let mut offsets = Vec::with_capacity(tracks.len() + 1);
        let mut total = 0.0f64;
        offsets.push(0.0);
        for track in tracks {
            total += cache.size_of(track.size_class());
            offsets.push(total);
        }
        Self { offsets }
    }

    pub fn track_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total content size; infinite while any present class is unmeasured.
    pub fn total(&self) -> f64 {
        *self
            .offsets
            .last()
            .unwrap_or(&0.0)
    }

    /// O(1) offset of a track start. `index == track_count()` yields the
    /// total; anything larger clamps to it.
    pub fn offset_of(&self, index: usize) -> f64 {
        let i = index.min(self.offsets.len() - 1);
        self.offsets[i]
    }

    /// O(log n) offset → track index lookup.
    ///
    /// Returns the greatest `i` such that `offsets[i] <= offset`, clamped
    /// into `[0, track_count - 1]`. When the offset coincides with several
    /// equal cumulative offsets (zero-size tracks), the lowest such index
    /// wins. Negative offsets and the empty list map to `0`.
    pub fn index_at(&self, offset: f64) -> usize {
        let count = self.track_count();
        if count == 0 || !(offset > 0.0) {
            return 0;
        }

        let mut i = self
            .offsets
            .partition_point(|&o| o <= offset)
            .saturating_sub(1);

        // Land on the first of any run of zero-size tracks sharing this
        // exact offset.
        if self.offsets[i] == offset {
            while i > 0 && self.offsets[i - 1] == offset {
                i -= 1;
            }
        }

        i.min(count - 1)
    }

    /// Greedy forward scan: how many tracks, starting at `start_index`, are
    /// needed to cover `viewport_size`.
    ///
    /// This intentionally is not a binary search: the caller needs the item
    /// *count*, and a single unmeasured (infinite) track must terminate the
    /// scan counting as the only one fitting.
    pub fn visible_count(&self, start_index: usize, viewport_size: f64) -> usize {
        let count = self.track_count();
        let mut index = start_index.min(count);
        let mut covered = 0.0f64;

        while index < count && covered < viewport_size {
            covered += self.offsets[index + 1] - self.offsets[index];
            index += 1;
        }

        index - start_index.min(count)
    }
}
