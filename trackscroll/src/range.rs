/// A half-open `[start, end)` interval of track indices.
///
/// `end` is exclusive: it is the first index that is *not* materialized.
/// Ranges are recomputed wholesale and compared structurally; the engine
/// only notifies its sinks when a freshly computed range differs from the
/// last published one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: usize,
    pub end: usize, // exclusive
}

impl Range {
    /// Creates a range, clamping `end` up to `start` so the interval is
    /// always well-formed.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Computes the buffered range of tracks to materialize.
///
/// The buffers are asymmetric by travel direction: when scrolling forward,
/// `incoming_buffer_factor` worth of extra items is reserved ahead of the
/// visible window and `outgoing_buffer_factor` behind it, and vice versa
/// when scrolling backward. Both factors are multiples of
/// `visible_item_count`, rounded up.
///
/// The result is clamped into `[0, total_item_count]`.
pub fn updated_range(
    scroll_index: usize,
    visible_item_count: usize,
    total_item_count: usize,
    scrolling_forward: bool,
    outgoing_buffer_factor: f64,
    incoming_buffer_factor: f64,
) -> Range {
    let before_factor = if scrolling_forward {
        outgoing_buffer_factor
    } else {
        incoming_buffer_factor
    };
    let after_factor = if scrolling_forward {
        incoming_buffer_factor
    } else {
        outgoing_buffer_factor
    };

    let buffer_before = buffer_items(before_factor, visible_item_count);
    let buffer_after = buffer_items(after_factor, visible_item_count);

    let start = scroll_index.saturating_sub(buffer_before);
    // + 1 because `end` is exclusive.
    let end = scroll_index
        .saturating_add(1)
        .saturating_add(visible_item_count)
        .saturating_add(buffer_after)
        .min(total_item_count);

    // A stale scroll index can point past the list; keep the interval valid.
    Range::new(start.min(total_item_count), end)
}

/// `ceil(factor * count)` over non-negative inputs, without `std` float
/// intrinsics. NaN and negative products count as zero.
fn buffer_items(factor: f64, visible_item_count: usize) -> usize {
    let exact = factor * visible_item_count as f64;
    if !(exact > 0.0) {
        return 0;
    }
    let truncated = exact as usize;
    if (truncated as f64) < exact {
        truncated + 1
    } else {
        truncated
    }
}
