use alloc::vec::Vec;

use crate::Track;

/// Wraps a flat element list into tracks of `orthogonal_count` elements.
///
/// For a vertical scroller each inner `Vec` is one row, so
/// `orthogonal_count` is the column count:
///
/// ```
/// use trackscroll::grid_tracks;
///
/// assert_eq!(
///     grid_tracks(&[1, 2, 3, 4, 5, 6, 7], 3),
///     vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]],
/// );
/// assert_eq!(grid_tracks::<i32>(&[], 3), Vec::<Vec<i32>>::new());
/// ```
///
/// `orthogonal_count` is clamped to at least 1.
pub fn grid_tracks<T: Clone>(elements: &[T], orthogonal_count: usize) -> Vec<Vec<T>> {
    let per_track = orthogonal_count.max(1);
    elements
        .chunks(per_track)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Returns the orthogonal track count for a container size, given ascending
/// breakpoints.
///
/// A size below the first breakpoint yields 1; a size at or above the last
/// yields `breakpoints.len() + 1`:
///
/// ```
/// use trackscroll::responsive_orthogonal_track_count;
///
/// assert_eq!(responsive_orthogonal_track_count(&[400.0, 800.0, 1200.0], 500.0), 2);
/// ```
pub fn responsive_orthogonal_track_count(breakpoints: &[f64], container_size: f64) -> usize {
    breakpoints
        .iter()
        .position(|&breakpoint| container_size < breakpoint)
        .map(|index| index + 1)
        .unwrap_or(breakpoints.len() + 1)
}

/// Filters tracks down to one representative per distinct size class,
/// preserving order.
///
/// Hosts render these representatives as the measurement examples for
/// their classes. `expected_count` stops the scan early once that many
/// distinct classes have been collected.
pub fn distinct_size_classes<T: Track>(tracks: &[T], expected_count: Option<usize>) -> Vec<&T> {
    let mut seen: Vec<&str> = Vec::new();
    let mut representatives = Vec::new();

    for track in tracks {
        let size_class = track.size_class();
        if seen.iter().any(|&c| c == size_class) {
            continue;
        }
        seen.push(size_class);
        representatives.push(track);

        if let Some(expected) = expected_count {
            if representatives.len() >= expected {
                break;
            }
        }
    }

    representatives
}
