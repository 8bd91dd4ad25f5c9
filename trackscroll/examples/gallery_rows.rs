// Example: a date-grouped photo gallery built from the grid helpers.
//
// Headings and image rows are two size classes; the column count follows
// the container width, and one representative per class is enough to
// measure the whole list.
use trackscroll::{
    OffsetIndex, SizeCache, Track, distinct_size_classes, grid_tracks,
    responsive_orthogonal_track_count,
};

#[derive(Clone)]
enum GalleryTrack {
    Heading { date: String },
    ImageRow { id: String, ids: Vec<u32> },
}

impl Track for GalleryTrack {
    fn track_id(&self) -> &str {
        match self {
            Self::Heading { date } => date,
            Self::ImageRow { id, .. } => id,
        }
    }

    fn size_class(&self) -> &str {
        match self {
            Self::Heading { .. } => "heading",
            Self::ImageRow { .. } => "image-row",
        }
    }
}

fn main() {
    let container_width = 1000.0;
    let columns = responsive_orthogonal_track_count(&[600.0, 900.0, 1300.0], container_width);
    println!("columns at {container_width}px: {columns}");

    let mut tracks = Vec::new();
    for day in 1u32..=30 {
        tracks.push(GalleryTrack::Heading {
            date: format!("2024-06-{day:02}"),
        });
        let photos: Vec<u32> = (0..17).map(|i| day * 100 + i).collect();
        for (n, row) in grid_tracks(&photos, columns).into_iter().enumerate() {
            tracks.push(GalleryTrack::ImageRow {
                id: format!("row-{day}-{n}"),
                ids: row,
            });
        }
    }
    let photos: usize = tracks
        .iter()
        .map(|t| match t {
            GalleryTrack::ImageRow { ids, .. } => ids.len(),
            GalleryTrack::Heading { .. } => 0,
        })
        .sum();
    println!("tracks={} photos={photos}", tracks.len());

    // The host renders one example per class off-screen and measures it.
    let examples = distinct_size_classes(&tracks, Some(2));
    println!(
        "measuring {} example(s): {:?}",
        examples.len(),
        examples.iter().map(|t| t.size_class()).collect::<Vec<_>>()
    );
    let mut sizes = SizeCache::new();
    sizes.measure(
        examples.iter().map(|t| {
            let size = match t.size_class() {
                "heading" => 32.0,
                _ => container_width / columns as f64, // square cells
            };
            (t.size_class(), size)
        }),
        Some(2),
    );

    let offsets = OffsetIndex::from_tracks(&tracks, &sizes);
    println!("gallery height: {}px", offsets.total());
}
