// Example: minimal usage of the measurement cache, offset index and range math.
use trackscroll::{OffsetIndex, SizeCache, Track, updated_range};

struct Row {
    id: String,
    class: &'static str,
}

impl Track for Row {
    fn track_id(&self) -> &str {
        &self.id
    }

    fn size_class(&self) -> &str {
        self.class
    }
}

fn main() {
    let tracks: Vec<Row> = (0..100_000)
        .map(|i| Row {
            id: format!("row-{i}"),
            class: if i % 10 == 0 { "heading" } else { "image-row" },
        })
        .collect();

    // One measurement per size class covers the entire list.
    let mut sizes = SizeCache::new();
    sizes.measure([("heading", 32.0), ("image-row", 240.0)], Some(2));

    let offsets = OffsetIndex::from_tracks(&tracks, &sizes);
    println!("total_size={}", offsets.total());

    let scroll_offset = 1_234_567.0;
    let index = offsets.index_at(scroll_offset);
    let visible = offsets.visible_count(index, 900.0);
    println!("index={index} visible={visible} start={}", offsets.offset_of(index));

    let range = updated_range(index, visible, tracks.len(), true, 0.5, 1.5);
    println!("render {range:?} ({} tracks)", range.len());
}
