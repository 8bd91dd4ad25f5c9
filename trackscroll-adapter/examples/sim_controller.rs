// Example: a frame loop driving the engine through the simulated viewport,
// with infinite-scroll appends triggered by the end watcher.
use trackscroll::{EngineOptions, ScrollBehavior, Track};
use trackscroll_adapter::{Controller, EndWatcher, SimViewport};

#[derive(Clone)]
struct Card {
    id: String,
}

impl Track for Card {
    fn track_id(&self) -> &str {
        &self.id
    }

    fn size_class(&self) -> &str {
        "card"
    }
}

fn cards(range: core::ops::Range<usize>) -> Vec<Card> {
    range.map(|i| Card { id: format!("card-{i}") }).collect()
}

fn main() {
    let sim = SimViewport::new(600.0);
    sim.set_true_size("card", 150.0);
    sim.set_track_classes((0..40).map(|_| "card"));

    let mut controller = Controller::new(
        EngineOptions::new()
            .with_expected_size_class_count(Some(1))
            .with_on_rendered_range_change(|previous, current| {
                println!("render {previous:?} -> {current:?}");
            })
            .with_on_current_index(|index| println!("current index {index}")),
    );
    let mut tracks = cards(0..40);
    controller.update_tracks(&tracks);
    controller.attach(sim.clone(), sim.clone());

    let mut watcher = EndWatcher::new(0.5);
    let mut loading = false;

    // Scroll towards the end in viewport-sized steps, one frame per step.
    for frame in 1.. {
        sim.scroll_to(frame as f64 * 600.0);
        controller.on_scroll();
        controller.tick();

        let total = controller.engine().total_size();
        if watcher.on_scroll(sim.scroll_position(), 600.0, total, loading) {
            println!("end approached at frame {frame}: fetching more");
            loading = true;
        }

        // The "fetch" completes one frame later.
        if loading {
            let start = tracks.len();
            tracks.extend(cards(start..start + 20));
            sim.set_track_classes((0..tracks.len()).map(|_| "card"));
            controller.update_tracks(&tracks);
            loading = false;
            println!("appended: {} tracks, total={}", tracks.len(), total);
        }

        if tracks.len() >= 100 {
            break;
        }
    }

    controller.scroll_to_index(0, ScrollBehavior::Instant);
    controller.tick();
    println!(
        "back to top: offset={} range={:?}",
        sim.scroll_position(),
        sim.rendered_range()
    );
}
