use crate::*;

use std::string::{String, ToString};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use trackscroll::{EngineOptions, Range, ScrollBehavior, Track};

#[derive(Clone, Debug)]
struct Card {
    id: String,
    class: String,
}

impl Card {
    fn new(id: &str, class: &str) -> Self {
        Self {
            id: id.to_string(),
            class: class.to_string(),
        }
    }
}

impl Track for Card {
    fn track_id(&self) -> &str {
        &self.id
    }

    fn size_class(&self) -> &str {
        &self.class
    }
}

fn cards(count: usize, class: &str) -> Vec<Card> {
    (0..count)
        .map(|i| Card::new(&std::format!("{class}-{i}"), class))
        .collect()
}

fn controller_with_range_log() -> (
    Controller<SimViewport, SimViewport>,
    Arc<Mutex<Vec<Range>>>,
) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink_log = Arc::clone(&log);
    let controller = Controller::new(EngineOptions::new().with_on_rendered_range_change(
        move |_, current| {
            sink_log.lock().unwrap().push(current);
        },
    ));
    (controller, log)
}

// --- Frame coalescer -----------------------------------------------------

#[test]
fn coalescer_collapses_requests_into_one_take() {
    let mut frames = FrameCoalescer::new();
    assert!(!frames.take());

    frames.request();
    frames.request();
    frames.request();
    assert!(frames.is_pending());
    assert!(frames.take());
    assert!(!frames.take());
}

// --- Controller ----------------------------------------------------------

#[test]
fn controller_runs_one_recompute_per_tick() {
    let (mut controller, log) = controller_with_range_log();
    let sim = SimViewport::new(300.0);
    sim.set_track_classes((0..20).map(|_| "card"));
    sim.set_true_size("card", 120.0);
    controller.update_tracks(&cards(20, "card"));
    controller.attach(sim.clone(), sim.clone());

    // Attach rendered the initial (unmeasured) window.
    assert_eq!(log.lock().unwrap().len(), 1);
    assert!(sim.total_content_size().is_none());

    // A burst of scroll events, then one frame.
    controller.on_scroll();
    controller.on_scroll();
    controller.on_scroll();
    assert!(controller.has_pending_work());
    assert!(controller.tick());

    // The single recompute measured the rendered cards and converged.
    assert_eq!(sim.total_content_size(), Some(2400.0));
    assert_eq!(sim.rendered_range(), Some(Range::new(0, 9)));

    // Nothing queued: the next frame is a no-op.
    assert!(!controller.tick());
}

#[test]
fn data_length_change_outranks_a_scroll_in_the_same_frame() {
    let (mut controller, _log) = controller_with_range_log();
    let sim = SimViewport::new(300.0);
    sim.set_track_classes((0..10).map(|_| "card"));
    sim.set_true_size("card", 120.0);
    controller.update_tracks(&cards(10, "card"));
    controller.attach(sim.clone(), sim.clone());
    controller.on_scroll();
    controller.tick(); // settle the initial measurement

    let generation = controller.engine().offsets_generation();

    // A plain scroll with unchanged measurements does not rebuild offsets.
    controller.on_scroll();
    controller.tick();
    assert_eq!(controller.engine().offsets_generation(), generation);

    // With a data-length change queued alongside, the tick must rebuild.
    controller.on_scroll();
    controller.on_data_length_changed();
    controller.tick();
    assert_eq!(controller.engine().offsets_generation(), generation + 1);
}

#[test]
fn track_handover_flushes_queued_signals() {
    let (mut controller, _log) = controller_with_range_log();
    let sim = SimViewport::new(300.0);
    sim.set_track_classes((0..10).map(|_| "card"));
    sim.set_true_size("card", 120.0);
    controller.update_tracks(&cards(10, "card"));
    controller.attach(sim.clone(), sim.clone());

    controller.on_scroll();
    controller.on_data_length_changed();
    // The handover recomputes immediately against current host state.
    sim.set_track_classes((0..12).map(|_| "card"));
    controller.update_tracks(&cards(12, "card"));

    assert!(!controller.has_pending_work());
    assert!(!controller.tick());
}

#[test]
fn scroll_to_index_schedules_the_follow_up_frame() {
    let (mut controller, _log) = controller_with_range_log();
    let sim = SimViewport::new(300.0);
    sim.set_track_classes((0..50).map(|_| "card"));
    sim.set_true_size("card", 120.0);
    controller.update_tracks(&cards(50, "card"));
    controller.attach(sim.clone(), sim.clone());
    controller.on_scroll();
    controller.tick(); // measurement settles

    controller.scroll_to_index(20, ScrollBehavior::Instant);
    assert_eq!(sim.scroll_position(), 2400.0);
    assert!(controller.has_pending_work());
    assert!(controller.tick());

    let range = sim.rendered_range().unwrap();
    assert!(range.contains(20));
}

#[test]
fn detach_drops_queued_work_with_the_host() {
    let (mut controller, _log) = controller_with_range_log();
    let sim = SimViewport::new(300.0);
    sim.set_track_classes((0..10).map(|_| "card"));
    sim.set_true_size("card", 120.0);
    controller.update_tracks(&cards(10, "card"));
    controller.attach(sim.clone(), sim.clone());

    controller.on_scroll();
    assert!(controller.detach().is_some());
    assert!(!controller.has_pending_work());
    assert!(!controller.tick());
}

// --- Simulated viewport --------------------------------------------------

#[test]
fn sim_measures_only_rendered_tracks() {
    let (mut controller, _log) = controller_with_range_log();
    let sim = SimViewport::new(300.0);
    // Heading tracks occur only deep in the list, outside the first window.
    let mut classes: Vec<&str> = std::vec!["card"; 30];
    classes[25] = "heading";
    sim.set_track_classes(classes.iter().copied());
    sim.set_true_size("card", 120.0);
    sim.set_true_size("heading", 40.0);

    let tracks: Vec<Card> = classes
        .iter()
        .enumerate()
        .map(|(i, class)| Card::new(&std::format!("t{i}"), class))
        .collect();
    controller.update_tracks(&tracks);
    controller.attach(sim.clone(), sim.clone());
    controller.on_scroll();
    controller.tick();

    // "heading" was never rendered, so it stays unmeasured and the total
    // stays unpublished even though every card is known.
    assert!(controller.engine().size_cache().is_measured("card"));
    assert!(!controller.engine().size_cache().is_measured("heading"));
    assert!(sim.total_content_size().is_none());

    // Scroll the heading into the rendered window; the next frames measure
    // it and the total converges.
    sim.scroll_to(120.0 * 23.0);
    controller.on_scroll();
    controller.tick();
    controller.on_scroll();
    controller.tick();
    assert_eq!(sim.total_content_size(), Some(29.0 * 120.0 + 40.0));
}

#[test]
fn sim_scrolls_are_content_relative() {
    let sim = SimViewport::new(300.0);
    sim.set_viewport_offset(80.0);
    {
        let mut host = sim.clone();
        use trackscroll::Viewport;
        host.scroll_to_offset(480.0, ScrollBehavior::Instant);
        assert_eq!(host.scroll_offset(), 400.0);
        assert_eq!(host.viewport_offset(), 80.0);
    }
    assert_eq!(sim.scroll_position(), 400.0);
}

// --- End watcher ---------------------------------------------------------

#[test]
fn end_watcher_triggers_once_per_approach() {
    let mut watcher = EndWatcher::new(0.5);

    // 9400 + 500 < 10000: not yet.
    assert!(!watcher.on_scroll(8400.0, 1000.0, 10000.0, false));
    // 9600 + 500 >= 10000: fire once.
    assert!(watcher.on_scroll(8600.0, 1000.0, 10000.0, false));
    assert!(!watcher.on_scroll(8700.0, 1000.0, 10000.0, false));

    // Scrolling back out re-arms the latch.
    assert!(!watcher.on_scroll(5000.0, 1000.0, 10000.0, false));
    assert!(watcher.on_scroll(8600.0, 1000.0, 10000.0, false));
}

#[test]
fn end_watcher_is_suppressed_while_loading() {
    let mut watcher = EndWatcher::new(0.0);

    assert!(watcher.on_scroll(9000.0, 1000.0, 10000.0, false));
    // The fetch is in flight: stay quiet even at the very end, and reset
    // the latch so the post-append position can trigger again.
    assert!(!watcher.on_scroll(9500.0, 1000.0, 10000.0, true));
    assert!(watcher.on_scroll(11000.0, 1000.0, 12000.0, false));
}

#[test]
fn end_watcher_ignores_unmeasured_totals() {
    let mut watcher = EndWatcher::new(1.0);
    assert!(!watcher.on_scroll(0.0, 1000.0, f64::INFINITY, false));
    assert!(!watcher.on_scroll(1e12, 1000.0, f64::INFINITY, false));
}
