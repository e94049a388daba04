use pager::{PagerOptions, Size};
use pager_adapter::{Controller, RecordingHost, Swipe, TitleStrip};

fn main() {
    // Example: a headless controller with a title bar, driven by synthetic swipes.
    //
    // An adapter would:
    // - forward every touch event to `touch(ev)`
    // - call `frame(now_ms)` from its frame loop
    // - read the title strip to render "previous / next" labels
    let mut c = Controller::new(
        PagerOptions::default().with_wrap_permitted(false),
        [1u64, 2, 3, 4],
        RecordingHost::new(),
    );
    c.on_viewport_size(Size::new(360, 640));

    let titles = TitleStrip::new(["Home", "Search", "Library", "Settings"]);
    titles.attach(c.container_mut());

    let mut now_ms = 0u64;
    for (from_x, to_x) in [(300.0, 100.0), (300.0, 120.0), (80.0, 330.0)] {
        let swipe = Swipe::new(from_x, to_x, now_ms, 120);
        for ev in swipe.events() {
            c.touch(ev);
        }
        println!(
            "swipe {from_x}->{to_x} ({} px/s): heading to {:?}",
            swipe.velocity(),
            titles.displayed_title()
        );

        now_ms = c.run_until_settled(swipe.end_ms(), 16);
        let (prev, next) = titles.displayed_neighbors();
        println!(
            "  t={now_ms} panel={} [{:?} | {:?}] draws={:?}",
            c.current_panel(),
            prev,
            next,
            c.host().draws()
        );
        now_ms += 500;
    }
}
