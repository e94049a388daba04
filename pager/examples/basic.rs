// Example: a minimal host that prints what the pager asks of it.
use pager::{
    Constraints, PagerOptions, PanelContainer, PanelHost, PanelRect, Size, TouchEvent,
};

struct PrintHost;

impl PanelHost<&'static str> for PrintHost {
    fn measure(&mut self, _panel: &&'static str, constraints: Constraints) -> Size {
        constraints.max
    }

    fn position(&mut self, panel: &&'static str, rect: PanelRect) {
        println!("position {panel} at x={} w={}", rect.x, rect.width);
    }

    fn render_panel(&mut self, panel: &&'static str, time_ms: u64) {
        println!("  t={time_ms} draw {panel}");
    }

    fn draw_cached_bitmap(&mut self, panel: &&'static str, x: i64, _y: i64) {
        println!("  draw cached {panel} at x={x}");
    }

    fn enable_cache(&mut self, panel: &&'static str, enabled: bool) {
        println!("cache {panel}: {enabled}");
    }
}

fn main() {
    let mut host = PrintHost;
    let mut c = PanelContainer::with_panels(
        PagerOptions::default().with_default_panel(1),
        ["mail", "calendar", "notes"],
    );
    c.on_panel_changed(|i| println!("changed -> {i}"));
    c.layout(&mut host, Size::new(320, 480));
    println!("start on panel {}", c.current_panel());

    // Slow drag to the left, released past the halfway point.
    c.on_touch_begin(300.0, 100.0, 0, &mut host);
    for (i, x) in [260.0, 200.0, 140.0].into_iter().enumerate() {
        c.on_touch_event(TouchEvent::moved(x, 100.0, 100 * (i as u64 + 1)), &mut host);
        println!("drag offset={}", c.scroll_offset());
    }
    c.on_touch_end(140.0, 100.0, 600, &mut host);

    let mut now_ms = 600u64;
    while c.pending_panel().is_some() {
        now_ms += 16;
        c.tick(now_ms, &mut host);
        c.draw(&mut host, now_ms);
    }
    println!("settled on panel {} offset={}", c.current_panel(), c.scroll_offset());
}
