// Example: wrapping past either end draws the opposite panel from its cache.
use pager::{DrawOp, PagerOptions, PanelContainer, PanelHost, Size};

struct NullHost;

impl PanelHost<u64> for NullHost {
    fn measure(&mut self, _panel: &u64, constraints: pager::Constraints) -> Size {
        constraints.max
    }
    fn position(&mut self, _panel: &u64, _rect: pager::PanelRect) {}
    fn render_panel(&mut self, _panel: &u64, _time_ms: u64) {}
    fn draw_cached_bitmap(&mut self, _panel: &u64, _x: i64, _y: i64) {}
    fn enable_cache(&mut self, _panel: &u64, _enabled: bool) {}
}

fn main() {
    let mut host = NullHost;
    let mut c = PanelContainer::with_panels(PagerOptions::default(), 0..4u64);
    c.layout(&mut host, Size::new(100, 100));

    for target in [-1i64, 4] {
        c.scroll_to_panel(target, 0, &mut host);
        println!("request {target}: {:?}", c.transition());

        let mut now_ms = 0u64;
        while c.pending_panel().is_some() {
            now_ms += 40;
            c.tick(now_ms, &mut host);
            let mut ops = Vec::new();
            let strategy = c.plan_frame(&mut |op: DrawOp| ops.push(op));
            println!("  t={now_ms} offset={} {strategy:?} {ops:?}", c.scroll_offset());
        }
        println!("now on panel {}", c.current_panel());
    }
}
