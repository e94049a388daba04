use crate::*;

use pager::{DrawStrategy, PagerOptions, Size, TouchAction};

fn controller(options: PagerOptions) -> Controller<u64, RecordingHost> {
    let mut c = Controller::new(options, [1u64, 2, 3], RecordingHost::new());
    c.on_viewport_size(Size::new(100, 50));
    c
}

#[test]
fn fast_swipe_pages_forward_through_two_phase_dispatch() {
    let mut c = controller(PagerOptions::default());
    let swipe = Swipe::new(250.0, 150.0, 0, 50).with_steps(5);

    let mut consumed = std::vec::Vec::new();
    for ev in swipe.events() {
        consumed.push((ev.action, c.touch(ev)));
    }
    assert_eq!(consumed[0], (TouchAction::Down, false));
    assert!(consumed[1..].iter().all(|&(_, handled)| handled));
    assert!(!c.is_claimed());

    let end = c.run_until_settled(swipe.end_ms(), 16);
    assert!(end >= swipe.end_ms());
    assert_eq!(c.current_panel(), 1);
    assert!(c.is_settled());
}

#[test]
fn tap_stays_with_the_child() {
    let mut c = controller(PagerOptions::default().with_touch_fuzz(8));
    let tap = Swipe::new(40.0, 43.0, 0, 30).with_steps(2);
    for ev in tap.events() {
        assert!(!c.touch(ev));
    }
    assert!(!c.is_claimed());
    assert!(c.container().transition().is_none());
    assert_eq!(c.host().cached_count(), 0);
}

#[test]
fn frames_report_strategy_and_draw_calls() {
    let mut c = controller(PagerOptions::default());
    let report = c.frame(0);
    assert_eq!(report.strategy, Some(DrawStrategy::CurrentOnly));
    assert_eq!(report.offset, None);
    assert_eq!(c.host().draws(), [DrawCall::Live { panel: 1 }]);

    assert!(c.scroll_to_panel(1, 0));
    assert_eq!(c.host().cached_count(), 3);
    let report = c.frame(16);
    assert_eq!(report.strategy, Some(DrawStrategy::FlingPair));
    assert_eq!(report.pending, Some(1));
    assert!(report.offset.is_some());
    assert_eq!(c.host().live_panels().collect::<std::vec::Vec<_>>(), [1, 2]);

    let end = c.run_until_settled(32, 16);
    let report = c.frame(end + 16);
    assert_eq!(report.current, 1);
    assert_eq!(report.strategy, Some(DrawStrategy::CurrentOnly));
    assert_eq!(c.host().draws(), [DrawCall::Live { panel: 2 }]);
    assert_eq!(c.host().cached_count(), 0);
}

#[test]
fn wrapped_neighbor_is_drawn_from_its_cache() {
    let mut c = controller(PagerOptions::default());
    assert!(c.scroll_to_panel(-1, 0));
    c.frame(20);
    assert_eq!(
        c.host().draws(),
        [
            DrawCall::Live { panel: 1 },
            DrawCall::Cached {
                panel: 3,
                x: -100,
                y: 0
            }
        ]
    );
    c.run_until_settled(40, 16);
    assert_eq!(c.current_panel(), 2);
    assert_eq!(c.container().scroll_offset(), 200);
}

#[test]
fn hidden_panels_are_not_positioned() {
    let mut host = RecordingHost::new().with_panel_size(Size::new(80, 40));
    host.set_hidden(2, true);
    let mut c = Controller::new(PagerOptions::default(), [1u64, 2, 3], host);
    c.on_viewport_size(Size::new(80, 40));

    assert_eq!(c.host().position_of(1).map(|r| r.x), Some(0));
    assert_eq!(c.host().position_of(2), None);
    assert_eq!(c.host().position_of(3).map(|r| r.x), Some(80));
    assert_eq!(c.container().content_width(), 160);
}

#[test]
fn leaving_the_focused_panel_releases_focus() {
    let mut c = controller(PagerOptions::default());
    c.host_mut().set_focused(Some(0));
    c.scroll_to_panel(1, 0);
    assert_eq!(pager::PanelHost::focused_panel(c.host()), None);
}

#[test]
fn title_strip_follows_the_pending_panel() {
    let mut c = controller(PagerOptions::default());
    let titles = TitleStrip::new(["Inbox", "Today", "Later"]);
    titles.attach(c.container_mut());
    assert_eq!(titles.displayed_title(), Some("Inbox"));
    assert_eq!(titles.displayed_neighbors(), (None, Some("Today")));

    c.scroll_to_panel(2, 0);
    assert_eq!(titles.displayed(), 2);
    assert_eq!(titles.displayed_neighbors(), (Some("Today"), None));

    c.run_until_settled(0, 16);
    assert_eq!(titles.displayed(), 2);
    assert_eq!(titles.neighbors(1), (Some("Inbox"), Some("Later")));
    assert_eq!(titles.neighbors(7), (None, None));
}

#[test]
fn swipe_events_end_on_target() {
    let swipe = Swipe::new(0.0, 90.0, 100, 60).with_steps(3).with_y(5.0);
    let events = swipe.events();
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].action, TouchAction::Down);
    assert_eq!(events[3].x, 90.0);
    assert_eq!(events[3].time_ms, 160);
    assert_eq!(events[4].action, TouchAction::Up);
    assert_eq!(events[4].time_ms, swipe.end_ms());
    assert!(events.iter().all(|e| e.y == 5.0));
    assert_eq!(swipe.velocity(), 1500.0);
}
