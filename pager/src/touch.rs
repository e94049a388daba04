use crate::velocity::VelocityTracker;
use crate::{PagerOptions, TouchAction, TouchEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchMode {
    #[default]
    Idle,
    Dragging,
}

/// A change the touch machine asks the container to make.
///
/// The machine never mutates paging state itself; the container applies requests in the order
/// they are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchRequest {
    /// A touch landed while a scroll was animating.
    AbortScroll,
    /// A drag started; panels should keep bitmap caches for partial compositing.
    EnableCache,
    /// Scroll by `dx` (positive moves toward higher panels), subject to edge clamping.
    DragBy { dx: i64 },
    /// A fling selected a neighbor panel.
    ScrollToPanel(i64),
    /// Settle to whichever panel is nearest to the current scroll position.
    SettleNearest,
}

/// Read-only container state the touch machine bases its decisions on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerView {
    pub current: usize,
    pub panel_count: usize,
    pub animating: bool,
}

#[derive(Clone, Debug)]
struct TouchSession {
    last_x: f32,
    tracker: VelocityTracker,
}

/// Classifies a touch stream into taps, drags and flings.
///
/// Hosts with two-phase dispatch call [`Self::on_intercept`] while events are on their way to
/// a child, and [`Self::on_touch`] for events the container handles itself. Once `on_intercept`
/// returns `true`, the same event and the rest of the gesture must be delivered to `on_touch`.
/// A `Down` may be seen by both entry points; handling it twice is harmless.
#[derive(Clone, Debug)]
pub struct TouchMachine {
    mode: TouchMode,
    session: Option<TouchSession>,
    touch_fuzz: i32,
    fling_velocity: i32,
    velocity_window_ms: u64,
}

impl TouchMachine {
    pub fn new(options: &PagerOptions) -> Self {
        Self {
            mode: TouchMode::Idle,
            session: None,
            touch_fuzz: options.touch_fuzz,
            fling_velocity: options.fling_velocity,
            velocity_window_ms: options.velocity_window_ms,
        }
    }

    pub fn mode(&self) -> TouchMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == TouchMode::Dragging
    }

    /// Whether a touch is currently down.
    pub fn in_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn last_x(&self) -> Option<f32> {
        self.session.as_ref().map(|s| s.last_x)
    }

    /// Current velocity estimate in px/s (0 outside a session).
    pub fn velocity(&self) -> i32 {
        self.session.as_ref().map_or(0, |s| s.tracker.velocity())
    }

    /// Decides whether the container claims `ev` from its children.
    pub fn on_intercept(
        &mut self,
        ev: &TouchEvent,
        view: &PagerView,
        emit: &mut dyn FnMut(TouchRequest),
    ) -> bool {
        if view.panel_count == 0 {
            return false;
        }
        if self.is_dragging() {
            return true;
        }

        match ev.action {
            TouchAction::Down => self.begin(ev, view, emit),
            TouchAction::Move => {
                let Some(session) = &self.session else {
                    self.begin(ev, view, emit);
                    return false;
                };
                if self.exceeds_fuzz(session.last_x, ev.x) {
                    self.start_drag(emit);
                }
            }
            TouchAction::Up | TouchAction::Cancel => self.end(),
        }

        self.is_dragging()
    }

    /// Handles an event delivered to the container. Returns `true` when the event was consumed.
    pub fn on_touch(
        &mut self,
        ev: &TouchEvent,
        view: &PagerView,
        emit: &mut dyn FnMut(TouchRequest),
    ) -> bool {
        if view.panel_count == 0 {
            return false;
        }

        if let Some(session) = &mut self.session {
            session.tracker.add(ev.x, ev.time_ms);
        }

        match ev.action {
            TouchAction::Down => self.begin(ev, view, emit),
            TouchAction::Move => {
                let Some(session) = &self.session else {
                    self.begin(ev, view, emit);
                    return true;
                };
                if !self.is_dragging() && self.exceeds_fuzz(session.last_x, ev.x) {
                    self.start_drag(emit);
                }
                if self.is_dragging() {
                    self.drag_move(ev.x, emit);
                }
            }
            TouchAction::Up => {
                if self.is_dragging() {
                    self.release(view, emit);
                }
                self.end();
            }
            TouchAction::Cancel => self.end(),
        }
        true
    }

    fn begin(&mut self, ev: &TouchEvent, view: &PagerView, emit: &mut dyn FnMut(TouchRequest)) {
        if view.animating {
            emit(TouchRequest::AbortScroll);
        }
        let mut tracker = VelocityTracker::new(self.velocity_window_ms);
        tracker.add(ev.x, ev.time_ms);
        self.session = Some(TouchSession {
            last_x: ev.x,
            tracker,
        });
        self.mode = TouchMode::Idle;
    }

    fn exceeds_fuzz(&self, last_x: f32, x: f32) -> bool {
        let d = x - last_x;
        let lateral = if d < 0.0 { -d } else { d };
        (lateral as i32) > self.touch_fuzz
    }

    fn start_drag(&mut self, emit: &mut dyn FnMut(TouchRequest)) {
        pdebug!(touch_fuzz = self.touch_fuzz, "TouchMachine: drag started");
        self.mode = TouchMode::Dragging;
        emit(TouchRequest::EnableCache);
    }

    fn drag_move(&mut self, x: f32, emit: &mut dyn FnMut(TouchRequest)) {
        let Some(session) = &mut self.session else {
            return;
        };
        let dx = (session.last_x - x) as i64;
        session.last_x = x;
        if dx != 0 {
            emit(TouchRequest::DragBy { dx });
        }
    }

    fn release(&mut self, view: &PagerView, emit: &mut dyn FnMut(TouchRequest)) {
        let v = self.velocity();
        let fv = self.fling_velocity;
        let current = view.current;
        ptrace!(velocity = v, threshold = fv, current, "TouchMachine::release");

        let request = if v > fv && current > 0 {
            TouchRequest::ScrollToPanel(current as i64 - 1)
        } else if v < fv.saturating_neg() && current + 1 < view.panel_count {
            TouchRequest::ScrollToPanel(current as i64 + 1)
        } else {
            TouchRequest::SettleNearest
        };
        emit(request);
    }

    fn end(&mut self) {
        self.session = None;
        self.mode = TouchMode::Idle;
    }
}
