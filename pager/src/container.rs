use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::compositor::{DrawCompositor, DrawOp, DrawStrategy, FrameInput};
use crate::touch::{PagerView, TouchMachine, TouchRequest};
use crate::{
    Constraints, DrawMode, FocusDirection, ListenerId, PagerOptions, PanelHost, PanelKey,
    PanelRect, ScrollAnimator, Size, TouchEvent, Transition, WrapDirection,
};

/// A callback fired with a panel index.
pub type PanelCallback = Arc<dyn Fn(usize) + Send + Sync>;

struct Listener {
    id: ListenerId,
    on_panel_pending: Option<PanelCallback>,
    on_panel_changed: Option<PanelCallback>,
}

/// A horizontally paged container.
///
/// The container owns all paging state: the committed panel, the pending panel, the scroll
/// offset, the draw mode and the cache flag. The host layout system owns the panels themselves;
/// the container only keeps their keys and reaches the host through a [`PanelHost`] passed into
/// each operation.
///
/// Adapters drive it with two inputs:
/// - touch events (`on_intercept_touch` / `on_touch_*`), applied synchronously
/// - `tick(now_ms)` once per frame, followed by `draw`
///
/// All timestamps (touch events and ticks) must come from the same millisecond clock.
pub struct PanelContainer<K = PanelKey> {
    options: PagerOptions,
    panels: Vec<K>,
    current: usize,
    pending: Option<usize>,
    scroll_offset: i64,
    draw_mode: DrawMode,
    transition: Option<Transition>,
    cache_enabled: bool,

    viewport: Size,
    content_width: i64,
    first_layout: bool,

    animator: ScrollAnimator,
    touch: TouchMachine,
    compositor: DrawCompositor,

    listeners: Vec<Listener>,
    next_listener_id: u64,
}

impl<K> PanelContainer<K> {
    pub fn new(options: PagerOptions) -> Self {
        pdebug!(
            wrap_permitted = options.wrap_permitted,
            fling_velocity = options.fling_velocity,
            touch_fuzz = options.touch_fuzz,
            default_panel = options.default_panel,
            "PanelContainer::new"
        );
        Self {
            current: 0,
            pending: None,
            scroll_offset: 0,
            draw_mode: DrawMode::Neutral,
            transition: None,
            cache_enabled: false,
            viewport: Size::default(),
            content_width: 0,
            first_layout: true,
            animator: ScrollAnimator::new(options.easing),
            touch: TouchMachine::new(&options),
            compositor: DrawCompositor::new(),
            panels: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            options,
        }
    }

    /// Creates a container over `panels`, starting on `options.default_panel` (clamped).
    pub fn with_panels(options: PagerOptions, panels: impl IntoIterator<Item = K>) -> Self {
        let mut c = Self::new(options);
        c.panels.extend(panels);
        c.apply_default_panel();
        c
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn panels(&self) -> &[K] {
        &self.panels
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// The committed panel (0 while there are no panels).
    pub fn current_panel(&self) -> usize {
        self.current
    }

    /// The panel a transition is heading to, if one is in flight.
    pub fn pending_panel(&self) -> Option<usize> {
        self.pending
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Width of one page; offsets are multiples of this when settled.
    pub fn panel_width(&self) -> u32 {
        self.viewport.width
    }

    /// Right edge of the last laid-out panel.
    pub fn content_width(&self) -> i64 {
        self.content_width
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_finished()
    }

    pub fn is_dragging(&self) -> bool {
        self.touch.is_dragging()
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn touch(&self) -> &TouchMachine {
        &self.touch
    }

    /// `true` when no transition is in flight and the offset sits exactly on the current panel.
    pub fn is_settled(&self) -> bool {
        self.pending.is_none() && self.scroll_offset == self.settled_offset(self.current)
    }

    /// The panel that should take focus: the pending one while a transition runs.
    pub fn focus_target(&self) -> Option<usize> {
        if self.panels.is_empty() {
            return None;
        }
        Some(self.pending.unwrap_or(self.current))
    }

    pub fn view(&self) -> PagerView {
        PagerView {
            current: self.current,
            panel_count: self.panels.len(),
            animating: self.is_animating(),
        }
    }

    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            current: self.current,
            pending: self.pending,
            draw_mode: self.draw_mode,
            panel_count: self.panels.len(),
            dragging: self.touch.is_dragging(),
            scroll_offset: self.scroll_offset,
            panel_width: self.panel_width(),
            content_width: self.content_width,
        }
    }

    /// Registers a listener pair. Both callbacks run synchronously on the calling thread.
    pub fn add_listener(
        &mut self,
        on_panel_pending: impl Fn(usize) + Send + Sync + 'static,
        on_panel_changed: impl Fn(usize) + Send + Sync + 'static,
    ) -> ListenerId {
        self.push_listener(
            Some(Arc::new(on_panel_pending)),
            Some(Arc::new(on_panel_changed)),
        )
    }

    pub fn on_panel_pending(&mut self, f: impl Fn(usize) + Send + Sync + 'static) -> ListenerId {
        self.push_listener(Some(Arc::new(f)), None)
    }

    pub fn on_panel_changed(&mut self, f: impl Fn(usize) + Send + Sync + 'static) -> ListenerId {
        self.push_listener(None, Some(Arc::new(f)))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    fn push_listener(
        &mut self,
        on_panel_pending: Option<PanelCallback>,
        on_panel_changed: Option<PanelCallback>,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        self.listeners.push(Listener {
            id,
            on_panel_pending,
            on_panel_changed,
        });
        id
    }

    fn notify_pending(&self, index: usize) {
        for l in &self.listeners {
            if let Some(cb) = &l.on_panel_pending {
                cb(index);
            }
        }
    }

    fn notify_changed(&self, index: usize) {
        for l in &self.listeners {
            if let Some(cb) = &l.on_panel_changed {
                cb(index);
            }
        }
    }

    /// Appends a panel. Call `layout` afterwards to position it.
    pub fn push_panel(&mut self, panel: K) {
        self.panels.push(panel);
        self.clamp_current();
    }

    /// Replaces the panel list, dropping any transition in flight.
    pub fn set_panels(
        &mut self,
        panels: impl IntoIterator<Item = K>,
        host: &mut impl PanelHost<K>,
    ) {
        self.set_cache(false, host);
        self.animator.abort();
        self.pending = None;
        self.transition = None;
        self.draw_mode = DrawMode::Neutral;

        self.panels.clear();
        self.panels.extend(panels);
        self.clamp_current();
        self.scroll_offset = self.settled_offset(self.current);
        pdebug!(count = self.panels.len(), current = self.current, "set_panels");
    }

    fn clamp_current(&mut self) {
        let count = self.panels.len();
        if count > 0 && self.current >= count {
            pwarn!(
                current = self.current,
                count,
                "PanelContainer: current panel out of range, clamping"
            );
            self.current = count - 1;
        }
    }

    fn apply_default_panel(&mut self) {
        let count = self.panels.len();
        if count == 0 {
            return;
        }
        if self.options.default_panel >= count {
            pwarn!(
                default_panel = self.options.default_panel,
                count,
                "default_panel out of range, clamping"
            );
        }
        self.current = self.options.default_panel.min(count - 1);
    }

    fn settled_offset(&self, index: usize) -> i64 {
        (index as i64).saturating_mul(self.panel_width() as i64)
    }

    /// Largest in-strip scroll offset (the last panel flush with the viewport).
    fn max_scroll(&self) -> i64 {
        self.content_width
            .saturating_sub(self.panel_width() as i64)
            .max(0)
    }

    /// Measures all panels and positions the visible ones left to right from x = 0.
    ///
    /// The first layout with panels present jumps to `options.default_panel`.
    pub fn layout(&mut self, host: &mut impl PanelHost<K>, viewport: Size) {
        self.viewport = viewport;
        let constraints = Constraints { max: viewport };

        let mut left = 0i64;
        for panel in &self.panels {
            let size = host.measure(panel, constraints);
            if host.is_hidden(panel) {
                continue;
            }
            host.position(
                panel,
                PanelRect {
                    x: left,
                    y: 0,
                    width: size.width,
                    height: size.height,
                },
            );
            left = left.saturating_add(size.width as i64);
        }
        self.content_width = left;
        ptrace!(
            width = viewport.width,
            height = viewport.height,
            content_width = left,
            "layout"
        );

        if self.panels.is_empty() {
            return;
        }
        if self.first_layout {
            self.first_layout = false;
            self.apply_default_panel();
            self.scroll_offset = self.settled_offset(self.current);
        } else if self.pending.is_none() && !self.touch.is_dragging() {
            self.scroll_offset = self.settled_offset(self.current);
        }
    }

    /// Maps a requested index into range, wrapping or clamping per the options.
    pub fn resolve_index(&self, index: i64) -> (usize, WrapDirection) {
        let count = self.panels.len();
        if count == 0 {
            return (0, WrapDirection::None);
        }
        let last = count - 1;
        let wrap = self.options.wrap_permitted;
        if index < 0 {
            if wrap {
                (last, WrapDirection::Left)
            } else {
                (0, WrapDirection::None)
            }
        } else if index as u64 > last as u64 {
            if wrap {
                (0, WrapDirection::Right)
            } else {
                (last, WrapDirection::None)
            }
        } else {
            (index as usize, WrapDirection::None)
        }
    }

    /// The panel whose half-width boundary the current offset has crossed.
    ///
    /// Returns `-1` when the strip is pulled past the first panel's midpoint and `panel_count`
    /// when pushed past the last panel's right edge; `scroll_to_panel` turns those into wraps.
    pub fn nearest_panel(&self) -> i64 {
        let w = self.panel_width() as i64;
        if w == 0 {
            return self.current as i64;
        }
        let mid = self.scroll_offset.saturating_add(w / 2);
        mid.div_euclid(w).clamp(-1, self.panels.len() as i64)
    }

    /// Starts a transition to `index`.
    ///
    /// Requests made while a scroll is animating are dropped. Out-of-range indexes wrap to the
    /// opposite end when wrapping is permitted and clamp otherwise. Returns `true` when a
    /// transition was started.
    pub fn scroll_to_panel(
        &mut self,
        index: i64,
        now_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        if self.panels.is_empty() {
            return false;
        }
        if self.is_animating() || self.pending.is_some() {
            pdebug!(
                index,
                pending = ?self.pending,
                "scroll_to_panel dropped: transition in flight"
            );
            return false;
        }

        let (resolved, wrap) = self.resolve_index(index);
        let settled = self.settled_offset(resolved);
        let unchanged = resolved == self.current && wrap == WrapDirection::None;
        if unchanged && self.scroll_offset == settled {
            return false;
        }

        self.set_cache(true, host);
        self.release_focus(resolved, host);

        let target = match wrap {
            WrapDirection::None => settled,
            WrapDirection::Left => -(self.panel_width() as i64),
            WrapDirection::Right => self.content_width,
        };
        self.draw_mode = match wrap {
            WrapDirection::None => self.overscroll_mode(self.scroll_offset),
            wrap => wrap.into(),
        };

        let from = self.scroll_offset;
        self.animator.start_scroll(from, target.saturating_sub(from), now_ms);
        self.pending = Some(resolved);
        self.transition = Some(Transition {
            from_index: self.current,
            to_index: resolved,
            wrap,
            target_offset: target,
        });
        pdebug!(
            requested = index,
            from = self.current,
            to = resolved,
            ?wrap,
            from_offset = from,
            target_offset = target,
            "transition started"
        );
        self.notify_pending(resolved);

        if self.animator.is_finished() {
            self.finish_transition(host);
        }
        true
    }

    /// Advances the scroll animation. Call once per frame before `draw`.
    ///
    /// Returns the applied offset while a transition is animating or committing, and `None` when
    /// there is nothing to do.
    pub fn tick(&mut self, now_ms: u64, host: &mut impl PanelHost<K>) -> Option<i64> {
        if self.animator.is_finished() {
            if self.pending.is_some() {
                self.finish_transition(host);
                return Some(self.scroll_offset);
            }
            return None;
        }

        let sample = self.animator.tick(now_ms);
        self.scroll_offset = sample.offset;
        if sample.finished {
            self.finish_transition(host);
        }
        Some(self.scroll_offset)
    }

    fn finish_transition(&mut self, host: &mut impl PanelHost<K>) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.animator.abort();
        self.transition = None;
        self.current = pending.min(self.panels.len().saturating_sub(1));
        self.draw_mode = DrawMode::Neutral;
        self.set_cache(false, host);

        let settled = self.settled_offset(self.current);
        if self.scroll_offset != settled {
            ptrace!(from = self.scroll_offset, to = settled, "snap to settled offset");
            self.scroll_offset = settled;
        }
        pdebug!(current = self.current, "transition committed");
        self.notify_changed(self.current);
    }

    /// Stops the running scroll and commits its pending panel right away.
    pub fn abort_scroll(&mut self, host: &mut impl PanelHost<K>) {
        if self.is_animating() {
            self.animator.abort();
            self.scroll_offset = self.animator.offset();
        }
        self.finish_transition(host);
    }

    fn overscroll_mode(&self, offset: i64) -> DrawMode {
        if offset < 0 {
            DrawMode::LeftWrap
        } else if offset > self.max_scroll() {
            DrawMode::RightWrap
        } else {
            DrawMode::Neutral
        }
    }

    fn set_cache(&mut self, enabled: bool, host: &mut impl PanelHost<K>) {
        if self.cache_enabled == enabled {
            return;
        }
        self.cache_enabled = enabled;
        for panel in &self.panels {
            host.enable_cache(panel, enabled);
        }
    }

    fn release_focus(&self, target: usize, host: &mut impl PanelHost<K>) {
        if target == self.current {
            return;
        }
        if host.focused_panel() == Some(self.current) {
            if let Some(panel) = self.panels.get(self.current) {
                host.clear_focus(panel);
            }
        }
    }

    /// Scrolls by a drag delta, clamped at the strip edges.
    ///
    /// With wrapping permitted, the strip may be pulled up to one panel width past either end
    /// to reveal the wrap target.
    fn apply_drag(&mut self, dx: i64, host: &mut impl PanelHost<K>) {
        if self.pending.is_some() {
            self.abort_scroll(host);
        }

        let w = self.panel_width() as i64;
        let sx = self.scroll_offset;
        let wrap = self.options.wrap_permitted;
        let next = if dx < 0 {
            let floor = if wrap { -w } else { 0 };
            sx.saturating_add(dx).max(floor.min(sx))
        } else {
            let max = self.max_scroll();
            let ceil = if wrap { max.saturating_add(w) } else { max };
            sx.saturating_add(dx).min(ceil.max(sx))
        };

        self.scroll_offset = next;
        self.draw_mode = self.overscroll_mode(next);
        ptrace!(dx, from = sx, to = next, draw_mode = ?self.draw_mode, "drag");
    }

    fn apply_touch_request(
        &mut self,
        request: TouchRequest,
        now_ms: u64,
        host: &mut impl PanelHost<K>,
    ) {
        match request {
            TouchRequest::AbortScroll => self.abort_scroll(host),
            TouchRequest::EnableCache => self.set_cache(true, host),
            TouchRequest::DragBy { dx } => self.apply_drag(dx, host),
            TouchRequest::ScrollToPanel(index) => {
                self.scroll_to_panel(index, now_ms, host);
            }
            TouchRequest::SettleNearest => {
                let target = self.nearest_panel();
                self.scroll_to_panel(target, now_ms, host);
            }
        }
    }

    fn dispatch_touch(
        &mut self,
        ev: &TouchEvent,
        intercept: bool,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        let view = self.view();
        let mut requests = Vec::new();
        let handled = if intercept {
            self.touch.on_intercept(ev, &view, &mut |r| requests.push(r))
        } else {
            self.touch.on_touch(ev, &view, &mut |r| requests.push(r))
        };
        for request in requests {
            self.apply_touch_request(request, ev.time_ms, host);
        }
        handled
    }

    /// Asks whether the container claims `ev` from its children.
    ///
    /// When this returns `true`, deliver `ev` and the rest of the gesture to
    /// [`Self::on_touch_event`].
    pub fn on_intercept_touch(&mut self, ev: TouchEvent, host: &mut impl PanelHost<K>) -> bool {
        self.dispatch_touch(&ev, true, host)
    }

    /// Handles an event delivered to the container. Returns `true` when consumed.
    pub fn on_touch_event(&mut self, ev: TouchEvent, host: &mut impl PanelHost<K>) -> bool {
        self.dispatch_touch(&ev, false, host)
    }

    pub fn on_touch_begin(
        &mut self,
        x: f32,
        y: f32,
        time_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        self.on_touch_event(TouchEvent::down(x, y, time_ms), host)
    }

    pub fn on_touch_move(
        &mut self,
        x: f32,
        y: f32,
        time_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        self.on_touch_event(TouchEvent::moved(x, y, time_ms), host)
    }

    pub fn on_touch_end(
        &mut self,
        x: f32,
        y: f32,
        time_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        self.on_touch_event(TouchEvent::up(x, y, time_ms), host)
    }

    pub fn on_touch_cancel(
        &mut self,
        x: f32,
        y: f32,
        time_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        self.on_touch_event(TouchEvent::cancel(x, y, time_ms), host)
    }

    /// A descendant of panel `index` asked to be brought on screen (e.g. it took focus).
    ///
    /// Returns `true` when the container handled the request by scrolling.
    pub fn request_child_visible(
        &mut self,
        index: usize,
        now_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        if index >= self.panels.len() {
            return false;
        }
        if index != self.current || self.is_animating() {
            self.scroll_to_panel(index as i64, now_ms, host);
            return true;
        }
        false
    }

    /// Moves to the adjacent panel when focus navigation runs off the edge of the current one.
    pub fn dispatch_unhandled_move(
        &mut self,
        direction: FocusDirection,
        now_ms: u64,
        host: &mut impl PanelHost<K>,
    ) -> bool {
        let target = match direction {
            FocusDirection::Left if self.current > 0 => self.current - 1,
            FocusDirection::Right if self.current + 1 < self.panels.len() => self.current + 1,
            _ => return false,
        };
        self.scroll_to_panel(target as i64, now_ms, host);
        true
    }

    /// Plans the frame without drawing, reporting each paint request through `emit`.
    pub fn plan_frame(&self, emit: &mut dyn FnMut(DrawOp)) -> Option<DrawStrategy> {
        self.compositor.plan(&self.frame_input(), emit)
    }

    /// Draws the frame through the host. Call after `tick`.
    pub fn draw(&self, host: &mut impl PanelHost<K>, time_ms: u64) -> Option<DrawStrategy> {
        let panels = &self.panels;
        self.compositor.plan(&self.frame_input(), &mut |op| match op {
            DrawOp::Panel { index } => host.render_panel(&panels[index], time_ms),
            DrawOp::CachedBitmap { index, x } => host.draw_cached_bitmap(&panels[index], x, 0),
        })
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for PanelContainer<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanelContainer")
            .field("options", &self.options)
            .field("panels", &self.panels)
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("scroll_offset", &self.scroll_offset)
            .field("draw_mode", &self.draw_mode)
            .field("transition", &self.transition)
            .field("cache_enabled", &self.cache_enabled)
            .field("viewport", &self.viewport)
            .field("content_width", &self.content_width)
            .field("animator", &self.animator)
            .field("touch", &self.touch)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
