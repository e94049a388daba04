use pager::{
    DrawStrategy, PagerOptions, PanelContainer, PanelHost, Size, TouchAction, TouchEvent,
};

/// What one call to [`Controller::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameReport {
    pub time_ms: u64,
    /// Offset applied by the tick, if a transition was animating or committing.
    pub offset: Option<i64>,
    pub strategy: Option<DrawStrategy>,
    pub current: usize,
    pub pending: Option<usize>,
}

/// A framework-neutral controller that wraps a `pager::PanelContainer` together with the host
/// it lays out and draws through.
///
/// Adapters drive it by calling:
/// - `on_viewport_size` when the container is resized
/// - `touch(ev)` for every touch event, in order
/// - `frame(now_ms)` once per frame (tick, then draw)
///
/// `touch` performs the two-phase dispatch a toolkit would: events are offered to the intercept
/// path until the container claims the gesture, and delivered to the container afterwards.
#[derive(Debug)]
pub struct Controller<K, H> {
    c: PanelContainer<K>,
    host: H,
    claimed: bool,
}

impl<K, H: PanelHost<K>> Controller<K, H> {
    pub fn new(options: PagerOptions, panels: impl IntoIterator<Item = K>, host: H) -> Self {
        Self::from_parts(PanelContainer::with_panels(options, panels), host)
    }

    pub fn from_parts(container: PanelContainer<K>, host: H) -> Self {
        Self {
            c: container,
            host,
            claimed: false,
        }
    }

    pub fn container(&self) -> &PanelContainer<K> {
        &self.c
    }

    pub fn container_mut(&mut self) -> &mut PanelContainer<K> {
        &mut self.c
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (PanelContainer<K>, H) {
        (self.c, self.host)
    }

    pub fn current_panel(&self) -> usize {
        self.c.current_panel()
    }

    pub fn is_settled(&self) -> bool {
        self.c.is_settled()
    }

    /// Whether the current gesture has been claimed from the children.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn on_viewport_size(&mut self, viewport: Size) {
        self.c.layout(&mut self.host, viewport);
    }

    /// Dispatches a touch event. Returns `true` when the container consumed it; `false` means
    /// the event belongs to the child under the pointer.
    pub fn touch(&mut self, ev: TouchEvent) -> bool {
        if !self.claimed {
            let claimed = self.c.on_intercept_touch(ev, &mut self.host);
            #[cfg(feature = "tracing")]
            if claimed {
                tracing::debug!(
                    target: "pager_adapter",
                    x = ev.x,
                    time_ms = ev.time_ms,
                    "Controller: gesture claimed from children"
                );
            }
            self.claimed = claimed;
        }
        let handled = self.claimed && self.c.on_touch_event(ev, &mut self.host);
        if matches!(ev.action, TouchAction::Up | TouchAction::Cancel) {
            self.claimed = false;
        }
        handled
    }

    /// Requests a transition (see [`PanelContainer::scroll_to_panel`]).
    pub fn scroll_to_panel(&mut self, index: i64, now_ms: u64) -> bool {
        self.c.scroll_to_panel(index, now_ms, &mut self.host)
    }

    /// Advances the animation and draws the frame.
    pub fn frame(&mut self, now_ms: u64) -> FrameReport {
        let offset = self.c.tick(now_ms, &mut self.host);
        let strategy = self.c.draw(&mut self.host, now_ms);
        FrameReport {
            time_ms: now_ms,
            offset,
            strategy,
            current: self.c.current_panel(),
            pending: self.c.pending_panel(),
        }
    }

    /// Runs frames every `step_ms` starting at `start_ms` until no transition is in flight.
    ///
    /// Returns the time of the last frame.
    pub fn run_until_settled(&mut self, start_ms: u64, step_ms: u64) -> u64 {
        let step_ms = step_ms.max(1);
        let mut now_ms = start_ms;
        loop {
            let report = self.frame(now_ms);
            if report.pending.is_none() {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "pager_adapter",
                    start_ms,
                    end_ms = now_ms,
                    current = report.current,
                    "Controller: settled"
                );
                return now_ms;
            }
            now_ms = now_ms.saturating_add(step_ms);
        }
    }
}
