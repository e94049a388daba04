use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use pager::{Constraints, PanelHost, PanelKey, PanelRect, Size};

/// One draw request received by a [`RecordingHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCall {
    Live { panel: PanelKey },
    Cached { panel: PanelKey, x: i64, y: i64 },
}

/// A headless [`PanelHost`] that records what the container asked of it.
///
/// Panels measure to a fixed size (or fill the constraints when none is set). The draw log holds
/// the calls of the most recent frame: a live render with a new timestamp starts a new log.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    panel_size: Option<Size>,
    hidden: BTreeSet<PanelKey>,
    cached: BTreeSet<PanelKey>,
    focused: Option<usize>,
    positions: BTreeMap<PanelKey, PanelRect>,
    draws: Vec<DrawCall>,
    frame_ms: Option<u64>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panel_size(mut self, size: Size) -> Self {
        self.panel_size = Some(size);
        self
    }

    pub fn set_hidden(&mut self, panel: PanelKey, hidden: bool) {
        if hidden {
            self.hidden.insert(panel);
        } else {
            self.hidden.remove(&panel);
        }
    }

    pub fn set_focused(&mut self, index: Option<usize>) {
        self.focused = index;
    }

    pub fn position_of(&self, panel: PanelKey) -> Option<PanelRect> {
        self.positions.get(&panel).copied()
    }

    pub fn is_cached(&self, panel: PanelKey) -> bool {
        self.cached.contains(&panel)
    }

    pub fn cached_count(&self) -> usize {
        self.cached.len()
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Keys drawn live in the last frame, in draw order.
    pub fn live_panels(&self) -> impl Iterator<Item = PanelKey> + '_ {
        self.draws.iter().filter_map(|d| match *d {
            DrawCall::Live { panel } => Some(panel),
            DrawCall::Cached { .. } => None,
        })
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
        self.frame_ms = None;
    }
}

impl PanelHost<PanelKey> for RecordingHost {
    fn measure(&mut self, _panel: &PanelKey, constraints: Constraints) -> Size {
        self.panel_size.unwrap_or(constraints.max)
    }

    fn is_hidden(&self, panel: &PanelKey) -> bool {
        self.hidden.contains(panel)
    }

    fn position(&mut self, panel: &PanelKey, rect: PanelRect) {
        self.positions.insert(*panel, rect);
    }

    fn render_panel(&mut self, panel: &PanelKey, time_ms: u64) {
        if self.frame_ms != Some(time_ms) {
            self.draws.clear();
            self.frame_ms = Some(time_ms);
        }
        self.draws.push(DrawCall::Live { panel: *panel });
    }

    fn draw_cached_bitmap(&mut self, panel: &PanelKey, x: i64, y: i64) {
        self.draws.push(DrawCall::Cached { panel: *panel, x, y });
    }

    fn enable_cache(&mut self, panel: &PanelKey, enabled: bool) {
        if enabled {
            self.cached.insert(*panel);
        } else {
            self.cached.remove(panel);
        }
    }

    fn focused_panel(&self) -> Option<usize> {
        self.focused
    }

    fn clear_focus(&mut self, _panel: &PanelKey) {
        self.focused = None;
    }
}
