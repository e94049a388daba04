use crate::DrawMode;

/// What the compositor decided to paint this frame. Cheaper strategies win when correct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawStrategy {
    /// Settled view: only the current panel.
    CurrentOnly,
    /// The current panel plus the one neighbor that is sliding in.
    FlingPair,
    /// Every panel, plus the wrap target's cached bitmap when wrapping.
    FullWithWrapCache,
}

/// A single paint request produced by [`DrawCompositor::plan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOp {
    /// Draw the panel live at its laid-out position.
    Panel { index: usize },
    /// Draw the panel's cached bitmap at content-space `x`.
    CachedBitmap { index: usize, x: i64 },
}

/// Read-only view of the container state the compositor needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInput {
    pub current: usize,
    pub pending: Option<usize>,
    pub draw_mode: DrawMode,
    pub panel_count: usize,
    pub dragging: bool,
    pub scroll_offset: i64,
    pub panel_width: u32,
    /// Right edge of the last laid-out panel.
    pub content_width: i64,
}

/// Chooses a per-frame draw strategy.
///
/// The compositor is stateless: everything it needs arrives in a [`FrameInput`], and the chosen
/// panels are reported through an `emit` callback so adapters can render without allocating.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawCompositor;

impl DrawCompositor {
    pub fn new() -> Self {
        Self
    }

    /// Plans a frame. Returns `None` (and emits nothing) when there are no panels.
    ///
    /// The pair strategy is only used when the two panels cover the whole viewport; a strip
    /// dragged or left more than one panel away from `current` is repainted in full.
    pub fn plan(&self, input: &FrameInput, emit: &mut dyn FnMut(DrawOp)) -> Option<DrawStrategy> {
        let count = input.panel_count;
        if count == 0 {
            return None;
        }
        let current = input.current.min(count - 1);
        let on_grid = input.scroll_offset == current as i64 * input.panel_width as i64;

        if input.pending.is_none() && !input.dragging && on_grid {
            emit(DrawOp::Panel { index: current });
            return Some(DrawStrategy::CurrentOnly);
        }

        let pair = self
            .neighbor(input, current)
            .filter(|&op| self.pair_covers_viewport(input, current, op));
        if let Some(neighbor) = pair {
            emit(DrawOp::Panel { index: current });
            emit(neighbor);
            return Some(DrawStrategy::FlingPair);
        }

        for index in 0..count {
            emit(DrawOp::Panel { index });
        }
        if let Some(wrapped) = self.wrap_target(input, input.draw_mode) {
            emit(wrapped);
        }
        Some(DrawStrategy::FullWithWrapCache)
    }

    /// Convenience wrapper that only reports the strategy.
    pub fn strategy(&self, input: &FrameInput) -> Option<DrawStrategy> {
        self.plan(input, &mut |_| {})
    }

    fn neighbor(&self, input: &FrameInput, current: usize) -> Option<DrawOp> {
        let count = input.panel_count;
        let last = count - 1;

        if let Some(pending) = input.pending {
            if pending >= count {
                pwarn!(pending, count, "DrawCompositor: pending index out of range");
                return None;
            }
            return match input.draw_mode {
                DrawMode::LeftWrap if current == 0 && pending == last => {
                    self.wrap_target(input, DrawMode::LeftWrap)
                }
                DrawMode::RightWrap if current == last && pending == 0 => {
                    self.wrap_target(input, DrawMode::RightWrap)
                }
                _ if current.abs_diff(pending) == 1 => Some(DrawOp::Panel { index: pending }),
                _ => None,
            };
        }

        if !input.dragging {
            return None;
        }

        let base = current as i64 * input.panel_width as i64;
        let toward_lower = input.scroll_offset < base
            || (input.scroll_offset == base && current == last && current > 0);
        if toward_lower {
            if current > 0 {
                Some(DrawOp::Panel { index: current - 1 })
            } else {
                self.wrap_target(input, DrawMode::LeftWrap)
                    .filter(|_| input.draw_mode == DrawMode::LeftWrap)
            }
        } else if current < last {
            Some(DrawOp::Panel { index: current + 1 })
        } else {
            self.wrap_target(input, DrawMode::RightWrap)
                .filter(|_| input.draw_mode == DrawMode::RightWrap)
        }
    }

    /// Whether `current` plus `neighbor` fill every panel slot the viewport overlaps.
    ///
    /// Slot `-1` is the left wrap slot and slot `panel_count` the right one.
    fn pair_covers_viewport(&self, input: &FrameInput, current: usize, neighbor: DrawOp) -> bool {
        let w = input.panel_width as i64;
        if w == 0 {
            return true;
        }
        let neighbor_slot = match neighbor {
            DrawOp::Panel { index } => index as i64,
            DrawOp::CachedBitmap { x, .. } => x.div_euclid(w),
        };
        let first = input.scroll_offset.div_euclid(w);
        let last = input.scroll_offset.saturating_add(w - 1).div_euclid(w);
        (first..=last).all(|slot| slot == current as i64 || slot == neighbor_slot)
    }

    fn wrap_target(&self, input: &FrameInput, mode: DrawMode) -> Option<DrawOp> {
        match mode {
            DrawMode::Neutral => None,
            DrawMode::LeftWrap => Some(DrawOp::CachedBitmap {
                index: input.panel_count - 1,
                x: -(input.panel_width as i64),
            }),
            DrawMode::RightWrap => Some(DrawOp::CachedBitmap {
                index: 0,
                x: input.content_width,
            }),
        }
    }
}
