use crate::Easing;

/// Configuration for [`crate::PanelContainer`].
///
/// Options are fixed once the container is constructed. Out-of-range values are accepted as-is:
/// a negative `touch_fuzz` behaves like zero (any lateral motion starts a drag), and a zero
/// `fling_velocity` turns every release with some motion into a fling.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so hosts can keep it
/// in their own config files.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerOptions {
    /// Whether moving past either end wraps to the opposite end.
    pub wrap_permitted: bool,
    /// Release velocity (px/s) above which a drag pages instead of settling to the nearest panel.
    pub fling_velocity: i32,
    /// Lateral motion (px) a touch must exceed before it becomes a drag.
    pub touch_fuzz: i32,
    /// Panel shown after the first layout.
    pub default_panel: usize,
    /// Curve used by the scroll animator.
    pub easing: Easing,
    /// How far back (ms) the velocity tracker looks when a drag is released.
    pub velocity_window_ms: u64,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            wrap_permitted: true,
            fling_velocity: 1000,
            touch_fuzz: 0,
            default_panel: 0,
            easing: Easing::Decelerate,
            velocity_window_ms: 100,
        }
    }
}

impl PagerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap_permitted(mut self, wrap_permitted: bool) -> Self {
        self.wrap_permitted = wrap_permitted;
        self
    }

    pub fn with_fling_velocity(mut self, fling_velocity: i32) -> Self {
        self.fling_velocity = fling_velocity;
        self
    }

    pub fn with_touch_fuzz(mut self, touch_fuzz: i32) -> Self {
        self.touch_fuzz = touch_fuzz;
        self
    }

    pub fn with_default_panel(mut self, default_panel: usize) -> Self {
        self.default_panel = default_panel;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_velocity_window_ms(mut self, window_ms: u64) -> Self {
        self.velocity_window_ms = window_ms;
        self
    }
}
