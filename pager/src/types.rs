/// Default panel handle type. Hosts that already have stable ids can use their own `K`.
pub type PanelKey = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Measurement constraints handed to [`crate::PanelHost::measure`].
///
/// Panels are measured with the viewport as an exact size; a host may still report a different
/// natural width, which is then used for positioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    pub max: Size,
}

/// A panel's laid-out rectangle in content coordinates (x grows to the right from 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PanelRect {
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width as i64)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapDirection {
    #[default]
    None,
    /// Moved past the first panel; the last panel slides in from the left.
    Left,
    /// Moved past the last panel; the first panel slides in from the right.
    Right,
}

/// How the container is currently compositing wrapped neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawMode {
    #[default]
    Neutral,
    LeftWrap,
    RightWrap,
}

impl DrawMode {
    pub fn is_wrapping(self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl From<WrapDirection> for DrawMode {
    fn from(wrap: WrapDirection) -> Self {
        match wrap {
            WrapDirection::None => Self::Neutral,
            WrapDirection::Left => Self::LeftWrap,
            WrapDirection::Right => Self::RightWrap,
        }
    }
}

/// The single in-flight panel change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from_index: usize,
    pub to_index: usize,
    pub wrap: WrapDirection,
    /// Offset the scroll animation runs toward. For wrapped transitions this is the slot just
    /// outside the strip; the commit snaps to `to_index * panel_width` afterwards.
    pub target_offset: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
    pub time_ms: u64,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            x,
            y,
            time_ms,
        }
    }

    pub fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, x, y, time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Move, x, y, time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Up, x, y, time_ms)
    }

    pub fn cancel(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Cancel, x, y, time_ms)
    }
}

/// Direction of a focus move that no descendant could handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub(crate) u64);
