//! A headless horizontal panel pager.
//!
//! For adapter-level utilities (frame driving, a recording host, titles), see the
//! `pager-adapter` crate.
//!
//! This crate holds the paging interaction engine: a touch state machine that tells taps,
//! drags and flings apart, a distance-proportional scroll animator, and a per-frame draw
//! compositor that knows how to show wrapped neighbors while the strip is pulled past either
//! end.
//!
//! It is UI-agnostic. A GUI layer is expected to provide, through [`PanelHost`]:
//! - panel measurement and positioning
//! - live panel rendering and cached panel bitmaps
//! - focus lookup and release
//!
//! and to feed touch events plus one `tick` per frame into [`PanelContainer`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod compositor;
mod container;
mod host;
mod options;
mod touch;
mod types;
mod velocity;


pub use animator::{Easing, ScrollAnimator, ScrollSample, Tween};
pub use compositor::{DrawCompositor, DrawOp, DrawStrategy, FrameInput};
pub use container::{PanelCallback, PanelContainer};
pub use host::PanelHost;
pub use options::PagerOptions;
pub use touch::{PagerView, TouchMachine, TouchMode, TouchRequest};
pub use types::{
    Constraints, DrawMode, FocusDirection, ListenerId, PanelKey, PanelRect, Size, TouchAction,
    TouchEvent, Transition, WrapDirection,
};
pub use velocity::VelocityTracker;
