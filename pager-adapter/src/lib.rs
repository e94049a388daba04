//! Adapter utilities for the `pager` crate.
//!
//! The `pager` crate is UI-agnostic and focuses on paging state and gesture handling. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller that owns a container plus its host and drives frames and touch dispatch
//! - A recording host for headless rendering and tests
//! - A title strip that follows the pending panel (previous / next titles)
//! - Synthetic swipe gestures
//!
//! This crate is intentionally framework-agnostic (no egui/iced bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod gesture;
mod recording;
mod titles;

#[cfg(test)]
mod tests;

pub use controller::{Controller, FrameReport};
pub use gesture::Swipe;
pub use recording::{DrawCall, RecordingHost};
pub use titles::TitleStrip;
