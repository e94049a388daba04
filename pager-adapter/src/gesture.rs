use alloc::vec::Vec;

use pager::TouchEvent;

/// A synthetic horizontal swipe: `Down`, evenly spaced `Move`s, then `Up`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swipe {
    pub from_x: f32,
    pub to_x: f32,
    pub y: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub steps: u32,
}

impl Swipe {
    pub fn new(from_x: f32, to_x: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from_x,
            to_x,
            y: 0.0,
            start_ms,
            duration_ms,
            steps: 8,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps.max(1);
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    /// Average finger velocity in px/s (positive when moving right).
    pub fn velocity(&self) -> f32 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        (self.to_x - self.from_x) * 1000.0 / self.duration_ms as f32
    }

    /// The event sequence. The last `Move` lands on `to_x` at `end_ms`, and `Up` repeats it.
    pub fn events(&self) -> Vec<TouchEvent> {
        let steps = self.steps.max(1);
        let mut out = Vec::with_capacity(steps as usize + 2);
        out.push(TouchEvent::down(self.from_x, self.y, self.start_ms));
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = self.from_x + (self.to_x - self.from_x) * t;
            let time_ms = self.start_ms + self.duration_ms * i as u64 / steps as u64;
            out.push(TouchEvent::moved(x, self.y, time_ms));
        }
        out.push(TouchEvent::up(self.to_x, self.y, self.end_ms()));
        out
    }
}
