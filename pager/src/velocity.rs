use alloc::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f32,
    time_ms: u64,
}

/// Estimates horizontal touch velocity from the samples of the last `window_ms`.
///
/// The estimate is the average velocity between the oldest and newest sample in the window, in
/// px/s. It is positive when the pointer moves right.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    window_ms: u64,
}

impl VelocityTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            samples: VecDeque::new(),
            window_ms,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn add(&mut self, x: f32, time_ms: u64) {
        if let Some(last) = self.samples.back_mut() {
            if time_ms < last.time_ms {
                pwarn!(
                    prev = last.time_ms,
                    next = time_ms,
                    "VelocityTracker: timestamps must not go backwards"
                );
                return;
            }
            if time_ms == last.time_ms {
                last.x = x;
                return;
            }
        }
        self.samples.push_back(Sample { x, time_ms });

        let horizon = time_ms.saturating_sub(self.window_ms);
        while self.samples.len() > 2 && self.samples[1].time_ms <= horizon {
            self.samples.pop_front();
        }
    }

    /// Velocity in px/s, or 0 when fewer than two distinct samples are tracked.
    pub fn velocity(&self) -> i32 {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0;
        };
        let dt = last.time_ms.saturating_sub(first.time_ms);
        if dt == 0 {
            return 0;
        }
        let v = (last.x - first.x) as f64 * 1000.0 / dt as f64;
        v.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(100)
    }
}
