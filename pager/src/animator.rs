/// A single time-bounded scroll from one offset to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: i64,
    pub to: i64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: i64, to: i64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> i64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased) as i64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Fast start, slowing into the target.
    #[default]
    Decelerate,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Decelerate => {
                let u = 1.0 - t;
                1.0 - u * u
            }
        }
    }
}

/// One step of a [`ScrollAnimator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    pub offset: i64,
    pub finished: bool,
}

/// Drives one scalar scroll offset toward a target.
///
/// The duration of a scroll is proportional to its distance (`2ms` per unit), so every scroll
/// moves at the same perceived speed. Only one scroll is active at a time: starting a new one
/// replaces the previous one.
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimator {
    tween: Option<Tween>,
    offset: i64,
    easing: Easing,
}

impl ScrollAnimator {
    pub const MS_PER_UNIT: u64 = 2;

    pub fn new(easing: Easing) -> Self {
        Self {
            tween: None,
            offset: 0,
            easing,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_none()
    }

    /// The active scroll, if any.
    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Last sampled (or final) offset.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Offset the active scroll ends at, or the current offset when idle.
    pub fn final_offset(&self) -> i64 {
        self.tween.map_or(self.offset, |t| t.to)
    }

    pub fn duration_for(delta: i64) -> u64 {
        delta.unsigned_abs().saturating_mul(Self::MS_PER_UNIT)
    }

    /// Starts scrolling from `from` to `from + delta`, aborting any scroll in flight.
    ///
    /// A zero `delta` completes immediately.
    pub fn start_scroll(&mut self, from: i64, delta: i64, now_ms: u64) {
        self.abort();
        self.offset = from;
        if delta == 0 {
            return;
        }
        let duration_ms = Self::duration_for(delta);
        ptrace!(from, delta, duration_ms, "ScrollAnimator::start_scroll");
        self.tween = Some(Tween::new(
            from,
            from.saturating_add(delta),
            now_ms,
            duration_ms,
            self.easing,
        ));
    }

    /// Advances the scroll to `now_ms`.
    ///
    /// Once finished, the sample carries the final offset and the animator goes idle.
    pub fn tick(&mut self, now_ms: u64) -> ScrollSample {
        let Some(tween) = self.tween else {
            return ScrollSample {
                offset: self.offset,
                finished: true,
            };
        };

        self.offset = tween.sample(now_ms);
        let finished = tween.is_done(now_ms);
        if finished {
            self.tween = None;
        }
        ScrollSample {
            offset: self.offset,
            finished,
        }
    }

    /// Stops the active scroll, keeping the last sampled offset as final.
    pub fn abort(&mut self) {
        if self.tween.take().is_some() {
            ptrace!(offset = self.offset, "ScrollAnimator::abort");
        }
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}
