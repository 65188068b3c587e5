//! Time-based tween animator for smooth page scrolling

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing curve for tweens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub const ALL: [Self; 4] = [Self::Linear, Self::EaseIn, Self::EaseOut, Self::EaseInOut];

    /// Map normalized progress `t` in `[0, 1]` onto the curve (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "Ease In"),
            Self::EaseOut => write!(f, "Ease Out"),
            Self::EaseInOut => write!(f, "Ease In/Out"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(400),
            easing: Easing::EaseInOut,
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Begin a tween from `current` to `target` at the given clock reading.
    pub fn start_at(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive.
    /// The final tick returns exactly the target and deactivates the animator.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing}");
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn tween_progresses_then_lands_on_target() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start_at(0.0, 800.0, Duration::from_millis(400), Easing::Linear, t0);

        let mid = animator.tick_at(t0 + Duration::from_millis(100)).unwrap();
        assert!((mid - 200.0).abs() < 0.5);
        assert!(animator.is_active());

        let last = animator.tick_at(t0 + Duration::from_millis(450)).unwrap();
        assert_eq!(last, 800.0);
        assert!(!animator.is_active());
        assert_eq!(animator.tick_at(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start_at(100.0, 0.0, Duration::ZERO, Easing::EaseOut, t0);
        assert_eq!(animator.tick_at(t0), Some(0.0));
        assert!(!animator.is_active());
    }

    #[test]
    fn cancel_stops_ticking() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start_at(0.0, 10.0, Duration::from_secs(1), Easing::EaseIn, t0);
        animator.cancel();
        assert_eq!(animator.tick_at(t0 + Duration::from_millis(10)), None);
        assert_eq!(animator.target(), None);
    }
}
