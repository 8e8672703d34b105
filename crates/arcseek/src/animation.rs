use std::f64::consts::PI;
use std::time::{Duration, Instant};

/// Eases in and out: slow at both ends, fastest in the middle.
pub fn accelerate_decelerate(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Rotation of a seek ring origin from one angle to another over a fixed duration.
///
/// `to` is usually the unnormalized result of
/// [`shortest_rotation_target`](crate::geometry::shortest_rotation_target), so samples
/// may leave [0, 360) and must be normalized before they are stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAnimation {
    from: f64,
    to: f64,
    started_at: Instant,
    duration: Duration,
}

impl RotationAnimation {
    pub fn new(from: f64, to: f64, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn fraction(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn sample(&self, now: Instant) -> f64 {
        let eased = accelerate_decelerate(self.fraction(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }
}
