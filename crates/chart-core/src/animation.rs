// File: crates/chart-core/src/animation.rs
// Summary: Easing curves, enter-animation settings and a frame clock.
//
// Easing maps linear progress t in [0, 1] to eased progress. Every curve
// returns exactly 0 at t = 0 and 1 at t = 1; inputs outside the range clamp.

use std::f64::consts::PI;
use std::time::Duration;

/// Default animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Starts slow, speeds up (t²).
    Accelerate,
    /// Starts fast, slows down.
    #[default]
    Decelerate,
    /// Slow at both ends: `cos((t + 1)π) / 2 + 0.5`.
    AccelerateDecelerate,
    /// Overshoots the end a few times before settling.
    Bounce,
}

impl Easing {
    pub fn ease(self, t: f64) -> f64 {
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::Bounce => bounce(t),
        }
    }
}

fn bounce(t: f64) -> f64 {
    let b = |t: f64| t * t * 8.0;
    let t = t * 1.1226;
    if t < 0.3535 {
        b(t)
    } else if t < 0.7408 {
        b(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        b(t - 0.8526) + 0.9
    } else {
        b(t - 1.0435) + 0.95
    }
}

/// How a chart enters the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub duration: Duration,
    pub easing: Easing,
    /// Starting alpha for a fade-in; `None` keeps sets opaque throughout.
    pub from_alpha: Option<f32>,
}

impl Default for Animation {
    fn default() -> Self {
        Self { duration: DEFAULT_DURATION, easing: Easing::default(), from_alpha: None }
    }
}

impl Animation {
    pub fn new() -> Self { Self::default() }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn from_alpha(mut self, alpha: f32) -> Self {
        self.from_alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Eased progress after `elapsed`.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.easing.ease(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Set alpha for eased progress `p`.
    pub fn alpha_at(&self, p: f64) -> f32 {
        match self.from_alpha {
            Some(a0) => a0 + (1.0 - a0) * p.clamp(0.0, 1.0) as f32,
            None => 1.0,
        }
    }
}

/// Elapsed time of a running animation. The host advances it once per frame.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    pub animation: Animation,
    elapsed: Duration,
}

impl AnimationClock {
    pub fn start(animation: Animation) -> Self {
        Self { animation, elapsed: Duration::ZERO }
    }

    /// Advance by `dt`; returns true while more frames are due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.animation.duration);
        !self.is_finished()
    }

    pub fn elapsed(&self) -> Duration { self.elapsed }

    pub fn progress(&self) -> f64 { self.animation.progress_at(self.elapsed) }

    pub fn alpha(&self) -> f32 { self.animation.alpha_at(self.progress()) }

    pub fn is_finished(&self) -> bool { self.elapsed >= self.animation.duration }
}

/// Linear interpolation; exact at both ends.
#[inline]
pub fn lerp(a: f32, b: f32, p: f64) -> f32 {
    if p <= 0.0 {
        a
    } else if p >= 1.0 {
        b
    } else {
        a + (b - a) * p as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::Accelerate,
        Easing::Decelerate,
        Easing::AccelerateDecelerate,
        Easing::Bounce,
    ];

    #[test]
    fn endpoints_are_exact() {
        for e in ALL {
            assert_eq!(e.ease(0.0), 0.0, "{e:?}");
            assert_eq!(e.ease(1.0), 1.0, "{e:?}");
            assert_eq!(e.ease(-2.0), 0.0, "{e:?}");
            assert_eq!(e.ease(3.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn accelerate_decelerate_is_symmetric() {
        let e = Easing::AccelerateDecelerate;
        assert_abs_diff_eq!(e.ease(0.5), 0.5, epsilon = 1e-12);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert_abs_diff_eq!(e.ease(t) + e.ease(1.0 - t), 1.0, epsilon = 1e-12);
        }
        // slow start
        assert!(e.ease(0.1) < 0.1);
    }

    #[test]
    fn monotonic_curves() {
        for e in [Easing::Linear, Easing::Accelerate, Easing::Decelerate, Easing::AccelerateDecelerate] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = e.ease(i as f64 / 100.0);
                assert!(v >= prev, "{e:?} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn clock_stops_at_duration() {
        let anim = Animation::new().with_duration(Duration::from_millis(100));
        let mut clock = AnimationClock::start(anim);
        assert!(clock.advance(Duration::from_millis(60)));
        assert!(!clock.advance(Duration::from_millis(60)));
        assert_eq!(clock.elapsed(), Duration::from_millis(100));
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn fade_goes_from_start_alpha_to_opaque() {
        let anim = Animation::new().from_alpha(0.0);
        assert_eq!(anim.alpha_at(0.0), 0.0);
        assert_eq!(anim.alpha_at(1.0), 1.0);
        assert_eq!(Animation::new().alpha_at(0.0), 1.0);
    }
}
