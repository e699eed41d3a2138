//! Animation system for the slide-out menu
//!
//! Provides time-based tweens with easing curves and duration-bounded spring
//! curves. Nothing here owns a clock: a [`Transition`] is sampled with the
//! frame time supplied by the host's display refresh, and latches its start
//! time on the first sample.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Cubic-bezier easing curve anchored at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Easing {
    /// Slow start and slow finish.
    pub const EASE_IN_OUT: Easing = Easing::cubic_bezier(0.42, 0.0, 0.58, 1.0);

    /// Curve through control points (x1, y1) and (x2, y2).
    pub const fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        cubic_bezier(self.x1, self.y1, self.x2, self.y2, fraction)
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Converts a duration in (possibly fractional) seconds to whole milliseconds.
///
/// Negative and non-finite inputs map to zero.
pub fn seconds_to_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        0
    } else {
        (seconds * 1000.0).round() as u64
    }
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

/// Natural frequency × duration of a spring. Large enough that a critically
/// damped spring is within 0.1% of its target when the duration elapses.
const SPRING_SETTLE_RADIANS: f32 = 10.0;

/// Duration-bounded spring.
///
/// Unlike a free physics spring, this always finishes exactly when
/// `duration_millis` elapses: the oscillator's natural frequency is derived
/// from the duration and the value snaps to the target at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio in [0, 1]. 1.0 = critically damped, lower values oscillate.
    pub damping_ratio: f32,
    /// Duration in milliseconds.
    pub duration_millis: u64,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, duration_millis: u64) -> Self {
        Self {
            damping_ratio: damping_ratio.clamp(0.0, 1.0),
            duration_millis,
        }
    }

    /// Critically damped spring: settles without overshoot.
    pub fn critically_damped(duration_millis: u64) -> Self {
        Self::new(1.0, duration_millis)
    }

    /// Progress of the spring towards its target at `elapsed_seconds`.
    ///
    /// Returns 0.0 at rest and 1.0 at the target; under-damped springs
    /// overshoot past 1.0 before settling.
    pub fn progress(&self, elapsed_seconds: f32) -> f32 {
        let duration = self.duration_millis as f32 / 1000.0;
        if duration <= 0.0 || elapsed_seconds >= duration {
            return 1.0;
        }
        if elapsed_seconds <= 0.0 {
            return 0.0;
        }

        let omega = SPRING_SETTLE_RADIANS / duration;
        let zeta = self.damping_ratio.clamp(0.0, 1.0);
        let t = elapsed_seconds;

        // Displacement from the target starts at -1, at rest.
        let displacement = if (1.0 - zeta) < 1e-4 {
            -(1.0 + omega * t) * (-omega * t).exp()
        } else {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let c2 = -zeta * omega / omega_d;
            (-zeta * omega * t).exp() * (-(omega_d * t).cos() + c2 * (omega_d * t).sin())
        };

        1.0 + displacement
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Duration-bounded spring animation.
    Spring(SpringSpec),
}

impl AnimationType {
    pub fn duration_millis(&self) -> u64 {
        match self {
            AnimationType::Tween(spec) => spec.duration_millis,
            AnimationType::Spring(spec) => spec.duration_millis,
        }
    }

    /// Curve value at `elapsed_nanos` and whether the animation has finished.
    fn sample(&self, elapsed_nanos: u64) -> (f32, bool) {
        let duration_nanos = self.duration_millis() * 1_000_000;
        if elapsed_nanos >= duration_nanos {
            return (1.0, true);
        }
        match self {
            AnimationType::Tween(spec) => {
                let linear = elapsed_nanos as f32 / duration_nanos as f32;
                (spec.easing.transform(linear), false)
            }
            AnimationType::Spring(spec) => {
                (spec.progress(elapsed_nanos as f32 / 1_000_000_000.0), false)
            }
        }
    }
}

/// One sampled frame of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame<T> {
    pub value: T,
    pub finished: bool,
}

/// A single animation from `start` to `target`, driven by frame timestamps.
///
/// Unless [`Transition::starting_at`] pins it, the first call to
/// [`Transition::sample`] latches the start time, so the first frame always
/// reports `start` (unless the duration is zero).
#[derive(Debug, Clone)]
pub struct Transition<T: Lerp + Clone> {
    start: T,
    target: T,
    animation: AnimationType,
    start_time_nanos: Option<u64>,
}

impl<T: Lerp + Clone> Transition<T> {
    pub fn new(start: T, target: T, animation: AnimationType) -> Self {
        Self {
            start,
            target,
            animation,
            start_time_nanos: None,
        }
    }

    /// Pins the start time instead of latching it on the first sample.
    pub fn starting_at(mut self, start_time_nanos: u64) -> Self {
        self.start_time_nanos = Some(start_time_nanos);
        self
    }

    /// Frame time at which the transition reaches its target, once started.
    pub fn end_time_nanos(&self) -> Option<u64> {
        self.start_time_nanos
            .map(|start| start + self.animation.duration_millis() * 1_000_000)
    }

    /// Sample the transition at `frame_time_nanos`.
    pub fn sample(&mut self, frame_time_nanos: u64) -> TransitionFrame<T> {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let (progress, finished) = self.animation.sample(elapsed);
        let value = if finished {
            self.target.clone()
        } else {
            self.start.lerp(&self.target, progress)
        };
        if finished {
            log::trace!(
                "transition finished after {}ms",
                elapsed / 1_000_000
            );
        }
        TransitionFrame { value, finished }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
