use embassy_time::{Duration, Instant};

use crate::color::Rgba;

/// Blends two values of type `T` using a progress value (0.0-1.0)
pub type ValueBlender<T> = fn(T, T, f32) -> T;

/// Maps linear progress (0.0-1.0) onto an eased curve
pub type Easing = fn(f32) -> f32;

/// Quadratic ease-in-out
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inverse = -2.0 * t + 2.0;
        1.0 - inverse * inverse / 2.0
    }
}

/// No easing
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Calculate progress (0.0-1.0) based on elapsed time and duration
#[allow(clippy::cast_precision_loss)]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_millis() == 0 || elapsed >= duration {
        return 1.0;
    }
    elapsed.as_millis() as f32 / duration.as_millis() as f32
}

/// Transition for values of type `T`
///
/// A transition may start after a delay; until then the value holds.
#[derive(Debug, Clone)]
pub struct ValueTransition<T: Copy> {
    /// Blender function
    blend: ValueBlender<T>,
    /// Easing applied to progress
    easing: Easing,
    /// Current interpolated value
    current: T,
    /// Value at the start of transition
    source: T,
    /// Target value (None if no transition in progress)
    target: Option<T>,
    /// Total transition duration
    duration: Duration,
    /// Time at which blending begins
    start_time: Instant,
}

impl<T: Copy> ValueTransition<T> {
    /// Create a new value transition
    pub const fn new(initial: T, blend: ValueBlender<T>, easing: Easing) -> Self {
        Self {
            blend,
            easing,
            current: initial,
            source: initial,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    /// Get current value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Get the value the transition is heading to
    pub fn target(&self) -> T {
        self.target.unwrap_or(self.current)
    }

    /// Check if a transition is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Set value immediately
    pub fn set_immediate(&mut self, value: T) {
        self.current = value;
        self.source = value;
        self.target = None;
        self.duration = Duration::from_millis(0);
    }

    /// Set value for transition
    ///
    /// Blending starts at `now + delay` from whatever value is current.
    pub fn set(&mut self, value: T, delay: Duration, duration: Duration, now: Instant) {
        if duration.as_millis() == 0 && delay.as_millis() == 0 {
            self.set_immediate(value);
            return;
        }
        self.source = self.current;
        self.target = Some(value);
        self.duration = duration;
        self.start_time = now + delay;
    }

    /// Update transition state
    ///
    /// Call this once per frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };
        if now < self.start_time {
            return;
        }

        let elapsed = now.duration_since(self.start_time);
        if elapsed >= self.duration {
            self.set_immediate(target);
            return;
        }

        let eased = (self.easing)(progress(elapsed, self.duration));
        self.current = (self.blend)(self.source, target, eased);
    }
}

impl ValueTransition<f32> {
    /// Create a new f32 transition
    pub const fn new_f32(initial: f32, easing: Easing) -> Self {
        Self::new(initial, blend_f32, easing)
    }
}

impl ValueTransition<Rgba> {
    /// Create a new rgba transition
    pub const fn new_rgba(initial: Rgba, easing: Easing) -> Self {
        Self::new(initial, Rgba::lerp, easing)
    }
}

fn blend_f32(a: f32, b: f32, amount_of_b: f32) -> f32 {
    a + (b - a) * amount_of_b
}
