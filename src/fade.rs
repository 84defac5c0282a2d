//! Decorative glow fade
//!
//! The halo behind the bulb follows the opacity slider while the light is on
//! and fades out when it is off. The fade is presentational only: nothing
//! in the controller waits for it.

use embassy_time::{Duration, Instant};

use crate::transition::{ValueTransition, ease_in_out_quad};

/// Timings of the glow fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowTimings {
    /// Pause before the glow starts moving
    pub delay: Duration,
    /// Duration of the fade itself
    pub duration: Duration,
}

impl Default for GlowTimings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
            duration: Duration::from_millis(200),
        }
    }
}

/// Eased glow opacity heading towards the latest requested level
#[derive(Debug, Clone)]
pub struct GlowFade {
    level: ValueTransition<f32>,
    timings: GlowTimings,
}

impl GlowFade {
    /// Create a new fade resting at `initial`
    pub const fn new(initial: f32, timings: GlowTimings) -> Self {
        Self {
            level: ValueTransition::new_f32(initial, ease_in_out_quad),
            timings,
        }
    }

    /// Current glow opacity
    pub const fn current(&self) -> f32 {
        self.level.current()
    }

    /// Level the glow is heading to
    pub fn target(&self) -> f32 {
        self.level.target()
    }

    /// Check if the glow is still moving
    pub const fn is_fading(&self) -> bool {
        self.level.is_transitioning()
    }

    /// Head towards a new level
    ///
    /// Requesting the level already targeted keeps the running fade.
    pub fn retarget(&mut self, level: f32, now: Instant) {
        if libm::fabsf(self.target() - level) <= f32::EPSILON {
            return;
        }
        self.level
            .set(level, self.timings.delay, self.timings.duration, now);
    }

    /// Advance the fade
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.level.tick(now);
        self.level.current()
    }
}
