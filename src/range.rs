//! Mapping between normalized track positions and slider values.

use crate::error::DomainError;

/// Closed numeric range a slider value lives in
///
/// Always satisfies `min < max`, so the inverse mapping never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl ValueRange {
    /// Create a new range
    ///
    /// Fails with [`DomainError::DegenerateRange`] unless both bounds are
    /// finite and `min < max`.
    pub fn new(min: f32, max: f32) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(DomainError::DegenerateRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(self) -> f32 {
        self.min
    }

    pub const fn max(self) -> f32 {
        self.max
    }

    /// Distance between the bounds
    pub fn span(self) -> f32 {
        self.max - self.min
    }

    /// Clamp a value into the range
    pub fn clamp(self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns true if the value lies within the bounds
    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Convert a normalized track position into a value
    pub fn position_to_value(self, position: f32) -> f32 {
        position_to_value(position, self)
    }

    /// Convert a value into a normalized track position
    pub fn value_to_position(self, value: f32) -> f32 {
        value_to_position(value, self)
    }
}

/// Map a normalized position onto the range
///
/// Positions outside `0.0..=1.0` (a drag past either end of the track)
/// land on the nearest bound.
pub fn position_to_value(position: f32, range: ValueRange) -> f32 {
    let position = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };
    let value = range.min + position * range.span();
    // Rounding can overshoot `max` by one ulp
    range.clamp(value)
}

/// Map a value back onto `0.0..=1.0`
///
/// Values are clamped into the range first.
pub fn value_to_position(value: f32, range: ValueRange) -> f32 {
    let value = range.clamp(value);
    ((value - range.min) / range.span()).clamp(0.0, 1.0)
}
