use thiserror::Error;

/// Construction-time validation failures
///
/// Everything past construction clamps instead of failing, so these
/// only ever surface from constructors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// Range bounds do not satisfy `min < max`
    #[error("range must satisfy min < max, got {min}..{max}")]
    DegenerateRange { min: f32, max: f32 },
    /// Gradient built from zero color stops
    #[error("gradient needs at least one color stop")]
    EmptyGradient,
    /// More stops than the gradient can hold
    #[error("gradient holds at most {capacity} color stops")]
    TooManyStops { capacity: usize },
    /// Stop position outside of `0.0..=1.0`
    #[error("color stop position {0} is outside 0..=1")]
    StopOutOfRange(f32),
}
