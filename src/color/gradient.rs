use heapless::Vec;

use crate::color::Rgba;
use crate::error::DomainError;

/// Stop capacity used by the preset gradients and the light controller
pub const DEFAULT_STOP_CAPACITY: usize = 8;

/// One anchor of a piecewise-linear gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Normalized position (0.0-1.0)
    pub position: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(position: f32, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// Multi-stop gradient sampled with linear RGBA blending
///
/// N is the maximum number of stops. Stops are kept sorted by position;
/// stops sharing a position keep the order they were given in.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient<const N: usize = DEFAULT_STOP_CAPACITY> {
    stops: Vec<ColorStop, N>,
}

impl<const N: usize> Gradient<N> {
    /// Create a gradient from color stops in any order
    pub fn new(stops: &[ColorStop]) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyGradient);
        }
        if stops.len() > N {
            return Err(DomainError::TooManyStops { capacity: N });
        }

        let mut sorted = Vec::new();
        for stop in stops {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(DomainError::StopOutOfRange(stop.position));
            }
            sorted
                .push(*stop)
                .map_err(|_| DomainError::TooManyStops { capacity: N })?;
        }
        sort_stable(&mut sorted);

        Ok(Self { stops: sorted })
    }

    /// Gradient holding a single color
    pub fn solid(color: Rgba) -> Result<Self, DomainError> {
        Self::new(&[ColorStop::new(0.0, color)])
    }

    /// Sorted color stops
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns the color at a normalized position
    ///
    /// The position is clamped to `0.0..=1.0`.
    pub fn color_at(&self, position: f32) -> Rgba {
        sample(&self.stops, position)
    }
}

/// Sample a sorted, non-empty slice of color stops
///
/// Fails with [`DomainError::EmptyGradient`] on an empty slice.
pub fn color_at(stops: &[ColorStop], position: f32) -> Result<Rgba, DomainError> {
    if stops.is_empty() {
        return Err(DomainError::EmptyGradient);
    }
    Ok(sample(stops, position))
}

#[allow(clippy::float_cmp)]
fn sample(stops: &[ColorStop], position: f32) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::BLACK;
    };
    if stops.len() == 1 {
        return first.color;
    }

    let position = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };
    if position <= first.position {
        return first.color;
    }
    if position >= last.position {
        return last.color;
    }

    // `first.position < position`, so the bracketing stop is never index 0
    let Some(index) = stops.iter().position(|stop| position <= stop.position) else {
        return last.color;
    };
    let upper = stops[index];
    if position == upper.position {
        return upper.color;
    }
    let lower = stops[index - 1];
    let fraction = (position - lower.position) / (upper.position - lower.position);
    lower.color.lerp(upper.color, fraction)
}

/// Insertion sort by position; equal positions never swap
fn sort_stable(stops: &mut [ColorStop]) {
    for i in 1..stops.len() {
        let mut j = i;
        while j > 0 && stops[j - 1].position > stops[j].position {
            stops.swap(j - 1, j);
            j -= 1;
        }
    }
}

const HUE_STOPS: [ColorStop; 7] = [
    ColorStop::new(0.0, Rgba::from_rgb_u32(0x0035_03FF)),
    ColorStop::new(0.25, Rgba::from_rgb_u32(0x00B6_09E8)),
    ColorStop::new(0.45, Rgba::from_rgb_u32(0x00E8_403B)),
    ColorStop::new(0.5, Rgba::from_rgb_u32(0x00FD_5917)),
    ColorStop::new(0.75, Rgba::from_rgb_u32(0x00FF_F50A)),
    ColorStop::new(0.8, Rgba::from_rgb_u32(0x00CC_FF24)),
    ColorStop::new(1.0, Rgba::from_rgb_u32(0x006F_FB06)),
];

const OPACITY_STOPS: [ColorStop; 2] = [
    ColorStop::new(0.0, Rgba::WHITE.with_alpha(0.2)),
    ColorStop::new(1.0, Rgba::WHITE),
];

/// Blue to green sweep used by the bulb hue slider
pub fn hue_gradient<const N: usize>() -> Result<Gradient<N>, DomainError> {
    Gradient::new(&HUE_STOPS)
}

/// Translucent to solid white used by the glow opacity slider
pub fn opacity_gradient<const N: usize>() -> Result<Gradient<N>, DomainError> {
    Gradient::new(&OPACITY_STOPS)
}
