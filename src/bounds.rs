/// Leading inset of the slider thumb, in pixels
pub const THUMB_LEADING_INSET: f32 = 6.0;

/// Width taken from the track when scaling the thumb offset
pub const THUMB_TRAVEL_INSET: f32 = 32.0;

/// Space kept free after the thumb at the trailing end
pub const THUMB_TRAILING_INSET: f32 = 42.0;

/// Pixel extent of a rendered slider track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    /// Leading edge of the track
    pub start: f32,
    /// Width of the track
    pub width: f32,
}

impl TrackBounds {
    pub const fn new(start: f32, width: f32) -> Self {
        Self { start, width }
    }

    /// Track of the given width starting at zero
    pub const fn with_width(width: f32) -> Self {
        Self { start: 0.0, width }
    }

    /// Returns the trailing edge of the track
    pub fn end(self) -> f32 {
        self.start + self.width
    }

    /// Convert a pointer coordinate into a normalized track position
    ///
    /// The result is not clamped; pointers past the track ends yield values
    /// outside `0.0..=1.0` and the range mapping pins them to a bound.
    /// A track without width maps everything to its start.
    pub fn normalize(self, x: f32) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        (x - self.start) / self.width
    }

    /// Horizontal thumb offset for a normalized position
    ///
    /// Keeps the thumb inside the rounded track. On tracks too narrow to fit
    /// the insets the leading inset wins.
    pub fn thumb_offset(self, position: f32) -> f32 {
        let position = position.clamp(0.0, 1.0);
        let travel = position * (self.width - THUMB_TRAVEL_INSET);
        travel
            .min(self.width - THUMB_TRAILING_INSET)
            .max(THUMB_LEADING_INSET)
    }
}
