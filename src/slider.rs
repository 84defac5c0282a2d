//! Gradient slider state
//!
//! A slider turns drag positions into a value within its range, samples its
//! gradient at that value and reports both to an observer. The thumb color
//! and the value always agree and never leave the range.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::TrackBounds;
use crate::color::{ColorStop, DEFAULT_STOP_CAPACITY, Gradient, Rgba};
use crate::error::DomainError;
use crate::range::{ValueRange, position_to_value, value_to_position};

/// Share of the range a drag must move to count as a significant change
pub const SIGNIFICANT_CHANGE_RATIO: f32 = 0.1;

/// Receives slider changes
///
/// All methods default to no-ops.
pub trait SliderObserver {
    /// The derived color changed
    fn color_changed(&mut self, _color: Rgba) {}

    /// The value changed
    fn value_changed(&mut self, _value: f32) {}

    /// The value moved far enough from the last significant value
    fn significant_change(&mut self, _value: f32) {}
}

impl SliderObserver for () {}

impl<O: SliderObserver + ?Sized> SliderObserver for &mut O {
    fn color_changed(&mut self, color: Rgba) {
        (**self).color_changed(color);
    }

    fn value_changed(&mut self, value: f32) {
        (**self).value_changed(value);
    }

    fn significant_change(&mut self, value: f32) {
        (**self).significant_change(value);
    }
}

/// Observer built from a color callback and a value callback
pub struct SliderCallbacks<C, V> {
    pub on_color: C,
    pub on_value: V,
}

impl<C, V> SliderCallbacks<C, V>
where
    C: FnMut(Rgba),
    V: FnMut(f32),
{
    pub const fn new(on_color: C, on_value: V) -> Self {
        Self { on_color, on_value }
    }
}

impl<C, V> SliderObserver for SliderCallbacks<C, V>
where
    C: FnMut(Rgba),
    V: FnMut(f32),
{
    fn color_changed(&mut self, color: Rgba) {
        (self.on_color)(color);
    }

    fn value_changed(&mut self, value: f32) {
        (self.on_value)(value);
    }
}

/// Interaction phase of a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Value and color owned by a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    /// Current value, always within the slider range
    pub value: f32,
    /// Value at the last significant change
    pub previous_value: f32,
    /// Gradient color at the current value
    pub color: Rgba,
}

/// Outcome of one slider update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderUpdate {
    pub value: f32,
    pub color: Rgba,
    /// The update crossed the significant change threshold
    pub significant: bool,
}

/// Configuration for a slider
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig<const N: usize = DEFAULT_STOP_CAPACITY> {
    pub range: ValueRange,
    pub gradient: Gradient<N>,
    /// Starting value, clamped into the range
    pub initial: f32,
}

impl<const N: usize> SliderConfig<N> {
    /// Validate raw bounds and stops into a slider configuration
    pub fn new(min: f32, max: f32, stops: &[ColorStop], initial: f32) -> Result<Self, DomainError> {
        Ok(Self {
            range: ValueRange::new(min, max)?,
            gradient: Gradient::new(stops)?,
            initial,
        })
    }
}

/// Slider controller - owns the value and derived color of one slider
#[derive(Debug, Clone)]
pub struct SliderController<const N: usize = DEFAULT_STOP_CAPACITY> {
    range: ValueRange,
    gradient: Gradient<N>,
    state: SliderState,
    phase: DragPhase,
}

impl<const N: usize> SliderController<N> {
    /// Create a new idle slider at the configured initial value
    pub fn new(config: &SliderConfig<N>) -> Self {
        let value = config.range.clamp(config.initial);
        let color = config
            .gradient
            .color_at(value_to_position(value, config.range));
        Self {
            range: config.range,
            gradient: config.gradient.clone(),
            state: SliderState {
                value,
                previous_value: value,
                color,
            },
            phase: DragPhase::Idle,
        }
    }

    pub const fn range(&self) -> ValueRange {
        self.range
    }

    pub const fn gradient(&self) -> &Gradient<N> {
        &self.gradient
    }

    pub const fn state(&self) -> SliderState {
        self.state
    }

    pub const fn value(&self) -> f32 {
        self.state.value
    }

    pub const fn previous_value(&self) -> f32 {
        self.state.previous_value
    }

    pub const fn color(&self) -> Rgba {
        self.state.color
    }

    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Normalized position of the current value
    pub fn position(&self) -> f32 {
        value_to_position(self.state.value, self.range)
    }

    /// Thumb offset on a rendered track
    pub fn thumb_offset(&self, bounds: TrackBounds) -> f32 {
        bounds.thumb_offset(self.position())
    }

    /// Start a drag gesture
    pub fn begin_drag(&mut self) {
        self.phase = DragPhase::Dragging;
    }

    /// Move the drag to a normalized track position
    ///
    /// An update while idle starts the drag.
    pub fn drag_to<O: SliderObserver>(&mut self, position: f32, mut observer: O) -> SliderUpdate {
        self.phase = DragPhase::Dragging;

        let value = position_to_value(position, self.range);
        let color = self.apply(value, &mut observer);

        let significant = libm::fabsf(value - self.state.previous_value)
            > self.range.span() * SIGNIFICANT_CHANGE_RATIO;
        if significant {
            self.state.previous_value = value;
            observer.significant_change(value);
        }

        SliderUpdate {
            value,
            color,
            significant,
        }
    }

    /// Move the drag to a pointer coordinate on a rendered track
    pub fn drag_to_pixel<O: SliderObserver>(
        &mut self,
        x: f32,
        bounds: TrackBounds,
        observer: O,
    ) -> SliderUpdate {
        self.drag_to(bounds.normalize(x), observer)
    }

    /// Finish the drag gesture
    ///
    /// The value and color stay as the last update left them.
    pub fn end_drag(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Abandon the drag gesture
    pub fn cancel_drag(&mut self) {
        self.end_drag();
    }

    /// Set the value programmatically
    ///
    /// Observers are notified like on a drag. The drag phase is left alone
    /// and the significant change baseline moves to the new value, so the
    /// next drag is measured from here.
    pub fn set_value<O: SliderObserver>(&mut self, value: f32, mut observer: O) -> SliderUpdate {
        let value = self.range.clamp(value);
        let color = self.apply(value, &mut observer);
        self.state.previous_value = value;
        SliderUpdate {
            value,
            color,
            significant: false,
        }
    }

    /// Store a clamped value with its color and notify the observer
    fn apply<O: SliderObserver>(&mut self, value: f32, observer: &mut O) -> Rgba {
        let color = self.gradient.color_at(value_to_position(value, self.range));
        self.state.value = value;
        self.state.color = color;

        #[cfg(feature = "esp32-log")]
        println!(
            "[SliderController] value changed: {} (range: {} to {})",
            value,
            self.range.min(),
            self.range.max()
        );

        observer.color_changed(color);
        observer.value_changed(value);
        color
    }
}
