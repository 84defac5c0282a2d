//! Inputs of the external animation engine.
//!
//! The renderer that draws the bulb is opaque to this crate. It exposes two
//! named inputs: a numeric color value and a boolean power flag.

/// Name of the numeric color input
pub const COLOR_VALUE_INPUT: &str = "ColorValue";

/// Name of the boolean power input
pub const POWER_INPUT: &str = "on";

/// Abstract animation engine input trait
///
/// Implement this trait to bridge to the renderer that plays the bulb
/// animation. The controller only ever writes to it.
pub trait AnimationInputs {
    /// Write the color value, in the units of the hue slider range
    fn set_color_value(&mut self, value: f32);

    /// Write the power flag
    fn set_power(&mut self, on: bool);
}

/// Single write to one of the engine inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineInput {
    /// Value for the color input
    ColorValue(f32),
    /// Value for the power input
    Power(bool),
}

impl EngineInput {
    /// Name of the engine input this write targets
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorValue(_) => COLOR_VALUE_INPUT,
            Self::Power(_) => POWER_INPUT,
        }
    }

    /// Replay the write onto an engine
    pub fn apply<E: AnimationInputs + ?Sized>(self, engine: &mut E) {
        match self {
            Self::ColorValue(value) => engine.set_color_value(value),
            Self::Power(on) => engine.set_power(on),
        }
    }
}

impl<E: AnimationInputs + ?Sized> AnimationInputs for &mut E {
    fn set_color_value(&mut self, value: f32) {
        (**self).set_color_value(value);
    }

    fn set_power(&mut self, on: bool) {
        (**self).set_power(on);
    }
}
