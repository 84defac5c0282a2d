#![no_std]

pub mod bounds;
pub mod channel;
pub mod color;
pub mod controller;
pub mod engine;
pub mod error;
pub mod fade;
pub mod range;
pub mod slider;
pub mod transition;

pub use bounds::TrackBounds;
pub use channel::{InputChannel, InputReceiver, InputSender};
pub use color::{ColorStop, Gradient, Rgb, Rgba, color_at};
pub use controller::{LightController, LightControllerConfig};
pub use engine::{AnimationInputs, COLOR_VALUE_INPUT, EngineInput, POWER_INPUT};
pub use error::DomainError;
pub use fade::{GlowFade, GlowTimings};
pub use range::{ValueRange, position_to_value, value_to_position};
pub use slider::{
    DragPhase, SliderCallbacks, SliderConfig, SliderController, SliderObserver, SliderState,
    SliderUpdate,
};
pub use transition::{ValueTransition, ease_in_out_quad};

pub use embassy_time::{Duration, Instant};
