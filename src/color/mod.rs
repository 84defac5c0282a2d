mod gradient;
mod rgba;

use smart_leds::RGB8;

pub use gradient::{
    ColorStop, DEFAULT_STOP_CAPACITY, Gradient, color_at, hue_gradient, opacity_gradient,
};
pub use rgba::Rgba;

pub type Rgb = RGB8;
