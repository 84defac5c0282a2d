//! Light controller - power flag plus hue and opacity sliders
//!
//! Decides what reaches the animation engine on each interaction:
//! - the hue value is forwarded only while the light is on
//! - turning off forwards a zero color value but keeps the stored hue
//! - opacity only feeds the locally rendered glow

use embassy_time::Instant;
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{DEFAULT_STOP_CAPACITY, Rgba, hue_gradient, opacity_gradient};
use crate::engine::AnimationInputs;
use crate::error::DomainError;
use crate::fade::{GlowFade, GlowTimings};
use crate::range::ValueRange;
use crate::slider::{SliderConfig, SliderController, SliderObserver, SliderUpdate};

/// Color value forwarded to the engine while the light is off
pub const OFF_COLOR_VALUE: f32 = 0.0;

/// Configuration for the light controller
#[derive(Debug, Clone, PartialEq)]
pub struct LightControllerConfig<const N: usize = DEFAULT_STOP_CAPACITY> {
    pub hue: SliderConfig<N>,
    pub opacity: SliderConfig<N>,
    /// Initial power state
    pub is_on: bool,
    pub glow: GlowTimings,
}

impl<const N: usize> LightControllerConfig<N> {
    /// The light bulb screen: hue 10-60, glow opacity 0-0.7, light off
    pub fn bulb() -> Result<Self, DomainError> {
        Ok(Self {
            hue: SliderConfig {
                range: ValueRange::new(10.0, 60.0)?,
                gradient: hue_gradient()?,
                initial: 10.0,
            },
            opacity: SliderConfig {
                range: ValueRange::new(0.0, 0.7)?,
                gradient: opacity_gradient()?,
                initial: 0.2,
            },
            is_on: false,
            glow: GlowTimings::default(),
        })
    }
}

/// Light controller - the screen-level orchestrator
#[derive(Debug, Clone)]
pub struct LightController<const N: usize = DEFAULT_STOP_CAPACITY> {
    is_on: bool,
    hue: SliderController<N>,
    opacity: SliderController<N>,
    glow: GlowFade,
}

impl<const N: usize> LightController<N> {
    /// Create a new light controller
    pub fn new(config: &LightControllerConfig<N>) -> Self {
        let hue = SliderController::new(&config.hue);
        let opacity = SliderController::new(&config.opacity);
        let glow_level = if config.is_on { opacity.value() } else { 0.0 };
        Self {
            is_on: config.is_on,
            hue,
            opacity,
            glow: GlowFade::new(glow_level, config.glow),
        }
    }

    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    pub const fn hue(&self) -> &SliderController<N> {
        &self.hue
    }

    pub const fn opacity(&self) -> &SliderController<N> {
        &self.opacity
    }

    /// Color value the engine should currently show
    pub fn engine_color_value(&self) -> f32 {
        if self.is_on {
            self.hue.value()
        } else {
            OFF_COLOR_VALUE
        }
    }

    /// Push the current state to a freshly attached engine
    ///
    /// Sends the stored hue value even while the light is off; the power
    /// input keeps the bulb dark.
    pub fn sync<E: AnimationInputs>(&self, engine: &mut E) {
        engine.set_color_value(self.hue.value());
        engine.set_power(self.is_on);
    }

    fn forward_power<E: AnimationInputs>(&self, engine: &mut E) {
        engine.set_color_value(self.engine_color_value());
        engine.set_power(self.is_on);
    }

    /// Flip the power flag and forward both engine inputs
    ///
    /// Returns the new power state.
    pub fn toggle_power<E: AnimationInputs>(&mut self, engine: &mut E) -> bool {
        self.is_on = !self.is_on;

        #[cfg(feature = "esp32-log")]
        println!(
            "[LightController] power {}, color value {}",
            self.is_on,
            self.engine_color_value()
        );

        self.forward_power(engine);
        self.is_on
    }

    /// Switch power to the given state
    ///
    /// Does nothing if the light is already in that state.
    pub fn set_power<E: AnimationInputs>(&mut self, on: bool, engine: &mut E) {
        if self.is_on != on {
            self.toggle_power(engine);
        }
    }

    /// Forward a hue slider value to the engine while the light is on
    pub fn on_hue_changed<E: AnimationInputs>(&self, value: f32, engine: &mut E) {
        forward_hue(self.is_on, value, engine);
    }

    pub fn begin_hue_drag(&mut self) {
        self.hue.begin_drag();
    }

    /// Drag the hue slider
    ///
    /// The derived color always reaches `on_color`; the value reaches the
    /// engine only while the light is on.
    pub fn drag_hue<E, C>(&mut self, position: f32, engine: &mut E, on_color: C) -> SliderUpdate
    where
        E: AnimationInputs,
        C: FnMut(Rgba),
    {
        let relay = HueRelay {
            is_on: self.is_on,
            engine,
            on_color,
        };
        self.hue.drag_to(position, relay)
    }

    pub fn end_hue_drag(&mut self) {
        self.hue.end_drag();
    }

    pub fn begin_opacity_drag(&mut self) {
        self.opacity.begin_drag();
    }

    /// Drag the opacity slider
    ///
    /// The sink receives the glow color, white at the slider value as alpha.
    /// The thumb keeps its gradient color. Opacity never reaches the engine.
    pub fn drag_opacity<C>(&mut self, position: f32, on_color: C) -> SliderUpdate
    where
        C: FnMut(Rgba),
    {
        self.opacity.drag_to(position, GlowRelay { on_color })
    }

    /// Color of the glow around the bulb for the current opacity
    pub fn glow_color(&self) -> Rgba {
        glow_color(self.opacity.value())
    }

    pub fn end_opacity_drag(&mut self) {
        self.opacity.end_drag();
    }

    /// Opacity the glow should settle at
    pub fn glow_target(&self) -> f32 {
        if self.is_on { self.opacity.value() } else { 0.0 }
    }

    /// Advance the glow fade towards the current target
    ///
    /// Call this once per frame; returns the glow opacity to draw.
    pub fn tick_glow(&mut self, now: Instant) -> f32 {
        self.glow.retarget(self.glow_target(), now);
        self.glow.tick(now)
    }

    /// Current glow opacity without advancing the fade
    pub const fn glow(&self) -> f32 {
        self.glow.current()
    }
}

fn forward_hue<E: AnimationInputs>(is_on: bool, value: f32, engine: &mut E) {
    if is_on {
        engine.set_color_value(value);
    }
}

/// Routes hue slider changes to the color sink and the engine
struct HueRelay<'a, E, C> {
    is_on: bool,
    engine: &'a mut E,
    on_color: C,
}

impl<E: AnimationInputs, C: FnMut(Rgba)> SliderObserver for HueRelay<'_, E, C> {
    fn color_changed(&mut self, color: Rgba) {
        (self.on_color)(color);
    }

    fn value_changed(&mut self, value: f32) {
        forward_hue(self.is_on, value, self.engine);
    }
}

fn glow_color(opacity: f32) -> Rgba {
    Rgba::WHITE.with_alpha(opacity)
}

/// Routes opacity slider values to a sink as glow colors
struct GlowRelay<C> {
    on_color: C,
}

impl<C: FnMut(Rgba)> SliderObserver for GlowRelay<C> {
    fn value_changed(&mut self, value: f32) {
        (self.on_color)(glow_color(value));
    }
}
