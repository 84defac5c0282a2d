mod tests {
    use bulb_controls::{
        AnimationInputs, EngineInput, Instant, LightController, LightControllerConfig, Rgba,
    };

    #[derive(Default)]
    struct Engine {
        inputs: Vec<EngineInput>,
    }

    impl AnimationInputs for Engine {
        fn set_color_value(&mut self, value: f32) {
            self.inputs.push(EngineInput::ColorValue(value));
        }

        fn set_power(&mut self, on: bool) {
            self.inputs.push(EngineInput::Power(on));
        }
    }

    fn controller_with_hue(hue: f32) -> LightController {
        let mut config = LightControllerConfig::bulb().unwrap();
        config.hue.initial = hue;
        LightController::new(&config)
    }

    fn hue_position(value: f32) -> f32 {
        (value - 10.0) / 50.0
    }

    #[test]
    fn test_bulb_defaults() {
        let controller: LightController =
            LightController::new(&LightControllerConfig::bulb().unwrap());
        assert!(!controller.is_on());
        assert_eq!(controller.hue().value(), 10.0);
        assert_eq!(controller.opacity().value(), 0.2);
        assert_eq!(controller.glow(), 0.0);
    }

    #[test]
    fn test_power_toggle_restores_hue() {
        let mut controller = controller_with_hue(45.0);
        let mut engine = Engine::default();

        assert!(controller.toggle_power(&mut engine));
        assert_eq!(
            engine.inputs,
            [EngineInput::ColorValue(45.0), EngineInput::Power(true)]
        );

        engine.inputs.clear();
        assert!(!controller.toggle_power(&mut engine));
        assert_eq!(
            engine.inputs,
            [EngineInput::ColorValue(0.0), EngineInput::Power(false)]
        );
        assert_eq!(controller.hue().value(), 45.0);

        engine.inputs.clear();
        controller.toggle_power(&mut engine);
        assert_eq!(
            engine.inputs,
            [EngineInput::ColorValue(45.0), EngineInput::Power(true)]
        );
    }

    #[test]
    fn test_hue_drag_suppressed_while_off() {
        let mut controller = controller_with_hue(20.0);
        let mut engine = Engine::default();
        let mut colors = Vec::new();

        controller.begin_hue_drag();
        for value in [20.0, 30.0, 40.0, 55.0] {
            controller.drag_hue(hue_position(value), &mut engine, |c| colors.push(c));
        }
        controller.end_hue_drag();

        assert!(engine.inputs.is_empty());
        assert_eq!(colors.len(), 4);
        assert!((controller.hue().value() - 55.0).abs() < 1e-4);
    }

    #[test]
    fn test_hue_drag_forwarded_while_on() {
        let mut controller = controller_with_hue(20.0);
        let mut engine = Engine::default();
        controller.toggle_power(&mut engine);
        engine.inputs.clear();

        let update = controller.drag_hue(hue_position(40.0), &mut engine, |_| {});
        assert_eq!(engine.inputs, [EngineInput::ColorValue(update.value)]);

        // Value dragged while off is what comes back on the next power on
        controller.toggle_power(&mut engine);
        controller.drag_hue(hue_position(50.0), &mut engine, |_| {});
        engine.inputs.clear();
        controller.toggle_power(&mut engine);
        assert_eq!(
            engine.inputs,
            [
                EngineInput::ColorValue(controller.hue().value()),
                EngineInput::Power(true)
            ]
        );
    }

    #[test]
    fn test_on_hue_changed_gating() {
        let mut controller = controller_with_hue(20.0);
        let mut engine = Engine::default();
        controller.on_hue_changed(30.0, &mut engine);
        assert!(engine.inputs.is_empty());

        controller.set_power(true, &mut engine);
        engine.inputs.clear();
        controller.on_hue_changed(30.0, &mut engine);
        assert_eq!(engine.inputs, [EngineInput::ColorValue(30.0)]);
    }

    #[test]
    fn test_set_power_is_idempotent() {
        let mut controller = controller_with_hue(20.0);
        let mut engine = Engine::default();
        controller.set_power(false, &mut engine);
        assert!(engine.inputs.is_empty());
        controller.set_power(true, &mut engine);
        controller.set_power(true, &mut engine);
        assert_eq!(engine.inputs.len(), 2);
    }

    #[test]
    fn test_opacity_never_reaches_engine() {
        let mut controller = controller_with_hue(20.0);
        let mut engine = Engine::default();
        controller.toggle_power(&mut engine);
        engine.inputs.clear();

        let mut colors: Vec<Rgba> = Vec::new();
        controller.begin_opacity_drag();
        let update = controller.drag_opacity(1.0, |c| colors.push(c));
        controller.end_opacity_drag();

        assert!(engine.inputs.is_empty());
        assert_eq!(update.value, 0.7);
        assert_eq!(update.color, Rgba::WHITE);
        assert_eq!(colors, [Rgba::WHITE.with_alpha(0.7)]);
        assert_eq!(controller.glow_color(), Rgba::WHITE.with_alpha(0.7));
    }

    #[test]
    fn test_opacity_sink_gets_glow_color() {
        let mut controller = controller_with_hue(20.0);
        let mut colors: Vec<Rgba> = Vec::new();
        let update = controller.drag_opacity(0.5, |c| colors.push(c));

        assert_eq!(colors, [Rgba::WHITE.with_alpha(update.value)]);
        assert_eq!(controller.opacity().color(), update.color);
        assert!((colors[0].a - 0.35).abs() < 1e-4);
    }

    #[test]
    fn test_sync_sends_stored_hue() {
        let mut controller = controller_with_hue(45.0);
        let mut engine = Engine::default();
        controller.sync(&mut engine);
        assert_eq!(
            engine.inputs,
            [EngineInput::ColorValue(45.0), EngineInput::Power(false)]
        );

        controller.toggle_power(&mut engine);
        engine.inputs.clear();
        controller.sync(&mut engine);
        assert_eq!(
            engine.inputs,
            [EngineInput::ColorValue(45.0), EngineInput::Power(true)]
        );
    }

    #[test]
    fn test_glow_follows_power_after_delay() {
        let mut controller = controller_with_hue(20.0);
        let mut engine = Engine::default();
        assert_eq!(controller.glow_target(), 0.0);

        controller.toggle_power(&mut engine);
        assert_eq!(controller.glow_target(), 0.2);

        assert_eq!(controller.tick_glow(Instant::from_millis(0)), 0.0);
        assert_eq!(controller.tick_glow(Instant::from_millis(150)), 0.0);
        let halfway = controller.tick_glow(Instant::from_millis(300));
        assert!((halfway - 0.1).abs() < 1e-4);
        assert_eq!(controller.tick_glow(Instant::from_millis(400)), 0.2);

        controller.toggle_power(&mut engine);
        controller.tick_glow(Instant::from_millis(1000));
        assert_eq!(controller.tick_glow(Instant::from_millis(1400)), 0.0);
    }
}
