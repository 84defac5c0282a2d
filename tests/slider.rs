mod tests {
    use bulb_controls::color::{ColorStop, Rgba, hue_gradient};
    use bulb_controls::{
        DomainError, DragPhase, SliderCallbacks, SliderConfig, SliderController, SliderObserver,
        TrackBounds, ValueRange,
    };

    #[derive(Default)]
    struct Recorder {
        colors: Vec<Rgba>,
        values: Vec<f32>,
        significant: Vec<f32>,
    }

    impl SliderObserver for Recorder {
        fn color_changed(&mut self, color: Rgba) {
            self.colors.push(color);
        }

        fn value_changed(&mut self, value: f32) {
            self.values.push(value);
        }

        fn significant_change(&mut self, value: f32) {
            self.significant.push(value);
        }
    }

    fn hue_slider(initial: f32) -> SliderController {
        SliderController::new(&SliderConfig {
            range: ValueRange::new(10.0, 60.0).unwrap(),
            gradient: hue_gradient().unwrap(),
            initial,
        })
    }

    fn position_of(value: f32) -> f32 {
        (value - 10.0) / 50.0
    }

    #[test]
    fn test_config_rejects_invalid_input() {
        let stops = [ColorStop::new(0.0, Rgba::BLACK)];
        assert!(matches!(
            SliderConfig::<4>::new(1.0, 1.0, &stops, 1.0),
            Err(DomainError::DegenerateRange { .. })
        ));
        assert_eq!(
            SliderConfig::<4>::new(0.0, 1.0, &[], 0.5),
            Err(DomainError::EmptyGradient)
        );
    }

    #[test]
    fn test_initial_state() {
        let slider = hue_slider(100.0);
        assert_eq!(slider.value(), 60.0);
        assert_eq!(slider.previous_value(), 60.0);
        assert_eq!(slider.color(), slider.gradient().color_at(1.0));
        assert_eq!(slider.phase(), DragPhase::Idle);

        let slider = hue_slider(10.0);
        assert_eq!(slider.color(), Rgba::from_rgb_u32(0x0035_03FF));
    }

    #[test]
    fn test_drag_updates_value_color_and_observers() {
        let mut slider = hue_slider(10.0);
        let mut recorder = Recorder::default();

        slider.begin_drag();
        assert!(slider.is_dragging());
        let update = slider.drag_to(0.5, &mut recorder);

        assert!((update.value - 35.0).abs() < 1e-4);
        assert_eq!(slider.value(), update.value);
        assert_eq!(slider.color(), update.color);
        assert_eq!(update.color, slider.gradient().color_at(slider.position()));
        assert_eq!(recorder.colors, [update.color]);
        assert_eq!(recorder.values, [update.value]);

        slider.end_drag();
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), update.value);
    }

    #[test]
    fn test_drag_past_track_clamps() {
        let mut slider = hue_slider(30.0);
        let mut recorder = Recorder::default();

        slider.drag_to(-0.4, &mut recorder);
        assert_eq!(slider.value(), 10.0);
        slider.drag_to(7.0, &mut recorder);
        assert_eq!(slider.value(), 60.0);
        assert!(recorder.values.iter().all(|v| (10.0..=60.0).contains(v)));
    }

    #[test]
    fn test_significant_change_threshold() {
        let mut slider = hue_slider(20.0);
        let update = slider.drag_to(position_of(26.0), ());
        assert!(update.significant);
        assert!((slider.previous_value() - 26.0).abs() < 1e-4);

        let mut slider = hue_slider(20.0);
        let mut recorder = Recorder::default();
        let update = slider.drag_to(position_of(24.0), &mut recorder);
        assert!(!update.significant);
        assert_eq!(slider.previous_value(), 20.0);
        assert!(recorder.significant.is_empty());
    }

    #[test]
    fn test_significant_change_moves_baseline() {
        let mut slider = hue_slider(20.0);
        let mut recorder = Recorder::default();
        for value in [23.0, 26.0, 29.0, 32.0] {
            slider.drag_to(position_of(value), &mut recorder);
        }
        // 26 crosses from 20, 32 crosses from 26
        assert_eq!(recorder.significant.len(), 2);
        assert!((slider.previous_value() - 32.0).abs() < 1e-4);
    }

    #[test]
    fn test_update_while_idle_starts_drag() {
        let mut slider = hue_slider(10.0);
        slider.drag_to(0.2, ());
        assert_eq!(slider.phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_cancelled_drag_keeps_last_state() {
        let mut slider = hue_slider(10.0);
        slider.begin_drag();
        let update = slider.drag_to(0.8, ());
        slider.cancel_drag();
        assert_eq!(slider.phase(), DragPhase::Idle);
        assert_eq!(slider.value(), update.value);
        assert_eq!(slider.color(), update.color);
    }

    #[test]
    fn test_drag_to_pixel() {
        let mut slider = hue_slider(10.0);
        let track = TrackBounds::with_width(200.0);
        let update = slider.drag_to_pixel(100.0, track, ());
        assert!((update.value - 35.0).abs() < 1e-4);
        let update = slider.drag_to_pixel(260.0, track, ());
        assert_eq!(update.value, 60.0);
        assert_eq!(slider.thumb_offset(track), 158.0);
    }

    #[test]
    fn test_set_value_notifies_without_dragging() {
        let mut slider = hue_slider(10.0);
        let mut colors = Vec::new();
        let mut values = Vec::new();
        let update = slider.set_value(
            45.0,
            SliderCallbacks::new(|c| colors.push(c), |v| values.push(v)),
        );
        assert_eq!(update.value, 45.0);
        assert!(!update.significant);
        assert_eq!(slider.previous_value(), 45.0);
        assert_eq!(slider.phase(), DragPhase::Idle);
        assert_eq!(values, [45.0]);
        assert_eq!(colors, [slider.color()]);
    }

    #[test]
    fn test_drag_after_set_value_measures_from_new_value() {
        let mut slider = hue_slider(10.0);
        slider.set_value(45.0, ());

        let mut recorder = Recorder::default();
        let update = slider.drag_to(position_of(46.0), &mut recorder);
        assert!(!update.significant);
        assert!(recorder.significant.is_empty());
        assert_eq!(slider.previous_value(), 45.0);

        let update = slider.drag_to(position_of(52.0), &mut recorder);
        assert!(update.significant);
        assert_eq!(recorder.significant.len(), 1);
    }
}
