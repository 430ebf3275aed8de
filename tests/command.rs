mod tests {
    use myrtio_tree_light::{
        AnimationController, ButtonEvent, ColorGenerator, CommandProcessor, CommandQueue,
        EffectId, Instant, LightCommand, LightConfig, MenuAction, OutputDriver, PersistedConfig,
        Rgb, Speed, TrySendError,
    };

    struct NullDriver;

    impl OutputDriver for NullDriver {
        fn write(&mut self, _colors: &[Rgb]) {}
    }

    fn controller() -> AnimationController<NullDriver> {
        AnimationController::with_generator(
            NullDriver,
            &LightConfig::default(),
            ColorGenerator::with_colors(1, Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)),
            Instant::from_millis(0),
        )
    }

    #[test]
    fn test_queue_capacity() {
        let queue = CommandQueue::<2>::new();
        let sender = queue.sender();
        assert!(queue.is_empty());

        assert_eq!(sender.try_send(LightCommand::NextEffect), Ok(()));
        assert_eq!(sender.try_send(LightCommand::NextSpeed), Ok(()));
        assert_eq!(
            sender.try_send(LightCommand::SetBrightnessLevel(3)),
            Err(TrySendError(LightCommand::SetBrightnessLevel(3)))
        );
        assert_eq!(queue.len(), 2);

        let receiver = queue.receiver();
        assert_eq!(receiver.try_receive(), Some(LightCommand::NextEffect));
        assert_eq!(receiver.try_receive(), Some(LightCommand::NextSpeed));
        assert_eq!(receiver.try_receive(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_process_commands() {
        let queue = CommandQueue::<8>::new();
        let sender = queue.sender();
        let mut processor = CommandProcessor::new(queue.receiver());
        let mut controller = controller();

        for command in [
            LightCommand::SetEffect(EffectId::TwinkleFox),
            LightCommand::SetSpeed(Speed::Fast),
            LightCommand::SetBrightnessLevel(2),
            LightCommand::SetColorSelection(4),
        ] {
            sender.try_send(command).unwrap();
        }

        let actions = processor.process_pending(&mut controller);
        assert!(actions.is_empty());
        assert!(queue.is_empty());
        assert_eq!(controller.effect_id(), EffectId::TwinkleFox);
        assert_eq!(controller.speed(), Speed::Fast);
        assert_eq!(controller.brightness_level(), 2);
        assert_eq!(controller.colors().selection(), 4);

        sender.try_send(LightCommand::NextEffect).unwrap();
        sender.try_send(LightCommand::NextSpeed).unwrap();
        processor.process_pending(&mut controller);
        assert_eq!(controller.effect_id(), EffectId::Cycling);
        assert_eq!(controller.speed(), Speed::Stopped);
    }

    #[test]
    fn test_button_commands() {
        let queue = CommandQueue::<8>::new();
        let sender = queue.sender();
        let mut processor = CommandProcessor::new(queue.receiver());
        let mut controller = controller();

        for _ in 0..3 {
            sender
                .try_send(LightCommand::Button(ButtonEvent::RepeatPressed))
                .unwrap();
        }
        sender
            .try_send(LightCommand::Button(ButtonEvent::Released))
            .unwrap();

        let actions = processor.process_pending(&mut controller);
        assert_eq!(actions.as_slice(), &[MenuAction::SaveConfig]);
        assert_eq!(controller.effect_id(), EffectId::Off);

        // unused events fall back to the default actions
        sender
            .try_send(LightCommand::Button(ButtonEvent::Clicked))
            .unwrap();
        sender
            .try_send(LightCommand::Button(ButtonEvent::DoubleClicked))
            .unwrap();
        assert!(processor.process_pending(&mut controller).is_empty());
        assert_eq!(controller.effect_id(), EffectId::Solid);
        assert_eq!(controller.speed(), Speed::Fast);
    }

    #[test]
    fn test_apply_config_command() {
        let queue = CommandQueue::<4>::new();
        let mut processor = CommandProcessor::new(queue.receiver());
        let mut controller = controller();

        let config = PersistedConfig {
            speed: 1,
            brightness_level: 7,
            effect_index: 8,
            color_selection: 2,
        };
        queue.try_send(LightCommand::ApplyConfig(config)).unwrap();
        processor.process_pending(&mut controller);

        assert_eq!(controller.persisted_config(), config);
    }
}
