mod tests {
    use myrtio_tree_light::menu::{
        ButtonEvent, LongPressOverflow, Menu, MenuConfig, MenuMode, MenuResponse,
    };

    fn hold(menu: &mut Menu, repeats: u8) {
        for _ in 0..repeats {
            assert_eq!(menu.handle(ButtonEvent::RepeatPressed), MenuResponse::Consumed);
        }
    }

    #[test]
    fn test_long_press_levels() {
        let mut menu = Menu::new(&MenuConfig::default());
        assert_eq!(menu.mode(), MenuMode::Main);
        assert!(!menu.is_active());

        for level in 1..=4 {
            hold(&mut menu, 1);
            assert_eq!(menu.long_press_level(), level);
            assert!(menu.is_active());
        }

        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::Invoke(4));
        assert_eq!(menu.long_press_level(), 0);
        assert!(!menu.is_active());
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::NotConsumed);
    }

    #[test]
    fn test_release_invokes_once() {
        for level in 1..=4 {
            let mut menu = Menu::new(&MenuConfig::default());
            hold(&mut menu, level);
            assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::Invoke(level));
            assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::NotConsumed);
        }
    }

    #[test]
    fn test_holding_past_last_level_closes() {
        let mut menu = Menu::new(&MenuConfig::default());
        hold(&mut menu, 5);
        assert_eq!(menu.mode(), MenuMode::Closing);
        assert_eq!(menu.long_press_level(), 0);
        assert!(menu.is_active());

        hold(&mut menu, 3);
        assert_eq!(menu.mode(), MenuMode::Closing);
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::Consumed);
        assert_eq!(menu.mode(), MenuMode::Main);
        assert!(!menu.is_active());
    }

    #[test]
    fn test_holding_past_last_level_wraps() {
        let mut menu = Menu::new(&MenuConfig {
            long_press_levels: 3,
            overflow: LongPressOverflow::Wrap,
        });
        hold(&mut menu, 3);
        assert_eq!(menu.long_press_level(), 3);
        hold(&mut menu, 1);
        assert_eq!(menu.long_press_level(), 1);
        assert_eq!(menu.mode(), MenuMode::Main);
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::Invoke(1));
    }

    #[test]
    fn test_clicks_fall_through_in_main() {
        let mut menu = Menu::new(&MenuConfig::default());
        assert_eq!(menu.handle(ButtonEvent::Clicked), MenuResponse::NotConsumed);
        assert_eq!(menu.handle(ButtonEvent::DoubleClicked), MenuResponse::NotConsumed);
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::NotConsumed);
        assert!(!menu.handle(ButtonEvent::Clicked).is_consumed());
        assert!(!menu.is_active());
    }

    #[test]
    fn test_sub_selection() {
        let mut menu = Menu::new(&MenuConfig::default());
        menu.open(MenuMode::Brightness, 8, 3);
        assert!(menu.is_active());
        assert_eq!(menu.sub_selection(), 3);

        assert_eq!(menu.handle(ButtonEvent::Clicked), MenuResponse::SelectionChanged(4));
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::SelectionChanged(5));
        assert_eq!(
            menu.handle(ButtonEvent::DoubleClicked),
            MenuResponse::SelectionChanged(4)
        );

        menu.open(MenuMode::Color, 8, 7);
        assert_eq!(menu.handle(ButtonEvent::Clicked), MenuResponse::SelectionChanged(0));
        assert_eq!(
            menu.handle(ButtonEvent::DoubleClicked),
            MenuResponse::SelectionChanged(7)
        );
    }

    #[test]
    fn test_repeat_closes_sub_menu() {
        let mut menu = Menu::new(&MenuConfig::default());
        menu.open(MenuMode::Color, 8, 0);
        hold(&mut menu, 1);
        assert_eq!(menu.mode(), MenuMode::Closing);
        assert_eq!(menu.long_press_level(), 0);

        assert_eq!(menu.handle(ButtonEvent::Clicked), MenuResponse::NotConsumed);
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::Consumed);
        assert_eq!(menu.mode(), MenuMode::Main);
    }

    #[test]
    fn test_open_clamps_selection() {
        let mut menu = Menu::new(&MenuConfig::default());
        menu.open(MenuMode::Color, 8, 12);
        assert_eq!(menu.sub_selection(), 7);

        menu.open(MenuMode::Brightness, 0, 5);
        assert_eq!(menu.sub_selection_count(), 1);
        assert_eq!(menu.sub_selection(), 0);
        assert_eq!(menu.handle(ButtonEvent::Clicked), MenuResponse::SelectionChanged(0));
    }

    #[test]
    fn test_sub_selection_stays_in_range() {
        let events = [
            ButtonEvent::Clicked,
            ButtonEvent::DoubleClicked,
            ButtonEvent::DoubleClicked,
            ButtonEvent::Released,
            ButtonEvent::DoubleClicked,
            ButtonEvent::DoubleClicked,
            ButtonEvent::DoubleClicked,
        ];
        let mut menu = Menu::new(&MenuConfig::default());
        menu.open(MenuMode::Brightness, 3, 1);
        for event in events {
            menu.handle(event);
            assert!(menu.sub_selection() < menu.sub_selection_count());
        }
    }

    #[test]
    fn test_close() {
        let mut menu = Menu::new(&MenuConfig::default());
        hold(&mut menu, 2);
        menu.close();
        assert!(!menu.is_active());
        assert_eq!(menu.handle(ButtonEvent::Released), MenuResponse::NotConsumed);
    }
}
