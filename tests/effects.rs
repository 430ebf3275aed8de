mod tests {
    use myrtio_tree_light::LED_COUNT;
    use myrtio_tree_light::color::{
        ColorGenerator, Hsv, Rgb, blend_colors, hsv2rgb, rgb_from_u32,
    };
    use myrtio_tree_light::effect::{
        CyclingEffect, Effect, EffectContext, EffectControl, EffectId, EffectRegistry,
        GradientEffect, OffEffect, RainbowEffect, RunningLightEffect, SolidEffect,
        TwinkleFoxEffect, TwoColorChangeEffect,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn generator() -> ColorGenerator {
        ColorGenerator::with_colors(3, RED, BLUE)
    }

    fn render(
        effect: &mut dyn Effect,
        colors: &mut ColorGenerator,
        time: u32,
    ) -> ([Rgb; LED_COUNT], EffectControl, Option<bool>) {
        let mut leds = [Rgb::new(1, 2, 3); LED_COUNT];
        let mut ctx = EffectContext::new(colors);
        let control = effect.render(&mut ctx, &mut leds, time);
        (leds, control, ctx.reset_request())
    }

    fn rainbow(hue: u8) -> Rgb {
        hsv2rgb(Hsv {
            hue,
            sat: 240,
            val: 255,
        })
    }

    #[test]
    fn test_effect_id() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::Off));
        assert_eq!(EffectId::from_raw(9), Some(EffectId::Cycling));
        assert_eq!(EffectId::from_raw(10), None);
        assert_eq!(EffectId::TwoColorChange.as_str(), "twoColorChange");
        assert_eq!(
            EffectId::parse_from_str("twinkleFox"),
            Some(EffectId::TwinkleFox)
        );
        assert_eq!(EffectId::parse_from_str("aurora"), None);
        assert_eq!(EffectId::Cycling.next(), EffectId::Off);
        assert_eq!(EffectId::Off.next(), EffectId::Solid);
        assert_eq!(EffectId::names()[3], "gradientHorizontal");
        for id in EffectId::ALL {
            assert_eq!(EffectId::from_raw(id.as_raw()), Some(id));
        }
    }

    #[test]
    fn test_effect_slots() {
        assert!(EffectId::Cycling.to_slot().is_none());
        for id in &EffectId::ALL[..9] {
            let slot = id.to_slot();
            assert_eq!(slot.map(|slot| slot.id()), Some(*id));
        }
    }

    #[test]
    fn test_reset_request_full_wins() {
        let mut colors = generator();
        let mut ctx = EffectContext::new(&mut colors);
        assert_eq!(ctx.reset_request(), None);
        ctx.request_reset(true);
        assert_eq!(ctx.reset_request(), Some(true));
        ctx.request_reset(false);
        assert_eq!(ctx.reset_request(), Some(false));
        ctx.request_reset(true);
        assert_eq!(ctx.reset_request(), Some(false));
    }

    #[test]
    fn test_off_and_solid() {
        let mut colors = generator();

        let (leds, control, reset) = render(&mut OffEffect, &mut colors, 1234);
        assert_eq!(leds, [BLACK; LED_COUNT]);
        assert_eq!(control, EffectControl::default());
        assert!(control.fade_over);
        assert!(!control.allow_auto_color_change);
        assert_eq!(reset, None);

        let (leds, control, _) = render(&mut SolidEffect, &mut colors, 1234);
        assert_eq!(leds, [RED; LED_COUNT]);
        assert!(control.allow_auto_color_change);
    }

    #[test]
    fn test_two_color_change() {
        let mut colors = generator();
        let mut effect = TwoColorChangeEffect::new();

        let (leds, control, _) = render(&mut effect, &mut colors, 0);
        assert!(control.allow_auto_color_change);
        assert_eq!(leds[0], RED);
        assert_eq!(leds[1], BLUE);
        assert_eq!(leds[12], RED);

        // fade starts 512 ms before the swap
        let (leds, _, _) = render(&mut effect, &mut colors, 1488);
        assert_eq!(leds[0], RED);
        let (leds, _, _) = render(&mut effect, &mut colors, 1744);
        assert_eq!(leds[0], blend_colors(RED, BLUE, 128));
        assert_eq!(leds[1], blend_colors(BLUE, RED, 128));
        let (leds, _, _) = render(&mut effect, &mut colors, 1999);
        assert_eq!(leds[0], BLUE);
        assert_eq!(leds[1], RED);

        let (leds, _, _) = render(&mut effect, &mut colors, 2000);
        assert!(effect.is_swapped());
        assert_eq!(leds[0], BLUE);
        assert_eq!(leds[1], RED);

        let (leds, _, _) = render(&mut effect, &mut colors, 2100);
        assert_eq!(leds[0], BLUE);

        effect.reset(false);
        assert!(!effect.is_swapped());
        let (leds, _, _) = render(&mut effect, &mut colors, 0);
        assert_eq!(leds[0], RED);
    }

    #[test]
    fn test_gradient_horizontal() {
        let mut colors = generator();
        let mut effect = GradientEffect::horizontal();

        let (leds, control, reset) = render(&mut effect, &mut colors, 0);
        assert_eq!(leds, [RED; LED_COUNT]);
        assert!(control.fade_over);
        assert!(!control.allow_auto_color_change);
        assert_eq!(reset, None);

        // blend value 256: bottom ring runs from red to blue, apex stays red
        let (leds, _, _) = render(&mut effect, &mut colors, 256 << 5);
        assert_eq!(leds[0], RED);
        assert_eq!(leds[8], RED);
        assert_eq!(leds[12], RED);
        assert!(leds[7].b > 250);
        assert!(leds[11].b > 250);
    }

    #[test]
    fn test_gradient_wraps_to_next_color() {
        let mut colors = generator();
        let mut effect = GradientEffect::horizontal();
        let next = colors.next();

        let (_, control, reset) = render(&mut effect, &mut colors, (512 << 5) - 1);
        assert!(control.fade_over);
        assert_eq!(reset, None);
        assert_eq!(colors.generation(), 0);

        let (leds, control, reset) = render(&mut effect, &mut colors, 512 << 5);
        assert!(!control.fade_over);
        assert_eq!(reset, Some(true));
        assert_eq!(colors.generation(), 1);
        assert_eq!(colors.current(), next);
        assert_eq!(leds, [next; LED_COUNT]);
    }

    #[test]
    fn test_gradient_vertical() {
        let mut colors = generator();
        let mut effect = GradientEffect::vertical();

        let (leds, _, _) = render(&mut effect, &mut colors, 256 << 5);
        assert_eq!(&leds[..8], &[RED; 8]);
        assert_eq!(&leds[8..12], &[blend_colors(RED, BLUE, 127); 4]);
        assert_eq!(leds[12], BLUE);

        let (leds, _, _) = render(&mut effect, &mut colors, 511 << 5);
        assert_eq!(leds[0], blend_colors(RED, BLUE, 255));
        assert_eq!(leds[12], BLUE);
    }

    #[test]
    fn test_rainbow_horizontal() {
        let mut colors = generator();
        let mut effect = RainbowEffect::horizontal();

        let (leds, control, _) = render(&mut effect, &mut colors, 10 << 5);
        assert!(!control.allow_auto_color_change);
        for (i, led) in leds[..8].iter().enumerate() {
            assert_eq!(*led, rainbow(10 + 32 * i as u8));
        }
        for (i, led) in leds[8..12].iter().enumerate() {
            assert_eq!(*led, rainbow(10u8.wrapping_add(64 * i as u8)));
        }
        assert_eq!(leds[12], rainbow(10));
    }

    #[test]
    fn test_rainbow_vertical() {
        let mut colors = generator();
        let mut effect = RainbowEffect::vertical();

        let (leds, _, _) = render(&mut effect, &mut colors, 0);
        assert_eq!(&leds[..8], &[rainbow(0); 8]);
        assert_eq!(&leds[8..12], &[rainbow(32); 4]);
        assert_eq!(leds[12], rainbow(64));
    }

    #[test]
    fn test_rainbow_vertical_palette() {
        let mut colors = generator();
        // Snow: twelve dim stops followed by four bright ones
        colors.set_selection(5);
        let dim = rgb_from_u32(0x30_4048);
        let bright = rgb_from_u32(0xE0_F0FF);
        let mut effect = RainbowEffect::vertical();

        let (leds, _, _) = render(&mut effect, &mut colors, 192 << 5);
        assert_eq!(leds[0], bright);
        assert_eq!(leds[8], bright);
        assert_eq!(leds[12], dim);
    }

    #[test]
    fn test_running_light() {
        let mut colors = generator();
        let mut effect = RunningLightEffect::new();

        let (leds, control, _) = render(&mut effect, &mut colors, 0);
        assert_eq!(leds, [BLACK; LED_COUNT]);
        assert!(control.allow_auto_color_change);

        // first pixel fading in
        let (leds, control, _) = render(&mut effect, &mut colors, 512);
        assert!(!control.allow_auto_color_change);
        assert_eq!(leds, [BLACK; LED_COUNT]);
        let (leds, _, _) = render(&mut effect, &mut colors, 512 + 255);
        assert_eq!(leds[12], RED);
        assert_eq!(&leds[..12], &[BLACK; 12]);

        // fourth step: three lit pixels plus one fading in
        let (leds, _, _) = render(&mut effect, &mut colors, 5 * 512);
        assert_eq!(leds[11], RED);
        assert_eq!(leds[10], RED);
        assert_eq!(leds[9], RED);
        assert_eq!(leds[8], BLACK);
        assert_eq!(leds[12], BLACK);

        // the run wraps after 13 + 4 steps
        let (leds, control, _) = render(&mut effect, &mut colors, 17 * 512);
        assert!(control.allow_auto_color_change);
        assert_eq!(leds, [BLACK; LED_COUNT]);
        let (leds, _, _) = render(&mut effect, &mut colors, 18 * 512 + 255);
        assert_eq!(leds[12], RED);

        effect.reset(false);
        let (leds, control, _) = render(&mut effect, &mut colors, 0);
        assert!(control.allow_auto_color_change);
        assert_eq!(leds, [BLACK; LED_COUNT]);
    }

    #[test]
    fn test_running_light_changes_color_only_when_dark() {
        let mut colors = generator();
        let mut effect = RunningLightEffect::new();
        for time in (0..3 * 17 * 512).step_by(37) {
            let (leds, control, _) = render(&mut effect, &mut colors, time);
            if control.allow_auto_color_change {
                assert_eq!(leds, [BLACK; LED_COUNT], "lit at {time}");
            }
        }
    }

    #[test]
    fn test_twinkle_fox_is_repeatable() {
        let mut colors = generator();
        colors.set_selection(4);
        let mut effect = TwinkleFoxEffect::new();

        let mut lit = 0;
        for time in (0..20_000).step_by(250) {
            let (first, control, _) = render(&mut effect, &mut colors, time);
            let (second, _, _) = render(&mut effect, &mut colors, time);
            assert!(control.allow_auto_color_change);
            assert_eq!(first, second);
            lit += first.iter().filter(|led| **led != BLACK).count();
        }
        assert!(lit > 0);
    }

    #[test]
    fn test_twinkle_fox_cools_over_black() {
        let mut colors = ColorGenerator::with_colors(3, WHITE, WHITE);
        let mut effect = TwinkleFoxEffect::new();

        let mut dark = 0;
        let mut cooled = 0;
        for time in (0..20_000).step_by(125) {
            let (leds, _, _) = render(&mut effect, &mut colors, time);
            for led in leds {
                assert!(led.r >= led.g && led.g >= led.b, "{led:?} at {time}");
                if led == BLACK {
                    dark += 1;
                } else if led.r > led.b {
                    cooled += 1;
                }
            }
        }
        assert!(dark > 0);
        assert!(cooled > 0);
    }

    #[test]
    fn test_cycling_counts_color_changes() {
        let mut effect = CyclingEffect::new();
        assert_eq!(effect.active_effect(), EffectId::Solid);
        assert_eq!(effect.cycles_of(EffectId::GradientHorizontal), Some(4));
        assert_eq!(effect.cycles_of(EffectId::Off), None);

        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::TwoColorChange);
        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::GradientHorizontal);
        for _ in 0..3 {
            effect.reset(true);
            assert_eq!(effect.active_effect(), EffectId::GradientHorizontal);
        }
        assert_eq!(effect.color_changes(), 3);
        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::GradientVertical);

        effect.reset(false);
        assert_eq!(effect.active_effect(), EffectId::Solid);
        assert_eq!(effect.color_changes(), 0);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut effect = CyclingEffect::new()
            .with_cycles(EffectId::GradientHorizontal, 1)
            .with_cycles(EffectId::GradientVertical, 1);
        for _ in 0..7 {
            effect.reset(true);
        }
        assert_eq!(effect.active_effect(), EffectId::TwinkleFox);
        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::Solid);
    }

    #[test]
    fn test_cycling_time_cap() {
        let mut colors = generator();
        let mut effect = CyclingEffect::new();
        effect.reset(true);
        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::GradientHorizontal);

        let (_, _, reset) = render(&mut effect, &mut colors, 32_000);
        assert_eq!(reset, Some(true));
        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::GradientHorizontal);

        // the cap moves on regardless of the color change count
        let (_, _, reset) = render(&mut effect, &mut colors, 60_000);
        assert_eq!(reset, Some(true));
        effect.reset(true);
        assert_eq!(effect.active_effect(), EffectId::GradientVertical);
    }

    #[test]
    fn test_cycling_renders_active_effect() {
        let mut colors = generator();
        let mut effect = CyclingEffect::new();
        let (leds, control, reset) = render(&mut effect, &mut colors, 100);
        assert_eq!(leds, [RED; LED_COUNT]);
        assert!(control.allow_auto_color_change);
        assert_eq!(reset, None);
    }

    #[test]
    fn test_registry() {
        let mut colors = generator();
        let mut registry = EffectRegistry::new();
        let (leds, _, _) = render(registry.effect_mut(EffectId::Solid), &mut colors, 0);
        assert_eq!(leds, [RED; LED_COUNT]);
        let (leds, _, _) = render(registry.effect_mut(EffectId::Cycling), &mut colors, 0);
        assert_eq!(leds, [RED; LED_COUNT]);
        assert_eq!(registry.cycling().active_effect(), EffectId::Solid);
    }
}
