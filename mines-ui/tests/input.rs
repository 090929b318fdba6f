mod common;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use mines_ui::widgets::{Input, InputOptions};
    use mines_ui::{Color, Key, MouseButton, Point, Rect};

    use crate::common::{font, switch_font, BrokenFont};

    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    fn mines_input(options: InputOptions) -> Input {
        Input::new(font(), Color::WHITE, "Mines", 10, options).unwrap()
    }

    fn digits_input() -> Input {
        mines_input(InputOptions::new().active().max_length(3).allowed_symbols(DIGITS))
    }

    /// 点击值区域进入编辑
    fn focus(input: &mut Input) {
        let r = input.value_rect().translate(input.rect().x, input.rect().y);
        input.on_mouse_click(MouseButton::Left, &r.center_point()).unwrap();
    }

    #[test]
    fn test_layout() {
        let input = mines_input(InputOptions::new());
        // "Mines  10"：标题+分隔符 42 像素，"|" 6 像素
        assert_eq!(input.rect(), Rect::new(0, 0, 54, 10));
        assert_eq!(input.value_rect(), Rect::new(36, 0, 24, 10));

        let wide = mines_input(InputOptions::new().width(100).position(Point::new(3, 4)));
        assert_eq!(wide.rect(), Rect::new(3, 4, 100, 10));
        assert_eq!(wide.value_rect(), Rect::new(59, 0, 24, 10));
    }

    #[test]
    fn test_set_value() {
        let mut input = mines_input(InputOptions::new());
        input.set_value("10").unwrap();
        assert_eq!(input.revision(), 0);

        input.set_value(12).unwrap();
        assert_eq!(input.revision(), 1);
        assert_eq!(input.value(), "12");
        assert_eq!(input.pending_value(), "12");
        assert!(!input.is_editing());
        assert_eq!(input.rect().w, 54);
    }

    #[test]
    fn test_inactive_input_ignores_clicks() {
        let mut input = mines_input(InputOptions::new());
        focus(&mut input);
        assert!(!input.is_editing());
        assert_eq!(input.revision(), 0);

        input.on_key_press(&Key::Char('5')).unwrap();
        assert_eq!(input.pending_value(), "10");
    }

    #[test]
    fn test_edit_with_cap() {
        let mut input = digits_input();

        focus(&mut input);
        assert!(input.is_editing());

        input.on_key_press(&Key::Char('5')).unwrap();
        assert_eq!(input.pending_value(), "105");

        input.on_key_press(&Key::Char('9')).unwrap();
        assert_eq!(input.pending_value(), "105");

        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(input.value(), "105");
        assert!(!input.is_editing());
    }

    #[test]
    fn test_max_length_cap() {
        let mut input = Input::new(font(), Color::WHITE, "Seed", "", InputOptions::new().active().max_length(4))
            .unwrap();
        focus(&mut input);
        for c in "abcdef".chars() {
            input.on_key_press(&Key::Char(c)).unwrap();
        }
        assert_eq!(input.pending_value(), "abcd");

        // 退格和回车不受长度限制
        input.on_key_press(&Key::Backspace).unwrap();
        assert_eq!(input.pending_value(), "abc");
        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_allowed_symbols() {
        let mut input = digits_input();
        focus(&mut input);
        input.on_key_press(&Key::Backspace).unwrap();
        input.on_key_press(&Key::Char('a')).unwrap();
        input.on_key_press(&Key::Named("escape".into())).unwrap();
        input.on_key_press(&Key::Char('7')).unwrap();
        assert_eq!(input.pending_value(), "17");
    }

    #[test]
    fn test_backspace_empty() {
        let mut input = digits_input();
        focus(&mut input);
        input.on_key_press(&Key::Backspace).unwrap();
        input.on_key_press(&Key::Backspace).unwrap();
        let revision = input.revision();
        input.on_key_press(&Key::Backspace).unwrap();
        assert_eq!(input.pending_value(), "");
        assert_eq!(input.revision(), revision);
        assert_eq!(input.value(), "10");
    }

    #[test]
    fn test_keys_ignored_when_not_editing() {
        let mut input = digits_input();
        input.on_key_press(&Key::Backspace).unwrap();
        input.on_key_press(&Key::Char('1')).unwrap();
        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(input.pending_value(), "10");
        assert_eq!(input.revision(), 0);
    }

    #[test]
    fn test_enter_rejected() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut input = mines_input(InputOptions::new().active().on_enter(move |v| {
            sink.borrow_mut().push(v.to_string());
            v.parse::<u32>().is_ok_and(|n| n <= 99)
        }));

        focus(&mut input);
        input.on_key_press(&Key::Char('0')).unwrap();
        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(*calls.borrow(), vec!["100".to_string()]);
        assert_eq!(input.value(), "10");
        assert_eq!(input.pending_value(), "10");
        assert!(!input.is_editing());

        focus(&mut input);
        input.on_key_press(&Key::Backspace).unwrap();
        input.on_key_press(&Key::Char('5')).unwrap();
        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(input.value(), "15");
        assert_eq!(input.pending_value(), "15");
    }

    #[test]
    fn test_blur_discards_edit() {
        let mut input = digits_input();
        focus(&mut input);
        input.on_key_press(&Key::Char('7')).unwrap();
        assert_eq!(input.pending_value(), "107");

        // 点在标题上
        input.on_mouse_click(MouseButton::Left, &(2, 5)).unwrap();
        assert!(!input.is_editing());
        assert_eq!(input.pending_value(), "10");
        assert_eq!(input.value(), "10");
    }

    #[test]
    fn test_right_click_does_not_focus() {
        let mut input = digits_input();
        let r = input.value_rect();
        input.on_mouse_click(MouseButton::Right, &r.center_point()).unwrap();
        assert!(!input.is_editing());
    }

    #[test]
    fn test_frame_only_while_editing() {
        let mut input = digits_input();
        let corner = |i: &Input| {
            let r = i.value_rect();
            Color::from(*i.render().get_pixel(r.x as u32, r.y as u32))
        };
        assert_eq!(corner(&input), Color::TRANSPARENT);

        focus(&mut input);
        assert_eq!(corner(&input), Color::WHITE);
        // 光标让值区域变宽
        assert_eq!(input.value_rect().w, 30);
    }

    #[test]
    fn test_failed_construction() {
        assert!(Input::new(Rc::new(BrokenFont), Color::WHITE, "Mines", 10, InputOptions::new()).is_err());
    }

    #[test]
    fn test_failed_render_keeps_state() {
        let (broken, font) = switch_font();
        let mut input = Input::new(
            font,
            Color::WHITE,
            "Mines",
            10,
            InputOptions::new().active().allowed_symbols(DIGITS),
        )
        .unwrap();
        focus(&mut input);
        input.on_key_press(&Key::Char('5')).unwrap();

        let snapshot = |input: &Input| {
            (
                input.value().to_string(),
                input.pending_value().to_string(),
                input.is_editing(),
                input.revision(),
                input.rect(),
                input.value_rect(),
                input.render().clone(),
            )
        };
        let before = snapshot(&input);
        assert_eq!((before.0.as_str(), before.1.as_str(), before.2, before.3), ("10", "105", true, 2));

        broken.set(true);
        assert!(input.on_key_press(&Key::Char('7')).is_err());
        assert!(snapshot(&input) == before);
        assert!(input.on_key_press(&Key::Backspace).is_err());
        assert!(snapshot(&input) == before);
        assert!(input.on_key_press(&Key::Enter).is_err());
        assert!(snapshot(&input) == before);
        assert!(input.set_value("3").is_err());
        assert!(snapshot(&input) == before);
        // 点在标题上：失焦也需要重新渲染
        assert!(input.on_mouse_click(MouseButton::Left, &(2, 5)).is_err());
        assert!(snapshot(&input) == before);

        // 字体恢复后继续编辑
        broken.set(false);
        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(input.value(), "105");
        assert!(!input.is_editing());
    }

    #[test]
    fn test_named_keys_ignored() {
        let mut input = mines_input(InputOptions::new().active());
        focus(&mut input);
        let revision = input.revision();

        input.on_key_press(&Key::Named("escape".into())).unwrap();
        input.on_key_press(&Key::Named("f1".into())).unwrap();
        assert_eq!(input.pending_value(), "10");
        assert_eq!(input.revision(), revision);
        assert!(input.is_editing());
    }

    #[test]
    fn test_set_on_enter() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut input = digits_input();

        let sink = calls.clone();
        input.set_on_enter(move |v| {
            sink.borrow_mut().push(v.to_string());
            false
        });

        focus(&mut input);
        input.on_key_press(&Key::Backspace).unwrap();
        input.on_key_press(&Key::Enter).unwrap();
        assert_eq!(*calls.borrow(), vec!["1".to_string()]);
        assert_eq!(input.value(), "10");
        assert!(!input.is_editing());
    }
}
