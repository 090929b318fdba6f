use mines_ui::{Key, MouseButton};
use winit::event::MouseButton as WinitButton;
use winit::keyboard::{Key as WinitKey, NamedKey};

pub fn mouse_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(n) => MouseButton::Other(n),
    }
}

/// 把 winit 的逻辑按键转成控件能理解的按键。多字符的输入 (IME 等) 和未知按键返回 None。
pub fn key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::Backspace) => Some(Key::Backspace),
        WinitKey::Named(NamedKey::Enter) => Some(Key::Enter),
        WinitKey::Named(NamedKey::Space) => Some(Key::Char(' ')),
        WinitKey::Named(named) => Some(Key::Named(format!("{named:?}").to_lowercase())),
        WinitKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            }
        }
        _ => None,
    }
}
