use crate::Point;

/// 指针位置的来源。控件在处理点击时查询它，而不是读取全局状态。
pub trait PointerSource {
    fn pointer_pos(&self) -> Point;
}

impl PointerSource for Point {
    fn pointer_pos(&self) -> Point {
        *self
    }
}

impl PointerSource for (i32, i32) {
    fn pointer_pos(&self) -> Point {
        Point::from(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// 主按键 (左键)
    pub const PRIMARY: Self = MouseButton::Left;

    pub fn is_primary(&self) -> bool {
        *self == Self::PRIMARY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Enter,
    /// 可显示的字符键
    Char(char),
    /// 其他有名字的按键 ("escape", "tab", "f1" ...)，输入框不接收
    Named(String),
}

/// 每帧的输入状态，由 Renderer 更新
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    /// 当前鼠标位置 (逻辑坐标)
    pub mouse_pos: Point,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, x: i32, y: i32) {
        self.mouse_pos = Point::new(x, y);
    }
}

impl PointerSource for UiContext {
    fn pointer_pos(&self) -> Point {
        self.mouse_pos
    }
}
