use std::collections::HashSet;
use std::rc::Rc;

use crate::error::Result;
use crate::surface::{self, blank, create_frame};
use crate::{Color, Font, Key, MouseButton, Point, PointerSource, Rect, Surface, Widget};

pub type EnterCallback = Box<dyn FnMut(&str) -> bool>;

/// 编辑时追加在值后面的光标
const CURSOR: char = '_';
/// 用这个字形的宽度作为值区域左右的留白
const MARGIN_GLYPH: &str = "|";

/// 输入框的可选配置
pub struct InputOptions {
    pub delimiter: String,
    pub frame_color: Option<Color>,
    pub active_input: bool,
    pub width: Option<u32>,
    pub max_value_length: Option<usize>,
    pub allowed_symbols: Option<HashSet<String>>,
    pub on_enter: Option<EnterCallback>,
    pub position: Point,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            delimiter: "  ".to_string(),
            frame_color: None,
            active_input: false,
            width: None,
            max_value_length: None,
            allowed_symbols: None,
            on_enter: None,
            position: Point::ORIGIN,
        }
    }
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn frame_color(mut self, color: Color) -> Self {
        self.frame_color = Some(color);
        self
    }

    /// 允许点击后编辑
    pub fn active(mut self) -> Self {
        self.active_input = true;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_value_length = Some(len);
        self
    }

    pub fn allowed_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.allowed_symbols = Some(symbols.into_iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn on_enter(mut self, callback: impl FnMut(&str) -> bool + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}

/// 一次渲染的结果，成功后才写回控件
struct Rendered {
    surface: Surface,
    value_rect: Rect,
}

/// "标题 + 分隔符 + 值" 形式的输入框
pub struct Input {
    font: Rc<dyn Font>,
    font_color: Color,
    frame_color: Color,
    title: String,
    delimiter: String,
    width: Option<u32>,
    active_input: bool,
    max_value_length: Option<usize>,
    allowed_symbols: Option<HashSet<String>>,
    on_enter: Option<EnterCallback>,

    /// 已提交的值
    value: String,
    /// 编辑中的值，不在编辑时与 value 相同
    current_value: String,
    in_input: bool,

    surface: Surface,
    value_rect: Rect,
    rect: Rect,
    revision: u64,
}

impl Input {
    pub fn new(
        font: Rc<dyn Font>,
        font_color: Color,
        title: &str,
        value: impl ToString,
        options: InputOptions,
    ) -> Result<Self> {
        let value = value.to_string();
        let InputOptions {
            delimiter,
            frame_color,
            active_input,
            width,
            max_value_length,
            allowed_symbols,
            on_enter,
            position,
        } = options;

        let mut input = Self {
            font,
            font_color,
            frame_color: frame_color.unwrap_or(font_color),
            title: title.to_string(),
            delimiter,
            width,
            active_input,
            max_value_length,
            allowed_symbols,
            on_enter,
            current_value: value.clone(),
            value,
            in_input: false,
            surface: blank(0, 0),
            value_rect: Rect::default(),
            rect: Rect::default(),
            revision: 0,
        };

        let rendered = input.prepare_render(&input.current_value, false)?;
        input.rect = Rect::from_size(rendered.surface.dimensions()).with_position(position);
        input.surface = rendered.surface;
        input.value_rect = rendered.value_rect;
        Ok(input)
    }

    fn prepare_render(&self, current_value: &str, in_input: bool) -> Result<Rendered> {
        let mut value = current_value.to_string();
        if in_input {
            value.push(CURSOR);
        }

        let head = format!("{}{}", self.title, self.delimiter);
        let text = self.font.render(&format!("{head}{value}"), self.font_color)?;

        let width = self.width.unwrap_or(text.width());
        let mut surface = blank(width, text.height());
        let text_rect = Rect::from_size(surface.dimensions()).center(text.width(), text.height());

        let (title_w, _) = self.font.size(&head);
        let (value_w, value_h) = self.font.size(&value);
        let (margin, _) = self.font.size(MARGIN_GLYPH);
        let value_rect = Rect::new(
            text_rect.x + title_w as i32 - margin as i32,
            text_rect.y,
            value_w + 2 * margin,
            value_h,
        );

        if in_input {
            let frame = create_frame(value_rect.w, value_rect.h, self.frame_color, 1);
            surface::blit(&mut surface, &frame, value_rect.position());
        }
        surface::blit(&mut surface, &text, text_rect.position());

        Ok(Rendered { surface, value_rect })
    }

    /// 渲染成功后才提交新状态
    fn apply(&mut self, current_value: String, in_input: bool) -> Result<()> {
        let rendered = self.prepare_render(&current_value, in_input)?;
        self.current_value = current_value;
        self.in_input = in_input;
        self.rect.w = rendered.surface.width();
        self.rect.h = rendered.surface.height();
        self.surface = rendered.surface;
        self.value_rect = rendered.value_rect;
        self.revision += 1;
        Ok(())
    }

    /// 从外部设置值 (例如同步模型)，不进入编辑状态
    pub fn set_value(&mut self, value: impl ToString) -> Result<()> {
        let value = value.to_string();
        if value == self.value && value == self.current_value {
            return Ok(());
        }
        self.apply(value.clone(), self.in_input)?;
        self.value = value;
        Ok(())
    }

    pub fn on_mouse_click(&mut self, button: MouseButton, pointer: &dyn PointerSource) -> Result<()> {
        if !self.active_input || !button.is_primary() {
            return Ok(());
        }

        let p = pointer.pointer_pos();
        let (x, y) = (p.x - self.rect.x, p.y - self.rect.y);

        if self.value_rect.contains(x, y) {
            self.apply(self.current_value.clone(), true)
        } else {
            // 失去焦点，丢弃未提交的修改
            self.apply(self.value.clone(), false)
        }
    }

    pub fn on_key_press(&mut self, key: &Key) -> Result<()> {
        if !self.in_input {
            return Ok(());
        }

        match key {
            Key::Backspace => {
                let mut value = self.current_value.clone();
                if value.pop().is_some() {
                    self.apply(value, true)?;
                }
                Ok(())
            }
            Key::Enter => self.commit(),
            Key::Char(c) => {
                if self.max_value_length.is_some_and(|max| self.current_value.chars().count() >= max) {
                    return Ok(());
                }

                let symbol = c.to_string();
                if let Some(allowed) = &self.allowed_symbols {
                    if !allowed.contains(&symbol) {
                        return Ok(());
                    }
                }

                let value = format!("{}{}", self.current_value, symbol);
                self.apply(value, true)
            }
            Key::Named(_) => Ok(()),
        }
    }

    fn commit(&mut self) -> Result<()> {
        let accepted = match self.on_enter.as_mut() {
            Some(callback) => callback(&self.current_value),
            None => true,
        };

        if accepted {
            log::debug!("Input '{}' committed '{}'", self.title, self.current_value);
            self.apply(self.current_value.clone(), false)?;
            self.value = self.current_value.clone();
        } else {
            log::debug!("Input '{}' rejected '{}', reverting to '{}'", self.title, self.current_value, self.value);
            self.apply(self.value.clone(), false)?;
        }
        Ok(())
    }

    pub fn set_on_enter(&mut self, callback: impl FnMut(&str) -> bool + 'static) {
        self.on_enter = Some(Box::new(callback));
    }

    /// 已提交的值
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 编辑中的值
    pub fn pending_value(&self) -> &str {
        &self.current_value
    }

    pub fn is_editing(&self) -> bool {
        self.in_input
    }

    /// 值区域 (控件内坐标)，点击它进入编辑
    pub fn value_rect(&self) -> Rect {
        self.value_rect
    }

    /// 重新渲染的次数
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn render(&self) -> &Surface {
        &self.surface
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Widget for Input {
    fn render(&self) -> &Surface {
        &self.surface
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_position(&mut self, position: Point) {
        self.rect = self.rect.with_position(position);
    }
}
