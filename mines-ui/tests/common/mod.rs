#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mines_ui::surface::{blank, create_frame, fill};
use mines_ui::{Color, Font, Rect, Surface, UiError};

pub const GLYPH_W: u32 = 6;
pub const GLYPH_H: u32 = 10;

/// 每个字符画成一个实心方块的等宽字体，空格留空
pub struct BlockFont;

impl Font for BlockFont {
    fn size(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * GLYPH_W, GLYPH_H)
    }

    fn height(&self) -> u32 {
        GLYPH_H
    }

    fn render(&self, text: &str, color: Color) -> Result<Surface, UiError> {
        let (w, h) = self.size(text);
        let mut surface = blank(w, h);
        for (i, c) in text.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            let x = (i as u32 * GLYPH_W) as i32;
            fill(&mut surface, Rect::new(x, 1, GLYPH_W - 1, GLYPH_H - 2), color);
        }
        Ok(surface)
    }
}

/// 总是渲染失败的字体
pub struct BrokenFont;

impl Font for BrokenFont {
    fn size(&self, text: &str) -> (u32, u32) {
        BlockFont.size(text)
    }

    fn height(&self) -> u32 {
        GLYPH_H
    }

    fn render(&self, _text: &str, _color: Color) -> Result<Surface, UiError> {
        Err(UiError::Render("no glyphs".into()))
    }
}

/// 可以中途切换成渲染失败的字体
pub struct SwitchFont {
    broken: Rc<Cell<bool>>,
}

impl Font for SwitchFont {
    fn size(&self, text: &str) -> (u32, u32) {
        BlockFont.size(text)
    }

    fn height(&self) -> u32 {
        GLYPH_H
    }

    fn render(&self, text: &str, color: Color) -> Result<Surface, UiError> {
        if self.broken.get() {
            return Err(UiError::Render("font switched off".into()));
        }
        BlockFont.render(text, color)
    }
}

/// 返回开关和字体，开关置为 true 后所有渲染都失败
pub fn switch_font() -> (Rc<Cell<bool>>, Rc<dyn Font>) {
    let broken = Rc::new(Cell::new(false));
    (broken.clone(), Rc::new(SwitchFont { broken }))
}

pub fn font() -> Rc<dyn Font> {
    Rc::new(BlockFont)
}

pub const MARKER: u32 = 8;

pub fn markers() -> (Surface, Surface) {
    let unselected = create_frame(MARKER, MARKER, Color::WHITE, 1);
    let mut selected = unselected.clone();
    fill(&mut selected, Rect::new(2, 2, MARKER - 4, MARKER - 4), Color::WHITE);
    (unselected, selected)
}

/// 记录回调参数
pub fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |s: &str| sink.borrow_mut().push(s.to_string()))
}
