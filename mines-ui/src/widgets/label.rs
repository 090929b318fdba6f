use std::rc::Rc;

use crate::error::Result;
use crate::{Color, Font, Point, Rect, Surface, Widget};

/// 静态或可变的文字
pub struct Label {
    font: Rc<dyn Font>,
    color: Color,
    text: String,
    surface: Surface,
    rect: Rect,
    revision: u64,
}

impl Label {
    pub fn new(font: Rc<dyn Font>, color: Color, text: &str, position: Point) -> Result<Self> {
        let surface = font.render(text, color)?;
        let rect = Rect::from_size(surface.dimensions()).with_position(position);
        Ok(Self {
            font,
            color,
            text: text.to_string(),
            surface,
            rect,
            revision: 0,
        })
    }

    /// 重新渲染文字。位置不变，尺寸跟随新图像，不会重新居中。
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let surface = self.font.render(text, self.color)?;
        self.rect.w = surface.width();
        self.rect.h = surface.height();
        self.surface = surface;
        self.text = text.to_string();
        self.revision += 1;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
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

impl Widget for Label {
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
