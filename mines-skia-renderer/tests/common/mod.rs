#![allow(dead_code)]

use std::rc::Rc;

use mines_skia_renderer::config::{MenuConfig, ThemeConfig};
use mines_skia_renderer::core::markers::default_markers;
use mines_skia_renderer::screens::menu::{MenuAssets, MenuScreen};
use mines_ui::surface::{blank, fill};
use mines_ui::{Color, Font, Point, Rect, Surface, UiError};

pub const GLYPH_W: u32 = 6;
pub const GLYPH_H: u32 = 10;

/// 等宽方块字体，不依赖系统字体
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
            if c != ' ' {
                fill(&mut surface, Rect::new((i as u32 * GLYPH_W) as i32, 1, GLYPH_W - 1, GLYPH_H - 2), color);
            }
        }
        Ok(surface)
    }
}

pub const AREA: Rect = Rect { x: 0, y: 0, w: 640, h: 640 };

pub fn menu() -> MenuScreen {
    let theme = ThemeConfig::default();
    let (unselected_marker, selected_marker) = default_markers(8, theme.font_color());
    let font: Rc<dyn Font> = Rc::new(BlockFont);
    let assets = MenuAssets {
        font: font.clone(),
        title_font: font,
        unselected_marker,
        selected_marker,
    };
    MenuScreen::new(assets, &theme, &MenuConfig::default(), AREA).unwrap()
}

/// 控件内坐标的矩形 -> 屏幕上的中心点
pub fn center_in(widget: Rect, inner: Rect) -> Point {
    inner.translate(widget.x, widget.y).center_point()
}
