use crate::error::Result;
use crate::surface::{self, create_frame};
use crate::{Color, Font, MouseButton, Point, PointerSource, Rect, Surface, Widget};

/// 边框相对文字的放大比例 (每个方向留 20%)
const FRAME_SCALE: f32 = 1.2;

pub type ClickCallback = Box<dyn FnMut()>;

/// 边框包围的一段文字，左键点击时回调
pub struct Button {
    surface: Surface,
    rect: Rect,
    on_click: Option<ClickCallback>,
}

impl Button {
    /// `frame_color` 为 `None` 时使用文字颜色
    pub fn new(
        font: &dyn Font,
        font_color: Color,
        text: &str,
        on_click: Option<ClickCallback>,
        frame_color: Option<Color>,
        position: Point,
    ) -> Result<Self> {
        let text_image = font.render(text, font_color)?;
        let frame_w = (text_image.width() as f32 * FRAME_SCALE) as u32;
        let frame_h = (text_image.height() as f32 * FRAME_SCALE) as u32;

        let mut surface = create_frame(frame_w, frame_h, frame_color.unwrap_or(font_color), 1);
        let text_rect = Rect::from_size((frame_w, frame_h))
            .center(text_image.width(), text_image.height());
        surface::blit(&mut surface, &text_image, text_rect.position());

        Ok(Self {
            surface,
            rect: Rect::new(position.x, position.y, frame_w, frame_h),
            on_click,
        })
    }

    pub fn set_on_click(&mut self, on_click: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(on_click));
    }

    /// 返回回调是否被触发
    pub fn on_mouse_down(&mut self, button: MouseButton, pointer: &dyn PointerSource) -> bool {
        if !button.is_primary() {
            return false;
        }
        let Some(callback) = self.on_click.as_mut() else {
            return false;
        };

        if self.rect.contains_point(pointer.pointer_pos()) {
            callback();
            return true;
        }
        false
    }

    pub fn render(&self) -> &Surface {
        &self.surface
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Widget for Button {
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
