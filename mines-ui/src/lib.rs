pub mod error;
pub mod font;
pub mod input;
pub mod surface;
pub mod types;
pub mod widgets;

pub use error::UiError;
pub use font::Font;
pub use input::{Key, MouseButton, PointerSource, UiContext};
pub use surface::{create_frame, Surface};
pub use types::{Color, Point, Rect};

/// 所有控件共有的能力：一张缓存好的图像和它在屏幕上的位置
pub trait Widget {
    fn render(&self) -> &Surface;

    fn rect(&self) -> Rect;

    fn set_position(&mut self, position: Point);
}

/// 把控件当前的图像贴到目标画布上
pub fn compose(target: &mut Surface, widget: &dyn Widget) {
    surface::blit(target, widget.render(), widget.rect().position());
}
