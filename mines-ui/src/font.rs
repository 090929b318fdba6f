use crate::{Color, Surface, UiError};

/// 控件用来测量和光栅化文字的字体
pub trait Font {
    /// 渲染 `text` 后的像素尺寸 (宽, 高)
    fn size(&self, text: &str) -> (u32, u32);

    /// 一行文字的高度
    fn height(&self) -> u32;

    /// 把文字渲染成透明背景的图像，尺寸与 `size(text)` 一致
    fn render(&self, text: &str, color: Color) -> Result<Surface, UiError>;
}
