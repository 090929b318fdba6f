use mines_ui::surface::blank;
use mines_ui::{Color, Font, Surface, UiError};
use skia_safe::font::Edging;
use skia_safe::{surfaces, AlphaType, ColorType, FontMgr, FontStyle, ImageInfo, Paint, Point, Typeface};

/// 用 skia 测量和光栅化文字
pub struct SkiaFont {
    font: skia_safe::Font,
    /// 基线到顶部的距离
    ascent: f32,
    line_height: u32,
}

impl SkiaFont {
    pub fn new(typeface: Typeface, size: f32) -> Self {
        let mut font = skia_safe::Font::from_typeface(typeface, size);
        // 像素风格：不做抗锯齿
        font.set_edging(Edging::Alias);
        let (spacing, metrics) = font.metrics();
        Self {
            font,
            ascent: -metrics.ascent,
            line_height: spacing.ceil() as u32,
        }
    }

    /// 从 ttf/otf 文件内容创建
    pub fn from_data(bytes: &[u8], size: f32) -> Option<Self> {
        FontMgr::default()
            .new_from_data(bytes, None)
            .map(|typeface| Self::new(typeface, size))
    }

    /// 按名字查找系统字体，找不到就用默认字体
    pub fn from_family(family: &str, size: f32) -> Option<Self> {
        let mgr = FontMgr::default();
        mgr.match_family_style(family, FontStyle::normal())
            .or_else(|| mgr.legacy_make_typeface(None::<&str>, FontStyle::normal()))
            .map(|typeface| Self::new(typeface, size))
    }
}

impl Font for SkiaFont {
    fn size(&self, text: &str) -> (u32, u32) {
        let (advance, _bounds) = self.font.measure_str(text, None);
        (advance.ceil() as u32, self.line_height)
    }

    fn height(&self) -> u32 {
        self.line_height
    }

    fn render(&self, text: &str, color: Color) -> Result<Surface, UiError> {
        let (w, h) = self.size(text);
        if w == 0 || h == 0 {
            return Ok(blank(w, h));
        }

        let info = ImageInfo::new((w as i32, h as i32), ColorType::RGBA8888, AlphaType::Premul, None);
        let mut raster = surfaces::raster(&info, None, None)
            .ok_or_else(|| UiError::Render(format!("cannot allocate {w}x{h} raster surface")))?;

        let canvas = raster.canvas();
        canvas.clear(skia_safe::Color::TRANSPARENT);
        let mut paint = Paint::default();
        paint.set_color(skia_safe::Color::from_argb(color.a, color.r, color.g, color.b));
        paint.set_anti_alias(false);
        canvas.draw_str(text, Point::new(0.0, self.ascent), &self.font, &paint);

        // 读回非预乘的 RGBA，与 image 的像素格式一致
        let read_info = info.with_alpha_type(AlphaType::Unpremul);
        let row_bytes = (w * 4) as usize;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !raster.read_pixels(&read_info, &mut pixels, row_bytes, (0, 0)) {
            return Err(UiError::Render(format!("failed to read back '{text}'")));
        }

        Surface::from_raw(w, h, pixels)
            .ok_or_else(|| UiError::Render("pixel buffer size mismatch".to_string()))
    }
}
