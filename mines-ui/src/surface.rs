use image::{imageops, RgbaImage};

use crate::{Color, Point, Rect};

/// 内存中的 RGBA 图像，所有控件都缓存一张
pub type Surface = RgbaImage;

/// 全透明的空白画布
pub fn blank(width: u32, height: u32) -> Surface {
    RgbaImage::new(width, height)
}

/// 带透明度混合地把 `src` 贴到 `dst` 的 `pos` 处，超出部分被裁掉
pub fn blit(dst: &mut Surface, src: &Surface, pos: Point) {
    imageops::overlay(dst, src, pos.x as i64, pos.y as i64);
}

/// 直接覆盖像素 (不混合)，用于重画单选标记
pub fn replace(dst: &mut Surface, src: &Surface, pos: Point) {
    imageops::replace(dst, src, pos.x as i64, pos.y as i64);
}

pub fn fill(dst: &mut Surface, rect: Rect, color: Color) {
    let (w, h) = dst.dimensions();
    let x0 = rect.x.clamp(0, w as i32) as u32;
    let y0 = rect.y.clamp(0, h as i32) as u32;
    let x1 = rect.right().clamp(0, w as i32) as u32;
    let y1 = rect.bottom().clamp(0, h as i32) as u32;
    let px = color.to_pixel();
    for y in y0..y1 {
        for x in x0..x1 {
            dst.put_pixel(x, y, px);
        }
    }
}

/// 画一个矩形边框：透明背景，四条边各 `line_width` 像素宽，全部落在图像内部。
pub fn create_frame(width: u32, height: u32, color: Color, line_width: u32) -> Surface {
    let mut frame = blank(width, height);
    if width == 0 || height == 0 {
        return frame;
    }

    let tw = line_width.min(width);
    let th = line_width.min(height);

    // 上、左、右、下
    fill(&mut frame, Rect::new(0, 0, width, th), color);
    fill(&mut frame, Rect::new(0, 0, tw, height), color);
    fill(&mut frame, Rect::new((width - tw) as i32, 0, tw, height), color);
    fill(&mut frame, Rect::new(0, (height - th) as i32, width, th), color);

    frame
}
