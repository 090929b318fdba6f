use mines_ui::surface::fill;
use mines_ui::{create_frame, Color, Rect, Surface};

/// 没有标记图片时的替代品：空心方框 / 带实心内芯的方框
pub fn default_markers(size: u32, color: Color) -> (Surface, Surface) {
    let unselected = create_frame(size, size, color, 1);
    let mut selected = unselected.clone();

    let inset = (size / 4).max(1);
    if size > inset * 2 {
        let core = Rect::new(inset as i32, inset as i32, size - inset * 2, size - inset * 2);
        fill(&mut selected, core, color);
    }
    (unselected, selected)
}
