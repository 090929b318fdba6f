use crate::error::Result;
use crate::surface::{self, blank};
use crate::{Color, Font, MouseButton, Point, PointerSource, Rect, Surface, UiError, Widget};

pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// 单选组：标题 + 若干互斥选项，每个选项前有一个选中/未选中标记
pub struct SelectionGroup {
    options: Vec<String>,
    selected: usize,

    unselected_image: Surface,
    selected_image: Surface,

    /// 每行的点击区域 (控件内坐标)
    item_rects: Vec<Rect>,
    /// 每行标记的位置 (控件内坐标)
    marker_rects: Vec<Rect>,

    surface: Surface,
    rect: Rect,
    on_change: Option<ChangeCallback>,
}

impl SelectionGroup {
    /// 行高取标记高度与字体行高的较大者。标记贴在行的左边，
    /// 标记和选项文字都在行内垂直居中 (标记比文字矮时，标记不贴行顶)。
    #[allow(clippy::too_many_arguments)]
    pub fn new<S: AsRef<str>>(
        font: &dyn Font,
        font_color: Color,
        unselected_image: Surface,
        selected_image: Surface,
        title: &str,
        options: &[S],
        on_change: Option<ChangeCallback>,
        position: Point,
    ) -> Result<Self> {
        if unselected_image.dimensions() != selected_image.dimensions() {
            return Err(UiError::MarkerSizeMismatch {
                unselected: unselected_image.dimensions(),
                selected: selected_image.dimensions(),
            });
        }
        if options.is_empty() {
            return Err(UiError::NoOptions);
        }

        let title_image = font.render(title, font_color)?;
        let option_images = options
            .iter()
            .map(|o| font.render(o.as_ref(), font_color))
            .collect::<Result<Vec<_>>>()?;

        let (marker_w, marker_h) = unselected_image.dimensions();
        let item_h = marker_h.max(font.height()) as f32;
        let item_widths: Vec<f32> = option_images
            .iter()
            .map(|img| 1.5 * marker_w as f32 + img.width() as f32)
            .collect();

        let widest_item = item_widths.iter().copied().fold(0.0_f32, f32::max);
        let width = widest_item.max(title_image.width() as f32) as u32;
        let height = (title_image.height() as f32
            + 0.5 * item_h
            + 1.5 * item_h * options.len() as f32) as u32;

        let mut canvas = blank(width, height);
        let title_rect = Rect::from_size((width, height)).center(title_image.width(), title_image.height());
        surface::blit(&mut canvas, &title_image, Point::new(title_rect.x, 0));

        let mut item_rects = Vec::with_capacity(options.len());
        let mut marker_rects = Vec::with_capacity(options.len());
        let mut y = title_image.height() as f32 + 0.5 * item_h;
        for (image, item_w) in option_images.iter().zip(&item_widths) {
            let item = Rect::new(0, y as i32, *item_w as u32, item_h as u32);
            // 标记贴左边，文字从 1.5 倍标记宽度处开始，两者都在行内垂直居中
            let marker = Rect::new(0, item.center(marker_w, marker_h).y, marker_w, marker_h);
            let text_y = item.center(image.width(), image.height()).y;
            surface::blit(&mut canvas, image, Point::new((1.5 * marker_w as f32) as i32, text_y));

            item_rects.push(item);
            marker_rects.push(marker);
            y += 1.5 * item_h;
        }

        let mut group = Self {
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            selected: 0,
            unselected_image,
            selected_image,
            item_rects,
            marker_rects,
            surface: canvas,
            rect: Rect::new(position.x, position.y, width, height),
            on_change,
        };
        for i in 0..group.options.len() {
            group.draw_marker(i);
        }
        Ok(group)
    }

    fn draw_marker(&mut self, index: usize) {
        let image = if index == self.selected {
            &self.selected_image
        } else {
            &self.unselected_image
        };
        surface::replace(&mut self.surface, image, self.marker_rects[index].position());
    }

    fn hit_test(&self, pointer: Point) -> Option<usize> {
        let x = pointer.x - self.rect.x;
        let y = pointer.y - self.rect.y;
        self.item_rects.iter().position(|r| r.contains(x, y))
    }

    fn move_selection(&mut self, index: usize) {
        let old = self.selected;
        self.selected = index;
        self.draw_marker(old);
        self.draw_marker(index);
    }

    /// 返回选中项是否发生了变化
    pub fn on_mouse_down(&mut self, button: MouseButton, pointer: &dyn PointerSource) -> bool {
        if !button.is_primary() {
            return false;
        }

        let Some(index) = self.hit_test(pointer.pointer_pos()) else {
            return false;
        };
        if index == self.selected {
            return false;
        }

        // 先通知，再更新状态
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.options[index]);
        }
        log::debug!("Selection changed: '{}' -> '{}'", self.options[self.selected], self.options[index]);
        self.move_selection(index);
        true
    }

    /// 由外部同步选中项，不触发回调。找不到该选项时返回 false。
    pub fn select(&mut self, option: &str) -> bool {
        let Some(index) = self.options.iter().position(|o| o == option) else {
            return false;
        };
        if index != self.selected {
            self.move_selection(index);
        }
        true
    }

    pub fn set_on_change(&mut self, on_change: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    pub fn selected(&self) -> &str {
        &self.options[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 各选项行的点击区域 (控件内坐标)
    pub fn item_rects(&self) -> &[Rect] {
        &self.item_rects
    }

    pub fn render(&self) -> &Surface {
        &self.surface
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Widget for SelectionGroup {
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
