use image::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };
    pub const RED: Self = Self { r: 255, g: 0, b: 0, a: 255 };

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        c.to_pixel()
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// 像素矩形。`contains` 为半开区间：左上角在内，右/下边界外一像素不在内。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// 以尺寸构造，左上角为 (0, 0)
    pub fn from_size((w, h): (u32, u32)) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() &&
            y >= self.y && y < self.bottom()
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    pub fn with_position(mut self, p: Point) -> Self {
        self.x = p.x;
        self.y = p.y;
        self
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// 中心点 (整数除法，偏向左上)
    pub fn center_point(&self) -> Point {
        Point::new(self.x + (self.w / 2) as i32, self.y + (self.h / 2) as i32)
    }

    /// 在当前矩形内居中放置一个 target_w x target_h 的矩形
    pub fn center(&self, target_w: u32, target_h: u32) -> Rect {
        let c = self.center_point();
        Rect::new(c.x - (target_w / 2) as i32, c.y - (target_h / 2) as i32, target_w, target_h)
    }
}
