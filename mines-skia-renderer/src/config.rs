use mines_ui::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub assets: AssetsConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub assets_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// 资源目录里的字体文件名 (不带扩展名)，找不到时按 font_family 查系统字体
    pub font: String,
    pub font_family: String,
    pub font_size: f32,
    pub title_size: f32,
    /// 没有 radio_off / radio_on 图片时生成的标记边长
    pub marker_size: u32,
    pub font_color: [u8; 4],
    pub frame_color: [u8; 4],
    pub background: [u8; 4],
}

impl ThemeConfig {
    pub fn font_color(&self) -> Color {
        to_color(self.font_color)
    }

    pub fn frame_color(&self) -> Color {
        to_color(self.frame_color)
    }

    pub fn background(&self) -> Color {
        to_color(self.background)
    }
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color {
    Color::rgba(r, g, b, a)
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Minesweeper".to_string(),
            width: 640,
            height: 640,
            resizable: true,
            assets: AssetsConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            assets_path: "./assets".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font: "font".to_string(),
            font_family: "monospace".to_string(),
            font_size: 22.0,
            title_size: 40.0,
            marker_size: 16,
            font_color: [230, 230, 230, 255],
            frame_color: [120, 180, 255, 255],
            background: [20, 20, 25, 255],
        }
    }
}

/// 一档难度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub mines: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub min_size: u32,
    pub max_width: u32,
    pub max_height: u32,
    /// 表数组放在最后，序列化成 [[menu.presets]]
    pub presets: Vec<Preset>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let preset = |name: &str, width, height, mines| Preset { name: name.to_string(), width, height, mines };
        Self {
            min_size: 5,
            max_width: 50,
            max_height: 30,
            presets: vec![
                preset("Easy", 9, 9, 10),
                preset("Medium", 16, 16, 40),
                preset("Hard", 30, 16, 99),
            ],
        }
    }
}
