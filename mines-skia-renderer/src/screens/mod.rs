pub mod menu;

use mines_ui::{Key, MouseButton, PointerSource, Surface};

use crate::config::Preset;

/// 开局参数，交给外部的游戏逻辑
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub width: u32,
    pub height: u32,
    pub mines: u32,
}

impl GameSettings {
    /// 至少留一个安全格
    pub fn max_mines(&self) -> u32 {
        self.width.saturating_mul(self.height).saturating_sub(1)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { width: 9, height: 9, mines: 10 }
    }
}

impl From<&Preset> for GameSettings {
    fn from(p: &Preset) -> Self {
        Self { width: p.width, height: p.height, mines: p.mines }
    }
}

/// 屏幕切换指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    None,
    StartGame(GameSettings),
    Quit,
}

/// 所有界面必须实现的 Trait
pub trait Screen {
    fn on_mouse_down(&mut self, button: MouseButton, pointer: &dyn PointerSource) -> anyhow::Result<()>;

    fn on_key_press(&mut self, key: &Key) -> anyhow::Result<()>;

    /// 处理回调产生的事件，返回切换指令
    fn update(&mut self) -> anyhow::Result<ScreenTransition>;

    fn draw(&self, frame: &mut Surface);
}
