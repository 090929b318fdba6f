use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use anyhow::Context;
use mines_ui::surface::fill;
use mines_ui::widgets::{Button, Input, InputOptions, Label, SelectionGroup};
use mines_ui::{compose, Color, Font, Key, MouseButton, Point, PointerSource, Rect, Surface, Widget};

use super::{GameSettings, Screen, ScreenTransition};
use crate::config::{MenuConfig, Preset, ThemeConfig};

/// 不对应任何预设的难度
pub const CUSTOM: &str = "Custom";

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const MAX_DIGITS: usize = 3;
/// 控件之间的垂直间距
const GAP: u32 = 18;

/// 控件回调产生的事件，在 update 里统一处理
#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuEvent {
    Difficulty(String),
    Width(u32),
    Height(u32),
    Mines(u32),
    NewGame,
    Quit,
}

#[derive(Default)]
struct MenuState {
    settings: GameSettings,
    events: Vec<MenuEvent>,
}

type SharedState = Rc<RefCell<MenuState>>;

/// 菜单用到的字体和单选标记
pub struct MenuAssets {
    pub font: Rc<dyn Font>,
    pub title_font: Rc<dyn Font>,
    pub unselected_marker: Surface,
    pub selected_marker: Surface,
}

pub struct MenuScreen {
    title: Label,
    difficulty: SelectionGroup,
    width: Input,
    height: Input,
    mines: Input,
    status: Label,
    new_game: Button,
    quit: Button,

    background: Color,
    presets: Vec<Preset>,
    area: Rect,

    state: SharedState,
    // 暂存这一帧点击产生的跳转指令
    pending_transition: ScreenTransition,
}

fn status_text(s: &GameSettings) -> String {
    format!("{} x {}, {} mines", s.width, s.height, s.mines)
}

/// 数字输入框：只收数字，最多三位，回车时按范围校验
fn numeric_options(width: u32, frame: Color, on_enter: impl FnMut(&str) -> bool + 'static) -> InputOptions {
    InputOptions::new()
        .active()
        .width(width)
        .frame_color(frame)
        .max_length(MAX_DIGITS)
        .allowed_symbols(DIGITS)
        .on_enter(on_enter)
}

fn range_check(
    state: &SharedState,
    field: &'static str,
    range: RangeInclusive<u32>,
    event: fn(u32) -> MenuEvent,
) -> impl FnMut(&str) -> bool + 'static {
    let state = state.clone();
    move |value: &str| match value.parse::<u32>() {
        Ok(n) if range.contains(&n) => {
            state.borrow_mut().events.push(event(n));
            true
        }
        _ => {
            log::warn!("Rejected {} '{}', expected {}..={}", field, value, range.start(), range.end());
            false
        }
    }
}

impl MenuScreen {
    pub fn new(assets: MenuAssets, theme: &ThemeConfig, menu: &MenuConfig, area: Rect) -> anyhow::Result<Self> {
        let MenuAssets { font, title_font, unselected_marker, selected_marker } = assets;
        let color = theme.font_color();
        let frame = theme.frame_color();

        let settings = menu.presets.first().map(GameSettings::from).unwrap_or_default();
        let state = Rc::new(RefCell::new(MenuState { settings, events: Vec::new() }));

        let title = Label::new(title_font, color, "Minesweeper", Point::ORIGIN)
            .context("Failed to render menu title")?;

        let mut options: Vec<&str> = menu.presets.iter().map(|p| p.name.as_str()).collect();
        options.push(CUSTOM);
        let st = state.clone();
        let difficulty = SelectionGroup::new(
            &*font,
            color,
            unselected_marker,
            selected_marker,
            "Difficulty",
            options.as_slice(),
            Some(Box::new(move |option: &str| {
                st.borrow_mut().events.push(MenuEvent::Difficulty(option.to_string()));
            })),
            Point::ORIGIN,
        )
        .context("Failed to build difficulty selector")?;

        // 输入框定宽，进入编辑时不会左右跳动
        let input_w = font.size("Height  000_").0 + 2 * font.size("|").0;

        let min = menu.min_size;
        let width = Input::new(
            font.clone(),
            color,
            "Width",
            settings.width,
            numeric_options(input_w, frame, range_check(&state, "width", min..=menu.max_width, MenuEvent::Width)),
        )?;
        let height = Input::new(
            font.clone(),
            color,
            "Height",
            settings.height,
            numeric_options(input_w, frame, range_check(&state, "height", min..=menu.max_height, MenuEvent::Height)),
        )?;

        let st = state.clone();
        let mines = Input::new(
            font.clone(),
            color,
            "Mines",
            settings.mines,
            numeric_options(input_w, frame, move |value: &str| {
                // 上限随当前棋盘大小变化
                let max = st.borrow().settings.max_mines();
                match value.parse::<u32>() {
                    Ok(n) if (1..=max).contains(&n) => {
                        st.borrow_mut().events.push(MenuEvent::Mines(n));
                        true
                    }
                    _ => {
                        log::warn!("Rejected mines '{}', expected 1..={}", value, max);
                        false
                    }
                }
            }),
        )?;

        let status = Label::new(font.clone(), color, &status_text(&settings), Point::ORIGIN)?;

        let st = state.clone();
        let new_game = Button::new(
            &*font,
            color,
            "New game",
            Some(Box::new(move || st.borrow_mut().events.push(MenuEvent::NewGame))),
            Some(frame),
            Point::ORIGIN,
        )?;
        let st = state.clone();
        let quit = Button::new(
            &*font,
            color,
            "Quit",
            Some(Box::new(move || st.borrow_mut().events.push(MenuEvent::Quit))),
            Some(Color::RED),
            Point::ORIGIN,
        )?;

        let mut screen = Self {
            title,
            difficulty,
            width,
            height,
            mines,
            status,
            new_game,
            quit,
            background: theme.background(),
            presets: menu.presets.clone(),
            area,
            state,
            pending_transition: ScreenTransition::None,
        };
        screen.layout();
        Ok(screen)
    }

    /// 所有控件水平居中，自上而下排成一列
    fn layout(&mut self) {
        let cx = self.area.center_point().x;
        let mut y = self.area.y + (GAP * 2) as i32;

        let column: [&mut dyn Widget; 8] = [
            &mut self.title,
            &mut self.difficulty,
            &mut self.width,
            &mut self.height,
            &mut self.mines,
            &mut self.status,
            &mut self.new_game,
            &mut self.quit,
        ];
        for widget in column {
            let r = widget.rect();
            widget.set_position(Point::new(cx - (r.w / 2) as i32, y));
            y += (r.h + GAP) as i32;
        }
    }

    fn inputs(&mut self) -> [&mut Input; 3] {
        [&mut self.width, &mut self.height, &mut self.mines]
    }

    fn apply(&mut self, event: MenuEvent) -> anyhow::Result<()> {
        match event {
            MenuEvent::Difficulty(name) => {
                if let Some(preset) = self.presets.iter().find(|p| p.name == name) {
                    let settings = GameSettings::from(preset);
                    self.set_settings(settings)?;
                }
            }
            MenuEvent::Width(n) => {
                let mut s = self.settings();
                s.width = n;
                self.set_settings(s)?;
                self.sync_difficulty();
            }
            MenuEvent::Height(n) => {
                let mut s = self.settings();
                s.height = n;
                self.set_settings(s)?;
                self.sync_difficulty();
            }
            MenuEvent::Mines(n) => {
                let mut s = self.settings();
                s.mines = n;
                self.set_settings(s)?;
                self.sync_difficulty();
            }
            MenuEvent::NewGame => {
                let s = self.settings();
                log::info!("New game requested: {}", status_text(&s));
                self.pending_transition = ScreenTransition::StartGame(s);
            }
            MenuEvent::Quit => {
                self.pending_transition = ScreenTransition::Quit;
            }
        }
        Ok(())
    }

    /// 把设置同步到输入框和状态栏
    fn set_settings(&mut self, mut settings: GameSettings) -> anyhow::Result<()> {
        settings.mines = settings.mines.clamp(1, settings.max_mines().max(1));

        self.width.set_value(settings.width)?;
        self.height.set_value(settings.height)?;
        self.mines.set_value(settings.mines)?;
        self.status.set_text(&status_text(&settings))?;

        self.state.borrow_mut().settings = settings;
        // 状态栏宽度变了，重新居中
        self.layout();
        Ok(())
    }

    /// 手动修改后，选中与之相符的预设，否则选 Custom
    fn sync_difficulty(&mut self) {
        let settings = self.settings();
        let name = self
            .presets
            .iter()
            .find(|p| GameSettings::from(*p) == settings)
            .map(|p| p.name.as_str())
            .unwrap_or(CUSTOM);
        self.difficulty.select(name);
    }

    pub fn settings(&self) -> GameSettings {
        self.state.borrow().settings
    }

    pub fn difficulty(&self) -> &SelectionGroup {
        &self.difficulty
    }

    pub fn width_input(&self) -> &Input {
        &self.width
    }

    pub fn height_input(&self) -> &Input {
        &self.height
    }

    pub fn mines_input(&self) -> &Input {
        &self.mines
    }

    pub fn status(&self) -> &Label {
        &self.status
    }

    pub fn new_game_button(&self) -> &Button {
        &self.new_game
    }

    pub fn quit_button(&self) -> &Button {
        &self.quit
    }
}

impl Screen for MenuScreen {
    fn on_mouse_down(&mut self, button: MouseButton, pointer: &dyn PointerSource) -> anyhow::Result<()> {
        self.difficulty.on_mouse_down(button, pointer);
        for input in self.inputs() {
            input.on_mouse_click(button, pointer)?;
        }
        self.new_game.on_mouse_down(button, pointer);
        self.quit.on_mouse_down(button, pointer);
        Ok(())
    }

    fn on_key_press(&mut self, key: &Key) -> anyhow::Result<()> {
        for input in self.inputs() {
            input.on_key_press(key)?;
        }
        Ok(())
    }

    fn update(&mut self) -> anyhow::Result<ScreenTransition> {
        let events: Vec<MenuEvent> = self.state.borrow_mut().events.drain(..).collect();
        for event in events {
            log::debug!("Menu event: {:?}", event);
            self.apply(event)?;
        }
        Ok(std::mem::replace(&mut self.pending_transition, ScreenTransition::None))
    }

    fn draw(&self, frame: &mut Surface) {
        let (w, h) = frame.dimensions();
        fill(frame, Rect::new(0, 0, w, h), self.background);

        let widgets: [&dyn Widget; 8] = [
            &self.title,
            &self.difficulty,
            &self.width,
            &self.height,
            &self.mines,
            &self.status,
            &self.new_game,
            &self.quit,
        ];
        for widget in widgets {
            compose(frame, widget);
        }
    }
}
