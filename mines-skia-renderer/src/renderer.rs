use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Context as _;
use softbuffer::{Context, Surface as SoftSurface};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use mines_ui::surface::blank;
use mines_ui::{Rect, Surface, UiContext};

use crate::config::{MenuConfig, WindowConfig};
use crate::core::markers::default_markers;
use crate::core::{AssetManager, SkiaFont};
use crate::events;
use crate::screens::menu::{MenuAssets, MenuScreen};
use crate::screens::{Screen, ScreenTransition};

/// 设计分辨率到窗口的等比缩放 (两侧留黑边)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl Letterbox {
    pub fn fit(design: (u32, u32), window: (u32, u32)) -> Self {
        let (dw, dh) = (design.0 as f32, design.1 as f32);
        let (ww, wh) = (window.0 as f32, window.1 as f32);
        let scale = (ww / dw).min(wh / dh);
        Self {
            scale,
            off_x: (ww - dw * scale) / 2.0,
            off_y: (wh - dh * scale) / 2.0,
        }
    }

    /// 窗口物理坐标 -> 设计坐标
    pub fn to_logical(&self, physical_x: f32, physical_y: f32) -> (i32, i32) {
        if self.scale == 0.0 { return (0, 0); }
        (
            ((physical_x - self.off_x) / self.scale).floor() as i32,
            ((physical_y - self.off_y) / self.scale).floor() as i32,
        )
    }
}

/// 把设计分辨率的画面按 Letterbox 最近邻缩放进 0RGB 缓冲区
pub fn present_into(frame: &Surface, letterbox: Letterbox, window: (u32, u32), buffer: &mut [u32]) {
    let (fw, fh) = frame.dimensions();
    for y in 0..window.1 {
        for x in 0..window.0 {
            let (lx, ly) = letterbox.to_logical(x as f32 + 0.5, y as f32 + 0.5);
            let pixel = if lx >= 0 && ly >= 0 && (lx as u32) < fw && (ly as u32) < fh {
                let [r, g, b, _] = frame.get_pixel(lx as u32, ly as u32).0;
                (r as u32) << 16 | (g as u32) << 8 | b as u32
            } else {
                0
            };
            buffer[(y * window.0 + x) as usize] = pixel;
        }
    }
}

struct Presenter {
    window: Rc<Window>,
    surface: SoftSurface<Rc<Window>, Rc<Window>>,
}

pub struct MinesRenderer {
    presenter: Option<Presenter>,
    screen: Box<dyn Screen>,
    ui_ctx: UiContext,
    design: (u32, u32),
    letterbox: Letterbox,
    frame: Surface,
}

impl MinesRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let cfg: WindowConfig = mines_shared::config::get("window");
        let menu: MenuConfig = mines_shared::config::get("menu");
        let theme = &cfg.theme;
        let mut assets = AssetManager::new(&cfg.assets.assets_path);

        let font = Self::load_font(&assets, &theme.font, &theme.font_family, theme.font_size)?;
        let title_font = Self::load_font(&assets, &theme.font, &theme.font_family, theme.title_size)?;

        let (unselected_marker, selected_marker) = match (assets.get_image("radio_off"), assets.get_image("radio_on")) {
            (Some(off), Some(on)) if off.dimensions() == on.dimensions() => (off, on),
            (Some(_), Some(_)) => {
                log::warn!("radio_off / radio_on differ in size, using generated markers");
                default_markers(theme.marker_size, theme.font_color())
            }
            _ => default_markers(theme.marker_size, theme.font_color()),
        };

        let design = (cfg.width, cfg.height);
        let screen = MenuScreen::new(
            MenuAssets {
                font: Rc::new(font),
                title_font: Rc::new(title_font),
                unselected_marker,
                selected_marker,
            },
            theme,
            &menu,
            Rect::new(0, 0, design.0, design.1),
        )?;

        Ok(Self {
            presenter: None,
            screen: Box::new(screen),
            ui_ctx: UiContext::new(),
            design,
            letterbox: Letterbox::fit(design, design),
            frame: blank(design.0, design.1),
        })
    }

    fn load_font(assets: &AssetManager, name: &str, family: &str, size: f32) -> anyhow::Result<SkiaFont> {
        if let Some(font) = assets.load_font(name, size) {
            return Ok(font);
        }
        log::info!("Font asset '{}' not found, falling back to system family '{}'", name, family);
        SkiaFont::from_family(family, size)
            .with_context(|| format!("No usable font for family '{}'", family))
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()
            .map_err(|e| anyhow::anyhow!("Failed to create event loop: {}", e))?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)
            .map_err(|e| anyhow::anyhow!("Event loop terminated: {}", e))?;
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(presenter) = self.presenter.as_ref() {
            presenter.window.request_redraw();
        }
    }

    fn handle_transition(&mut self, event_loop: &ActiveEventLoop) {
        match self.screen.update() {
            Ok(ScreenTransition::None) => {}
            Ok(ScreenTransition::StartGame(settings)) => {
                log::info!("Starting game: {}x{}, {} mines", settings.width, settings.height, settings.mines);
            }
            Ok(ScreenTransition::Quit) => event_loop.exit(),
            Err(e) => log::error!("Screen update failed: {:#}", e),
        }
    }

    fn create_presenter(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Presenter> {
        let cfg: WindowConfig = mines_shared::config::get("window");
        let window_attributes = Window::default_attributes()
            .with_title(&cfg.title)
            .with_inner_size(PhysicalSize::new(cfg.width, cfg.height))
            .with_resizable(cfg.resizable);

        let window = Rc::new(event_loop.create_window(window_attributes)
            .map_err(|e| anyhow::anyhow!("Failed to create window: {}", e))?);
        let context = Context::new(window.clone())
            .map_err(|e| anyhow::anyhow!("softbuffer context: {}", e))?;
        let surface = SoftSurface::new(&context, window.clone())
            .map_err(|e| anyhow::anyhow!("softbuffer surface: {}", e))?;
        Ok(Presenter { window, surface })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(presenter) = self.presenter.as_mut() else {
            return Ok(());
        };

        let size = presenter.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        presenter.surface.resize(w, h)
            .map_err(|e| anyhow::anyhow!("softbuffer resize: {}", e))?;

        self.screen.draw(&mut self.frame);

        let mut buffer = presenter.surface.buffer_mut()
            .map_err(|e| anyhow::anyhow!("softbuffer buffer: {}", e))?;
        present_into(&self.frame, self.letterbox, (size.width, size.height), &mut buffer);
        buffer.present()
            .map_err(|e| anyhow::anyhow!("softbuffer present: {}", e))?;
        Ok(())
    }
}

impl ApplicationHandler for MinesRenderer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }
        match self.create_presenter(event_loop) {
            Ok(presenter) => {
                let size = presenter.window.inner_size();
                self.letterbox = Letterbox::fit(self.design, (size.width, size.height));
                self.presenter = Some(presenter);
                self.request_redraw();
            }
            Err(e) => {
                log::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.letterbox = Letterbox::fit(self.design, (size.width, size.height));
                self.request_redraw();
            }

            // 物理坐标换算成设计坐标交给控件
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.letterbox.to_logical(position.x as f32, position.y as f32);
                self.ui_ctx.update(x, y);
            }

            WindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => {
                let button = events::mouse_button(button);
                if let Err(e) = self.screen.on_mouse_down(button, &self.ui_ctx) {
                    log::error!("Mouse handling failed: {:#}", e);
                }
                self.handle_transition(event_loop);
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let Some(key) = events::key(&event.logical_key) else {
                    return;
                };
                if let Err(e) = self.screen.on_key_press(&key) {
                    log::error!("Key handling failed: {:#}", e);
                }
                self.handle_transition(event_loop);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::error!("Redraw failed: {:#}", e);
                }
            }
            _ => {}
        }
    }
}
