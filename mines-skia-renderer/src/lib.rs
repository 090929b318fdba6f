pub mod config;
pub mod core;
pub mod events;
pub mod renderer;
pub mod screens;

pub use renderer::MinesRenderer;
