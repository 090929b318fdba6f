pub mod assets;
pub mod markers;
pub mod text;

pub use assets::AssetManager;
pub use text::SkiaFont;
