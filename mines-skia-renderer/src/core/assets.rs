use std::collections::HashMap;
use std::path::PathBuf;
use std::fs;
use walkdir::WalkDir;
use mines_ui::Surface;

use crate::core::SkiaFont;

pub struct AssetManager {
    image_cache: HashMap<String, Surface>,
    image_paths: HashMap<String, PathBuf>,
    font_paths: HashMap<String, PathBuf>,
    root_path: PathBuf,
}

impl AssetManager {
    pub fn new(root_path: &str) -> Self {
        let mut manager = Self {
            image_cache: HashMap::new(),
            image_paths: HashMap::new(),
            font_paths: HashMap::new(),
            root_path: PathBuf::from(root_path),
        };

        manager.scan_assets();
        manager
    }

    fn scan_assets(&mut self) {
        log::info!("Scanning assets in {:?}...", self.root_path);

        for entry in WalkDir::new(&self.root_path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let key = stem.to_string();
            match ext.to_lowercase().as_str() {
                "png" => {
                    self.image_paths.insert(key, path.to_path_buf());
                },
                "ttf" | "otf" => {
                    self.font_paths.insert(key, path.to_path_buf());
                },
                _ => {}
            }
        }

        log::info!("Asset scan complete. Images: {}, Font: {}",
            self.image_paths.len(), self.font_paths.len());
    }

    pub fn get_image(&mut self, name: &str) -> Option<Surface> {
        if let Some(img) = self.image_cache.get(name) {
            return Some(img.clone());
        }

        let file_path = self.image_paths.get(name)?;
        log::debug!("Loading asset: {} -> {:?}", name, file_path);
        match image::open(file_path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                self.image_cache.insert(name.to_string(), rgba.clone());
                Some(rgba)
            }
            Err(e) => {
                log::error!("Failed to decode image {:?}: {}", file_path, e);
                None
            }
        }
    }

    pub fn load_font(&self, name: &str, size: f32) -> Option<SkiaFont> {
        let path = self.font_paths.get(name)?;
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                log::error!("Failed to read font file {:?}: {}", path, e);
                return None;
            }
        };

        let font = SkiaFont::from_data(&bytes, size);
        if font.is_some() {
            log::info!("Loaded font: '{}' ({}px)", name, size);
        } else {
            log::error!("Failed to parse font: {:?}", path);
        }
        font
    }
}
