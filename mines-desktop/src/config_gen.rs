use std::fs;
use std::path::Path;

use serde::Serialize;
use mines_skia_renderer::config::{MenuConfig, WindowConfig};

use crate::config::SystemConfig;

#[derive(Serialize)]
struct FullConfig {
    system: SystemConfig,
    window: WindowConfig,
    menu: MenuConfig,
}

pub fn default_config() -> anyhow::Result<String> {
    let config = FullConfig {
        system: SystemConfig::default(),
        window: WindowConfig::default(),
        menu: MenuConfig::default(),
    };
    Ok(toml::to_string_pretty(&config)?)
}

/// 配置文件不存在时写一份默认配置。此时日志还没初始化，只能打印到终端。
pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    println!("Creating default configuration at '{}'...", path);

    let toml_str = match default_config() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        println!("Config file created successfully.");
    }
}
