use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<ConfigStore>> = OnceCell::new();

/// 按 `[section]` 读取的 TOML 配置
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    table: Table,
}

impl ConfigStore {
    /// 语法错误时退回空配置
    pub fn parse(content: &str) -> Self {
        let table: Table = toml::from_str(content).unwrap_or_else(|e| {
            log::error!("Config syntax error: {}, using empty config.", e);
            Table::new()
        });
        Self { table }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let content = if path.exists() {
            log::info!("Loading config from {:?}", path);
            fs::read_to_string(path)?
        } else {
            log::warn!("Config file not found at {:?}, using defaults.", path);
            String::new()
        };

        Ok(Self::parse(&content))
    }

    /// 缺失或类型不匹配的配置节返回默认值
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        if let Some(value) = self.table.get(key) {
            value.clone().try_into().unwrap_or_else(|e| {
                log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
                T::default()
            })
        } else {
            T::default()
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }
}

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let store = ConfigStore::load(path)?;

    GLOBAL_CONFIG.set(RwLock::new(store))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };

    match store.read() {
        Ok(guard) => guard.get(key),
        Err(e) => {
            log::error!("Config lock poisoned: {}", e);
            T::default()
        }
    }
}
