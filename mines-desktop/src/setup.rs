use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target};

use crate::config::SystemConfig;
use crate::config_gen;

const CONFIG_PATH: &str = "config.toml";

pub fn init() {
    config_gen::ensure_config_exists(CONFIG_PATH);

    if let Err(e) = mines_shared::config::init(CONFIG_PATH) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger();
}

struct TeeWriter<W1, W2>(W1, W2);

impl<W1: Write, W2: Write> Write for TeeWriter<W1, W2> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.0.write(buf)?;
        self.1.write_all(&buf[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()?;
        self.1.flush()?;
        Ok(())
    }
}

fn init_logger() {
    let sys_cfg: SystemConfig = mines_shared::config::get("system");
    if let Err(e) = fs::create_dir_all(&sys_cfg.log_path) {
        eprintln!("Failed to create log dir: {}", e);
    }

    let log_file_path = Path::new(&sys_cfg.log_path).join("mines.log");
    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level));

    // 日志文件打不开时只写终端
    match OpenOptions::new().create(true).append(true).open(&log_file_path) {
        Ok(log_file) => {
            builder.target(Target::Pipe(Box::new(TeeWriter(std::io::stdout(), log_file))));
        }
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file_path.display(), e);
            builder.target(Target::Stdout);
        }
    }

    builder.init();
}
