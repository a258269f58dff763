//! 日志初始化

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 获取日志目录路径
fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("otp-entry-tui")
}

/// 初始化日志，返回日志文件路径
///
/// `log` 宏的记录通过 tracing-subscriber 的 tracing-log 桥接输出。
pub fn init_logging() -> Result<PathBuf> {
    let dir = get_log_dir();
    fs::create_dir_all(&dir)?;

    let path = dir.join("otp-entry-tui.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(path)
}
