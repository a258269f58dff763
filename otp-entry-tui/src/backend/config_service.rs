//! 配置服务
//!
//! 配置文件位于 `<config_dir>/otp-entry-tui/config.json`，
//! 文件缺失时使用默认值，内容损坏时记录警告并使用默认值。

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use otp_entry_core::{DEFAULT_FALLBACK_ROUTE, DEFAULT_MARKER_FIELD};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖 `submit_url` 的环境变量
pub const SUBMIT_URL_ENV: &str = "OTP_ENTRY_SUBMIT_URL";

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("otp-entry-tui")
}

/// 获取配置文件路径
fn get_config_file() -> PathBuf {
    get_config_dir().join("config.json")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// 验证码提交地址
    pub submit_url: String,
    /// 未重定向时前往的路由
    pub fallback_route: String,
    /// 随验证码一起提交的标记字段名
    pub marker_field: String,
    /// 提交请求超时（秒）
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            submit_url: "http://127.0.0.1:8080/otp/verify".to_string(),
            fallback_route: DEFAULT_FALLBACK_ROUTE.to_string(),
            marker_field: DEFAULT_MARKER_FIELD.to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    fn apply_overrides(&mut self, submit_url: Option<String>) {
        if let Some(url) = submit_url.filter(|u| !u.trim().is_empty()) {
            log::info!("Using submit URL from {SUBMIT_URL_ENV}");
            self.submit_url = url;
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(get_config_file())
    }

    /// 使用指定的配置文件
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 从文件读取，不含环境变量覆盖
    fn load_from_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed config {}: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.load_from_file()?;
        config.apply_overrides(std::env::var(SUBMIT_URL_ENV).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;

        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}
