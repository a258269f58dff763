//! OTP Entry TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! OTP Entry TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()              // 日志写入缓存目录，不污染备用屏幕
//!     LocalConfigService.load()   // 读取配置文件（缺失或损坏时使用默认值）
//!     Runtime::new()              // 提交验证码用的 tokio 运行时
//!     init_terminal()             // 初始化终端
//!     model::App::new()           // 创建 APP 实例，挂载验证码输入框
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 命令行：
//!     otp-entry-tui [CODE]
//!
//!     CODE 为可选的外部下发验证码（例如短信自动填充），
//!     启动后从第一格开始分配到各个输入框。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, LocalConfigService, SubmissionService};
use message::{AppMessage, OtpMessage};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    let log_path = init_logging()?;
    log::info!("OTP entry started, logging to {}", log_path.display());

    // 2. 加载配置
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;

    // 3. 应用语言与主题
    i18n::set_language(i18n::Language::from_code(&config.language).unwrap_or_default());
    view::theme::set_theme(config.theme);

    // 4. 提交服务（独立运行时，主循环保持同步）
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let mut submission = SubmissionService::from_config(&config, runtime.handle().clone())?;

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 创建应用实例，可选地自动填充
    let mut app = model::App::new();
    if let Some(code) = std::env::args().nth(1) {
        update::update(&mut app, AppMessage::Otp(OtpMessage::Autofill(code)));
    }

    // 7. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut submission);

    // 8. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 9. 记住运行期间切换的语言与主题
    config.language = i18n::current_language().code().to_string();
    config.theme = view::theme::current_theme();
    if let Err(e) = config_service.save(&config) {
        log::warn!("Failed to save config: {e}");
    }

    // 10. 返回结果
    result
}
