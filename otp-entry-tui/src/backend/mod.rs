//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! 为 otp-entry-core 的 trait 提供具体实现，并把异步提交桥接到同步的主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;       // 配置文件读写
//!         mod http_submitter;       // CodeSubmitter 的 HTTP 实现（multipart POST）
//!         mod submission_service;   // 在 tokio 运行时上执行提交，结果经 channel 送回
//!
//!
//!     提交流程：
//!
//!         update::update()  ──Command::Submit(CodeState)──▶  SubmissionService::submit()
//!                                                                   │ runtime.spawn
//!                                                                   ▼
//!                                                       SubmissionGate::try_submit()
//!                                                          ├─ InMemorySessionStore::put("OTP")
//!                                                          └─ HttpCodeSubmitter::submit()
//!                                                                   │
//!         app::run()  ◀──── try_recv() ◀──── channel ◀──────────────┘
//!

mod config_service;
mod http_submitter;
mod submission_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use http_submitter::HttpCodeSubmitter;
pub use submission_service::SubmissionService;
