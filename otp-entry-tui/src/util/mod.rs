//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志输出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端：
//!         · Raw Mode（原始模式）
//!             - 每个按键立即生效，不回显
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕内容
//!         · Bracketed Paste（括号粘贴）
//!             - 粘贴内容作为一个整体事件送达，而不是逐个按键
//!             - 验证码输入框据此把粘贴内容分配到多个格子
//!         · Mouse Capture（鼠标捕获）
//!             - 点击某个格子即把焦点移过去
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!
//!
//!     日志：
//!         TUI 占用了整个屏幕，日志不能写到 stdout/stderr。
//!         init_logging() 把日志写入缓存目录下的文件：
//!
//!             ~/.cache/otp-entry-tui/otp-entry-tui.log
//!
//!         默认级别 info，可用 RUST_LOG 覆盖，例如：
//!
//!             RUST_LOG=otp_entry_core=trace otp-entry-tui
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
