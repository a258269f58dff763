//!
//! src/message/mod.rs
//! Message 层：事件消息
//!
//! Event 层把按键、粘贴、鼠标翻译成 Message，Update 层消费 Message。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：应用级消息
//!         mod otp;            // OtpMessage：验证码输入框消息
//!
//!
//!     OtpMessage 与 otp-entry-core 的 OtpEvent 一一对应，
//!     区别在于 OtpMessage 不携带格子下标：
//!     Update 层在处理时才读取当前焦点，补齐下标。
//!

mod app;
mod otp;

pub use app::AppMessage;
pub use otp::OtpMessage;
