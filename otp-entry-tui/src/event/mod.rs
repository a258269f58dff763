//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/粘贴/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     handle_event 接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Paste(String)                // 括号粘贴，整段文本一次送达
//!             Event::Mouse(MouseEvent)            // 左键点击格子 → 焦点移过去；点击别处 → 收起状态消息
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，重绘即可
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 输入页键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         0-9         → OtpMessage::Input(digit)
//!         Backspace   → OtpMessage::Backspace
//!         Delete      → OtpMessage::Clear
//!         ←/→         → OtpMessage::Left / Right
//!         Tab         → OtpMessage::FocusNext
//!         Shift+Tab   → OtpMessage::FocusPrev
//!         Home/End    → OtpMessage::FocusCell(first / last)
//!         Enter       → AppMessage::Submit
//!
//!     全局：
//!         Esc / Ctrl+C → AppMessage::Quit
//!         Alt+l        → AppMessage::ToggleLanguage
//!         Alt+t        → AppMessage::ToggleTheme
//!
//!     结果页：
//!         Enter       → AppMessage::Quit
//!
//!     只处理 Press 事件，忽略 Release 和 Repeat。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
