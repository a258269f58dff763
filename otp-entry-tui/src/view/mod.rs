//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 可复用组件：验证码输入框、状态栏
//!         pub mod layout;     // 主布局，以及格子位置计算（鼠标点击也用它）
//!         mod pages;          // 页面：输入页、结果页
//!         pub mod theme;      // 主题与样式
//!
//!
//!     屏幕布局：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────────────────────────────────────────┤
//!         │ 内容区（边框内为当前页面）                      │
//!         │                                              │
//!         │     ┌───┐ ┌───┐ ┌───┐ ┌───┐ ┌───┐ ┌───┐      │
//!         │     │ 1 │ │ 2 │ │ 3 │ │   │ │   │ │   │      │
//!         │     └───┘ └───┘ └───┘ └───┘ └───┘ └───┘      │
//!         │                                              │
//!         ├──────────────────────────────────────────────┤
//!         │ 状态栏：快捷键提示 │ 状态消息                   │
//!         └──────────────────────────────────────────────┘
//!

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
