//! 可复用 UI 组件

pub mod code_input;
pub mod statusbar;
