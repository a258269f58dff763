//! 页面视图

pub mod entry;
pub mod result;
