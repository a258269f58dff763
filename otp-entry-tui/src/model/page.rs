//! 页面定义

/// 页面枚举
///
/// 提交成功后离开输入页，显示跳转目标。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 验证码输入页
    #[default]
    Entry,
    /// 服务端重定向到了新地址
    Redirected { url: String },
    /// 未重定向，进入等待页
    Loading { route: String },
}

impl Page {
    /// 是否是输入页
    pub fn is_entry(&self) -> bool {
        matches!(self, Page::Entry)
    }
}
