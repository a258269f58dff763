use otp_entry_core::{CoreResult, Navigation};

use super::OtpMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 验证码输入框相关消息
    Otp(OtpMessage),

    /// 提交当前验证码
    Submit,

    /// 后台提交完成
    SubmitFinished(CoreResult<Navigation>),

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
