/// 验证码输入框消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpMessage {
    /// 在焦点格输入文本
    Input(String),
    /// 清空焦点格（Delete 键）
    Clear,
    /// 退格
    Backspace,
    /// 焦点左移
    Left,
    /// 焦点右移
    Right,
    /// 焦点移到下一格（Tab）
    FocusNext,
    /// 焦点移到上一格（Shift+Tab）
    FocusPrev,
    /// 焦点移到指定格（鼠标点击）
    FocusCell(usize),
    /// 粘贴
    Paste(String),
    /// 外部下发的验证码，从第一格开始填充
    Autofill(String),
}
