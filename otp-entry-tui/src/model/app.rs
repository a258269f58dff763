use otp_entry_core::OtpController;
use ratatui::layout::Rect;

use super::{Page, SubmissionState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 验证码控制器（格子内容、焦点、选区）
    pub otp: OtpController,

    /// 当前页面
    pub current_page: Page,

    /// 提交进度
    pub submission: SubmissionState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 最近一次渲染的终端区域，用于鼠标点击定位格子
    pub viewport: Rect,
}

impl App {
    /// 创建新的应用实例，输入框已挂载
    pub fn new() -> Self {
        let mut otp = OtpController::new();
        otp.mount();

        Self {
            should_quit: false,
            otp,
            current_page: Page::Entry,
            submission: SubmissionState::Idle,
            status_message: None,
            viewport: Rect::default(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
