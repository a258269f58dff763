//! 提交进度

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// 空闲
    #[default]
    Idle,
    /// 请求进行中，忽略重复提交
    Pending,
    /// 上一次提交失败
    Failed { retryable: bool },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    /// 是否可以按 Enter 重试
    pub fn can_retry(&self) -> bool {
        matches!(self, SubmissionState::Failed { retryable: true })
    }
}
