//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **输入页文案归 `entry.*`**：标题、说明、提示、按钮、页脚
//! 2. **结果页文案归 `result.*`**：提交后的跳转页
//! 3. **状态栏消息归 `status.*`**
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 输入页文案另外可以通过 [`TextKey`] 按符号键查询。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 输入页文本
    pub entry: EntryTexts,
    /// 结果页文本
    pub result: ResultTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 主题名称
    pub theme: ThemeTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
}

// ============================================================================
// 输入页
// ============================================================================

pub struct EntryTexts {
    pub title: &'static str,
    pub heading: &'static str,
    pub helper: &'static str,
    pub warning: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub retry: &'static str,
    pub footer_resend: &'static str,
    pub footer_help: &'static str,
}

// ============================================================================
// 结果页
// ============================================================================

pub struct ResultTexts {
    pub redirected_title: &'static str,
    pub redirected_body: &'static str,
    pub loading_title: &'static str,
    pub loading_body: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusTexts {
    pub submitting: &'static str,
    pub incomplete: &'static str,
    pub already_submitting: &'static str,
    pub submit_failed: &'static str,
    pub network_error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

pub struct KeyNames {
    pub digits: &'static str,    // "0-9"
    pub arrows_lr: &'static str, // "←→"
    pub backspace: &'static str,
    pub enter: &'static str,
    pub esc: &'static str,
    pub alt_l: &'static str,
    pub alt_t: &'static str,
}

pub struct ActionTexts {
    pub type_digit: &'static str,
    pub move_focus: &'static str,
    pub delete: &'static str,
    pub submit: &'static str,
    pub retry: &'static str,
    pub quit: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
}

pub struct ThemeTexts {
    pub dark: &'static str,
    pub light: &'static str,
}

// ============================================================================
// 符号键
// ============================================================================

/// 输入页文案的符号键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Title,
    Heading,
    Helper,
    Warning,
    Submit,
    Submitting,
    Retry,
    FooterResend,
    FooterHelp,
}

impl Translations {
    /// 按符号键查询文案
    pub fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::Title => self.entry.title,
            TextKey::Heading => self.entry.heading,
            TextKey::Helper => self.entry.helper,
            TextKey::Warning => self.entry.warning,
            TextKey::Submit => self.entry.submit,
            TextKey::Submitting => self.entry.submitting,
            TextKey::Retry => self.entry.retry,
            TextKey::FooterResend => self.entry.footer_resend,
            TextKey::FooterHelp => self.entry.footer_help,
        }
    }
}
