//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 消费 Message，修改 Model。
//! Update 层本身不做 IO：需要访问网络时返回一个 [`Command`]，
//! 由主循环交给 Backend 层执行，结果再以 `AppMessage::SubmitFinished` 回来。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod otp;            // 输入框消息 → OtpEvent → OtpController
//!         mod submission;     // 提交与提交结果
//!

mod otp;
mod submission;

use otp_entry_core::CodeState;

use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme;

/// 需要主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 提交该快照（之后的编辑不影响本次请求）
    Submit(CodeState),
}




/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Otp(otp_msg) => {
            // 离开输入页后不再接受编辑
            if app.current_page.is_entry() {
                otp::update(app, otp_msg);
            }
        }

        AppMessage::Submit => {
            return submission::submit(app);
        }

        AppMessage::SubmitFinished(result) => {
            submission::finished(app, result);
        }

        AppMessage::ToggleLanguage => {
            let next = i18n::current_language().next();
            i18n::set_language(next);
            app.set_status(format!("{}: {}", t().common.language, next.display_name()));
        }

        AppMessage::ToggleTheme => {
            let next = theme::current_theme().toggle();
            theme::set_theme(next);
            let texts = t();
            let name = match next {
                theme::Theme::Dark => texts.theme.dark,
                theme::Theme::Light => texts.theme.light,
            };
            app.set_status(format!("{}: {name}", texts.common.theme));
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    None
}
