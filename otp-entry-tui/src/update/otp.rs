//! 输入框消息处理
//!
//! OtpMessage 不携带格子下标，这里读取当前焦点补齐后交给 OtpController。

use otp_entry_core::{OtpEvent, CODE_LENGTH};

use crate::message::OtpMessage;
use crate::model::{App, SubmissionState};

/// 处理输入框消息
pub fn update(app: &mut App, msg: OtpMessage) {
    let focus = app.otp.focus();
    let index = focus.index();

    let event = match msg {
        OtpMessage::Input(text) => OtpEvent::Type { index, text },
        OtpMessage::Clear => OtpEvent::Type {
            index,
            text: String::new(),
        },
        OtpMessage::Backspace => OtpEvent::Backspace { index },
        OtpMessage::Left => OtpEvent::ArrowLeft { index },
        OtpMessage::Right => OtpEvent::ArrowRight { index },
        OtpMessage::FocusNext => match focus.next() {
            Some(next) => OtpEvent::FocusGained {
                index: next.index(),
            },
            None => return,
        },
        OtpMessage::FocusPrev => match focus.prev() {
            Some(prev) => OtpEvent::FocusGained {
                index: prev.index(),
            },
            None => return,
        },
        OtpMessage::FocusCell(target) => {
            if target >= CODE_LENGTH {
                return;
            }
            OtpEvent::FocusGained { index: target }
        }
        OtpMessage::Paste(text) => OtpEvent::Paste { index, text },
        OtpMessage::Autofill(text) => OtpEvent::Autofill { text },
    };

    let before = app.otp.code();
    app.otp.dispatch(&event);

    // 内容变了，上一次的提示不再适用
    if app.otp.code() != before {
        if matches!(app.submission, SubmissionState::Failed { .. }) {
            app.submission = SubmissionState::Idle;
        }
        if !app.submission.is_pending() {
            app.clear_status();
        }
    }
}
