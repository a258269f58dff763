//! 提交处理

use otp_entry_core::{CoreResult, Navigation, OtpError, SubmissionGate};

use super::Command;
use crate::i18n::t;
use crate::model::{App, Page, SubmissionState};

/// 处理提交请求
///
/// 校验在这里同步完成：不完整的验证码不会产生任何请求。
pub fn submit(app: &mut App) -> Option<Command> {
    if !app.current_page.is_entry() {
        return None;
    }

    if app.submission.is_pending() {
        let e = OtpError::SubmissionPending;
        log::debug!("Submit ignored: {e}");
        app.set_status(failure_message(&e));
        return None;
    }

    let code = app.otp.code();
    if let Err(e) = SubmissionGate::validate(&code) {
        log::debug!("Submit blocked: {e}");
        app.set_status(failure_message(&e));
        return None;
    }

    app.submission = SubmissionState::Pending;
    app.set_status(t().status.submitting);
    Some(Command::Submit(code))
}

/// 处理后台提交结果
pub fn finished(app: &mut App, result: CoreResult<Navigation>) {
    match result {
        Ok(navigation) => {
            app.submission = SubmissionState::Idle;
            app.clear_status();
            app.current_page = match navigation {
                Navigation::Redirect(url) => Page::Redirected { url },
                Navigation::Fallback(route) => Page::Loading { route },
            };
        }
        Err(e) => {
            let retryable = e.is_retryable();
            app.submission = SubmissionState::Failed { retryable };
            app.set_status(failure_message(&e));
        }
    }
}

fn failure_message(e: &OtpError) -> String {
    let texts = t();
    match e {
        OtpError::Transport(_) => texts.status.network_error.to_string(),
        OtpError::IncompleteCode { .. } => texts.status.incomplete.to_string(),
        OtpError::SubmissionPending => texts.status.already_submitting.to_string(),
        OtpError::SessionStore(_) => format!("{}: {e}", texts.status.submit_failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, OtpMessage};
    use crate::update::update;

    fn filled(code: &str) -> App {
        let mut app = App::new();
        update(&mut app, AppMessage::Otp(OtpMessage::Autofill(code.into())));
        app
    }

    #[test]
    fn incomplete_code_produces_no_command() {
        let mut app = filled("12345");
        assert_eq!(submit(&mut app), None);
        assert_eq!(app.submission, SubmissionState::Idle);
        assert!(app.status_message.is_some());
        assert_eq!(app.otp.code().to_code(), "12345");
    }

    #[test]
    fn complete_code_is_handed_off_as_snapshot() {
        let mut app = filled("123456");
        let command = submit(&mut app);
        assert_eq!(command, Some(Command::Submit(app.otp.code())));
        assert!(app.submission.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut app = filled("123456");
        assert!(submit(&mut app).is_some());
        assert_eq!(submit(&mut app), None);
        assert!(app.submission.is_pending());
    }

    #[test]
    fn redirect_shows_redirected_page() {
        let mut app = filled("123456");
        submit(&mut app);
        finished(
            &mut app,
            Ok(Navigation::Redirect("https://example.test/next".into())),
        );
        assert_eq!(
            app.current_page,
            Page::Redirected {
                url: "https://example.test/next".into()
            }
        );
        assert_eq!(app.submission, SubmissionState::Idle);
    }

    #[test]
    fn fallback_shows_loading_page() {
        let mut app = filled("123456");
        submit(&mut app);
        finished(&mut app, Ok(Navigation::Fallback("/loading".into())));
        assert_eq!(
            app.current_page,
            Page::Loading {
                route: "/loading".into()
            }
        );
    }

    #[test]
    fn transport_failure_offers_retry() {
        let mut app = filled("123456");
        submit(&mut app);
        finished(&mut app, Err(OtpError::Transport("connection refused".into())));

        assert!(app.current_page.is_entry());
        assert!(app.submission.can_retry());
        assert!(app.status_message.is_some());
        assert_eq!(app.otp.code().to_code(), "123456");

        // Enter 再次提交
        assert!(submit(&mut app).is_some());
    }
}
