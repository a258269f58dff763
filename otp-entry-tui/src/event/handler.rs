use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use otp_entry_core::CODE_LENGTH;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, OtpMessage};
use crate::model::App;
use crate::view::layout::cell_at;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),     // 键盘事件
        Event::Paste(text) if app.current_page.is_entry() => {          // 粘贴
            AppMessage::Otp(OtpMessage::Paste(text))
        }
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop,                        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if app.current_page.is_entry() {
        handle_entry_keys(key)
    } else {
        handle_result_keys(key)
    }
}

/// 处理输入页的按键
fn handle_entry_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }

    let msg = match key.code {
        // 数字：部分键盘布局会带上 Shift
        KeyCode::Char(c)
            if c.is_ascii_digit()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            OtpMessage::Input(c.to_string())
        }

        // Shift+Tab 在多数终端上报为 BackTab（附带 SHIFT 修饰键）
        KeyCode::BackTab => OtpMessage::FocusPrev,

        _ if DefaultKeymap::BACKSPACE.matches(&key) => OtpMessage::Backspace,
        _ if DefaultKeymap::CLEAR.matches(&key) => OtpMessage::Clear,
        _ if DefaultKeymap::FOCUS_LEFT.matches(&key) => OtpMessage::Left,
        _ if DefaultKeymap::FOCUS_RIGHT.matches(&key) => OtpMessage::Right,
        _ if DefaultKeymap::FOCUS_NEXT.matches(&key) => OtpMessage::FocusNext,
        _ if DefaultKeymap::FOCUS_FIRST.matches(&key) => OtpMessage::FocusCell(0),
        _ if DefaultKeymap::FOCUS_LAST.matches(&key) => OtpMessage::FocusCell(CODE_LENGTH - 1),

        _ => return AppMessage::Noop,
    };

    AppMessage::Otp(msg)
}

/// 处理结果页的按键
fn handle_result_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        AppMessage::Quit
    } else {
        AppMessage::Noop
    }
}

/// 处理鼠标事件
///
/// 左键点击格子即聚焦该格，点击其他位置收起状态消息。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !app.current_page.is_entry() {
        return AppMessage::Noop;
    }

    match cell_at(app.viewport, mouse.column, mouse.row) {
        Some(index) => AppMessage::Otp(OtpMessage::FocusCell(index)),
        None if app.status_message.is_some() => AppMessage::ClearStatus,
        None => AppMessage::Noop,
    }
}
