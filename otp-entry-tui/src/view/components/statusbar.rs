//! 状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{t, Translations};
use crate::model::{App, Page, SubmissionState};
use crate::view::theme::{colors, Styles};

const SEPARATOR: &str = " │ ";

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面生成快捷键提示
    let hints = get_hints(app, t());

    // 构建状态栏内容
    let mut spans = Vec::new();
    let mut used = 0;

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            used += SEPARATOR.width();
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
        used += key.width() + 1 + desc.width();
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        let color = match app.submission {
            SubmissionState::Failed { .. } => colors().error,
            _ => Color::Yellow,
        };
        let room = usize::from(area.width).saturating_sub(used + SEPARATOR.width());
        spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(truncate_to_width(msg, room), Style::default().fg(color)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App, texts: &'static Translations) -> Vec<(&'static str, &'static str)> {
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    if app.current_page == Page::Entry {
        hints.push((keys.digits, actions.type_digit));
        hints.push((keys.arrows_lr, actions.move_focus));
        hints.push((keys.backspace, actions.delete));
        if app.submission.can_retry() {
            hints.push((keys.enter, actions.retry));
        } else {
            hints.push((keys.enter, actions.submit));
        }
    }

    hints.push((keys.alt_l, actions.language));
    hints.push((keys.alt_t, actions.theme));
    hints.push((keys.esc, actions.quit));

    hints
}

/// 按显示宽度截断，超出部分用省略号表示
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}
