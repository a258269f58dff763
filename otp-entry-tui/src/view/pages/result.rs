//! 提交结果页

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

/// 服务端重定向后的页面
pub fn render_redirected(frame: &mut Frame, area: Rect, url: &str) {
    let texts = t();
    render_location(
        frame,
        area,
        texts.result.redirected_title,
        texts.result.redirected_body,
        url,
    );
}

/// 未重定向时的等待页面
pub fn render_loading(frame: &mut Frame, area: Rect, route: &str) {
    let texts = t();
    render_location(
        frame,
        area,
        texts.result.loading_title,
        texts.result.loading_body,
        route,
    );
}

fn render_location(frame: &mut Frame, area: Rect, title: &str, body: &str, location: &str) {
    let c = colors();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {body}"),
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {location}"),
            Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
