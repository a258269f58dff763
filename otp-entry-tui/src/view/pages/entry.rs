//! 验证码输入页

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::{text, TextKey};
use crate::model::App;
use crate::view::components;
use crate::view::layout::entry_areas;
use crate::view::theme::{colors, Styles};

/// 渲染输入页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let areas = entry_areas(area);
    let state = app.otp.snapshot();
    let pending = app.submission.is_pending();

    // 标题
    let heading = Paragraph::new(text(TextKey::Heading))
        .style(Styles::title())
        .alignment(Alignment::Center);
    frame.render_widget(heading, areas.heading);

    // 说明
    let helper = Paragraph::new(text(TextKey::Helper))
        .style(Style::default().fg(c.muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(helper, areas.helper);

    // 六个格子
    components::code_input::render(&state, pending, frame, &areas.cells);

    // 提交按钮
    let label = if pending {
        text(TextKey::Submitting)
    } else if app.submission.can_retry() {
        text(TextKey::Retry)
    } else {
        text(TextKey::Submit)
    };
    let button_style = if state.code.is_complete() && !pending {
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let button = Paragraph::new(Line::from(Span::styled(format!("  {label}  "), button_style)))
        .alignment(Alignment::Center);
    frame.render_widget(button, areas.submit);

    // 安全提示
    let warning = Paragraph::new(text(TextKey::Warning))
        .style(Style::default().fg(c.warning))
        .alignment(Alignment::Center);
    frame.render_widget(warning, areas.warning);

    // 页脚
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            text(TextKey::FooterResend),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled("  ·  ", Style::default().fg(c.muted)),
        Span::styled(
            text(TextKey::FooterHelp),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, areas.footer);
}
