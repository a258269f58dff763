//! 验证码输入框组件
//!
//! 六个带边框的格子：
//! - 焦点格使用高亮边框，并把终端光标放在格子中央
//! - 焦点格内容被选中时反色显示（再输入会直接替换）
//! - 提交进行中时整体变暗

use otp_entry_core::ControllerState;
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::view::theme::colors;

/// 渲染验证码输入框
pub fn render(state: &ControllerState, pending: bool, frame: &mut Frame, cells: &[Rect]) {
    let c = colors();

    for (index, area) in cells.iter().enumerate() {
        if area.is_empty() {
            continue;
        }

        let focused = state.focus.index() == index;
        let selected = focused && state.focused_cell_selected();

        let border_style = if pending {
            Style::default().fg(c.muted)
        } else if focused {
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        let mut digit_style = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);
        if selected {
            digit_style = digit_style
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::REVERSED);
        }

        let digit = Paragraph::new(state.code.get(index).to_string())
            .style(digit_style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(digit, *area);

        // 光标放在焦点格中央
        if focused && !pending && !selected {
            frame.set_cursor_position(Position::new(
                area.x + area.width / 2,
                area.y + area.height / 2,
            ));
        }
    }
}
