//! 主布局

use otp_entry_core::CODE_LENGTH;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{t, text, TextKey};
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 单个格子的宽度（含边框）
pub const CELL_WIDTH: u16 = 7;
/// 单个格子的高度（含边框）
pub const CELL_HEIGHT: u16 = 3;
/// 格子之间的间距
pub const CELL_GAP: u16 = 1;

/// 屏幕三层区域
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub title: Rect,
    /// 内容区（含边框）
    pub content: Rect,
    pub status: Rect,
}

/// 输入页内部各区域
#[derive(Debug, Clone, Copy)]
pub struct EntryAreas {
    pub heading: Rect,
    pub helper: Rect,
    pub cells: [Rect; CODE_LENGTH],
    pub submit: Rect,
    pub warning: Rect,
    pub footer: Rect,
}

/// 计算屏幕三层布局：标题栏 + 主内容区 + 状态栏
pub fn screen_areas(size: Rect) -> ScreenAreas {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    ScreenAreas {
        title: main_layout[0],
        content: main_layout[1],
        status: main_layout[2],
    }
}

/// 内容区边框以内的区域
pub fn page_area(size: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(screen_areas(size).content)
}

/// 计算输入页布局
pub fn entry_areas(area: Rect) -> EntryAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // 留白
            Constraint::Length(1),           // 标题
            Constraint::Length(1),           // 留白
            Constraint::Length(2),           // 说明
            Constraint::Length(1),           // 留白
            Constraint::Length(CELL_HEIGHT), // 格子
            Constraint::Length(1),           // 留白
            Constraint::Length(1),           // 提交按钮
            Constraint::Length(1),           // 留白
            Constraint::Length(1),           // 安全提示
            Constraint::Min(0),              // 弹性留白
            Constraint::Length(1),           // 页脚
        ])
        .split(area);

    EntryAreas {
        heading: rows[1],
        helper: rows[3],
        cells: cell_areas(rows[5]),
        submit: rows[7],
        warning: rows[9],
        footer: rows[11],
    }
}

/// 在一行内水平居中排列六个格子
///
/// 终端太窄时格子会被裁剪到 `row` 以内。
pub fn cell_areas(row: Rect) -> [Rect; CODE_LENGTH] {
    let count = u16::try_from(CODE_LENGTH).unwrap_or(u16::MAX);
    let total = CELL_WIDTH * count + CELL_GAP * count.saturating_sub(1);
    let start_x = row.x + row.width.saturating_sub(total) / 2;

    std::array::from_fn(|i| {
        let i = u16::try_from(i).unwrap_or(u16::MAX);
        let x = start_x.saturating_add(i.saturating_mul(CELL_WIDTH + CELL_GAP));
        Rect::new(x, row.y, CELL_WIDTH, CELL_HEIGHT).intersection(row)
    })
}

/// 屏幕坐标落在哪个格子上
pub fn cell_at(size: Rect, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    entry_areas(page_area(size))
        .cells
        .iter()
        .position(|cell| !cell.is_empty() && cell.contains(position))
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = screen_areas(frame.area());

    // 渲染标题栏
    render_title_bar(frame, areas.title);

    // 渲染内容
    render_page_content(app, frame, areas.content);

    // 渲染状态栏
    components::statusbar::render(app, frame, areas.status);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let page_title = match &app.current_page {
        Page::Entry => text(TextKey::Title),
        Page::Redirected { .. } => texts.result.redirected_title,
        Page::Loading { .. } => texts.result.loading_title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Entry => pages::entry::render(app, frame, inner_area),
        Page::Redirected { url } => pages::result::render_redirected(frame, inner_area, url),
        Page::Loading { route } => pages::result::render_loading(frame, inner_area, route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_centered_and_do_not_overlap() {
        let row = Rect::new(0, 10, 80, CELL_HEIGHT);
        let cells = cell_areas(row);

        let total = CELL_WIDTH * 6 + CELL_GAP * 5;
        assert_eq!(cells[0].x, (80 - total) / 2);
        for pair in cells.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + CELL_WIDTH + CELL_GAP);
            assert!(!pair[0].intersects(pair[1]));
        }
        assert!(cells.iter().all(|c| c.y == 10 && c.height == CELL_HEIGHT));
    }

    #[test]
    fn narrow_row_clips_cells() {
        let row = Rect::new(0, 0, 20, CELL_HEIGHT);
        let cells = cell_areas(row);
        assert!(cells
            .iter()
            .filter(|c| !c.is_empty())
            .all(|c| c.right() <= row.right()));
        assert!(cells[5].is_empty());
    }

    #[test]
    fn cell_at_finds_clicked_cell() {
        let size = Rect::new(0, 0, 100, 30);
        let cells = entry_areas(page_area(size)).cells;

        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell_at(size, cell.x + 1, cell.y + 1), Some(i));
        }
        // 格子之间的空隙
        assert_eq!(cell_at(size, cells[0].right(), cells[0].y + 1), None);
        // 标题栏
        assert_eq!(cell_at(size, cells[0].x, 0), None);
    }
}
