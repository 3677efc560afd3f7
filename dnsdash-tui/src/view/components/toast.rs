//! 右上角通知

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::App;
use crate::util::{display_width, ellipsis};
use crate::view::theme::colors;

const MAX_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 3;

/// 渲染所有未过期的 toast，最新的在最上面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut y = area.y + 1;

    for toast in app.toasts.iter().rev() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = toast_rect(area, y, &toast.message);
        let (color, icon) = c.toast_accent(toast.kind);
        let inner_width = usize::from(rect.width.saturating_sub(4));
        let text = ellipsis(&format!("{icon} {}", toast.message), inner_width);

        frame.render_widget(Clear, rect);
        let paragraph = Paragraph::new(Line::styled(text, Style::default().fg(c.fg))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(c.bg)),
        );
        frame.render_widget(paragraph, rect);
        y += TOAST_HEIGHT;
    }
}

fn toast_rect(area: Rect, y: u16, message: &str) -> Rect {
    let wanted = u16::try_from(display_width(message) + 6).unwrap_or(MAX_WIDTH);
    let width = wanted.clamp(20, MAX_WIDTH).min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    Rect::new(x, y, width, TOAST_HEIGHT)
}
