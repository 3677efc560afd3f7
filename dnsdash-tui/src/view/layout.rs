//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染整个画面
///
/// 从上到下依次为面包屑、当前页面与状态栏；弹窗与 toast 叠加在最上层。
pub fn render(app: &App, frame: &mut Frame) {
    let [crumb_area, page_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(breadcrumb(&app.page)).style(Styles::statusbar()),
        crumb_area,
    );
    render_page(app, frame, page_area);
    components::statusbar::render(app, frame, status_area);

    components::modal::render(app, frame);
    components::toast::render(app, frame, frame.area());
}

/// 标题栏中的面包屑
pub fn breadcrumb(page: &Page) -> String {
    match page {
        Page::Domains => format!(" dnsdash › {}", page.title()),
        Page::Records { domain } => format!(" dnsdash › Domains › {domain} › {}", page.title()),
    }
}

/// 页面边框标题："Domains (3)"，加载中附加标记
fn page_title(app: &App) -> Line<'static> {
    let c = colors();
    let count = match app.page {
        Page::Domains => app.domain_rows().len(),
        Page::Records { .. } => app.record_rows().len(),
    };
    let mut spans = vec![Span::styled(
        format!(" {} ({count}) ", app.page.title()),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    )];
    if app.is_loading() {
        spans.push(Span::styled("⟳ ", Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}

fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(page_title(app))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if matches!(app.page, Page::Records { .. }) {
        pages::records::render(app, frame, inner);
    } else {
        pages::domains::render(app, frame, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToastKind;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    #[test]
    fn breadcrumb_names_the_domain() {
        assert_eq!(breadcrumb(&Page::Domains), " dnsdash › Domains");
        assert_eq!(
            breadcrumb(&Page::Records {
                domain: "example.com".into()
            }),
            " dnsdash › Domains › example.com › DNS Records"
        );
    }

    #[test]
    fn full_frame_renders_toasts_over_content() {
        let mut app = App::default();
        app.toasts.push(
            ToastKind::Error,
            "Failed to load domains list",
            Instant::now(),
            Duration::from_secs(3),
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Failed to load domains list"));
        assert!(text.contains("dnsdash › Domains"));
        assert!(text.contains("Domains (0)"));
    }
}
