//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use dnsdash_core::TokenSource;

use crate::model::{App, Modal, Page, Session};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let status = status_text(app);
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(status.chars().count() + 1).unwrap_or(0)),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), left);
    frame.render_widget(
        Paragraph::new(Line::from(status).right_aligned()).style(Styles::statusbar()),
        right,
    );
}

/// 右侧状态：加载中、已选数量与 token 来源
pub fn status_text(app: &App) -> String {
    let mut parts = Vec::new();
    if app.is_loading() {
        parts.push("⟳ Loading".to_string());
    }
    if matches!(app.page, Page::Records { .. }) && !app.records.selection.is_empty() {
        parts.push(format!("{} selected", app.records.selection.len()));
    }
    parts.push(
        match app.session {
            Session::Restoring => "…",
            Session::SignedOut => "No token",
            Session::SignedIn(TokenSource::Explicit) => "Token: env",
            Session::SignedIn(TokenSource::Keychain) => "Token: keychain",
        }
        .to_string(),
    );
    format!("{} ", parts.join(" · "))
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if let Some(modal) = &app.modal.active {
        return match modal {
            Modal::Token(_) => vec![("Enter", "Save"), ("Tab", "Field"), ("Alt+s", "Show"), ("Esc", "Close")],
            Modal::RecordForm(_) => vec![("Enter", "Save"), ("Tab", "Field"), ("←→", "Type"), ("Esc", "Cancel")],
            Modal::Confirm(_) => vec![("←→", "Choose"), ("Enter", "Confirm"), ("y/n", "Yes/No")],
            Modal::Detail(_) => vec![("c", "Copy value"), ("C", "Copy name"), ("Esc", "Close")],
            Modal::Menu(_) => vec![("↑↓", "Select"), ("Enter", "Run"), ("Esc", "Close")],
            Modal::Help => vec![("Esc", "Close")],
        };
    }

    let mut hints = vec![("↑↓", "Select")];
    match &app.page {
        Page::Domains => {
            hints.push(("Enter", "Records"));
            hints.push(("m", "Menu"));
        }
        Page::Records { .. } if app.records.search_active => {
            return vec![("Type", "Search"), ("Enter/Esc", "Done")];
        }
        Page::Records { .. } => {
            hints.push(("n", "New"));
            hints.push(("m", "Menu"));
            hints.push(("Space", "Select"));
            hints.push(("/", "Search"));
            hints.push(("f", "Type"));
            hints.push(("Esc", "Back"));
        }
    }
    hints.push(("r", "Refresh"));
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));
    hints
}
