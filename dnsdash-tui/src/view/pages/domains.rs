//! 域名列表页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use dnsdash_core::QueryState;
use dnsdash_core::types::DomainItem;

use crate::model::App;
use crate::view::components::table::{Column, DataTable};
use crate::view::theme::colors;

/// 渲染域名页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let [note_area, error_area, table_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(u16::from(app.domains_query().is_some_and(|q| q.error.is_some()))),
        Constraint::Min(1),
    ])
    .areas(area);

    let note = Line::from(vec![
        Span::styled(" ⚠ ", Style::default().fg(c.warning)),
        Span::styled(
            "Only DNS records can be managed here. Buy, transfer or remove domains in the Vercel dashboard.",
            Style::default().fg(c.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(note), note_area);

    if let Some(error) = app.domains_query().and_then(|q| q.error.as_deref()) {
        frame.render_widget(
            Paragraph::new(Line::styled(format!(" ✗ {error}"), Style::default().fg(c.error))),
            error_area,
        );
    }

    let columns = vec![
        Column::text("Domain", Constraint::Min(24), |d: &DomainItem| d.name.clone()),
        Column::new("NameServer", Constraint::Length(14), |d: &DomainItem, _| {
            Line::styled(
                d.name_server.label(),
                Style::default().fg(colors().name_server(d.name_server)),
            )
        }),
        Column::text("Created At", Constraint::Length(20), |d: &DomainItem| {
            d.created_at.clone()
        }),
    ];

    let pending = app.domains_query().is_none_or(QueryState::is_pending);
    DataTable::new(columns, app.domain_rows().iter().collect())
        .selected(app.domains.cursor.selected)
        .placeholder(pending)
        .empty_message("No domains in this account")
        .render(frame, table_area);
}
