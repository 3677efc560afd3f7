//! DNS 记录页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use dnsdash_core::QueryState;
use dnsdash_core::types::RecordItem;

use crate::model::App;
use crate::util::{display_width, ellipsis};
use crate::view::components::table::{Column, DataTable};
use crate::view::theme::{Styles, colors};

/// 名称超过该长度时才显示完整名称提示
const NAME_TOOLTIP_MIN_CHARS: usize = 10;

/// 渲染 DNS 记录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let query = app.records_query();
    let error = query.and_then(|q| q.error.as_deref());
    let tooltip = app
        .selected_record()
        .and_then(|r| name_tooltip(&r.name));

    let [filter_area, error_area, table_area, tooltip_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(u16::from(error.is_some())),
        Constraint::Min(1),
        Constraint::Length(u16::from(tooltip.is_some())),
    ])
    .areas(area);

    render_filter_bar(app, frame, filter_area);

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(" ✗ {error}"),
                Style::default().fg(colors().error),
            )),
            error_area,
        );
    }

    render_table(app, frame, table_area, query.is_none_or(QueryState::is_pending));

    if let Some(full_name) = tooltip {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Name: ", Styles::muted()),
                Span::styled(full_name, Styles::code()),
            ])),
            tooltip_area,
        );
    }
}

/// 完整名称提示；短名称不需要
pub fn name_tooltip(name: &str) -> Option<String> {
    (name.chars().count() > NAME_TOOLTIP_MIN_CHARS).then(|| name.to_string())
}

fn render_filter_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.records;

    let search_style = if state.search_active {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };
    let query = if state.search_active {
        format!("{}▎", state.filter.query)
    } else if state.filter.query.is_empty() {
        "press / to search name or value".to_string()
    } else {
        state.filter.query.clone()
    };
    let query_style = if !state.search_active && state.filter.query.is_empty() {
        Styles::muted()
    } else {
        search_style
    };

    let line = Line::from(vec![
        Span::styled(" Type ", Styles::muted()),
        Span::styled(
            format!("◀ {} ▶", state.type_label()),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Search ", Styles::muted()),
        Span::styled(format!("[{query}]"), query_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect, pending: bool) {
    let selection = &app.records.selection;

    let columns = vec![
        Column::new("", Constraint::Length(3), |r: &RecordItem, _| {
            let marker = if r.disable_selection {
                "[-]"
            } else if selection.contains(&r.id) {
                "[x]"
            } else {
                "[ ]"
            };
            Line::styled(marker, Styles::muted())
        }),
        Column::text("Name", Constraint::Length(30), |r: &RecordItem| {
            if r.name.is_empty() {
                "@".to_string()
            } else {
                r.name.clone()
            }
        }),
        Column::text("Type", Constraint::Length(6), |r: &RecordItem| {
            r.record_type.to_string()
        }),
        Column::text("Priority", Constraint::Length(8), |r: &RecordItem| {
            r.priority.map(|p| p.to_string()).unwrap_or_default()
        }),
        Column::new("Value", Constraint::Min(16), |r: &RecordItem, w| {
            Line::styled(ellipsis(&r.value, w), Styles::code())
        }),
        Column::text("TTL", Constraint::Length(6), |r: &RecordItem| r.ttl.to_string()),
        Column::new("ⓘ", Constraint::Length(display_width_u16("ⓘ")), |_: &RecordItem, _| {
            Line::styled("ⓘ", Styles::muted())
        }),
    ];

    let muted = Styles::muted();
    DataTable::new(columns, app.visible_records())
        .selected(app.records.cursor.selected)
        .placeholder(pending)
        .empty_message(if app.records.filter.is_empty() {
            "No DNS records. Press n to add one."
        } else {
            "No records match the current filter"
        })
        .row_style(move |r: &RecordItem| if r.is_system { muted } else { Style::default() })
        .render(frame, area);
}

fn display_width_u16(s: &str) -> u16 {
    u16::try_from(display_width(s)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::{on_records, row, signed_in_app};
    use dnsdash_core::types::DnsRecordType;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 14)).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn tooltip_only_for_long_names() {
        assert_eq!(name_tooltip("www"), None);
        assert_eq!(name_tooltip("exactly10c"), None);
        assert_eq!(
            name_tooltip("_dmarc.mail"),
            Some("_dmarc.mail".to_string())
        );
    }

    #[test]
    fn records_render_with_markers() {
        let mut app = signed_in_app();
        let user = row("r1", "www", DnsRecordType::A, false);
        let system = row("r2", "", DnsRecordType::Ns, true);
        on_records(&mut app, vec![user.clone(), system], Instant::now());
        app.records.selection.toggle(&user);

        let text = screen(&app);
        assert!(text.contains("[x]"));
        assert!(text.contains("[-]"));
        assert!(text.contains("www.value"));
        assert!(text.contains("All"));
    }

    #[test]
    fn unknown_page_data_shows_placeholders() {
        let mut app = signed_in_app();
        app.page = crate::model::Page::Records {
            domain: "example.com".into(),
        };
        assert!(screen(&app).contains("░░░"));
    }
}
