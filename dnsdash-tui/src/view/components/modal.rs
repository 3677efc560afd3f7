//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use dnsdash_core::types::DnsRecordType;

use crate::event::HELP_ENTRIES;
use crate::model::{
    App, ConfirmDialog, DetailView, FormField, Menu, Modal, RecordForm, TokenField, TokenForm,
};
use crate::util::mask_secret;
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Token(form) => render_token(frame, form),
        Modal::RecordForm(form) => render_record_form(frame, form),
        Modal::Confirm(dialog) => render_confirm(frame, dialog),
        Modal::Detail(detail) => render_detail(frame, detail),
        Modal::Menu(menu) => render_menu(frame, menu),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// 清除背景并绘制边框，返回内容区域
fn open_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 输入框：标签一行 + 值一行
fn input_lines(label: &str, value: &str, focused: bool, hint: &str) -> [Line<'static>; 2] {
    let c = colors();
    let label_line = Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(c.muted)),
        if focused && !hint.is_empty() {
            Span::styled(format!(" ({hint})"), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]);
    let value_line = if focused {
        Line::styled(format!("  {value}▎"), Style::default().fg(c.highlight))
    } else {
        Line::styled(format!("  {value}"), Style::default().fg(c.fg))
    };
    [label_line, value_line]
}

fn error_line(error: Option<&str>) -> Line<'static> {
    error.map_or_else(
        || Line::from(""),
        |e| Line::styled(format!("✗ {e}"), Style::default().fg(colors().error)),
    )
}

fn render_token(frame: &mut Frame, form: &TokenForm) {
    let area = centered_rect(60, 13, frame.area());
    let inner = open_frame(frame, area, "Vercel API Token", colors().border_focused);

    let token = if form.show_secret {
        form.token.clone()
    } else {
        mask_secret(&form.token)
    };

    let mut lines = vec![Line::styled(
        "Create a token at vercel.com/account/tokens",
        Styles::muted(),
    )];
    lines.push(Line::from(""));
    lines.extend(input_lines(
        "API Token",
        &token,
        form.focus == TokenField::Token,
        "Alt+s to show",
    ));
    lines.extend(input_lines(
        "Team ID (optional)",
        &form.team_id,
        form.focus == TokenField::Team,
        "",
    ));
    lines.push(Line::from(""));
    lines.push(if form.submitting {
        Line::styled("Validating token…", Styles::muted())
    } else {
        error_line(form.error.as_deref())
    });

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_record_form(frame: &mut Frame, form: &RecordForm) {
    let fields = form.fields();
    let height = 4 + u16::try_from(fields.len() * 2).unwrap_or(10) + 2;
    let area = centered_rect(64, height, frame.area());
    let title = format!("{} · {}", form.title(), form.domain);
    let inner = open_frame(frame, area, &title, colors().border_focused);

    let record_type = form.record_type();
    let mut lines = Vec::new();
    for field in fields {
        let focused = form.focus == field;
        let rendered = match field {
            FormField::Name => input_lines("Name (empty for apex)", &form.name, focused, ""),
            FormField::Type => type_selector(&record_type, focused),
            FormField::Value => input_lines("Value", &form.value, focused, value_hint(&record_type)),
            FormField::Ttl => input_lines("TTL (seconds, optional)", &form.ttl, focused, "min 60"),
            FormField::Priority => input_lines("Priority", &form.priority, focused, "0-65535"),
        };
        lines.extend(rendered);
    }
    lines.push(Line::from(""));
    lines.push(if form.submitting {
        Line::styled("Saving…", Styles::muted())
    } else {
        error_line(form.error.as_deref())
    });

    frame.render_widget(Paragraph::new(lines), inner);
}

fn type_selector(record_type: &DnsRecordType, focused: bool) -> [Line<'static>; 2] {
    let c = colors();
    let style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let (left, right) = if focused { ("◀", "▶") } else { (" ", " ") };
    [
        Line::from(vec![
            Span::styled("Type", Style::default().fg(c.muted)),
            if focused {
                Span::styled(" (←→ to switch)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw("")
            },
        ]),
        Line::styled(format!("  {left} {record_type} {right}"), style),
    ]
}

/// 值输入框的格式提示
fn value_hint(record_type: &DnsRecordType) -> &'static str {
    match record_type {
        DnsRecordType::A => "IPv4 address",
        DnsRecordType::Aaaa => "IPv6 address",
        DnsRecordType::Alias | DnsRecordType::Cname => "target host",
        DnsRecordType::Caa => "flags tag \"value\"",
        DnsRecordType::Mx => "mail server",
        DnsRecordType::Srv => "weight port target",
        DnsRecordType::Ns => "name server",
        DnsRecordType::Https => "priority target params",
        DnsRecordType::Txt => "text",
        DnsRecordType::Other(_) => "",
    }
}

fn render_confirm(frame: &mut Frame, dialog: &ConfirmDialog) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    let inner = open_frame(frame, area, dialog.title(), c.error);

    let cancel_style = if dialog.confirm_focused {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };
    let confirm_style = if dialog.confirm_focused {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };
    let confirm_label = match dialog.action {
        crate::model::ConfirmAction::Logout => " Remove ",
        _ => " Delete ",
    };

    let lines = vec![
        Line::from(""),
        Line::styled(dialog.message(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(confirm_label, confirm_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_detail(frame: &mut Frame, detail: &DetailView) {
    let c = colors();
    let area = centered_rect(72, 16, frame.area());
    let inner = open_frame(frame, area, "Record Details", c.border_focused);
    let record = &detail.record;

    let fqdn = if record.name.is_empty() {
        detail.domain.clone()
    } else {
        format!("{}.{}", record.name, detail.domain)
    };
    let priority = record.priority.map(|p| p.to_string()).unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![Span::styled("Name   ", Styles::muted()), Span::styled(fqdn, Styles::code())]),
        Line::from(vec![
            Span::styled("Type   ", Styles::muted()),
            Span::raw(record.record_type.to_string()),
            Span::styled(format!("   TTL {}", record.ttl), Styles::muted()),
        ]),
    ];
    if !priority.is_empty() {
        lines.push(Line::from(vec![Span::styled("Prio   ", Styles::muted()), Span::raw(priority)]));
    }
    lines.push(Line::from(vec![
        Span::styled("Value  ", Styles::muted()),
        Span::styled(record.value.clone(), Styles::code()),
    ]));
    if record.is_system {
        lines.push(Line::styled(
            "Managed by Vercel; cannot be edited or deleted.",
            Style::default().fg(c.warning),
        ));
    }
    lines.push(Line::from(""));
    if detail.description.is_empty() {
        lines.push(Line::styled("No description for this record type.", Styles::muted()));
    } else {
        lines.push(Line::styled(detail.description.clone(), Style::default().fg(c.fg)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_menu(frame: &mut Frame, menu: &Menu) {
    let height = u16::try_from(menu.items.len()).unwrap_or(1) + 2;
    let area = centered_rect(32, height, frame.area());
    let inner = open_frame(frame, area, "Actions", colors().border_focused);

    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == menu.selected {
                Line::styled(format!("▸ {}", item.label()), Styles::selected())
            } else {
                Line::raw(format!("  {}", item.label()))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help(frame: &mut Frame) {
    let rows: usize = HELP_ENTRIES.iter().map(|(_, keys)| keys.len() + 2).sum();
    let area = centered_rect(62, u16::try_from(rows + 3).unwrap_or(30), frame.area());
    let inner = open_frame(frame, area, "Help", Color::Cyan);

    let mut lines = Vec::new();
    for (section, keys) in HELP_ENTRIES {
        lines.push(Line::styled(
            *section,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<16}"), Style::default().fg(Color::Yellow)),
                Span::styled(*desc, Style::default().fg(colors().fg)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(lines), inner);
}
