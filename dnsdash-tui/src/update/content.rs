//! 内容面板消息处理

use std::time::Instant;

use dnsdash_core::describe_record;

use crate::message::ContentMessage;
use crate::model::{
    App, ConfirmAction, ConfirmDialog, DetailView, Menu, MenuAction, Modal, Page, RecordForm,
    ToastKind,
};

use super::{Command, open_records, toast};

pub fn update(app: &mut App, msg: ContentMessage, now: Instant) -> Vec<Command> {
    match app.page.clone() {
        Page::Domains => update_domains(app, msg, now),
        Page::Records { domain } => update_records(app, &domain, msg, now),
    }
}

fn update_domains(app: &mut App, msg: ContentMessage, now: Instant) -> Vec<Command> {
    let len = app.domain_rows().len();
    let cursor = &mut app.domains.cursor;
    match msg {
        ContentMessage::SelectPrevious => cursor.previous(),
        ContentMessage::SelectNext => cursor.next(len),
        ContentMessage::SelectFirst => cursor.first(),
        ContentMessage::SelectLast => cursor.last(len),
        ContentMessage::Open => {
            if let Some(domain) = app.selected_domain() {
                let name = domain.name.clone();
                return open_records(app, name, now);
            }
        }
        ContentMessage::RowMenu => {
            if let Some(domain) = app.selected_domain() {
                let menu = Menu::new(vec![MenuAction::ManageRecords(domain.name.clone())]);
                app.modal.open(Modal::Menu(menu));
            }
        }
        _ => {}
    }
    Vec::new()
}

fn update_records(
    app: &mut App,
    domain: &str,
    msg: ContentMessage,
    now: Instant,
) -> Vec<Command> {
    let len = app.visible_records().len();
    match msg {
        ContentMessage::SelectPrevious => app.records.cursor.previous(),
        ContentMessage::SelectNext => app.records.cursor.next(len),
        ContentMessage::SelectFirst => app.records.cursor.first(),
        ContentMessage::SelectLast => app.records.cursor.last(len),

        ContentMessage::Open | ContentMessage::ShowDetail => {
            if let Some(record) = app.selected_record().cloned() {
                let description =
                    describe_record(domain, &record.name, &record.value, &record.record_type);
                app.modal.open(Modal::Detail(DetailView {
                    domain: domain.to_string(),
                    record,
                    description,
                }));
            }
        }

        ContentMessage::ToggleSelection => {
            if let Some(record) = app.selected_record().cloned()
                && !app.records.selection.toggle(&record)
            {
                toast(app, ToastKind::Info, "System records cannot be selected", now);
            }
        }
        ContentMessage::SelectAll => {
            let rows: Vec<_> = app.visible_records().into_iter().cloned().collect();
            app.records.selection.select_all(&rows);
        }

        ContentMessage::NewRecord => {
            app.modal.open(Modal::RecordForm(RecordForm::create(domain)));
        }
        ContentMessage::EditRecord => {
            if let Some(record) = app.selected_record().cloned() {
                edit_record(app, domain, &record, now);
            }
        }
        ContentMessage::DeleteRecord => {
            if let Some(record) = app.selected_record().cloned() {
                delete_record(app, domain, record, now);
            }
        }
        ContentMessage::DeleteSelected => {
            let records = selected_rows(app);
            delete_selected(app, domain, records, now);
        }

        ContentMessage::RowMenu => {
            if let Some(record) = app.selected_record().cloned() {
                if record.is_system {
                    toast(app, ToastKind::Info, "System records are managed by Vercel", now);
                } else {
                    let menu = Menu::new(vec![
                        MenuAction::EditRecord(record.clone()),
                        MenuAction::DeleteRecord(record),
                    ]);
                    app.modal.open(Modal::Menu(menu));
                }
            }
        }
        ContentMessage::HeaderMenu => {
            let menu = Menu::new(vec![MenuAction::DeleteSelected(selected_rows(app))]);
            app.modal.open(Modal::Menu(menu));
        }

        ContentMessage::CopyValue => {
            if let Some(record) = app.selected_record() {
                let value = record.value.clone();
                toast(app, ToastKind::Success, "Value copied", now);
                return vec![Command::Copy(value)];
            }
        }
        ContentMessage::CopyName => {
            if let Some(record) = app.selected_record() {
                let name = record.name.clone();
                toast(app, ToastKind::Success, "Name copied", now);
                return vec![Command::Copy(name)];
            }
        }

        ContentMessage::NextType => app.records.cycle_type(true),
        ContentMessage::PrevType => app.records.cycle_type(false),
        ContentMessage::StartSearch => app.records.search_active = true,
        ContentMessage::SearchInput(ch) => app.records.push_query(ch),
        ContentMessage::SearchBackspace => app.records.pop_query(),
        ContentMessage::EndSearch => app.records.search_active = false,
    }
    Vec::new()
}

fn selected_rows(app: &App) -> Vec<dnsdash_core::types::RecordItem> {
    app.records
        .selection
        .selected(app.record_rows())
        .into_iter()
        .cloned()
        .collect()
}

pub(super) fn edit_record(
    app: &mut App,
    domain: &str,
    record: &dnsdash_core::types::RecordItem,
    now: Instant,
) {
    if record.is_system {
        toast(app, ToastKind::Info, "System records cannot be edited", now);
        return;
    }
    match RecordForm::edit(domain, record) {
        Some(form) => app.modal.open(Modal::RecordForm(form)),
        None => toast(
            app,
            ToastKind::Error,
            format!("{} records cannot be edited here", record.record_type),
            now,
        ),
    }
}

pub(super) fn delete_record(
    app: &mut App,
    domain: &str,
    record: dnsdash_core::types::RecordItem,
    now: Instant,
) {
    if record.is_system {
        toast(app, ToastKind::Info, "System records cannot be deleted", now);
        return;
    }
    app.modal
        .open(Modal::Confirm(ConfirmDialog::new(ConfirmAction::DeleteRecord {
            domain: domain.to_string(),
            record,
        })));
}

pub(super) fn delete_selected(
    app: &mut App,
    domain: &str,
    records: Vec<dnsdash_core::types::RecordItem>,
    now: Instant,
) {
    if records.is_empty() {
        app.modal.close();
        toast(app, ToastKind::Info, "No records selected", now);
        return;
    }
    app.modal
        .open(Modal::Confirm(ConfirmDialog::new(ConfirmAction::BatchDelete {
            domain: domain.to_string(),
            records,
        })));
}
