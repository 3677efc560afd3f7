//! 弹窗消息处理

use std::time::Instant;

use crate::message::ModalMessage;
use crate::model::{App, ConfirmAction, FormField, FormMode, MenuAction, Modal, ToastKind};

use super::content::{delete_record, delete_selected, edit_record};
use super::{Command, open_records, toast};

pub fn update(app: &mut App, msg: ModalMessage, now: Instant) -> Vec<Command> {
    let Some(modal) = app.modal.active.take() else {
        return Vec::new();
    };

    if msg == ModalMessage::Close {
        return Vec::new();
    }

    match modal {
        Modal::Token(mut form) => {
            let mut commands = Vec::new();
            match msg {
                ModalMessage::NextField | ModalMessage::PrevField => form.toggle_focus(),
                ModalMessage::Input(ch) => form.input(ch),
                ModalMessage::Backspace => form.backspace(),
                ModalMessage::ToggleSecret => form.show_secret = !form.show_secret,
                ModalMessage::Confirm if !form.submitting => match form.credentials() {
                    Ok(credentials) => {
                        form.submitting = true;
                        form.error = None;
                        commands.push(Command::Login(credentials));
                    }
                    Err(e) => form.error = Some(e),
                },
                _ => {}
            }
            app.modal.open(Modal::Token(form));
            commands
        }

        Modal::RecordForm(mut form) => {
            let mut commands = Vec::new();
            match msg {
                ModalMessage::NextField | ModalMessage::Down => form.next_field(),
                ModalMessage::PrevField | ModalMessage::Up => form.prev_field(),
                ModalMessage::Left if form.focus == FormField::Type => form.cycle_type(false),
                ModalMessage::Right if form.focus == FormField::Type => form.cycle_type(true),
                ModalMessage::Input(ch) => form.input(ch),
                ModalMessage::Backspace => form.backspace(),
                ModalMessage::Confirm if !form.submitting => {
                    let command = match &form.mode {
                        FormMode::Create => form.create_request().map(Command::CreateRecord),
                        FormMode::Edit(record) => {
                            form.update_request().map(|request| Command::UpdateRecord {
                                record: record.clone(),
                                request,
                            })
                        }
                    };
                    match command {
                        Ok(command) => {
                            form.submitting = true;
                            form.error = None;
                            commands.push(command);
                        }
                        Err(e) => form.error = Some(e),
                    }
                }
                _ => {}
            }
            app.modal.open(Modal::RecordForm(form));
            commands
        }

        Modal::Confirm(mut dialog) => match msg {
            ModalMessage::Left | ModalMessage::Right | ModalMessage::NextField | ModalMessage::PrevField => {
                dialog.confirm_focused = !dialog.confirm_focused;
                app.modal.open(Modal::Confirm(dialog));
                Vec::new()
            }
            ModalMessage::Confirm if !dialog.confirm_focused => Vec::new(),
            ModalMessage::Confirm | ModalMessage::Accept => vec![confirm(dialog.action)],
            _ => {
                app.modal.open(Modal::Confirm(dialog));
                Vec::new()
            }
        },

        Modal::Detail(detail) => {
            let text = match msg {
                ModalMessage::CopyValue => Some((detail.record.value.clone(), "Value copied")),
                ModalMessage::CopyName => Some((detail.record.name.clone(), "Name copied")),
                ModalMessage::Confirm => return Vec::new(),
                _ => None,
            };
            app.modal.open(Modal::Detail(detail));
            match text {
                Some((text, label)) => {
                    toast(app, ToastKind::Success, label, now);
                    vec![Command::Copy(text)]
                }
                None => Vec::new(),
            }
        }

        Modal::Menu(mut menu) => match msg {
            ModalMessage::Up | ModalMessage::PrevField => {
                menu.previous();
                app.modal.open(Modal::Menu(menu));
                Vec::new()
            }
            ModalMessage::Down | ModalMessage::NextField => {
                menu.next();
                app.modal.open(Modal::Menu(menu));
                Vec::new()
            }
            ModalMessage::Confirm => match menu.current().cloned() {
                Some(action) => run_menu_action(app, action, now),
                None => Vec::new(),
            },
            _ => {
                app.modal.open(Modal::Menu(menu));
                Vec::new()
            }
        },

        Modal::Help => match msg {
            ModalMessage::Confirm => Vec::new(),
            _ => {
                app.modal.open(Modal::Help);
                Vec::new()
            }
        },
    }
}

fn confirm(action: ConfirmAction) -> Command {
    match action {
        ConfirmAction::DeleteRecord { domain, record } => Command::DeleteRecord { domain, record },
        ConfirmAction::BatchDelete { domain, records } => Command::BatchDelete { domain, records },
        ConfirmAction::Logout => Command::Logout,
    }
}

fn run_menu_action(app: &mut App, action: MenuAction, now: Instant) -> Vec<Command> {
    match action {
        MenuAction::ManageRecords(domain) => return open_records(app, domain, now),
        MenuAction::EditRecord(record) => {
            if let Some(domain) = app.page.domain().map(str::to_string) {
                edit_record(app, &domain, &record, now);
            }
        }
        MenuAction::DeleteRecord(record) => {
            if let Some(domain) = app.page.domain().map(str::to_string) {
                delete_record(app, &domain, record, now);
            }
        }
        MenuAction::DeleteSelected(records) => {
            if let Some(domain) = app.page.domain().map(str::to_string) {
                delete_selected(app, &domain, records, now);
            }
        }
    }
    Vec::new()
}
