//! 后台任务结果处理

use std::time::Instant;

use dnsdash_core::types::BatchDeleteResult;
use dnsdash_core::{DOMAINS_KEY, TokenSource, records_key};

use crate::message::{BackendEvent, TaskError};
use crate::model::{App, Modal, Page, Session, ToastKind};

use super::{Command, require_token, revalidate, toast};

const TOKEN_REJECTED: &str = "The API token was rejected. Enter a new one.";

pub fn update(app: &mut App, event: BackendEvent, now: Instant) -> Vec<Command> {
    match event {
        BackendEvent::DomainsLoaded(result) => {
            if let Err(e) = &result {
                load_failed(app, "Failed to load domains list", e, now);
            }
            app.queries.domains.complete(DOMAINS_KEY, result, now);
            let len = app.domain_rows().len();
            app.domains.cursor.clamp(len);
            Vec::new()
        }

        BackendEvent::RecordsLoaded { domain, result } => {
            if let Err(e) = &result {
                load_failed(app, "Failed to load DNS records", e, now);
            }
            app.queries.records.complete(&records_key(&domain), result, now);
            if app.page.domain() == Some(domain.as_str()) {
                let rows = app.record_rows().to_vec();
                app.records.selection.retain(&rows);
                let len = app.visible_records().len();
                app.records.cursor.clamp(len);
            }
            Vec::new()
        }

        BackendEvent::LoggedIn(Ok(())) => {
            app.session = Session::SignedIn(TokenSource::Keychain);
            app.modal.close();
            app.queries.clear();
            toast(app, ToastKind::Success, "Token saved", now);
            revalidate(app, now)
        }
        BackendEvent::LoggedIn(Err(e)) => {
            if let Some(form) = app.modal.token_form_mut() {
                form.submitting = false;
                form.error = Some(if e.auth {
                    "The API token was rejected".to_string()
                } else {
                    e.message
                });
            } else {
                toast(app, ToastKind::Error, format!("Login failed: {e}"), now);
            }
            Vec::new()
        }

        BackendEvent::LoggedOut(Ok(())) => {
            app.page = Page::Domains;
            app.records.reset();
            require_token(app, "");
            if let Some(form) = app.modal.token_form_mut() {
                form.error = None;
            }
            toast(app, ToastKind::Info, "Token removed", now);
            Vec::new()
        }
        BackendEvent::LoggedOut(Err(e)) => {
            toast(app, ToastKind::Error, format!("Failed to remove token: {e}"), now);
            Vec::new()
        }

        BackendEvent::RecordSaved {
            domain,
            created,
            result,
        } => match result {
            Ok(()) => {
                if matches!(app.modal.active, Some(Modal::RecordForm(_))) {
                    app.modal.close();
                }
                let label = if created { "Record created" } else { "Record updated" };
                toast(app, ToastKind::Success, label, now);
                records_changed(app, &domain, now)
            }
            Err(e) if e.auth => {
                require_token(app, TOKEN_REJECTED);
                Vec::new()
            }
            Err(e) => {
                if let Some(form) = app.modal.record_form_mut() {
                    form.submitting = false;
                    form.error = Some(e.message);
                } else {
                    toast(app, ToastKind::Error, format!("Failed to save record: {e}"), now);
                }
                Vec::new()
            }
        },

        BackendEvent::RecordDeleted { domain, result } => match result {
            Ok(()) => {
                toast(app, ToastKind::Success, "Record deleted", now);
                records_changed(app, &domain, now)
            }
            Err(e) if e.auth => {
                require_token(app, TOKEN_REJECTED);
                Vec::new()
            }
            Err(e) => {
                toast(app, ToastKind::Error, format!("Failed to delete record: {e}"), now);
                Vec::new()
            }
        },

        BackendEvent::BatchDeleted { domain, result } => match result {
            Ok(report) => {
                app.records.selection.clear();
                let kind = if report.failed_count == 0 {
                    ToastKind::Success
                } else {
                    ToastKind::Error
                };
                toast(app, kind, batch_summary(&report), now);
                records_changed(app, &domain, now)
            }
            Err(e) if e.auth => {
                require_token(app, TOKEN_REJECTED);
                Vec::new()
            }
            Err(e) => {
                toast(app, ToastKind::Error, format!("Failed to delete records: {e}"), now);
                Vec::new()
            }
        },
    }
}

fn load_failed(app: &mut App, headline: &str, error: &TaskError, now: Instant) {
    if error.auth {
        require_token(app, TOKEN_REJECTED);
    } else {
        toast(app, ToastKind::Error, headline, now);
    }
}

fn records_changed(app: &mut App, domain: &str, now: Instant) -> Vec<Command> {
    app.queries.records.invalidate(&records_key(domain));
    revalidate(app, now)
}

/// 批量删除结果摘要
pub fn batch_summary(report: &BatchDeleteResult) -> String {
    let mut text = format!("Deleted {} records", report.success_count);
    if report.failed_count > 0 {
        text.push_str(&format!(", {} failed", report.failed_count));
    }
    if report.skipped_count > 0 {
        text.push_str(&format!(", {} system records skipped", report.skipped_count));
    }
    text
}
