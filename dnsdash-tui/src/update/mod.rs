//! Update 层：状态更新
//!
//! `update` 是纯函数：修改 [`App`] 并返回需要执行的副作用（[`Command`]），
//! 由主循环交给后端或终端执行。当前时间由调用方传入，便于测试。

mod backend;
mod content;
mod modal;

use std::time::Instant;

use dnsdash_core::types::{
    CreateDnsRecordRequest, ProviderCredentials, RecordItem, UpdateDnsRecordRequest,
};
use dnsdash_core::{DOMAINS_KEY, records_key};

use crate::message::{AppMessage, TaskError};
use crate::model::{
    App, ConfirmAction, ConfirmDialog, Modal, Page, Session, ToastKind, TokenForm,
};

/// 副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchDomains,
    FetchRecords(String),
    Login(ProviderCredentials),
    Logout,
    CreateRecord(CreateDnsRecordRequest),
    UpdateRecord {
        record: RecordItem,
        request: UpdateDnsRecordRequest,
    },
    DeleteRecord {
        domain: String,
        record: RecordItem,
    },
    BatchDelete {
        domain: String,
        records: Vec<RecordItem>,
    },
    /// 通过 OSC 52 写入剪贴板
    Copy(String),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, now: Instant) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::Tick => {
            app.toasts.expire(now);
            revalidate(app, now)
        }

        AppMessage::FocusGained | AppMessage::Refresh => {
            invalidate_current(app);
            revalidate(app, now)
        }

        AppMessage::SessionRestored(result) => session_restored(app, result, now),

        AppMessage::Content(content_msg) => content::update(app, content_msg, now),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg, now),

        AppMessage::Backend(event) => backend::update(app, event, now),

        AppMessage::GoBack => {
            go_back(app);
            revalidate(app, now)
        }

        AppMessage::ShowHelp => {
            app.modal.open(Modal::Help);
            Vec::new()
        }

        AppMessage::ChangeToken => {
            app.modal
                .open(Modal::Token(TokenForm::new(app.settings.team_id.as_deref())));
            Vec::new()
        }

        AppMessage::Logout => {
            app.modal
                .open(Modal::Confirm(ConfirmDialog::new(ConfirmAction::Logout)));
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}

fn session_restored(
    app: &mut App,
    result: Result<Option<dnsdash_core::TokenSource>, TaskError>,
    now: Instant,
) -> Vec<Command> {
    match result {
        Ok(Some(source)) => {
            app.session = Session::SignedIn(source);
            revalidate(app, now)
        }
        Ok(None) => {
            app.session = Session::SignedOut;
            app.modal
                .open(Modal::Token(TokenForm::new(app.settings.team_id.as_deref())));
            Vec::new()
        }
        Err(e) => {
            app.session = Session::SignedOut;
            let form = TokenForm::new(app.settings.team_id.as_deref())
                .with_error(format!("Could not read the keychain: {e}"));
            app.modal.open(Modal::Token(form));
            Vec::new()
        }
    }
}

/// Esc：逐级退出搜索、选择、过滤，最后回到域名页
fn go_back(app: &mut App) {
    if !matches!(app.page, Page::Records { .. }) {
        return;
    }
    let records = &mut app.records;
    if records.search_active {
        records.search_active = false;
    } else if !records.selection.is_empty() {
        records.selection.clear();
    } else if !records.filter.is_empty() {
        records.clear_filters();
    } else {
        app.page = Page::Domains;
        app.records.reset();
    }
}

fn invalidate_current(app: &mut App) {
    match &app.page {
        Page::Domains => app.queries.domains.invalidate(DOMAINS_KEY),
        Page::Records { domain } => app.queries.records.invalidate(&records_key(domain)),
    }
}

/// 当前页面的数据过期时发起请求；已有请求在途时不重复发起
pub(crate) fn revalidate(app: &mut App, now: Instant) -> Vec<Command> {
    if !app.is_signed_in() {
        return Vec::new();
    }
    let max_age = app.settings.revalidate_interval;
    match &app.page {
        Page::Domains => {
            let queries = &mut app.queries.domains;
            if queries.is_stale(DOMAINS_KEY, max_age, now) && queries.begin(DOMAINS_KEY) {
                return vec![Command::FetchDomains];
            }
        }
        Page::Records { domain } => {
            let key = records_key(domain);
            let queries = &mut app.queries.records;
            if queries.is_stale(&key, max_age, now) && queries.begin(&key) {
                return vec![Command::FetchRecords(domain.clone())];
            }
        }
    }
    Vec::new()
}

pub(crate) fn toast(app: &mut App, kind: ToastKind, message: impl Into<String>, now: Instant) {
    let ttl = app.settings.toast_duration;
    app.toasts.push(kind, message, now, ttl);
}

/// token 失效：清空缓存并要求重新输入
pub(crate) fn require_token(app: &mut App, reason: &str) {
    app.session = Session::SignedOut;
    app.queries.clear();
    app.records.selection.clear();
    let form = TokenForm::new(app.settings.team_id.as_deref()).with_error(reason);
    app.modal.open(Modal::Token(form));
}

/// 进入某个域名的记录页
pub(crate) fn open_records(app: &mut App, domain: String, now: Instant) -> Vec<Command> {
    app.modal.close();
    app.records.reset();
    app.page = Page::Records { domain };
    revalidate(app, now)
}

#[cfg(test)]
pub(crate) mod test_support {
    use dnsdash_core::types::{DnsRecordType, DomainItem, NameServerKind, RecordItem};
    use dnsdash_core::{DOMAINS_KEY, TokenSource, records_key};
    use std::time::Instant;

    use crate::model::{App, Page, Session};

    pub fn signed_in_app() -> App {
        let mut app = App::default();
        app.session = Session::SignedIn(TokenSource::Keychain);
        app
    }

    pub fn domain(name: &str) -> DomainItem {
        DomainItem {
            name: name.to_string(),
            name_server: NameServerKind::Vercel,
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    pub fn row(id: &str, name: &str, record_type: DnsRecordType, system: bool) -> RecordItem {
        RecordItem {
            id: id.to_string(),
            slug: "example.com".to_string(),
            name: name.to_string(),
            record_type,
            priority: None,
            value: format!("{name}.value"),
            ttl: 60,
            created_at: Some(1),
            updated_at: None,
            is_system: system,
            disable_selection: system,
        }
    }

    pub fn with_domains(app: &mut App, names: &[&str], now: Instant) {
        app.queries.domains.begin(DOMAINS_KEY);
        app.queries.domains.complete::<String>(
            DOMAINS_KEY,
            Ok(names.iter().map(|n| domain(n)).collect()),
            now,
        );
    }

    /// Switch to the records page of `example.com` with `rows` loaded.
    pub fn on_records(app: &mut App, rows: Vec<RecordItem>, now: Instant) {
        app.page = Page::Records {
            domain: "example.com".to_string(),
        };
        let key = records_key("example.com");
        app.queries.records.begin(&key);
        app.queries.records.complete::<String>(&key, Ok(rows), now);
    }
}
