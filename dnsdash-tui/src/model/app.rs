//! 应用主状态

use std::time::Duration;

use dnsdash_core::types::{DomainItem, RecordItem};
use dnsdash_core::{DOMAINS_KEY, QueryCache, QueryState, TokenSource, records_key};

use crate::config::Config;

use super::{DomainsState, ModalState, Page, RecordsState, ToastQueue};

/// 登录状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// 启动时正在读取钥匙串
    Restoring,
    SignedOut,
    SignedIn(TokenSource),
}

/// 从配置派生的 UI 参数
#[derive(Debug, Clone)]
pub struct UiSettings {
    pub revalidate_interval: Duration,
    pub toast_duration: Duration,
    /// 预填到 token 弹窗
    pub team_id: Option<String>,
}

impl From<&Config> for UiSettings {
    fn from(config: &Config) -> Self {
        Self {
            revalidate_interval: config.revalidate_interval(),
            toast_duration: config.toast_duration(),
            team_id: config.team_id.clone(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// 远程数据缓存
#[derive(Debug, Default)]
pub struct Queries {
    pub domains: QueryCache<Vec<DomainItem>>,
    pub records: QueryCache<Vec<RecordItem>>,
}

impl Queries {
    pub fn clear(&mut self) {
        self.domains.clear();
        self.records.clear();
    }
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub page: Page,

    pub session: Session,

    pub queries: Queries,

    // === 各页面状态 ===
    /// 域名页面状态
    pub domains: DomainsState,
    /// DNS 记录页面状态
    pub records: RecordsState,

    /// 弹窗状态
    pub modal: ModalState,

    pub toasts: ToastQueue,

    pub settings: UiSettings,
}

impl App {
    /// 创建新的应用实例；`domain` 不为空时直接进入该域名的记录页
    pub fn new(settings: UiSettings, domain: Option<String>) -> Self {
        let page = match domain {
            Some(domain) => Page::Records { domain },
            None => Page::Domains,
        };
        Self {
            should_quit: false,
            page,
            session: Session::Restoring,
            queries: Queries::default(),
            domains: DomainsState::default(),
            records: RecordsState::default(),
            modal: ModalState::default(),
            toasts: ToastQueue::default(),
            settings,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.session, Session::SignedIn(_))
    }

    pub fn domains_query(&self) -> Option<&QueryState<Vec<DomainItem>>> {
        self.queries.domains.get(DOMAINS_KEY)
    }

    pub fn domain_rows(&self) -> &[DomainItem] {
        self.queries.domains.data(DOMAINS_KEY).map_or(&[], Vec::as_slice)
    }

    pub fn selected_domain(&self) -> Option<&DomainItem> {
        self.domain_rows().get(self.domains.cursor.selected)
    }

    pub fn records_query(&self) -> Option<&QueryState<Vec<RecordItem>>> {
        let domain = self.page.domain()?;
        self.queries.records.get(&records_key(domain))
    }

    /// All records of the current domain, unfiltered.
    pub fn record_rows(&self) -> &[RecordItem] {
        self.page
            .domain()
            .and_then(|d| self.queries.records.data(&records_key(d)))
            .map_or(&[], Vec::as_slice)
    }

    pub fn visible_records(&self) -> Vec<&RecordItem> {
        self.records.visible(self.record_rows())
    }

    pub fn selected_record(&self) -> Option<&RecordItem> {
        self.records.current(self.record_rows())
    }

    /// Whether the current page's query has a fetch in flight.
    pub fn is_loading(&self) -> bool {
        match &self.page {
            Page::Domains => self.queries.domains.is_loading(DOMAINS_KEY),
            Page::Records { domain } => self.queries.records.is_loading(&records_key(domain)),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiSettings::default(), None)
    }
}
