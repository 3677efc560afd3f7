//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use dnsdash_provider::{
    CreateDnsRecordRequest, CursorPage, CursorParams, DnsProvider, DnsRecord, DnsRecordType,
    ProviderCredentials, ProviderDomain, ProviderError, Result as ProviderResult, ServiceType,
    UpdateDnsRecordRequest,
};
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::CredentialStore;

const PROVIDER: &str = "mock";

// ===== MockCredentialStore =====

pub struct MockCredentialStore {
    credentials: RwLock<Option<ProviderCredentials>>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(None),
        }
    }

    pub fn with(credentials: ProviderCredentials) -> Self {
        Self {
            credentials: RwLock::new(Some(credentials)),
        }
    }

    pub async fn current(&self) -> Option<ProviderCredentials> {
        self.credentials.read().await.clone()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
        Ok(self.credentials.read().await.clone())
    }

    async fn set(&self, credentials: &ProviderCredentials) -> CoreResult<()> {
        *self.credentials.write().await = Some(credentials.clone());
        Ok(())
    }

    async fn remove(&self) -> CoreResult<()> {
        *self.credentials.write().await = None;
        Ok(())
    }
}

// ===== MockProvider =====

#[derive(Default)]
struct MockState {
    domains: Vec<ProviderDomain>,
    records: HashMap<String, Vec<DnsRecord>>,
    page_size: Option<usize>,
    failing_reads: bool,
    failing_deletes: HashSet<String>,
    rejected_tokens: HashSet<String>,
    list_domains_calls: usize,
    list_records_calls: usize,
    write_calls: usize,
    next_id: usize,
}

/// In-memory provider. Clones share state, so a test can keep a handle
/// while the service owns another.
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
    token: String,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn with_domains(self, domains: Vec<ProviderDomain>) -> Self {
        self.state().domains = domains;
        self
    }

    pub fn with_records(self, domain: &str, records: Vec<DnsRecord>) -> Self {
        self.state().records.insert(domain.to_string(), records);
        self
    }

    /// Force a page size smaller than the requested limit.
    pub fn with_page_size(self, size: usize) -> Self {
        self.state().page_size = Some(size);
        self
    }

    pub fn failing_reads(self) -> Self {
        self.state().failing_reads = true;
        self
    }

    pub fn failing_delete(self, record_id: &str) -> Self {
        self.state().failing_deletes.insert(record_id.to_string());
        self
    }

    pub fn rejecting_token(self, token: &str) -> Self {
        self.state().rejected_tokens.insert(token.to_string());
        self
    }

    /// Same shared state, answering as `token`.
    pub fn for_token(&self, token: &str) -> Self {
        Self {
            state: self.state.clone(),
            token: token.to_string(),
        }
    }

    pub fn list_domains_calls(&self) -> usize {
        self.state().list_domains_calls
    }

    pub fn list_records_calls(&self) -> usize {
        self.state().list_records_calls
    }

    pub fn write_calls(&self) -> usize {
        self.state().write_calls
    }

    pub fn records(&self, domain: &str) -> Vec<DnsRecord> {
        self.state().records.get(domain).cloned().unwrap_or_default()
    }

    fn paginate<T: Clone>(items: &[T], params: &CursorParams, forced: Option<usize>) -> CursorPage<T> {
        let size = forced.unwrap_or(params.limit as usize).max(1);
        let start = params.until.map_or(0, |u| usize::try_from(u).unwrap_or(0));
        let end = (start + size).min(items.len());
        let slice = items.get(start..end).unwrap_or_default().to_vec();
        let next = (end < items.len()).then(|| i64::try_from(end).unwrap_or(i64::MAX));
        CursorPage::new(slice, next, None)
    }

    fn read_error() -> ProviderError {
        ProviderError::NetworkError {
            provider: PROVIDER.to_string(),
            detail: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    async fn validate_credentials(&self) -> ProviderResult<bool> {
        Ok(!self.state().rejected_tokens.contains(&self.token))
    }

    async fn list_domains(&self, params: &CursorParams) -> ProviderResult<CursorPage<ProviderDomain>> {
        let mut state = self.state();
        state.list_domains_calls += 1;
        if state.failing_reads {
            return Err(Self::read_error());
        }
        Ok(Self::paginate(&state.domains, params, state.page_size))
    }

    async fn list_records(
        &self,
        domain: &str,
        params: &CursorParams,
    ) -> ProviderResult<CursorPage<DnsRecord>> {
        let mut state = self.state();
        state.list_records_calls += 1;
        if state.failing_reads {
            return Err(Self::read_error());
        }
        let records = state
            .records
            .get(domain)
            .ok_or_else(|| ProviderError::DomainNotFound {
                provider: PROVIDER.to_string(),
                domain: domain.to_string(),
                raw_message: None,
            })?;
        Ok(Self::paginate(records, params, state.page_size))
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> ProviderResult<String> {
        let mut state = self.state();
        state.write_calls += 1;
        state.next_id += 1;
        let id = format!("new-{}", state.next_id);
        let record = DnsRecord {
            id: id.clone(),
            slug: req.domain.clone(),
            name: req.name.clone(),
            record_type: req.record_type.clone(),
            value: req.value.clone(),
            mx_priority: req.priority.filter(|_| req.record_type == DnsRecordType::Mx),
            priority: None,
            ttl: req.ttl.unwrap_or(60),
            creator: "user".to_string(),
            created_at: Some(crate::utils::datetime::now_millis()),
            updated_at: None,
        };
        state.records.entry(req.domain.clone()).or_default().push(record);
        Ok(id)
    }

    async fn update_record(&self, record_id: &str, req: &UpdateDnsRecordRequest) -> ProviderResult<()> {
        let mut state = self.state();
        state.write_calls += 1;
        let record = state
            .records
            .get_mut(&req.domain)
            .and_then(|rs| rs.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: PROVIDER.to_string(),
                record_id: record_id.to_string(),
                raw_message: None,
            })?;
        record.name.clone_from(&req.name);
        record.value.clone_from(&req.value);
        record.record_type = req.record_type.clone();
        Ok(())
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> ProviderResult<()> {
        let mut state = self.state();
        state.write_calls += 1;
        if state.failing_deletes.contains(record_id) {
            return Err(ProviderError::NetworkError {
                provider: PROVIDER.to_string(),
                detail: "HTTP 502".to_string(),
            });
        }
        let records = state.records.entry(domain.to_string()).or_default();
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(ProviderError::RecordNotFound {
                provider: PROVIDER.to_string(),
                record_id: record_id.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// Context whose factory hands out `mock`, with no provider installed.
pub fn context_for(store: Arc<dyn CredentialStore>, mock: MockProvider) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::with_factory(
        store,
        Box::new(move |credentials| {
            let provider: Arc<dyn DnsProvider> = Arc::new(mock.for_token(&credentials.api_token));
            Ok(provider)
        }),
    ))
}

/// Context with `mock` already installed under a valid token.
pub async fn context_with(mock: MockProvider) -> (Arc<ServiceContext>, MockProvider) {
    let ctx = context_for(Arc::new(MockCredentialStore::new()), mock.clone());
    ctx.install_provider(Arc::new(mock.for_token("test-token")))
        .await;
    (ctx, mock)
}

/// Context without credentials.
pub fn empty_context() -> Arc<ServiceContext> {
    context_for(Arc::new(MockCredentialStore::new()), MockProvider::new())
}

pub fn domain(name: &str, service_type: ServiceType) -> ProviderDomain {
    ProviderDomain {
        id: format!("dom_{name}"),
        name: name.to_string(),
        service_type,
        verified: true,
        created_at: Some(1_700_000_000_000),
    }
}

pub fn raw_record(id: &str, name: &str, creator: &str, created_at: Option<i64>) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        slug: "example.com".to_string(),
        name: name.to_string(),
        record_type: DnsRecordType::A,
        value: "192.0.2.1".to_string(),
        mx_priority: None,
        priority: None,
        ttl: 60,
        creator: creator.to_string(),
        created_at,
        updated_at: None,
    }
}
