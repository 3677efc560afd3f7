//! 业务逻辑服务层

mod credential_service;
pub mod description;
mod dns_service;
mod domain_service;
pub mod record_assembly;
pub mod record_filter;

pub use credential_service::{CredentialService, TokenSource};
pub use dns_service::DnsService;
pub use domain_service::DomainService;

use std::future::Future;
use std::sync::Arc;

use dnsdash_provider::{
    CursorPage, CursorParams, DnsProvider, ProviderCredentials, ProviderError, ProviderOptions,
    create_provider,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::CredentialStore;

/// Builds a provider from credentials. Replaced by a mock in tests.
pub type ProviderFactory =
    Box<dyn Fn(ProviderCredentials) -> Result<Arc<dyn DnsProvider>, ProviderError> + Send + Sync>;

/// Provider page size limit; also the default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// 单次列表最多拉取的页数
pub const MAX_PAGES: usize = 50;

/// 服务上下文 - 持有所有依赖
///
/// The frontend creates one context with its credential store; the provider
/// is (re)built whenever credentials change.
pub struct ServiceContext {
    /// 凭证存储
    pub credential_store: Arc<dyn CredentialStore>,
    factory: ProviderFactory,
    provider: RwLock<Option<Arc<dyn DnsProvider>>>,
}

impl ServiceContext {
    /// Context that talks to the real API with the given options.
    #[must_use]
    pub fn new(credential_store: Arc<dyn CredentialStore>, options: ProviderOptions) -> Self {
        Self::with_factory(
            credential_store,
            Box::new(move |credentials| create_provider(credentials, &options)),
        )
    }

    #[must_use]
    pub fn with_factory(credential_store: Arc<dyn CredentialStore>, factory: ProviderFactory) -> Self {
        Self {
            credential_store,
            factory,
            provider: RwLock::new(None),
        }
    }

    /// 获取 Provider 实例
    pub async fn get_provider(&self) -> CoreResult<Arc<dyn DnsProvider>> {
        self.provider
            .read()
            .await
            .clone()
            .ok_or(CoreError::MissingToken)
    }

    /// Build a provider without installing it.
    pub fn build_provider(&self, credentials: ProviderCredentials) -> CoreResult<Arc<dyn DnsProvider>> {
        credentials.validate()?;
        Ok((self.factory)(credentials)?)
    }

    /// Install a provider built for new credentials.
    pub async fn install_provider(&self, provider: Arc<dyn DnsProvider>) {
        *self.provider.write().await = Some(provider);
    }

    /// Drop the current provider; later calls fail with [`CoreError::MissingToken`].
    pub async fn clear_provider(&self) {
        *self.provider.write().await = None;
    }

    pub async fn has_provider(&self) -> bool {
        self.provider.read().await.is_some()
    }

    /// 记录 Provider 错误并转换为 [`CoreError`]
    pub fn handle_provider_error(&self, operation: &str, err: ProviderError) -> CoreError {
        if matches!(err, ProviderError::InvalidCredentials { .. }) {
            log::warn!("{operation}: token rejected by the API");
        } else if err.is_expected() {
            log::warn!("{operation}: {err}");
        } else {
            log::error!("{operation}: {err}");
        }
        CoreError::Provider(err)
    }
}

/// 按游标依次拉取所有页，直到 `next` 为空或达到 `max_pages`
pub async fn collect_pages<T, F, Fut>(
    page_size: u32,
    max_pages: usize,
    mut fetch: F,
) -> Result<Vec<CursorPage<T>>, ProviderError>
where
    F: FnMut(CursorParams) -> Fut,
    Fut: Future<Output = Result<CursorPage<T>, ProviderError>>,
{
    let mut params = CursorParams::first(page_size);
    let mut pages = Vec::new();

    while pages.len() < max_pages {
        let page = fetch(params.clone()).await?;
        let next = params.after(&page);
        pages.push(page);
        match next {
            Some(n) => params = n,
            None => return Ok(pages),
        }
    }

    log::warn!("Stopped paging after {max_pages} pages; results may be incomplete");
    Ok(pages)
}
