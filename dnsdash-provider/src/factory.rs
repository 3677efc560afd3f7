//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "vercel")]
use crate::providers::VercelProvider;

/// Options applied when building a provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    /// Override for the API root (mock servers, proxies).
    pub base_url: Option<String>,
    /// Retry budget for reads; the provider default when `None`.
    pub max_retries: Option<u32>,
}

/// Creates a [`DnsProvider`] from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` so it can be
/// shared across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dnsdash_provider::{create_provider, ProviderCredentials, ProviderOptions};
///
/// let provider = create_provider(
///     ProviderCredentials::new("your-token"),
///     &ProviderOptions::default(),
/// ).unwrap();
/// ```
#[cfg(feature = "vercel")]
pub fn create_provider(
    credentials: ProviderCredentials,
    options: &ProviderOptions,
) -> Result<Arc<dyn DnsProvider>> {
    let mut provider = VercelProvider::new(credentials)?;
    if let Some(base_url) = &options.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    if let Some(max_retries) = options.max_retries {
        provider = provider.with_max_retries(max_retries);
    }
    Ok(Arc::new(provider))
}
