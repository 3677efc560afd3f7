//! Vercel domains/DNS provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::ProviderCredentials;

pub(crate) use types::{
    VercelCreateRecordBody, VercelCreateRecordResponse, VercelDnsRecord, VercelDomain,
    VercelDomainsResponse, VercelErrorBody, VercelRecordsResponse, VercelUserResponse,
};

pub(crate) const VERCEL_API_BASE: &str = "https://api.vercel.com";
pub(crate) const PROVIDER_NAME: &str = "vercel";
/// Domains / DNS Records API 单页最大条数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;
/// 读请求默认重试次数
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 2;

/// Vercel REST API client
#[derive(Debug)]
pub struct VercelProvider {
    pub(crate) client: Client,
    pub(crate) credentials: ProviderCredentials,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

impl VercelProvider {
    /// Create a client for `https://api.vercel.com`.
    pub fn new(credentials: ProviderCredentials) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME)?,
            credentials,
            base_url: VERCEL_API_BASE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Point the client at another API root, e.g. a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Retry budget for reads. `0` disables retrying.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
