use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    CreateDnsRecordRequest, CursorPage, CursorParams, DnsRecord, ProviderDomain,
    UpdateDnsRecordRequest,
};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// API 错误码，如 `not_found`、`forbidden`
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn with_code(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文（内部使用），映射 404/409 时决定具体错误类型
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub record_name: Option<String>,
    pub record_id: Option<String>,
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            ..Self::default()
        }
    }

    pub fn record(domain: &str, record_id: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            record_id: Some(record_id.to_string()),
            ..Self::default()
        }
    }

    pub fn record_name(domain: &str, name: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            record_name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// 将 API 错误映射为 [`ProviderError`]（内部使用）
pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote domain/DNS API.
///
/// Listing methods return one cursor page at a time; callers follow
/// [`CursorPage::next`] until it is `None`. Only list and validation calls
/// are retried on transient failures.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier, used as the error prefix.
    fn id(&self) -> &'static str;

    /// Check that the token is accepted by the API.
    ///
    /// Returns `Ok(false)` for a rejected token and `Err` for anything else.
    async fn validate_credentials(&self) -> Result<bool>;

    /// One page of the account's domains.
    async fn list_domains(&self, params: &CursorParams) -> Result<CursorPage<ProviderDomain>>;

    /// One page of DNS records for `domain`.
    async fn list_records(
        &self,
        domain: &str,
        params: &CursorParams,
    ) -> Result<CursorPage<DnsRecord>>;

    /// Create a record and return its id.
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<String>;

    async fn update_record(&self, record_id: &str, req: &UpdateDnsRecordRequest) -> Result<()>;

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()>;
}
