//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dnsdash_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No API token from the flag, the environment or the keychain
    #[error("No API token configured")]
    MissingToken,

    /// Keychain access failed
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// Token format check failed before reaching the API
    #[error("{0}")]
    CredentialValidation(CredentialValidationError),

    /// Domain is not in the account's domain list
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// Rejected record input
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时使用 `warn`，`false` 时使用 `error`。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingToken
            | Self::CredentialValidation(_)
            | Self::DomainNotFound(_)
            | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::CredentialError(_) | Self::SerializationError(_) => false,
        }
    }

    /// Whether the error means the token must be re-entered.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingToken | Self::Provider(ProviderError::InvalidCredentials { .. })
        )
    }
}

impl From<CredentialValidationError> for CoreError {
    fn from(e: CredentialValidationError) -> Self {
        Self::CredentialValidation(e)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_keep_their_message() {
        let e: CoreError = ProviderError::RateLimited {
            provider: "vercel".into(),
            retry_after: Some(3),
            raw_message: None,
        }
        .into();
        assert_eq!(e.to_string(), "[vercel] Rate limited (retry after 3s)");
        assert!(!e.is_expected());
    }

    #[test]
    fn auth_errors_are_detected() {
        assert!(CoreError::MissingToken.is_auth_error());
        let e = CoreError::Provider(ProviderError::InvalidCredentials {
            provider: "vercel".into(),
            raw_message: None,
        });
        assert!(e.is_auth_error());
        assert!(e.is_expected());
        assert!(!CoreError::ValidationError("ttl".into()).is_auth_error());
    }

    #[test]
    fn serializes_with_code_and_details() {
        let json = serde_json::to_value(CoreError::DomainNotFound("example.com".into())).unwrap();
        assert_eq!(json["code"], "DomainNotFound");
        assert_eq!(json["details"], "example.com");
    }
}
