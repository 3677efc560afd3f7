//! Vercel error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{PROVIDER_NAME, VercelProvider};

const UNKNOWN: &str = "<unknown>";

/// 按错误码优先、HTTP 状态码兜底的方式映射
/// Reference: <https://vercel.com/docs/rest-api/errors>
impl ProviderErrorMapper for VercelProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let code = raw.code.as_deref().unwrap_or_default();

        // 401, 或 403 + invalidToken
        if raw.status == 401 || code == "invalid_token" {
            return ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            };
        }

        // record_already_exists / domain_already_exists / conflict
        if raw.status == 409 || code.ends_with("_already_exists") || code == "conflict" {
            return ProviderError::RecordExists {
                provider,
                record_name: context.record_name.unwrap_or_else(|| UNKNOWN.to_string()),
                raw_message: Some(raw.message),
            };
        }

        if raw.status == 402 || code == "payment_required" {
            return ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            };
        }

        if raw.status == 403 {
            return ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            };
        }

        if raw.status == 404 || code == "not_found" {
            // 有记录 ID 时视为记录不存在，否则为域名不存在
            return match context.record_id {
                Some(record_id) => ProviderError::RecordNotFound {
                    provider,
                    record_id,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::DomainNotFound {
                    provider,
                    domain: context.domain.unwrap_or_else(|| UNKNOWN.to_string()),
                    raw_message: Some(raw.message),
                },
            };
        }

        if raw.status == 400 || code == "bad_request" || code.starts_with("invalid_") {
            let param = code
                .strip_prefix("invalid_")
                .filter(|p| !p.is_empty())
                .unwrap_or("request")
                .to_string();
            return ProviderError::InvalidParameter {
                provider,
                param,
                detail: raw.message,
            };
        }

        match raw.status {
            429 => ProviderError::RateLimited {
                provider,
                retry_after: None,
                raw_message: Some(raw.message),
            },
            502..=504 => ProviderError::NetworkError {
                provider,
                detail: format!("HTTP {}: {}", raw.status, raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderCredentials;

    fn provider() -> VercelProvider {
        VercelProvider::new(ProviderCredentials::new("test-token")).unwrap()
    }

    fn ctx_record() -> ErrorContext {
        ErrorContext {
            record_name: Some("www".to_string()),
            record_id: Some("rec_123".to_string()),
            domain: Some("example.com".to_string()),
        }
    }

    fn map(status: u16, code: Option<&str>, ctx: ErrorContext) -> ProviderError {
        let raw = match code {
            Some(c) => RawApiError::with_code(status, c, "message"),
            None => RawApiError::new(status, "message"),
        };
        provider().map_error(raw, ctx)
    }

    #[test]
    fn unauthorized_maps_to_invalid_credentials() {
        assert!(matches!(
            map(401, None, ErrorContext::default()),
            ProviderError::InvalidCredentials { .. }
        ));
    }

    #[test]
    fn forbidden_with_invalid_token_maps_to_invalid_credentials() {
        assert!(matches!(
            map(403, Some("invalid_token"), ErrorContext::default()),
            ProviderError::InvalidCredentials { .. }
        ));
    }

    #[test]
    fn plain_forbidden_maps_to_permission_denied() {
        let e = map(403, Some("forbidden"), ErrorContext::default());
        assert!(
            matches!(&e, ProviderError::PermissionDenied { raw_message: Some(m), .. } if m == "message"),
            "{e:?}"
        );
    }

    #[test]
    fn not_found_uses_context_to_pick_variant() {
        let e = map(404, Some("not_found"), ctx_record());
        assert!(
            matches!(&e, ProviderError::RecordNotFound { record_id, .. } if record_id == "rec_123"),
            "{e:?}"
        );

        let e = map(404, Some("not_found"), ErrorContext::domain("example.com"));
        assert!(
            matches!(&e, ProviderError::DomainNotFound { domain, .. } if domain == "example.com"),
            "{e:?}"
        );

        let e = map(404, None, ErrorContext::default());
        assert!(
            matches!(&e, ProviderError::DomainNotFound { domain, .. } if domain == UNKNOWN),
            "{e:?}"
        );
    }

    #[test]
    fn conflict_and_already_exists_codes_map_to_record_exists() {
        let e = map(409, None, ctx_record());
        assert!(
            matches!(&e, ProviderError::RecordExists { record_name, .. } if record_name == "www"),
            "{e:?}"
        );
        assert!(matches!(
            map(400, Some("record_already_exists"), ctx_record()),
            ProviderError::RecordExists { .. }
        ));
    }

    #[test]
    fn bad_request_maps_to_invalid_parameter() {
        let e = map(400, Some("invalid_value"), ErrorContext::default());
        assert!(
            matches!(&e, ProviderError::InvalidParameter { param, detail, .. } if param == "value" && detail == "message"),
            "{e:?}"
        );
        let e = map(400, Some("bad_request"), ErrorContext::default());
        assert!(
            matches!(&e, ProviderError::InvalidParameter { param, .. } if param == "request"),
            "{e:?}"
        );
    }

    #[test]
    fn payment_required_maps_to_quota_exceeded() {
        assert!(matches!(
            map(402, None, ErrorContext::default()),
            ProviderError::QuotaExceeded { .. }
        ));
    }

    #[test]
    fn rate_limit_and_gateway_errors_are_transient() {
        assert!(map(429, None, ErrorContext::default()).is_retryable());
        let e = map(503, None, ErrorContext::default());
        assert!(matches!(e, ProviderError::NetworkError { .. }));
    }

    #[test]
    fn other_statuses_map_to_unknown_with_code() {
        let e = map(500, Some("internal_server_error"), ErrorContext::default());
        assert!(
            matches!(&e, ProviderError::Unknown { raw_code: Some(c), .. } if c == "internal_server_error"),
            "{e:?}"
        );
    }
}
