//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("dnsdash/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_lowercase()
}

/// 记录名转为 API 使用的相对名称：`@` 和完整域名都表示根记录 `""`
/// 如: "www.example.com" + "example.com" -> "www"
pub fn to_relative_name(name: &str, domain: &str) -> String {
    let name = name.trim().trim_end_matches('.');
    let domain = normalize_domain_name(domain);

    if name == "@" || name.is_empty() || name.eq_ignore_ascii_case(&domain) {
        return String::new();
    }
    let suffix = format!(".{domain}");
    let split = name.len().saturating_sub(suffix.len());
    match (name.get(..split), name.get(split..)) {
        (Some(sub), Some(tail)) if !sub.is_empty() && tail.eq_ignore_ascii_case(&suffix) => {
            sub.to_string()
        }
        _ => name.to_string(),
    }
}
