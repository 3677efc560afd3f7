//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dnsdash_provider::{
    CreateDnsRecordRequest, CursorParams, DnsProvider, DnsRecord, DnsRecordType,
    ProviderCredentials, ProviderOptions, VercelProvider, create_provider,
};
use serde_json::{Value, json};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 指向 mock server 的 provider（不重试，避免测试变慢）
pub fn mock_provider(base_url: &str, team_id: Option<&str>) -> VercelProvider {
    let credentials =
        ProviderCredentials::new("test-token").with_team(team_id.map(str::to_string));
    VercelProvider::new(credentials)
        .map(|p| p.with_base_url(base_url).with_max_retries(0))
        .unwrap_or_else(|e| panic!("failed to build provider: {e}"))
}

/// API 返回的记录 JSON
pub fn record_json(id: &str, name: &str, record_type: &str, value: &str, creator: &str) -> Value {
    json!({
        "id": id,
        "slug": "example.com",
        "name": name,
        "type": record_type,
        "value": value,
        "ttl": 60,
        "creator": creator,
        "created": 1_700_000_000_000_i64,
        "createdAt": 1_700_000_000_000_i64,
        "updated": 1_700_000_100_000_i64,
        "updatedAt": 1_700_000_100_000_i64
    })
}

/// API 返回的域名 JSON
pub fn domain_json(name: &str, service_type: &str) -> Value {
    json!({
        "id": format!("dom_{name}"),
        "name": name,
        "serviceType": service_type,
        "verified": true,
        "createdAt": 1_690_000_000_000_i64,
        "boughtAt": null,
        "nameservers": ["ns1.vercel-dns.com"]
    })
}

/// 真实 API 测试上下文
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl TestContext {
    /// 需要 `VERCEL_TOKEN` 和 `TEST_DOMAIN`，`VERCEL_TEAM_ID` 可选
    pub fn vercel() -> Option<Self> {
        let api_token = env::var("VERCEL_TOKEN").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let credentials =
            ProviderCredentials::new(api_token).with_team(env::var("VERCEL_TEAM_ID").ok());
        let provider = create_provider(credentials, &ProviderOptions::default()).ok()?;
        Some(Self { provider, domain })
    }

    /// 创建 TXT 测试记录并返回记录 ID
    pub async fn create_test_record(&self) -> Option<String> {
        let request = CreateDnsRecordRequest {
            domain: self.domain.clone(),
            name: generate_test_record_name(),
            record_type: DnsRecordType::Txt,
            value: "integration-test".to_string(),
            ttl: Some(60),
            priority: None,
        };
        self.provider.create_record(&request).await.ok()
    }

    /// 拉取所有记录
    pub async fn all_records(&self) -> Option<Vec<DnsRecord>> {
        let mut params = CursorParams::first(100);
        let mut out = Vec::new();
        loop {
            let page = self.provider.list_records(&self.domain, &params).await.ok()?;
            let next = params.after(&page);
            out.extend(page.items);
            match next {
                Some(n) => params = n,
                None => return Some(out),
            }
        }
    }

    /// 清理所有以 _test- 开头的记录
    pub async fn cleanup_all_test_records(&self) {
        if let Some(records) = self.all_records().await {
            for record in records {
                if record.name.starts_with("_test-") {
                    let _ = self.provider.delete_record(&self.domain, &record.id).await;
                }
            }
        }
    }
}
