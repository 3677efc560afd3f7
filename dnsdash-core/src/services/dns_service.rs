//! DNS 记录管理服务

use std::sync::Arc;

use dnsdash_provider::{DnsProvider, DnsRecordType};

use crate::error::{CoreError, CoreResult};
use crate::services::record_assembly::assemble_records;
use crate::services::{DEFAULT_PAGE_SIZE, MAX_PAGES, ServiceContext, collect_pages};
use crate::types::{
    BatchDeleteFailure, BatchDeleteResult, CreateDnsRecordRequest, RecordItem,
    UpdateDnsRecordRequest,
};

/// Smallest TTL the API accepts, in seconds.
pub const MIN_TTL: u32 = 60;

/// DNS 记录管理服务
pub struct DnsService {
    ctx: Arc<ServiceContext>,
    page_size: u32,
}

impl DnsService {
    /// 创建 DNS 服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, DEFAULT_PAGE_SIZE);
        self
    }

    /// 拉取域名下的全部记录，去重并按最近修改排序
    pub async fn list_records(&self, domain: &str) -> CoreResult<Vec<RecordItem>> {
        let provider = self.ctx.get_provider().await?;

        let pages = collect_pages(self.page_size, MAX_PAGES, |params| {
            let provider = provider.clone();
            let domain = domain.to_string();
            async move { provider.list_records(&domain, &params).await }
        })
        .await
        .map_err(|e| self.ctx.handle_provider_error("list records", e))?;

        let rows = assemble_records(pages);
        log::debug!("Loaded {} records for {domain}", rows.len());
        Ok(rows)
    }

    /// 创建 DNS 记录，返回新记录 ID
    pub async fn create_record(&self, request: CreateDnsRecordRequest) -> CoreResult<String> {
        validate_record_input(&request.record_type, &request.value, request.ttl)?;
        let provider = self.ctx.get_provider().await?;
        provider
            .create_record(&request)
            .await
            .map_err(|e| self.ctx.handle_provider_error("create record", e))
    }

    /// 更新 DNS 记录（系统记录不可修改）
    pub async fn update_record(
        &self,
        record: &RecordItem,
        request: UpdateDnsRecordRequest,
    ) -> CoreResult<()> {
        if record.is_system {
            return Err(CoreError::ValidationError(
                "system records cannot be edited".to_string(),
            ));
        }
        validate_record_input(&request.record_type, &request.value, request.ttl)?;
        let provider = self.ctx.get_provider().await?;
        provider
            .update_record(&record.id, &request)
            .await
            .map_err(|e| self.ctx.handle_provider_error("update record", e))
    }

    /// 删除 DNS 记录（系统记录不可删除）
    pub async fn delete_record(&self, domain: &str, record: &RecordItem) -> CoreResult<()> {
        if record.is_system {
            return Err(CoreError::ValidationError(
                "system records cannot be deleted".to_string(),
            ));
        }
        let provider = self.ctx.get_provider().await?;
        provider
            .delete_record(domain, &record.id)
            .await
            .map_err(|e| self.ctx.handle_provider_error("delete record", e))
    }

    /// 批量删除 DNS 记录
    ///
    /// 系统记录计入 `skipped_count` 且不会发送请求；其余记录并行删除，不重试。
    pub async fn batch_delete(
        &self,
        domain: &str,
        rows: &[RecordItem],
    ) -> CoreResult<BatchDeleteResult> {
        let provider = self.ctx.get_provider().await?;

        let (system, targets): (Vec<&RecordItem>, Vec<&RecordItem>) =
            rows.iter().partition(|r| r.is_system);

        // 并行删除所有记录
        let delete_futures: Vec<_> = targets
            .iter()
            .map(|row| delete_one(provider.clone(), domain, &row.id))
            .collect();
        let results = futures::future::join_all(delete_futures).await;

        let mut result = BatchDeleteResult {
            skipped_count: system.len(),
            ..BatchDeleteResult::default()
        };
        for outcome in results {
            match outcome {
                Ok(()) => result.success_count += 1,
                Err((record_id, e)) => {
                    let e = self.ctx.handle_provider_error("batch delete", e);
                    result.failures.push(BatchDeleteFailure {
                        record_id,
                        reason: e.to_string(),
                    });
                }
            }
        }
        result.failed_count = result.failures.len();

        log::info!(
            "Batch delete in {domain}: {} deleted, {} failed, {} skipped",
            result.success_count,
            result.failed_count,
            result.skipped_count
        );
        Ok(result)
    }
}

async fn delete_one(
    provider: Arc<dyn DnsProvider>,
    domain: &str,
    record_id: &str,
) -> Result<(), (String, dnsdash_provider::ProviderError)> {
    provider
        .delete_record(domain, record_id)
        .await
        .map_err(|e| (record_id.to_string(), e))
}

/// 写入前的基本校验
pub fn validate_record_input(
    record_type: &DnsRecordType,
    value: &str,
    ttl: Option<u32>,
) -> CoreResult<()> {
    if let DnsRecordType::Other(t) = record_type {
        return Err(CoreError::ValidationError(format!(
            "unsupported record type: {t}"
        )));
    }
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError("value must not be empty".to_string()));
    }
    if let Some(ttl) = ttl
        && ttl < MIN_TTL
    {
        return Err(CoreError::ValidationError(format!(
            "ttl must be at least {MIN_TTL} seconds"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockProvider, context_with, raw_record};

    fn create_req(value: &str, ttl: Option<u32>) -> CreateDnsRecordRequest {
        CreateDnsRecordRequest {
            domain: "example.com".into(),
            name: "www".into(),
            record_type: DnsRecordType::A,
            value: value.into(),
            ttl,
            priority: None,
        }
    }

    #[tokio::test]
    async fn list_records_assembles_all_pages() {
        let mock = MockProvider::new()
            .with_records(
                "example.com",
                vec![
                    raw_record("r1", "a", "system", Some(1)),
                    raw_record("r2", "b", "user", Some(3)),
                    raw_record("r3", "c", "user", Some(2)),
                ],
            )
            .with_page_size(1);
        let (ctx, mock) = context_with(mock).await;
        let svc = DnsService::new(ctx);

        let rows = svc.list_records("example.com").await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r3", "r1"]);
        assert!(rows[2].is_system);
        assert_eq!(mock.list_records_calls(), 3);
    }

    #[tokio::test]
    async fn list_records_unknown_domain_is_provider_error() {
        let (ctx, _) = context_with(MockProvider::new()).await;
        let svc = DnsService::new(ctx);
        let err = svc.list_records("nope.com").await.unwrap_err();
        assert!(
            matches!(
                err,
                CoreError::Provider(dnsdash_provider::ProviderError::DomainNotFound { .. })
            ),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn create_validates_before_calling_provider() {
        let (ctx, mock) = context_with(MockProvider::new().with_records("example.com", vec![])).await;
        let svc = DnsService::new(ctx);

        let err = svc.create_record(create_req("  ", None)).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        let err = svc.create_record(create_req("192.0.2.1", Some(30))).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(mock.write_calls(), 0);

        let id = svc.create_record(create_req("192.0.2.1", Some(60))).await.unwrap();
        assert!(!id.is_empty());
        assert_eq!(mock.write_calls(), 1);
        assert_eq!(mock.records("example.com").len(), 1);
    }

    #[tokio::test]
    async fn system_records_cannot_be_edited_or_deleted() {
        let (ctx, mock) = context_with(
            MockProvider::new().with_records("example.com", vec![raw_record("s", "", "system", Some(1))]),
        )
        .await;
        let svc = DnsService::new(ctx);
        let row = RecordItem::from(raw_record("s", "", "system", Some(1)));

        let err = svc.delete_record("example.com", &row).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        let update = UpdateDnsRecordRequest {
            domain: "example.com".into(),
            name: String::new(),
            record_type: DnsRecordType::A,
            value: "192.0.2.9".into(),
            ttl: None,
            priority: None,
        };
        let err = svc.update_record(&row, update).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(mock.write_calls(), 0);
    }

    #[tokio::test]
    async fn batch_delete_skips_system_rows_and_reports_failures() {
        let raws = vec![
            raw_record("sys", "", "system", Some(1)),
            raw_record("ok1", "a", "user", Some(2)),
            raw_record("ok2", "b", "user", Some(3)),
            raw_record("bad", "c", "user", Some(4)),
        ];
        let mock = MockProvider::new()
            .with_records("example.com", raws.clone())
            .failing_delete("bad");
        let (ctx, mock) = context_with(mock).await;
        let svc = DnsService::new(ctx);
        let rows: Vec<RecordItem> = raws.into_iter().map(RecordItem::from).collect();

        let result = svc.batch_delete("example.com", &rows).await.unwrap();
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.failures[0].record_id, "bad");
        // 系统记录未发送删除请求，失败的删除不重试
        assert_eq!(mock.write_calls(), 3);
        let left: Vec<_> = mock.records("example.com").into_iter().map(|r| r.id).collect();
        assert_eq!(left, vec!["sys".to_string(), "bad".to_string()]);
    }

    #[test]
    fn validate_rejects_unknown_types() {
        let err = validate_record_input(&DnsRecordType::Other("LOC".into()), "x", None);
        assert!(err.is_err());
        assert!(validate_record_input(&DnsRecordType::Txt, "hello", Some(60)).is_ok());
    }
}
