//! 域名列表服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{DEFAULT_PAGE_SIZE, MAX_PAGES, ServiceContext, collect_pages};
use crate::types::DomainItem;

/// 域名列表服务
pub struct DomainService {
    ctx: Arc<ServiceContext>,
    page_size: u32,
}

impl DomainService {
    /// 创建域名服务实例
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

    /// 列出账号下的所有域名，保持 API 返回顺序
    pub async fn list_domains(&self) -> CoreResult<Vec<DomainItem>> {
        let provider = self.ctx.get_provider().await?;

        let pages = collect_pages(self.page_size, MAX_PAGES, |params| {
            let provider = provider.clone();
            async move { provider.list_domains(&params).await }
        })
        .await
        .map_err(|e| self.ctx.handle_provider_error("list domains", e))?;

        let domains: Vec<DomainItem> = pages
            .into_iter()
            .flat_map(|p| p.items)
            .map(DomainItem::from_provider)
            .collect();
        log::debug!("Loaded {} domains", domains.len());
        Ok(domains)
    }

    /// 按名称查找域名（大小写不敏感，忽略末尾的点）
    pub async fn find_domain(&self, name: &str) -> CoreResult<Option<DomainItem>> {
        let wanted = name.trim().trim_end_matches('.');
        Ok(self
            .list_domains()
            .await?
            .into_iter()
            .find(|d| d.name.eq_ignore_ascii_case(wanted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{MockProvider, context_with, domain};
    use crate::types::NameServerKind;
    use dnsdash_provider::ServiceType;

    #[tokio::test]
    async fn lists_all_pages_in_api_order() {
        let mock = MockProvider::new()
            .with_domains(vec![
                domain("a.com", ServiceType::ZeitWorld),
                domain("b.dev", ServiceType::External),
                domain("c.io", ServiceType::Na),
            ])
            .with_page_size(2);
        let (ctx, mock) = context_with(mock).await;
        let svc = DomainService::new(ctx);

        let domains = svc.list_domains().await.unwrap();
        let names: Vec<_> = domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.com", "b.dev", "c.io"]);
        assert_eq!(domains[0].name_server, NameServerKind::Vercel);
        assert_eq!(domains[1].name_server, NameServerKind::ThirdParty);
        assert_eq!(mock.list_domains_calls(), 2);
    }

    #[tokio::test]
    async fn find_domain_matches_case_insensitively() {
        let mock = MockProvider::new().with_domains(vec![domain("Example.com", ServiceType::ZeitWorld)]);
        let (ctx, _) = context_with(mock).await;
        let svc = DomainService::new(ctx);

        let found = svc.find_domain("example.com.").await.unwrap();
        assert_eq!(found.map(|d| d.name), Some("Example.com".to_string()));
        assert!(svc.find_domain("missing.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn without_token_fails_with_missing_token() {
        let ctx = crate::test_utils::empty_context();
        let svc = DomainService::new(ctx);
        assert!(matches!(svc.list_domains().await, Err(CoreError::MissingToken)));
    }

    #[tokio::test]
    async fn provider_errors_are_wrapped() {
        let mock = MockProvider::new().failing_reads();
        let (ctx, _) = context_with(mock).await;
        let svc = DomainService::new(ctx);
        let err = svc.list_domains().await.unwrap_err();
        assert!(matches!(err, CoreError::Provider(_)));
    }
}
