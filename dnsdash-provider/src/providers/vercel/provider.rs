//! Vercel DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, to_relative_name};
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{
    CreateDnsRecordRequest, CursorPage, CursorParams, DnsRecord, DnsRecordType, ProviderDomain,
    SrvData, UpdateDnsRecordRequest,
};

use super::types::VercelSrv;
use super::{
    PROVIDER_NAME, VercelCreateRecordBody, VercelCreateRecordResponse, VercelDnsRecord,
    VercelDomain, VercelDomainsResponse, VercelProvider, VercelRecordsResponse,
    VercelUserResponse,
};

impl VercelProvider {
    pub(crate) fn to_provider_domain(domain: VercelDomain) -> ProviderDomain {
        ProviderDomain {
            id: domain.id,
            name: domain.name,
            service_type: domain.service_type,
            verified: domain.verified,
            created_at: domain.created_at,
        }
    }

    pub(crate) fn to_dns_record(record: VercelDnsRecord) -> DnsRecord {
        DnsRecord {
            id: record.id,
            slug: record.slug,
            name: record.name,
            record_type: DnsRecordType::from(record.record_type),
            value: record.value,
            mx_priority: record.mx_priority,
            priority: record.priority,
            ttl: record.ttl,
            creator: record.creator,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// 构建创建/更新请求体
    ///
    /// MX 使用 `mxPriority`；SRV 需要结构化的 `srv`，值格式为 `"<weight> <port> <target>"`
    pub(crate) fn record_body(
        domain: &str,
        name: &str,
        record_type: &DnsRecordType,
        value: &str,
        ttl: Option<u32>,
        priority: Option<u16>,
    ) -> Result<VercelCreateRecordBody> {
        let mut body = VercelCreateRecordBody {
            name: to_relative_name(name, domain),
            record_type: record_type.as_str().to_string(),
            value: Some(value.trim().to_string()),
            ttl,
            mx_priority: None,
            srv: None,
        };

        match record_type {
            DnsRecordType::Mx => {
                body.mx_priority = Some(priority.unwrap_or(10));
            }
            DnsRecordType::Srv => {
                let srv = SrvData::parse(priority.unwrap_or(0), value).ok_or_else(|| {
                    ProviderError::InvalidParameter {
                        provider: PROVIDER_NAME.to_string(),
                        param: "value".to_string(),
                        detail: "SRV value must be \"<weight> <port> <target>\"".to_string(),
                    }
                })?;
                body.value = None;
                body.srv = Some(VercelSrv {
                    priority: srv.priority,
                    weight: srv.weight,
                    port: srv.port,
                    target: srv.target,
                });
            }
            _ => {}
        }

        Ok(body)
    }

    fn domain_path(domain: &str) -> String {
        urlencoding::encode(&normalize_domain_name(domain)).into_owned()
    }
}

#[async_trait]
impl DnsProvider for VercelProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self
            .get::<VercelUserResponse>("/v2/user", &[], ErrorContext::default())
            .await
        {
            Ok(resp) => {
                log::info!(
                    "[{PROVIDER_NAME}] Token accepted for user {}",
                    resp.user
                        .username
                        .or(resp.user.id)
                        .unwrap_or_else(|| "<unknown>".to_string())
                );
                Ok(true)
            }
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_domains(&self, params: &CursorParams) -> Result<CursorPage<ProviderDomain>> {
        let resp: VercelDomainsResponse = self
            .get("/v5/domains", &Self::cursor_query(params), ErrorContext::default())
            .await?;
        let pagination = resp.pagination.unwrap_or_default();
        let items: Vec<ProviderDomain> = resp
            .domains
            .into_iter()
            .map(Self::to_provider_domain)
            .collect();
        let mut page = CursorPage::new(items, pagination.next, pagination.prev);
        if pagination.count > 0 {
            page.count = pagination.count;
        }
        Ok(page)
    }

    async fn list_records(
        &self,
        domain: &str,
        params: &CursorParams,
    ) -> Result<CursorPage<DnsRecord>> {
        let path = format!("/v4/domains/{}/records", Self::domain_path(domain));
        let resp: VercelRecordsResponse = self
            .get(
                &path,
                &Self::cursor_query(params),
                ErrorContext::domain(domain),
            )
            .await?;
        let pagination = resp.pagination.unwrap_or_default();
        let items: Vec<DnsRecord> = resp.records.into_iter().map(Self::to_dns_record).collect();
        let mut page = CursorPage::new(items, pagination.next, pagination.prev);
        if pagination.count > 0 {
            page.count = pagination.count;
        }
        Ok(page)
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<String> {
        let body = Self::record_body(
            &req.domain,
            &req.name,
            &req.record_type,
            &req.value,
            req.ttl,
            req.priority,
        )?;
        let path = format!("/v2/domains/{}/records", Self::domain_path(&req.domain));
        let resp: VercelCreateRecordResponse = self
            .post(
                &path,
                &body,
                ErrorContext::record_name(&req.domain, &req.name),
            )
            .await?;
        log::info!(
            "[{PROVIDER_NAME}] Created {} record '{}' in {} ({})",
            req.record_type,
            req.name,
            req.domain,
            resp.uid
        );
        Ok(resp.uid)
    }

    async fn update_record(&self, record_id: &str, req: &UpdateDnsRecordRequest) -> Result<()> {
        let body = Self::record_body(
            &req.domain,
            &req.name,
            &req.record_type,
            &req.value,
            req.ttl,
            req.priority,
        )?;
        let path = format!("/v1/domains/records/{}", urlencoding::encode(record_id));
        let mut context = ErrorContext::record(&req.domain, record_id);
        context.record_name = Some(req.name.clone());
        self.patch(&path, &body, context).await?;
        log::info!("[{PROVIDER_NAME}] Updated record {record_id} in {}", req.domain);
        Ok(())
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        let path = format!(
            "/v2/domains/{}/records/{}",
            Self::domain_path(domain),
            urlencoding::encode(record_id)
        );
        self.delete(&path, ErrorContext::record(domain, record_id))
            .await?;
        log::info!("[{PROVIDER_NAME}] Deleted record {record_id} from {domain}");
        Ok(())
    }
}
