//! Vercel API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::ServiceType;

/// 错误响应：`{"error": {"code": "...", "message": "..."}}`
#[derive(Debug, Deserialize)]
pub struct VercelErrorBody {
    pub error: VercelApiError,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VercelApiError {
    pub code: Option<String>,
    pub message: Option<String>,
    /// token 无效时 API 返回 403 + `invalidToken: true`
    #[serde(default)]
    pub invalid_token: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct VercelPagination {
    #[serde(default)]
    pub count: u32,
    pub next: Option<i64>,
    pub prev: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct VercelDomainsResponse {
    pub domains: Vec<VercelDomain>,
    #[serde(default)]
    pub pagination: Option<VercelPagination>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VercelDomain {
    pub id: String,
    pub name: String,
    #[serde(default = "default_service_type")]
    pub service_type: ServiceType,
    #[serde(default)]
    pub verified: bool,
    pub created_at: Option<i64>,
}

fn default_service_type() -> ServiceType {
    ServiceType::Na
}

#[derive(Debug, Deserialize)]
pub struct VercelRecordsResponse {
    pub records: Vec<VercelDnsRecord>,
    #[serde(default)]
    pub pagination: Option<VercelPagination>,
}

/// DNS Record 结构（响应）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VercelDnsRecord {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    pub mx_priority: Option<u16>,
    pub priority: Option<u16>,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub creator: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// SRV 记录结构化字段
#[derive(Debug, Serialize)]
pub struct VercelSrv {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// 创建/更新记录请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VercelCreateRecordBody {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srv: Option<VercelSrv>,
}

#[derive(Debug, Deserialize)]
pub struct VercelCreateRecordResponse {
    pub uid: String,
}

#[derive(Debug, Deserialize)]
pub struct VercelUserResponse {
    pub user: VercelUser,
}

#[derive(Debug, Deserialize)]
pub struct VercelUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}
