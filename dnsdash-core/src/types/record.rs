//! DNS record row types

use serde::{Deserialize, Serialize};

use dnsdash_provider::{DnsRecord, DnsRecordType};

/// `creator` value of records managed by the provider itself.
pub const SYSTEM_CREATOR: &str = "system";

/// One row of the records table, shaped from a raw [`DnsRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordItem {
    pub id: String,
    /// Parent domain slug.
    pub slug: String,
    pub name: String,
    pub record_type: DnsRecordType,
    /// `mxPriority` if present, otherwise the generic priority.
    pub priority: Option<u16>,
    pub value: String,
    pub ttl: u32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    /// Created by the provider; not user-editable.
    pub is_system: bool,
    /// Excluded from bulk selection. Always equal to `is_system`.
    pub disable_selection: bool,
}

impl RecordItem {
    /// Recency key used for ordering: `updated_at`, then `created_at`, then 0.
    pub fn recency(&self) -> i64 {
        self.updated_at.or(self.created_at).unwrap_or(0)
    }
}

impl From<DnsRecord> for RecordItem {
    fn from(raw: DnsRecord) -> Self {
        let is_system = raw.creator == SYSTEM_CREATOR;
        Self {
            priority: raw.mx_priority.or(raw.priority),
            id: raw.id,
            slug: raw.slug,
            name: raw.name,
            record_type: raw.record_type,
            value: raw.value,
            ttl: raw.ttl,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            is_system,
            disable_selection: is_system,
        }
    }
}
