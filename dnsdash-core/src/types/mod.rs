//! 类型定义模块

mod domain;
mod record;

pub use domain::{DomainItem, NameServerKind};
pub use record::{RecordItem, SYSTEM_CREATOR};

// Re-export provider 库的公共类型
pub use dnsdash_provider::{
    BatchDeleteFailure, BatchDeleteResult, CreateDnsRecordRequest, CredentialValidationError,
    CursorPage, CursorParams, DnsRecord, DnsRecordType, ProviderCredentials, ProviderDomain,
    ServiceType, UpdateDnsRecordRequest,
};
