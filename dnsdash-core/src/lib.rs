//! dnsdash core library
//!
//! Platform-independent logic behind the dashboard:
//! - record list assembly, filtering and bulk selection
//! - the record description generator
//! - domain, DNS and credential services over a [`DnsProvider`](dnsdash_provider::DnsProvider)
//! - a query cache for loading/error state and revalidation
//!
//! Token storage is abstracted by [`CredentialStore`] so frontends can plug
//! in the OS keychain.

pub mod error;
pub mod query_cache;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use query_cache::{DOMAINS_KEY, QueryCache, QueryState, records_key};
pub use services::{
    CredentialService, DnsService, DomainService, ServiceContext, TokenSource,
    description::describe_record,
    record_filter::{RecordFilter, RecordSelection},
};
pub use traits::CredentialStore;
