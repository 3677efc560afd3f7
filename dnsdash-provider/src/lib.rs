//! # dnsdash-provider
//!
//! Typed client for the [Vercel](https://vercel.com/) domains and DNS REST API.
//!
//! ## Feature Flags
//!
//! - **`vercel`** *(default)*: The Vercel provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsdash_provider::{
//!     create_provider, CursorParams, DnsProvider, ProviderCredentials, ProviderOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ProviderCredentials::new("your-token");
//!     let provider = create_provider(credentials, &ProviderOptions::default())?;
//!
//!     if !provider.validate_credentials().await? {
//!         return Err("token rejected".into());
//!     }
//!
//!     // Domains and records are cursor-paginated: follow `next` until it is `None`.
//!     let mut params = CursorParams::first(100);
//!     loop {
//!         let page = provider.list_domains(&params).await?;
//!         for domain in &page.items {
//!             println!("{} ({:?})", domain.name, domain.service_type);
//!         }
//!         match params.after(&page) {
//!             Some(next) => params = next,
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff on reads only; create, update and delete surface
//! them immediately.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

#[cfg(feature = "vercel")]
pub use factory::create_provider;
pub use factory::ProviderOptions;

pub use traits::DnsProvider;

pub use types::{
    BatchDeleteFailure, BatchDeleteResult, CreateDnsRecordRequest, CredentialValidationError,
    CursorPage, CursorParams, DnsRecord, DnsRecordType, ProviderCredentials, ProviderDomain,
    ServiceType, SrvData, UpdateDnsRecordRequest,
};

pub use utils::log_sanitizer::{redact_token, truncate_for_log};

#[cfg(feature = "vercel")]
pub use providers::VercelProvider;
