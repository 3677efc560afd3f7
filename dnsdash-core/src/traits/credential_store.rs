//! 凭证存储抽象 Trait

use async_trait::async_trait;
use dnsdash_provider::ProviderCredentials;

use crate::error::CoreResult;

/// Persistent storage for the API token.
///
/// The terminal frontend stores it in the OS keychain; tests use an
/// in-memory store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the saved credentials.
    ///
    /// # Returns
    /// * `Ok(Some(credentials))` - a token is saved
    /// * `Ok(None)` - nothing saved yet
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>>;

    /// Save credentials, replacing any previous ones.
    async fn set(&self, credentials: &ProviderCredentials) -> CoreResult<()>;

    /// Remove saved credentials. Removing nothing is not an error.
    async fn remove(&self) -> CoreResult<()>;
}
