//! 凭证管理服务
//!
//! 启动时按优先级加载 token（显式传入 > 钥匙串），登录时先调用 API 校验再保存。

use std::sync::Arc;

use dnsdash_provider::{ProviderCredentials, ProviderError};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;

/// Where the active token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` flag or `VERCEL_TOKEN`; never written to the keychain.
    Explicit,
    Keychain,
}

/// 凭证管理服务
pub struct CredentialService {
    ctx: Arc<ServiceContext>,
}

impl CredentialService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Install a provider from explicit credentials, or from the keychain.
    ///
    /// A configured `team` replaces the scope saved with the keychain token.
    /// Returns `Ok(None)` when no token is available anywhere. The token is
    /// not checked against the API here; the first request does that.
    pub async fn restore(
        &self,
        explicit: Option<ProviderCredentials>,
        team: Option<String>,
    ) -> CoreResult<Option<TokenSource>> {
        let (credentials, source) = match explicit {
            Some(c) => (c, TokenSource::Explicit),
            None => match self.ctx.credential_store.get().await? {
                Some(c) => (c, TokenSource::Keychain),
                None => {
                    log::info!("No saved token");
                    return Ok(None);
                }
            },
        };

        let credentials = match team.filter(|t| !t.trim().is_empty()) {
            Some(team) => credentials.with_team(Some(team)),
            None => credentials,
        };
        let provider = self.ctx.build_provider(credentials)?;
        self.ctx.install_provider(provider).await;
        log::info!("Using token from {source:?}");
        Ok(Some(source))
    }

    /// Validate `credentials` with the API, then save and activate them.
    pub async fn login(&self, credentials: ProviderCredentials) -> CoreResult<()> {
        let provider = self.ctx.build_provider(credentials.clone())?;

        let valid = provider
            .validate_credentials()
            .await
            .map_err(|e| self.ctx.handle_provider_error("validate token", e))?;
        if !valid {
            log::warn!("Token rejected during login");
            return Err(CoreError::Provider(ProviderError::InvalidCredentials {
                provider: provider.id().to_string(),
                raw_message: None,
            }));
        }

        self.ctx.credential_store.set(&credentials).await?;
        self.ctx.install_provider(provider).await;
        log::info!("Token saved");
        Ok(())
    }

    /// Forget the saved token and deactivate the provider.
    pub async fn logout(&self) -> CoreResult<()> {
        self.ctx.credential_store.remove().await?;
        self.ctx.clear_provider().await;
        log::info!("Token removed");
        Ok(())
    }
}
