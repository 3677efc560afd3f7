//! 凭证存储服务
//!
//! 使用系统钥匙串保存 Vercel API token。
//! 实现 dnsdash-core 的 CredentialStore trait

use async_trait::async_trait;
use dnsdash_core::traits::CredentialStore;
use dnsdash_core::types::ProviderCredentials;
use dnsdash_core::{CoreError, CoreResult};
use keyring::Entry;
use tokio::sync::RwLock;

const SERVICE_NAME: &str = "dnsdash";
const CREDENTIALS_KEY: &str = "vercel-api-token";

/// 基于系统钥匙串的凭证存储
///
/// Credentials are stored as one JSON value under a fixed entry:
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
pub struct KeyringCredentialStore {
    /// 内存缓存；外层 `None` 表示尚未读取钥匙串
    cache: RwLock<Option<Option<ProviderCredentials>>>,
}

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(None),
        }
    }

    fn get_entry() -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, CREDENTIALS_KEY)
            .map_err(|e| CoreError::CredentialError(e.to_string()))
    }

    fn read_sync() -> CoreResult<Option<ProviderCredentials>> {
        let entry = Self::get_entry()?;
        match entry.get_password() {
            Ok(json) => decode(&json),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::CredentialError(e.to_string())),
        }
    }

    fn write_sync(credentials: &ProviderCredentials) -> CoreResult<()> {
        let json = serde_json::to_string(credentials)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        Self::get_entry()?
            .set_password(&json)
            .map_err(|e| CoreError::CredentialError(e.to_string()))
    }

    fn delete_sync() -> CoreResult<()> {
        match Self::get_entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CoreError::CredentialError(e.to_string())),
        }
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析钥匙串中保存的内容；空值视为未保存
fn decode(json: &str) -> CoreResult<Option<ProviderCredentials>> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(json)
        .map(Some)
        .map_err(|e| CoreError::SerializationError(e.to_string()))
}

fn join_error(e: &tokio::task::JoinError) -> CoreError {
    CoreError::CredentialError(format!("Task join error: {e}"))
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
        {
            let cache = self.cache.read().await;
            if let Some(ref creds) = *cache {
                return Ok(creds.clone());
            }
        }

        let mut cache = self.cache.write().await;
        if let Some(ref creds) = *cache {
            return Ok(creds.clone());
        }

        let credentials = tokio::task::spawn_blocking(|| {
            log::debug!("Loading token from keychain");
            Self::read_sync()
        })
        .await
        .map_err(|e| join_error(&e))??;

        *cache = Some(credentials.clone());
        Ok(credentials)
    }

    async fn set(&self, credentials: &ProviderCredentials) -> CoreResult<()> {
        let mut cache = self.cache.write().await;
        let to_save = credentials.clone();
        tokio::task::spawn_blocking(move || Self::write_sync(&to_save))
            .await
            .map_err(|e| join_error(&e))??;

        *cache = Some(Some(credentials.clone()));
        log::info!("Token saved to keychain");
        Ok(())
    }

    async fn remove(&self) -> CoreResult<()> {
        let mut cache = self.cache.write().await;
        tokio::task::spawn_blocking(Self::delete_sync)
            .await
            .map_err(|e| join_error(&e))??;

        *cache = Some(None);
        log::info!("Token removed from keychain");
        Ok(())
    }
}
