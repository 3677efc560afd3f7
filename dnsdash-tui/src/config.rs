//! 配置文件
//!
//! TOML 格式，默认位于 `<config_dir>/dnsdash/config.toml`。文件不存在时使用默认值，
//! 未知字段会被拒绝，避免拼写错误被静默忽略。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use dnsdash_core::services::DEFAULT_PAGE_SIZE;
use dnsdash_provider::ProviderOptions;

const APP_DIR: &str = "dnsdash";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "dnsdash.log";

/// Color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Team scope for every request.
    pub team_id: Option<String>,
    /// Overrides `https://api.vercel.com`.
    pub api_base_url: Option<String>,
    pub page_size: u32,
    /// Retries of failed reads. Writes never retry.
    pub max_retries: u32,
    pub revalidate_interval_secs: u64,
    pub toast_duration_ms: u64,
    pub theme: ThemeName,
    /// `EnvFilter` directive, e.g. `info` or `dnsdash_provider=debug`.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_id: None,
            api_base_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            max_retries: 2,
            revalidate_interval_secs: 60,
            toast_duration_ms: 3000,
            theme: ThemeName::Dark,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// 加载配置；`path` 为空时使用默认路径
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        Ok(config)
    }

    pub fn provider_options(&self) -> ProviderOptions {
        ProviderOptions {
            base_url: self.api_base_url.clone(),
            max_retries: Some(self.max_retries),
        }
    }

    pub fn revalidate_interval(&self) -> Duration {
        Duration::from_secs(self.revalidate_interval_secs.max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Log file path: the configured one, or `<data_local_dir>/dnsdash/dnsdash.log`.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join(LOG_FILE)
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}
