//! dnsdash: Vercel 域名与 DNS 记录的终端面板
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回 `Command` 副作用
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 在 tokio 运行时上执行 `Command` (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     Config::load()          // 读取 config.toml，不存在时使用默认值
//!     logging::init()         // 日志写入文件，终端留给 UI
//!     Backend::new()          // 钥匙串 + ServiceContext + tokio 运行时
//!     backend.restore()       // --token / VERCEL_TOKEN 优先，其次钥匙串；团队取自配置
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod config;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use dnsdash_core::ServiceContext;
use dnsdash_core::types::ProviderCredentials;

use backend::{Backend, KeyringCredentialStore};
use config::Config;
use message::AppMessage;
use model::UiSettings;
use util::{init_terminal, restore_terminal};

/// Terminal dashboard for Vercel domains and DNS records.
#[derive(Debug, Parser)]
#[command(name = "dnsdash", version, about)]
struct Cli {
    /// Config file (default: <config_dir>/dnsdash/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API token for this session; not saved to the keychain
    #[arg(long, env = "VERCEL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Team scope, overrides `team_id` in the config file
    #[arg(long, env = "VERCEL_TEAM_ID")]
    team: Option<String>,

    /// Open the DNS records of this domain directly
    #[arg(short, long)]
    domain: Option<String>,

    /// Log filter, overrides `log_level` in the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置与日志
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(team) = cli.team {
        config.team_id = Some(team);
    }
    let level = cli.log_level.unwrap_or_else(|| config.log_level.clone());
    let _log_guard = logging::init(&config.log_path(), &level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dnsdash starting");

    view::theme::set_theme(config.theme);

    // 2. 后台运行时与服务
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let store = Arc::new(KeyringCredentialStore::new());
    let ctx = Arc::new(ServiceContext::new(store, config.provider_options()));
    let (backend, mut rx) = Backend::new(ctx, runtime.handle().clone(), config.page_size);

    // 3. 恢复 token
    let explicit = cli
        .token
        .filter(|t| !t.trim().is_empty())
        .map(ProviderCredentials::new);
    let restored = runtime.block_on(backend.restore(explicit, config.team_id.clone()));
    if let Err(e) = &restored {
        tracing::warn!("Token restore failed: {e}");
    }

    // 4. 创建应用实例
    let mut app = model::App::new(UiSettings::from(&config), cli.domain);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let commands = update::update(&mut app, AppMessage::SessionRestored(restored), Instant::now());
    app::execute(&mut terminal, &backend, commands);
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    tracing::info!("dnsdash exiting");

    result
}
