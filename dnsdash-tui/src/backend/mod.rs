//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦。update 层返回的 [`Command`] 由 [`Backend::dispatch`]
//! 派发到 tokio 运行时执行，完成后把 [`BackendEvent`] 发回主循环：
//!
//!     update 层返回 Command::FetchRecords(domain)
//!         ↓
//!     Backend::dispatch 在运行时上 spawn 任务
//!         ↓
//!     DnsService::list_records → dnsdash-provider → Vercel API
//!         ↓
//!     BackendEvent::RecordsLoaded 通过 channel 发回
//!         ↓
//!     主循环 try_recv，交给 update 层，View 层重新渲染
//!
//! 有模块结构：
//!     mod credential_store;   // 凭证存储（keyring）

mod credential_store;

pub use credential_store::KeyringCredentialStore;

use std::future::Future;
use std::sync::Arc;

use dnsdash_core::types::ProviderCredentials;
use dnsdash_core::{CredentialService, DnsService, DomainService, ServiceContext, TokenSource};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::{BackendEvent, TaskError};
use crate::update::Command;

/// 后台任务派发器
#[derive(Clone)]
pub struct Backend {
    ctx: Arc<ServiceContext>,
    runtime: Handle,
    tx: UnboundedSender<BackendEvent>,
    page_size: u32,
}

impl Backend {
    /// 创建派发器，返回接收任务结果的 channel
    pub fn new(
        ctx: Arc<ServiceContext>,
        runtime: Handle,
        page_size: u32,
    ) -> (Self, UnboundedReceiver<BackendEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                ctx,
                runtime,
                tx,
                page_size,
            },
            rx,
        )
    }

    /// 启动时恢复 token：显式传入优先，其次钥匙串；`team` 覆盖保存的团队
    pub async fn restore(
        &self,
        explicit: Option<ProviderCredentials>,
        team: Option<String>,
    ) -> Result<Option<TokenSource>, TaskError> {
        CredentialService::new(self.ctx.clone())
            .restore(explicit, team)
            .await
            .map_err(TaskError::from)
    }

    /// 执行副作用。剪贴板写入由主循环处理，这里忽略。
    pub fn dispatch(&self, command: Command) {
        let ctx = self.ctx.clone();
        let page_size = self.page_size;
        match command {
            Command::FetchDomains => self.spawn(async move {
                let result = DomainService::new(ctx)
                    .with_page_size(page_size)
                    .list_domains()
                    .await;
                BackendEvent::DomainsLoaded(result.map_err(TaskError::from))
            }),

            Command::FetchRecords(domain) => self.spawn(async move {
                let result = DnsService::new(ctx)
                    .with_page_size(page_size)
                    .list_records(&domain)
                    .await;
                BackendEvent::RecordsLoaded {
                    domain,
                    result: result.map_err(TaskError::from),
                }
            }),

            Command::Login(credentials) => self.spawn(async move {
                let result = CredentialService::new(ctx).login(credentials).await;
                BackendEvent::LoggedIn(result.map_err(TaskError::from))
            }),

            Command::Logout => self.spawn(async move {
                let result = CredentialService::new(ctx).logout().await;
                BackendEvent::LoggedOut(result.map_err(TaskError::from))
            }),

            Command::CreateRecord(request) => self.spawn(async move {
                let domain = request.domain.clone();
                let result = DnsService::new(ctx).create_record(request).await;
                BackendEvent::RecordSaved {
                    domain,
                    created: true,
                    result: result.map(|_| ()).map_err(TaskError::from),
                }
            }),

            Command::UpdateRecord { record, request } => self.spawn(async move {
                let domain = request.domain.clone();
                let result = DnsService::new(ctx).update_record(&record, request).await;
                BackendEvent::RecordSaved {
                    domain,
                    created: false,
                    result: result.map_err(TaskError::from),
                }
            }),

            Command::DeleteRecord { domain, record } => self.spawn(async move {
                let result = DnsService::new(ctx).delete_record(&domain, &record).await;
                BackendEvent::RecordDeleted {
                    domain,
                    result: result.map_err(TaskError::from),
                }
            }),

            Command::BatchDelete { domain, records } => self.spawn(async move {
                let result = DnsService::new(ctx).batch_delete(&domain, &records).await;
                BackendEvent::BatchDeleted {
                    domain,
                    result: result.map_err(TaskError::from),
                }
            }),

            Command::Copy(_) => {}
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = BackendEvent> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let event = task.await;
            if tx.send(event).is_err() {
                log::debug!("UI loop is gone, dropping backend event");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdash_core::traits::CredentialStore;
    use dnsdash_core::CoreResult;
    use dnsdash_provider::ProviderOptions;
    use std::time::Duration;

    struct EmptyStore;

    #[async_trait::async_trait]
    impl CredentialStore for EmptyStore {
        async fn get(&self) -> CoreResult<Option<ProviderCredentials>> {
            Ok(None)
        }
        async fn set(&self, _: &ProviderCredentials) -> CoreResult<()> {
            Ok(())
        }
        async fn remove(&self) -> CoreResult<()> {
            Ok(())
        }
    }

    fn backend(runtime: &tokio::runtime::Runtime) -> (Backend, UnboundedReceiver<BackendEvent>) {
        let ctx = Arc::new(ServiceContext::new(
            Arc::new(EmptyStore),
            ProviderOptions::default(),
        ));
        Backend::new(ctx, runtime.handle().clone(), 20)
    }

    #[test]
    fn restore_without_token_is_none() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (backend, _rx) = backend(&runtime);
        assert_eq!(runtime.block_on(backend.restore(None, None)), Ok(None));
    }

    #[test]
    fn fetch_without_token_reports_auth_error() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (backend, mut rx) = backend(&runtime);
        backend.dispatch(Command::FetchDomains);

        let event = runtime.block_on(async {
            tokio::time::timeout(Duration::from_secs(5), rx.recv()).await
        });
        let Ok(Some(BackendEvent::DomainsLoaded(Err(e)))) = event else {
            panic!("unexpected event: {event:?}");
        };
        assert!(e.auth);
    }
}
