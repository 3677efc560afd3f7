//! 后台任务结果

use std::fmt;

use dnsdash_core::CoreError;
use dnsdash_core::types::{BatchDeleteResult, DomainItem, RecordItem};

/// Failure of a background task, reduced to what the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskError {
    pub message: String,
    /// The token is missing or was rejected.
    pub auth: bool,
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            auth: false,
        }
    }
}

impl From<CoreError> for TaskError {
    fn from(e: CoreError) -> Self {
        Self {
            auth: e.is_auth_error(),
            message: e.to_string(),
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 后台任务发回 UI 循环的事件
#[derive(Debug, Clone)]
pub enum BackendEvent {
    DomainsLoaded(Result<Vec<DomainItem>, TaskError>),
    RecordsLoaded {
        domain: String,
        result: Result<Vec<RecordItem>, TaskError>,
    },
    LoggedIn(Result<(), TaskError>),
    LoggedOut(Result<(), TaskError>),
    RecordSaved {
        domain: String,
        created: bool,
        result: Result<(), TaskError>,
    },
    RecordDeleted {
        domain: String,
        result: Result<(), TaskError>,
    },
    BatchDeleted {
        domain: String,
        result: Result<BatchDeleteResult, TaskError>,
    },
}
