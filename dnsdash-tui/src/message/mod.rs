//! Message 层：事件消息
//!
//! 事件层把按键翻译成消息，后端任务把结果包装成消息，update 层统一消费。

mod app;
mod backend;
mod content;
mod modal;

pub use app::AppMessage;
pub use backend::{BackendEvent, TaskError};
pub use content::ContentMessage;
pub use modal::ModalMessage;
