//! Event 层：事件处理
//!
//! 负责将键盘与终端事件转换为 [`AppMessage`](crate::message::AppMessage)。
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发：
//!         - 有弹窗打开时，按弹窗类型处理
//!         - 记录页搜索框激活时，字符键作为输入
//!         - 全局快捷键
//!         - 列表与当前页面的快捷键
//!
//!     Event::FocusGained 会触发当前页面的重新验证。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::HELP_ENTRIES;
