//! Model 层：应用状态
//!
//! 只保存数据，不做 IO。所有修改都经由 update 层完成，视图层只读。
//! 远程数据放在两个 [`QueryCache`](dnsdash_core::QueryCache) 中，页面状态只保存
//! 光标、过滤器与选择等 UI 信息。

mod app;
mod cursor;
mod page;
pub mod state;

pub use app::{App, Session, UiSettings};
pub use cursor::ListCursor;
pub use page::Page;
pub use state::{
    ConfirmAction, ConfirmDialog, DetailView, DomainsState, FormField, FormMode, Menu, MenuAction,
    Modal, ModalState, RecordForm, RecordsState, ToastKind, ToastQueue, TokenField, TokenForm,
};
