//! 各页面与弹窗的状态

mod domains;
mod modal;
mod records;
mod toast;

pub use domains::DomainsState;
pub use modal::{
    ConfirmAction, ConfirmDialog, DetailView, FormField, FormMode, Menu, MenuAction, Modal,
    ModalState, RecordForm, TokenField, TokenForm,
};
pub use records::RecordsState;
pub use toast::{ToastKind, ToastQueue};
