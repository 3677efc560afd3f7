//! Util 层：终端、剪贴板与文本工具
//!
//! 与业务逻辑无关的基础设施代码。

mod clipboard;
mod terminal;
mod text;

pub use clipboard::copy_to_clipboard;
pub use terminal::{Term, init_terminal, restore_terminal};
pub use text::{display_width, ellipsis, mask_secret};
