//! View 层：UI 渲染
//!
//! 只读取 Model 生成画面，不修改状态。
//!
//!     layout.rs       标题栏（面包屑）+ 页面 + 状态栏，弹窗与 toast 在最上层
//!     pages/          域名页、DNS 记录页
//!     components/     通用表格、弹窗、状态栏、toast
//!     theme.rs        深色 / 浅色主题

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
