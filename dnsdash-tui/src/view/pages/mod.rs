//! 页面视图

pub mod domains;
pub mod records;
