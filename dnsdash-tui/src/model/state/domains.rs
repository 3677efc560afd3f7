//! 域名页面状态

use crate::model::ListCursor;

/// 域名页面状态；域名数据本身在查询缓存中
#[derive(Debug, Default)]
pub struct DomainsState {
    pub cursor: ListCursor,
}
