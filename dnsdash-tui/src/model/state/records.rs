//! DNS 记录页面状态

use dnsdash_core::types::{DnsRecordType, RecordItem};
use dnsdash_core::{RecordFilter, RecordSelection};

use crate::model::ListCursor;

/// DNS 记录页面状态；记录数据本身在查询缓存中
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 光标位于过滤后的可见行上
    pub cursor: ListCursor,
    pub filter: RecordFilter,
    /// 搜索框是否正在接收输入
    pub search_active: bool,
    pub selection: RecordSelection,
}

impl RecordsState {
    /// 切换域名时重置
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rows passing the current filters.
    pub fn visible<'a>(&self, rows: &'a [RecordItem]) -> Vec<&'a RecordItem> {
        self.filter.apply(rows)
    }

    /// Row under the cursor.
    pub fn current<'a>(&self, rows: &'a [RecordItem]) -> Option<&'a RecordItem> {
        self.visible(rows).get(self.cursor.selected).copied()
    }

    /// Label of the type selector: `All` or the type name.
    pub fn type_label(&self) -> &str {
        self.filter.record_type.as_ref().map_or("All", DnsRecordType::as_str)
    }

    /// Step the type selector through `All` and each known type.
    pub fn cycle_type(&mut self, forward: bool) {
        let options: Vec<Option<DnsRecordType>> = std::iter::once(None)
            .chain(DnsRecordType::ALL.iter().cloned().map(Some))
            .collect();
        let len = options.len();
        let pos = options
            .iter()
            .position(|o| *o == self.filter.record_type)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.filter.record_type = options[next].clone();
        self.cursor.first();
    }

    pub fn push_query(&mut self, ch: char) {
        self.filter.query.push(ch);
        self.cursor.first();
    }

    pub fn pop_query(&mut self) {
        self.filter.query.pop();
        self.cursor.first();
    }

    pub fn clear_filters(&mut self) {
        self.filter = RecordFilter::default();
        self.search_active = false;
        self.cursor.first();
    }
}
