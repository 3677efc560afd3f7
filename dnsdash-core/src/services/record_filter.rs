//! Client-side table filtering and bulk selection.
//!
//! Filters run over the full in-memory row set on every change; there is
//! no indexing.

use std::collections::HashSet;

use dnsdash_provider::DnsRecordType;

use crate::types::RecordItem;

/// Active filters of the records table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// `None` means "All types".
    pub record_type: Option<DnsRecordType>,
    /// Case-insensitive substring matched against name and value.
    pub query: String,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.record_type.is_none() && self.query.is_empty()
    }

    pub fn matches(&self, row: &RecordItem) -> bool {
        matches_type(row, self.record_type.as_ref()) && matches_query(row, &self.query)
    }

    /// Rows passing both filters, in input order.
    pub fn apply<'a>(&self, rows: &'a [RecordItem]) -> Vec<&'a RecordItem> {
        let needle = self.query.to_lowercase();
        rows.iter()
            .filter(|row| {
                matches_type(row, self.record_type.as_ref()) && matches_lowered(row, &needle)
            })
            .collect()
    }
}

/// Exact match on record type; `None` passes every row.
pub fn matches_type(row: &RecordItem, record_type: Option<&DnsRecordType>) -> bool {
    record_type.is_none_or(|t| &row.record_type == t)
}

/// Case-insensitive substring match on name or value; empty passes every row.
pub fn matches_query(row: &RecordItem, query: &str) -> bool {
    matches_lowered(row, &query.to_lowercase())
}

fn matches_lowered(row: &RecordItem, needle: &str) -> bool {
    needle.is_empty()
        || row.name.to_lowercase().contains(needle)
        || row.value.to_lowercase().contains(needle)
}

/// Ids of rows picked for bulk actions. System rows can never be selected.
#[derive(Debug, Clone, Default)]
pub struct RecordSelection {
    ids: HashSet<String>,
}

impl RecordSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip selection of `row`. Returns `false` if the row is not selectable.
    pub fn toggle(&mut self, row: &RecordItem) -> bool {
        if row.disable_selection {
            return false;
        }
        if !self.ids.remove(&row.id) {
            self.ids.insert(row.id.clone());
        }
        true
    }

    /// Select every selectable row in `rows`.
    pub fn select_all<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a RecordItem>,
    {
        self.ids.extend(
            rows.into_iter()
                .filter(|r| !r.disable_selection)
                .map(|r| r.id.clone()),
        );
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected rows, in `rows` order. Never contains a system row.
    pub fn selected<'a>(&self, rows: &'a [RecordItem]) -> Vec<&'a RecordItem> {
        rows.iter()
            .filter(|r| !r.disable_selection && self.ids.contains(&r.id))
            .collect()
    }

    /// Forget ids that are no longer present after a refetch.
    pub fn retain(&mut self, rows: &[RecordItem]) {
        let present: HashSet<&str> = rows
            .iter()
            .filter(|r| !r.disable_selection)
            .map(|r| r.id.as_str())
            .collect();
        self.ids.retain(|id| present.contains(id.as_str()));
    }
}
