//! Flattens paged record listings into table rows.

use std::collections::HashSet;

use dnsdash_provider::{CursorPage, DnsRecord};

use crate::types::RecordItem;

/// Flatten `pages` into display rows.
///
/// * ids are de-duplicated, keeping the first occurrence in page order;
/// * rows are sorted by [`RecordItem::recency`], newest first. The sort is
///   stable, so ties keep page order.
pub fn assemble_records<I>(pages: I) -> Vec<RecordItem>
where
    I: IntoIterator<Item = CursorPage<DnsRecord>>,
{
    let mut seen = HashSet::new();
    let mut rows: Vec<RecordItem> = pages
        .into_iter()
        .flat_map(|page| page.items)
        .filter(|record| seen.insert(record.id.clone()))
        .map(RecordItem::from)
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row.recency()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdash_provider::DnsRecordType;

    fn raw(id: &str, created: Option<i64>, updated: Option<i64>) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            slug: "example.com".to_string(),
            name: format!("n-{id}"),
            record_type: DnsRecordType::A,
            value: "192.0.2.1".to_string(),
            mx_priority: None,
            priority: None,
            ttl: 60,
            creator: "user".to_string(),
            created_at: created,
            updated_at: updated,
        }
    }

    fn page(items: Vec<DnsRecord>) -> CursorPage<DnsRecord> {
        CursorPage::new(items, None, None)
    }

    #[test]
    fn duplicates_across_pages_are_dropped() {
        let rows = assemble_records(vec![
            page(vec![raw("a", Some(1), None), raw("b", Some(2), None)]),
            page(vec![raw("b", Some(99), None), raw("c", Some(3), None)]),
        ]);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(ids, vec!["c", "b", "a"]);
        // 保留第一次出现的 b
        assert_eq!(rows[1].created_at, Some(2));
    }

    #[test]
    fn sorted_by_updated_then_created_descending() {
        let rows = assemble_records(vec![page(vec![
            raw("old", Some(10), None),
            raw("touched", Some(1), Some(50)),
            raw("none", None, None),
            raw("new", Some(40), None),
        ])]);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["touched", "new", "old", "none"]);
        for pair in rows.windows(2) {
            assert!(pair[0].recency() >= pair[1].recency());
        }
    }

    #[test]
    fn ties_keep_page_order() {
        let rows = assemble_records(vec![
            page(vec![raw("x", Some(5), None), raw("y", Some(5), None)]),
            page(vec![raw("z", Some(5), None)]),
        ]);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn mx_priority_wins_over_generic_priority() {
        let mut r = raw("mx", Some(1), None);
        r.record_type = DnsRecordType::Mx;
        r.mx_priority = Some(10);
        r.priority = Some(99);
        let mut s = raw("srv", Some(1), None);
        s.priority = Some(7);

        let rows = assemble_records(vec![page(vec![r, s])]);
        assert_eq!(rows[0].priority, Some(10));
        assert_eq!(rows[1].priority, Some(7));
    }

    #[test]
    fn system_records_are_flagged_and_unselectable() {
        let mut sys = raw("sys", Some(1), None);
        sys.creator = "system".to_string();
        let rows = assemble_records(vec![page(vec![sys, raw("usr", Some(1), None)])]);
        assert!(rows[0].is_system && rows[0].disable_selection);
        assert!(!rows[1].is_system && !rows[1].disable_selection);
    }

    #[test]
    fn empty_input_gives_empty_rows() {
        assert!(assemble_records(Vec::<CursorPage<DnsRecord>>::new()).is_empty());
    }
}
