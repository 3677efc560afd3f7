//! Keyed cache for remote query results.
//!
//! Each key tracks its last data, last error and whether a fetch is in
//! flight. The caller drives it: [`begin`](QueryCache::begin) before spawning
//! a fetch, [`complete`](QueryCache::complete) with the result. Stale data
//! stays visible while a revalidation runs and after it fails.

use std::collections::HashMap;
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Cache key of the domain list.
pub const DOMAINS_KEY: &str = "domains";

/// Cache key of a domain's record list.
pub fn records_key(domain: &str) -> String {
    format!("records:{domain}")
}

/// State of one cached query.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub data: Option<T>,
    /// Message of the last failed fetch; cleared on success.
    pub error: Option<String>,
    pub is_loading: bool,
    /// When data was last fetched successfully.
    pub fetched_at: Option<Instant>,
    /// When the last fetch settled, successfully or not. `None` forces
    /// revalidation.
    pub checked_at: Option<Instant>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            fetched_at: None,
            checked_at: None,
        }
    }
}

impl<T> QueryState<T> {
    /// Nothing to show yet: no data, no error, and not settled.
    pub fn is_pending(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }
}

#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<String, QueryState<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&QueryState<T>> {
        self.entries.get(key)
    }

    pub fn data(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|s| s.data.as_ref())
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|s| s.is_loading)
    }

    /// Mark a fetch for `key` as started.
    ///
    /// Returns `false` if one is already in flight; the caller must not start
    /// another.
    pub fn begin(&mut self, key: &str) -> bool {
        let state = self.entries.entry(key.to_string()).or_default();
        if state.is_loading {
            return false;
        }
        state.is_loading = true;
        true
    }

    /// Record the outcome of a fetch started with [`begin`](Self::begin).
    ///
    /// On error the previous data is kept.
    pub fn complete<E: Display>(&mut self, key: &str, result: Result<T, E>, now: Instant) {
        let state = self.entries.entry(key.to_string()).or_default();
        state.is_loading = false;
        state.checked_at = Some(now);
        match result {
            Ok(data) => {
                state.data = Some(data);
                state.error = None;
                state.fetched_at = Some(now);
            }
            Err(e) => {
                state.error = Some(e.to_string());
            }
        }
    }

    /// Whether `key` should be fetched again.
    ///
    /// True when it was never fetched, was invalidated, or the last fetch
    /// settled more than `max_age` ago. A failed fetch is retried on the same
    /// schedule. Never true while a fetch is in flight.
    pub fn is_stale(&self, key: &str, max_age: Duration, now: Instant) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(s) if s.is_loading => false,
            Some(s) => s
                .checked_at
                .is_none_or(|at| now.saturating_duration_since(at) >= max_age),
        }
    }

    /// Force the next [`is_stale`](Self::is_stale) check to return true.
    pub fn invalidate(&mut self, key: &str) {
        if let Some(s) = self.entries.get_mut(key) {
            s.checked_at = None;
        }
    }

    /// Invalidate every key starting with `prefix`.
    pub fn invalidate_prefix(&mut self, prefix: &str) {
        for (_, s) in self.entries.iter_mut().filter(|(k, _)| k.starts_with(prefix)) {
            s.checked_at = None;
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryState<T>> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_AGE: Duration = Duration::from_secs(60);

    #[test]
    fn begin_deduplicates_in_flight_fetches() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        assert!(cache.begin(DOMAINS_KEY));
        assert!(!cache.begin(DOMAINS_KEY));
        assert!(cache.is_loading(DOMAINS_KEY));

        cache.complete::<String>(DOMAINS_KEY, Ok(1), Instant::now());
        assert!(!cache.is_loading(DOMAINS_KEY));
        assert!(cache.begin(DOMAINS_KEY));
    }

    #[test]
    fn error_keeps_stale_data() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let t0 = Instant::now();
        cache.begin("k");
        cache.complete::<String>("k", Ok(vec![1, 2]), t0);

        cache.begin("k");
        cache.complete("k", Err("boom"), t0 + Duration::from_secs(1));
        let state = cache.get("k").unwrap();
        assert_eq!(state.data.as_deref(), Some(&[1, 2][..]));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);
    }

    #[test]
    fn success_clears_error() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        let t0 = Instant::now();
        cache.begin("k");
        cache.complete("k", Err("boom"), t0);
        assert!(!cache.get("k").unwrap().is_pending());

        cache.begin("k");
        cache.complete::<String>("k", Ok(7), t0);
        let state = cache.get("k").unwrap();
        assert_eq!(state.data, Some(7));
        assert!(state.error.is_none());
    }

    #[test]
    fn staleness_follows_age_and_loading() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        let t0 = Instant::now();
        assert!(cache.is_stale("k", MAX_AGE, t0));

        cache.begin("k");
        assert!(!cache.is_stale("k", MAX_AGE, t0));
        cache.complete::<String>("k", Ok(1), t0);

        assert!(!cache.is_stale("k", MAX_AGE, t0 + Duration::from_secs(59)));
        assert!(cache.is_stale("k", MAX_AGE, t0 + Duration::from_secs(60)));
    }

    #[test]
    fn failed_fetch_waits_for_next_interval() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        let t0 = Instant::now();
        cache.begin("k");
        cache.complete("k", Err("x"), t0);
        assert!(!cache.is_stale("k", MAX_AGE, t0 + Duration::from_secs(1)));
        assert!(cache.is_stale("k", MAX_AGE, t0 + MAX_AGE));
        assert!(cache.get("k").unwrap().fetched_at.is_none());

        cache.invalidate("k");
        assert!(cache.is_stale("k", MAX_AGE, t0));
    }

    #[test]
    fn invalidate_forces_revalidation() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        let t0 = Instant::now();
        cache.begin(&records_key("a.com"));
        cache.complete::<String>(&records_key("a.com"), Ok(1), t0);
        cache.begin(&records_key("b.com"));
        cache.complete::<String>(&records_key("b.com"), Ok(2), t0);

        cache.invalidate(&records_key("a.com"));
        assert!(cache.is_stale(&records_key("a.com"), MAX_AGE, t0));
        assert!(!cache.is_stale(&records_key("b.com"), MAX_AGE, t0));
        assert_eq!(cache.data(&records_key("a.com")), Some(&1));

        cache.invalidate_prefix("records:");
        assert!(cache.is_stale(&records_key("b.com"), MAX_AGE, t0));
    }
}
