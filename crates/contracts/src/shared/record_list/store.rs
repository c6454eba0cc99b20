use super::aggregate::{Summarize, SummaryStat};
use super::filter::{filter_records, FilterState};
use std::collections::HashSet;

/// A record that can live in a [`RecordStore`].
pub trait ListRecord {
    /// Unique, never reused identifier
    fn id(&self) -> &str;

    /// Fields scanned by the free-text search.
    ///
    /// An absent optional field is reported as `None` and never matches.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Code of a categorical attribute by filter key, `None` if the record has
    /// no such attribute or the value is absent.
    fn category(&self, key: &str) -> Option<&str>;
}

/// Immutable ordered collection of records backing one page.
///
/// Populated once from static data; there is no write path.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R: ListRecord> RecordStore<R> {
    /// Build a store, rejecting duplicate identifiers.
    pub fn new(records: Vec<R>) -> anyhow::Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                anyhow::bail!("duplicate record id '{}'", record.id());
            }
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self { records: Vec::new() }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Ordered subsequence matching every active constraint of `state`.
    pub fn filter(&self, state: &FilterState) -> Vec<&R> {
        filter_records(&self.records, state)
    }

    /// Page summary computed over the full, unfiltered store.
    pub fn summary(&self) -> Vec<SummaryStat>
    where
        R: Summarize,
    {
        R::summary(&self.records)
    }
}

impl<R: ListRecord> Default for RecordStore<R> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::test_support::{sample, Stage, Task};

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut records = sample();
        records.push(Task::new("T2", "Dup", "Ops", Stage::Open));
        let err = RecordStore::new(records).unwrap_err();
        assert!(err.to_string().contains("T2"));
    }

    #[test]
    fn test_get_and_len() {
        let store = RecordStore::new(sample()).unwrap();
        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());
        assert_eq!(store.get("T3").map(|t| t.title.as_str()), Some("Payroll audit"));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_empty_store_filters_to_nothing() {
        let store: RecordStore<Task> = RecordStore::empty();
        let state = FilterState::new().with_search("anything");
        assert!(store.filter(&state).is_empty());
        assert!(store.filter(&FilterState::new()).is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_store() {
        let store = RecordStore::new(sample()).unwrap();
        let state = FilterState::new().with_category("stage", "done");
        let _ = store.filter(&state);
        assert_eq!(store.len(), 5);
        assert_eq!(store.records()[0].id, "T1");
    }
}
