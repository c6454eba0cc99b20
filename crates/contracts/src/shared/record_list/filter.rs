use super::code_enum::CodeEnum;
use super::store::ListRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel value of a categorical filter meaning "no constraint".
pub const FILTER_ALL: &str = "all";

// ============================================================================
// Filter state
// ============================================================================

/// Active filter values of one page: a free-text query plus categorical
/// selections keyed by dimension.
///
/// A missing key and a key set to [`FILTER_ALL`] are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.set_search(query);
        self
    }

    pub fn with_category(mut self, key: &str, value: &str) -> Self {
        self.set_category(key, value);
        self
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Select a value for a dimension; selecting [`FILTER_ALL`] clears it.
    pub fn set_category(&mut self, key: &str, value: &str) {
        if value == FILTER_ALL {
            self.categories.remove(key);
        } else {
            self.categories.insert(key.to_string(), value.to_string());
        }
    }

    pub fn clear_category(&mut self, key: &str) {
        self.categories.remove(key);
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    pub fn reset(&mut self) {
        self.search_query.clear();
        self.categories.clear();
    }

    /// Selected value for a dimension, [`FILTER_ALL`] when unconstrained.
    pub fn category(&self, key: &str) -> &str {
        self.categories
            .get(key)
            .map(String::as_str)
            .unwrap_or(FILTER_ALL)
    }

    /// Number of constrained dimensions, counting a non-empty search as one.
    pub fn active_filters_count(&self) -> usize {
        let search = usize::from(!self.search_query.trim().is_empty());
        let categories = self
            .categories
            .values()
            .filter(|v| v.as_str() != FILTER_ALL)
            .count();
        search + categories
    }

    pub fn is_active(&self) -> bool {
        self.active_filters_count() > 0
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Case-insensitive substring match over the record's search fields.
///
/// Leading and trailing whitespace of the query is ignored, so a blank query
/// matches every record and `"rahul "` searches for `"rahul"`. Absent optional
/// fields never match.
pub fn matches_search<R: ListRecord>(record: &R, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact equality against the record's categorical value; [`FILTER_ALL`]
/// always matches.
pub fn matches_category<R: ListRecord>(record: &R, key: &str, value: &str) -> bool {
    if value == FILTER_ALL {
        return true;
    }
    record.category(key) == Some(value)
}

/// Conjunction of the search predicate and every categorical predicate.
pub fn matches<R: ListRecord>(record: &R, state: &FilterState) -> bool {
    matches_search(record, &state.search_query)
        && state
            .categories
            .iter()
            .all(|(key, value)| matches_category(record, key, value))
}

/// Stable filter: the result keeps the store order.
pub fn filter_records<'a, R: ListRecord>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    records.iter().filter(|r| matches(*r, state)).collect()
}

// ============================================================================
// Dimensions (dropdown descriptions)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    fn all(label: &str) -> Self {
        Self::new(FILTER_ALL, label)
    }
}

/// One categorical filter dropdown.
///
/// The first option is always the [`FILTER_ALL`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDimension {
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterDimension {
    /// Options taken from every variant of a closed enum.
    pub fn from_enum<E: CodeEnum>(key: &str, label: &str) -> Self {
        let mut options = vec![FilterOption::all(&format!("All {}", plural(label)))];
        options.extend(
            E::all()
                .iter()
                .map(|v| FilterOption::new(v.code(), v.display_name())),
        );
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }

    /// Options taken from free-form values (e.g. departments present in a store).
    pub fn from_values<I, S>(key: &str, label: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = vec![FilterOption::all(&format!("All {}", plural(label)))];
        options.extend(
            values
                .into_iter()
                .map(|v| FilterOption::new(v.as_ref(), v.as_ref())),
        );
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }

    /// Label of the option with `value`, if it is one of ours.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

fn plural(label: &str) -> String {
    let lower = label.to_lowercase();
    if lower.ends_with("us") {
        format!("{lower}es")
    } else if lower.ends_with('s') {
        lower
    } else if let Some(stem) = lower.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{lower}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::test_support::{sample, Stage, Task};

    fn ids(records: &[&Task]) -> Vec<String> {
        records.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_sentinels_return_store_in_order() {
        let records = sample();
        let state = FilterState::new()
            .with_search("")
            .with_category("stage", FILTER_ALL)
            .with_category("department", FILTER_ALL);
        let result = filter_records(&records, &state);
        assert_eq!(ids(&result), vec!["T1", "T2", "T3", "T4", "T5"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        let result = filter_records(&records, &FilterState::new().with_search("RAHUL"));
        assert_eq!(ids(&result), vec!["T1"]);

        let result = filter_records(&records, &FilterState::new().with_search("eNgInEeRiNg"));
        assert_eq!(ids(&result), vec!["T1", "T4"]);
    }

    #[test]
    fn test_search_skips_absent_optional_fields() {
        let records = sample();
        // T2 and T4 have no note; "quarterly" only lives in T3's note
        let result = filter_records(&records, &FilterState::new().with_search("quarterly"));
        assert_eq!(ids(&result), vec!["T3"]);
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let records = sample();
        let result = filter_records(&records, &FilterState::new().with_search("   "));
        assert_eq!(result.len(), records.len());
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let records = sample();
        let padded = filter_records(&records, &FilterState::new().with_search("  quarterly "));
        assert_eq!(ids(&padded), vec!["T3"]);
        assert!(matches_search(&records[2], " QUARTERLY"));
    }

    #[test]
    fn test_category_exact_match() {
        let records = sample();
        let result = filter_records(&records, &FilterState::new().with_category("stage", "done"));
        assert_eq!(ids(&result), vec!["T1", "T3"]);

        // exact: no case folding on categorical values
        let result = filter_records(&records, &FilterState::new().with_category("stage", "Done"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category_key_matches_nothing() {
        let records = sample();
        let state = FilterState::new().with_category("priority", "high");
        assert!(filter_records(&records, &state).is_empty());
    }

    #[test]
    fn test_conjunction_equals_sequential_filters() {
        let records = sample();
        let states = [
            FilterState::new()
                .with_search("e")
                .with_category("department", "Engineering"),
            FilterState::new()
                .with_search("o")
                .with_category("stage", "open")
                .with_category("department", "HR"),
            FilterState::new().with_search("audit").with_category("stage", "in_progress"),
            FilterState::new().with_category("stage", "done"),
        ];

        for state in &states {
            let combined = ids(&filter_records(&records, state));

            let mut sequential: Vec<&Task> = records
                .iter()
                .filter(|r| matches_search(*r, &state.search_query))
                .collect();
            for (key, value) in &state.categories {
                sequential.retain(|r| matches_category(*r, key, value));
            }

            assert_eq!(combined, ids(&sequential), "state: {:?}", state);
        }
    }

    #[test]
    fn test_status_and_department_end_to_end() {
        let records = sample();
        let state = FilterState::new()
            .with_category("stage", "done")
            .with_category("department", "Engineering");
        let result = filter_records(&records, &state);
        assert_eq!(ids(&result), vec!["T1"]);
    }

    #[test]
    fn test_set_category_all_clears() {
        let mut state = FilterState::new().with_category("stage", "done");
        assert_eq!(state.category("stage"), "done");
        state.set_category("stage", FILTER_ALL);
        assert_eq!(state.category("stage"), FILTER_ALL);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_active_filters_count() {
        let mut state = FilterState::new();
        assert_eq!(state.active_filters_count(), 0);
        assert!(!state.is_active());

        state.set_search("  ");
        assert_eq!(state.active_filters_count(), 0);

        state.set_search("eng");
        state.set_category("stage", "open");
        state.set_category("department", "HR");
        assert_eq!(state.active_filters_count(), 3);

        state.reset();
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_filter_state_serde_defaults() {
        let state: FilterState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, FilterState::new());

        let state = FilterState::new().with_search("x").with_category("stage", "open");
        let raw = serde_json::to_string(&state).unwrap();
        let back: FilterState = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_dimension_from_enum() {
        let dim = FilterDimension::from_enum::<Stage>("stage", "Status");
        assert_eq!(dim.options.len(), 4);
        assert_eq!(dim.options[0].value, FILTER_ALL);
        assert_eq!(dim.options[0].label, "All statuses");
        assert_eq!(dim.options[2].value, "in_progress");
        assert_eq!(dim.option_label("done"), Some("Done"));
        assert_eq!(dim.option_label("nope"), None);
    }

    #[test]
    fn test_dimension_from_values() {
        let dim = FilterDimension::from_values("department", "Department", ["HR", "IT"]);
        assert_eq!(dim.options[0].label, "All departments");
        assert_eq!(dim.options[1], FilterOption::new("HR", "HR"));
        assert_eq!(dim.options.len(), 3);

        let dim = FilterDimension::from_values("category", "Category", Vec::<String>::new());
        assert_eq!(dim.options[0].label, "All categories");
    }
}
