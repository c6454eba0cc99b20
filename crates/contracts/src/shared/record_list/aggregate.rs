use super::presentation::Tone;
use super::store::ListRecord;
use std::fmt;

// ============================================================================
// Average with an explicit "not applicable"
// ============================================================================

/// Result of an averaging aggregate. An empty subset yields
/// [`Average::NotApplicable`] instead of NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    Value(f64),
    NotApplicable,
}

impl Average {
    pub fn of(sum: f64, count: usize) -> Self {
        if count == 0 {
            return Average::NotApplicable;
        }
        let value = sum / count as f64;
        if value.is_finite() {
            Average::Value(value)
        } else {
            Average::NotApplicable
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Average::Value(v) => Some(*v),
            Average::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Average::Value(_))
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Value(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Average::NotApplicable => f.write_str("N/A"),
        }
    }
}

// ============================================================================
// Aggregate functions
// ============================================================================

pub fn count_where<R>(records: &[R], pred: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| pred(*r)).count()
}

/// Number of records whose categorical `key` equals `value`.
pub fn count_category<R: ListRecord>(records: &[R], key: &str, value: &str) -> usize {
    count_where(records, |r| r.category(key) == Some(value))
}

pub fn sum_by<R>(records: &[R], value: impl Fn(&R) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Mean of `value` over the records selected by `pred`.
pub fn average_by<R>(
    records: &[R],
    pred: impl Fn(&R) -> bool,
    value: impl Fn(&R) -> f64,
) -> Average {
    let (sum, count) = records
        .iter()
        .filter(|r| pred(*r))
        .fold((0.0, 0usize), |(sum, count), r| (sum + value(r), count + 1));
    Average::of(sum, count)
}

/// Percentage (0..=100) of records matching `pred`.
pub fn share_where<R>(records: &[R], pred: impl Fn(&R) -> bool) -> Average {
    let hits = count_where(records, pred);
    Average::of(hits as f64 * 100.0, records.len())
}

/// Distinct values of a categorical attribute in first-appearance order.
pub fn distinct_values<R: ListRecord>(records: &[R], key: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in records.iter().filter_map(|r| r.category(key)) {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Record count per categorical value, in first-appearance order.
pub fn group_counts<R: ListRecord>(records: &[R], key: &str) -> Vec<(String, usize)> {
    let mut groups: Vec<(String, usize)> = Vec::new();
    for value in records.iter().filter_map(|r| r.category(key)) {
        match groups.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => groups.push((value.to_string(), 1)),
        }
    }
    groups
}

// ============================================================================
// Summary counters
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count(usize),
    /// Plain currency sum
    Amount(f64),
    Average { value: Average, decimals: u8 },
    Percent(Average),
}

/// One summary counter shown above a list.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStat {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub value: StatValue,
}

impl SummaryStat {
    pub fn new(
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        tone: Tone,
        value: StatValue,
    ) -> Self {
        Self {
            key,
            label,
            icon,
            tone,
            value,
        }
    }
}

/// Summary counters of a page, always computed over the unfiltered store.
pub trait Summarize: Sized {
    fn summary(records: &[Self]) -> Vec<SummaryStat>;
}

/// Find a stat by key.
pub fn stat<'a>(stats: &'a [SummaryStat], key: &str) -> Option<&'a StatValue> {
    stats.iter().find(|s| s.key == key).map(|s| &s.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::filter::FilterState;
    use crate::shared::record_list::store::RecordStore;
    use crate::shared::record_list::test_support::{sample, Stage, Task};

    #[test]
    fn test_average_of_empty_is_not_applicable() {
        assert_eq!(Average::of(0.0, 0), Average::NotApplicable);
        assert_eq!(Average::of(10.0, 0), Average::NotApplicable);
        assert_eq!(Average::of(10.0, 4), Average::Value(2.5));
        assert_eq!(Average::of(f64::NAN, 1), Average::NotApplicable);
    }

    #[test]
    fn test_average_display() {
        assert_eq!(Average::NotApplicable.to_string(), "N/A");
        assert_eq!(format!("{:.1}", Average::Value(3.456)), "3.5");
        assert_eq!(format!("{:.1}", Average::NotApplicable), "N/A");
    }

    #[test]
    fn test_average_by_empty_subset() {
        let records = sample();
        let avg = average_by(&records, |t| t.department == "Legal", |t| t.hours);
        assert_eq!(avg, Average::NotApplicable);
        assert!(avg.value().is_none());

        let none: Vec<Task> = Vec::new();
        assert_eq!(average_by(&none, |_| true, |t| t.hours), Average::NotApplicable);
        assert_eq!(share_where(&none, |_| true), Average::NotApplicable);
    }

    #[test]
    fn test_average_by_subset() {
        let records = sample();
        let avg = average_by(&records, |t| t.stage == Stage::Done, |t| t.hours);
        assert_eq!(avg, Average::Value(5.0));
    }

    #[test]
    fn test_counts_and_sums() {
        let records = sample();
        assert_eq!(count_category(&records, "stage", "done"), 2);
        assert_eq!(count_category(&records, "stage", "unknown"), 0);
        assert_eq!(count_where(&records, |t| t.note.is_some()), 3);
        assert_eq!(sum_by(&records, |t| t.hours), 16.0);
        assert_eq!(share_where(&records, |t| t.stage == Stage::Open), Average::Value(40.0));
    }

    #[test]
    fn test_distinct_values_and_groups() {
        let records = sample();
        assert_eq!(
            distinct_values(&records, "department"),
            vec!["Engineering", "IT", "Finance", "HR"]
        );
        assert_eq!(
            group_counts(&records, "stage"),
            vec![
                ("done".to_string(), 2),
                ("open".to_string(), 2),
                ("in_progress".to_string(), 1)
            ]
        );
        assert!(distinct_values(&records, "nope").is_empty());
    }

    #[test]
    fn test_summary_ignores_active_filters() {
        let store = RecordStore::new(sample()).unwrap();
        let state = FilterState::new()
            .with_category("stage", "done")
            .with_category("department", "Engineering");
        assert_eq!(store.filter(&state).len(), 1);

        let summary = store.summary();
        assert_eq!(stat(&summary, "completed"), Some(&StatValue::Count(2)));
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(5)));
    }

    #[test]
    fn test_summary_on_empty_store() {
        let store: RecordStore<Task> = RecordStore::empty();
        let summary = store.summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(0)));
        assert_eq!(
            stat(&summary, "avg_hours_done"),
            Some(&StatValue::Average {
                value: Average::NotApplicable,
                decimals: 1
            })
        );
    }
}
