//! Generic record list: an immutable store of records, the filter predicate set
//! applied to it, the presentation mapper for enum attributes, the aggregator for
//! summary counters and the mode-independent view model.
//!
//! Every HR page instantiates the same pipeline:
//!
//! ```text
//! RecordStore ──filter(FilterState)──▶ Vec<&R> ──ListView::build──▶ layout(ViewMode)
//!      │
//!      └──summary()──▶ Vec<SummaryStat>   (always over the unfiltered store)
//! ```

pub mod action;
pub mod aggregate;
pub mod code_enum;
pub mod filter;
pub mod presentation;
pub mod store;
pub mod view;

pub use action::RecordAction;
pub use aggregate::{
    average_by, count_category, count_where, distinct_values, group_counts, share_where, sum_by,
    Average, StatValue, Summarize, SummaryStat,
};
pub use code_enum::CodeEnum;
pub use filter::{
    filter_records, matches, matches_category, matches_search, FilterDimension, FilterOption,
    FilterState, FILTER_ALL,
};
pub use presentation::{present_code, presentation_table, Presentable, Presentation, Tone};
pub use store::{ListRecord, RecordStore};
pub use view::{Cell, Chip, Column, Headline, ItemView, Layout, ListView, ViewMode, Displayable};

#[cfg(test)]
pub(crate) mod test_support;
