use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a001_exit_interview::{
    seed, ExitInterview, ExitInterviewStatus, ExitReason, KEY_REASON,
};
use contracts::domain::{KEY_DEPARTMENT, KEY_STATUS};
use contracts::shared::record_list::{distinct_values, FilterDimension, RecordAction, RecordStore};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a001_exit_interview";

pub fn dimensions(store: &RecordStore<ExitInterview>) -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<ExitInterviewStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_values(
            KEY_DEPARTMENT,
            "Department",
            distinct_values(store.records(), KEY_DEPARTMENT),
        ),
        FilterDimension::from_enum::<ExitReason>(KEY_REASON, "Reason"),
    ]
}

#[component]
pub fn ExitInterviewList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions(&store);

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Exit Interviews"
            store=store
            dimensions=dimensions
            search_placeholder="Search by name, ID, department or feedback..."
            page_actions=vec![RecordAction::Schedule, RecordAction::Export]
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_options_follow_store_order() {
        let store = seed::store().unwrap();
        let dims = dimensions(&store);
        let departments: Vec<&str> = dims[1].options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            departments,
            vec![
                "All departments",
                "Engineering",
                "Marketing",
                "Finance",
                "Sales",
                "Human Resources",
                "Operations",
            ]
        );
    }
}
