use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a007_leave_type::{seed, LeaveCategory, LeaveTypeStatus};
use contracts::domain::{KEY_CATEGORY, KEY_STATUS};
use contracts::shared::record_list::{FilterDimension, RecordAction};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a007_leave_type";

pub fn dimensions() -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<LeaveCategory>(KEY_CATEGORY, "Category"),
        FilterDimension::from_enum::<LeaveTypeStatus>(KEY_STATUS, "Status"),
    ]
}

#[component]
pub fn LeaveTypeList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions();

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Leave Types"
            store=store
            dimensions=dimensions
            search_placeholder="Search by name, code or description..."
            page_actions=vec![RecordAction::Create]
        />
    }
}
