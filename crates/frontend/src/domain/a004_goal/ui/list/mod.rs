use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a004_goal::{seed, GoalCategory, GoalPriority, GoalStatus, KEY_PRIORITY};
use contracts::domain::{KEY_CATEGORY, KEY_STATUS};
use contracts::shared::record_list::{FilterDimension, RecordAction};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a004_goal";

pub fn dimensions() -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<GoalStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_enum::<GoalCategory>(KEY_CATEGORY, "Category"),
        FilterDimension::from_enum::<GoalPriority>(KEY_PRIORITY, "Priority"),
    ]
}

#[component]
pub fn GoalList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions();

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Goal Setting"
            store=store
            dimensions=dimensions
            search_placeholder="Search goals, owners or departments..."
            page_actions=vec![RecordAction::Create]
        />
    }
}
