use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a006_branch::{seed, BranchStatus, BranchType, KEY_BRANCH_TYPE};
use contracts::domain::KEY_STATUS;
use contracts::shared::record_list::{FilterDimension, RecordAction};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a006_branch";

const BRANCH_ACTIONS: &[RecordAction] =
    &[RecordAction::View, RecordAction::Edit, RecordAction::Archive];

pub fn dimensions() -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<BranchStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_enum::<BranchType>(KEY_BRANCH_TYPE, "Type"),
    ]
}

#[component]
pub fn BranchList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions();

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Branches"
            store=store
            dimensions=dimensions
            search_placeholder="Search by name, code, city, state or manager..."
            page_actions=vec![RecordAction::Create]
            row_actions=BRANCH_ACTIONS
        />
    }
}
