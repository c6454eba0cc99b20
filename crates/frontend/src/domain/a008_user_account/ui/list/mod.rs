use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a008_user_account::{seed, UserAccount, UserRole, UserStatus, KEY_ROLE};
use contracts::domain::{KEY_DEPARTMENT, KEY_STATUS};
use contracts::shared::record_list::{distinct_values, FilterDimension, RecordAction, RecordStore};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a008_user_account";

pub fn dimensions(store: &RecordStore<UserAccount>) -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<UserRole>(KEY_ROLE, "Role"),
        FilterDimension::from_enum::<UserStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_values(
            KEY_DEPARTMENT,
            "Department",
            distinct_values(store.records(), KEY_DEPARTMENT),
        ),
    ]
}

#[component]
pub fn UserAccountList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions(&store);

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="User Management"
            store=store
            dimensions=dimensions
            search_placeholder="Search by name, email, username, department or phone..."
            page_actions=vec![RecordAction::Export, RecordAction::Create]
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dimension_key_is_a_record_category() {
        use contracts::shared::record_list::ListRecord;

        let store = seed::store().unwrap();
        let first = &store.records()[0];
        for dim in dimensions(&store) {
            assert!(first.category(&dim.key).is_some(), "unknown key {}", dim.key);
        }
    }
}
