use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a002_final_settlement::{
    seed, FinalSettlement, PaymentMode, SettlementStatus, KEY_PAYMENT_MODE,
};
use contracts::domain::{KEY_DEPARTMENT, KEY_STATUS};
use contracts::shared::record_list::{distinct_values, FilterDimension, RecordAction, RecordStore};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a002_final_settlement";

pub fn dimensions(store: &RecordStore<FinalSettlement>) -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<SettlementStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_values(
            KEY_DEPARTMENT,
            "Department",
            distinct_values(store.records(), KEY_DEPARTMENT),
        ),
        FilterDimension::from_enum::<PaymentMode>(KEY_PAYMENT_MODE, "Payment Mode"),
    ]
}

#[component]
pub fn FinalSettlementList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions(&store);

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Final Settlement"
            store=store
            dimensions=dimensions
            search_placeholder="Search by employee, ID or department..."
            page_actions=vec![RecordAction::Export, RecordAction::Create]
        />
    }
}
