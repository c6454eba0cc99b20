use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a003_tax_record::{
    seed, TaxRecord, TaxRegime, TaxStatus, KEY_FINANCIAL_YEAR, KEY_REGIME,
};
use contracts::domain::KEY_STATUS;
use contracts::shared::record_list::{distinct_values, FilterDimension, RecordAction, RecordStore};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a003_tax_record";

pub fn dimensions(store: &RecordStore<TaxRecord>) -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<TaxStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_enum::<TaxRegime>(KEY_REGIME, "Regime"),
        FilterDimension::from_values(
            KEY_FINANCIAL_YEAR,
            "Financial Year",
            distinct_values(store.records(), KEY_FINANCIAL_YEAR),
        ),
    ]
}

#[component]
pub fn TaxRecordList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions(&store);

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Tax Management"
            store=store
            dimensions=dimensions
            search_placeholder="Search by employee, ID, PAN or department..."
            page_actions=vec![RecordAction::Export]
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::record_list::FILTER_ALL;

    #[test]
    fn test_financial_year_options() {
        let store = seed::store().unwrap();
        let dims = dimensions(&store);
        let years: Vec<&str> = dims[2].options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(years, vec![FILTER_ALL, "2023-24", "2024-25", "2022-23"]);
    }
}
