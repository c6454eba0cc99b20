use crate::shared::record_list::{store_or_empty, RecordListPage};
use contracts::domain::a005_attendance_report::{
    seed, ReportPeriod, ReportStatus, ReportType, KEY_PERIOD, KEY_REPORT_TYPE,
};
use contracts::domain::KEY_STATUS;
use contracts::shared::record_list::{FilterDimension, RecordAction};
use leptos::prelude::*;

pub const PAGE_KEY: &str = "a005_attendance_report";

/// Generated files are downloaded rather than edited
const REPORT_ACTIONS: &[RecordAction] =
    &[RecordAction::View, RecordAction::Export, RecordAction::Delete];

pub fn dimensions() -> Vec<FilterDimension> {
    vec![
        FilterDimension::from_enum::<ReportType>(KEY_REPORT_TYPE, "Report Type"),
        FilterDimension::from_enum::<ReportStatus>(KEY_STATUS, "Status"),
        FilterDimension::from_enum::<ReportPeriod>(KEY_PERIOD, "Period"),
    ]
}

#[component]
pub fn AttendanceReportList() -> impl IntoView {
    let store = store_or_empty(PAGE_KEY, seed::store());
    let dimensions = dimensions();

    view! {
        <RecordListPage
            page_key=PAGE_KEY
            title="Attendance & Leave Reports"
            store=store
            dimensions=dimensions
            search_placeholder="Search reports..."
            page_actions=vec![
                RecordAction::Schedule,
                RecordAction::Export,
                RecordAction::Create,
            ]
            row_actions=REPORT_ACTIONS
        />
    }
}
