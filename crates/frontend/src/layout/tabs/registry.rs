//! Tab content registry: maps a tab key to its page.

use crate::domain::a001_exit_interview::ui::list::ExitInterviewList;
use crate::domain::a002_final_settlement::ui::list::FinalSettlementList;
use crate::domain::a003_tax_record::ui::list::TaxRecordList;
use crate::domain::a004_goal::ui::list::GoalList;
use crate::domain::a005_attendance_report::ui::list::AttendanceReportList;
use crate::domain::a006_branch::ui::list::BranchList;
use crate::domain::a007_leave_type::ui::list::LeaveTypeList;
use crate::domain::a008_user_account::ui::list::UserAccountList;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PLACEHOLDER;
use leptos::logging::log;
use leptos::prelude::*;

/// Every key with a registered page, in sidebar order
pub const TAB_KEYS: &[&str] = &[
    "a001_exit_interview",
    "a002_final_settlement",
    "a003_tax_record",
    "a004_goal",
    "a005_attendance_report",
    "a006_branch",
    "a007_leave_type",
    "a008_user_account",
];

pub fn is_registered(key: &str) -> bool {
    TAB_KEYS.contains(&key)
}

/// Page of a tab, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // HR operations
        "a001_exit_interview" => view! { <ExitInterviewList /> }.into_any(),
        "a002_final_settlement" => view! { <FinalSettlementList /> }.into_any(),
        "a003_tax_record" => view! { <TaxRecordList /> }.into_any(),
        "a004_goal" => view! { <GoalList /> }.into_any(),

        // Reports
        "a005_attendance_report" => view! { <AttendanceReportList /> }.into_any(),

        // Settings
        "a006_branch" => view! { <BranchList /> }.into_any(),
        "a007_leave_type" => view! { <LeaveTypeList /> }.into_any(),
        "a008_user_account" => view! { <UserAccountList /> }.into_any(),

        _ => {
            log!("Unknown tab key: '{}'", key);
            let key = key.to_string();
            view! {
                <PageFrame page_id="unknown--placeholder" category=PAGE_CAT_PLACEHOLDER>
                    <div class="placeholder">
                        <h2>"Page not found"</h2>
                        <p>{format!("Nothing is registered for '{}'.", key)}</p>
                    </div>
                </PageFrame>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::tab_label_for_key;

    #[test]
    fn test_every_registered_key_has_a_label() {
        for key in TAB_KEYS {
            assert_ne!(tab_label_for_key(key), *key, "missing label for {}", key);
        }
    }

    #[test]
    fn test_is_registered() {
        assert!(is_registered("a004_goal"));
        assert!(!is_registered("a099_payroll"));
    }
}
