//! HR record types backing the list pages.
//!
//! Each module holds the record, its closed enums and the static seed data.

pub mod a001_exit_interview;
pub mod a002_final_settlement;
pub mod a003_tax_record;
pub mod a004_goal;
pub mod a005_attendance_report;
pub mod a006_branch;
pub mod a007_leave_type;
pub mod a008_user_account;

use chrono::NaiveDate;

// Filter keys shared by several record types
pub const KEY_STATUS: &str = "status";
pub const KEY_DEPARTMENT: &str = "department";
pub const KEY_CATEGORY: &str = "category";

/// Calendar date for seed literals; an impossible date collapses to the epoch.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::{present_code, Presentable, Presentation, RecordAction};
    use std::collections::HashSet;

    fn assert_total_mapping<E: Presentable>() {
        let mut seen = HashSet::new();
        for value in E::all() {
            let p = present_code::<E>(value.code());
            assert!(!p.is_default(), "{} maps to the default pair", value.code());
            assert!(seen.insert(p), "{} shares its pair with another variant", value.code());
        }
        assert_eq!(present_code::<E>("bogus"), Presentation::DEFAULT);
        assert_eq!(present_code::<E>(""), Presentation::DEFAULT);
    }

    #[test]
    fn test_every_enum_variant_has_its_own_presentation() {
        assert_total_mapping::<RecordAction>();
        assert_total_mapping::<a001_exit_interview::ExitInterviewStatus>();
        assert_total_mapping::<a001_exit_interview::ExitReason>();
        assert_total_mapping::<a002_final_settlement::SettlementStatus>();
        assert_total_mapping::<a002_final_settlement::PaymentMode>();
        assert_total_mapping::<a003_tax_record::TaxStatus>();
        assert_total_mapping::<a003_tax_record::TaxRegime>();
        assert_total_mapping::<a004_goal::GoalStatus>();
        assert_total_mapping::<a004_goal::GoalCategory>();
        assert_total_mapping::<a004_goal::GoalPriority>();
        assert_total_mapping::<a005_attendance_report::ReportType>();
        assert_total_mapping::<a005_attendance_report::ReportStatus>();
        assert_total_mapping::<a005_attendance_report::ReportPeriod>();
        assert_total_mapping::<a006_branch::BranchType>();
        assert_total_mapping::<a006_branch::BranchStatus>();
        assert_total_mapping::<a007_leave_type::LeaveCategory>();
        assert_total_mapping::<a007_leave_type::LeaveTypeStatus>();
        assert_total_mapping::<a008_user_account::UserRole>();
        assert_total_mapping::<a008_user_account::UserStatus>();
    }
}
