//! Inline SVG icons in the 24x24 outline style.
//!
//! Each glyph is a list of path outlines; unknown names render the fallback glyph.

use leptos::prelude::*;

const FALLBACK: &[&str] = &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z"];

/// Path outlines of a named glyph
pub fn glyph(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        // navigation and chrome
        "menu" => &["M3 12h18", "M3 6h18", "M3 18h18"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
        "search" => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16z", "M21 21l-4.35-4.35"],
        "grid" => &[
            "M3 3h7v7H3z",
            "M14 3h7v7h-7z",
            "M14 14h7v7h-7z",
            "M3 14h7v7H3z",
        ],
        "table" => &["M3 3h18v18H3z", "M3 9h18", "M3 15h18", "M9 3v18"],
        "refresh" => &["M23 4v6h-6", "M20.49 15a9 9 0 1 1-2.12-9.36L23 10"],
        "settings" => &[
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.73-1.2l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3 15.4H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.2-2.73l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6V4a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.73 1.2l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        // actions
        "plus" => &["M12 5v14", "M5 12h14"],
        "minus" => &["M5 12h14"],
        "eye" => &[
            "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
        ],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
            "M10 11v6",
            "M14 11v6",
            "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
        ],
        "archive" => &["M21 8v13H3V8", "M1 3h22v5H1z", "M10 12h4"],
        "download" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M7 10l5 5 5-5",
            "M12 15V3",
        ],
        "arrow-up" => &["M12 19V5", "M5 12l7-7 7 7"],
        "arrow-down" => &["M12 5v14", "M19 12l-7 7-7-7"],
        "trending-up" => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
        // status
        "check" => &["M20 6 9 17l-5-5"],
        "check-circle" => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
        "x-circle" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M15 9l-6 6",
            "M9 9l6 6",
        ],
        "minus-circle" => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M8 12h8"],
        "pause-circle" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M10 15V9",
            "M14 15V9",
        ],
        "alert-triangle" => &[
            "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
            "M12 9v4",
            "M12 17h.01",
        ],
        "circle" => FALLBACK,
        "circle-dashed" => &[
            "M10.1 2.18a10 10 0 0 1 3.8 0",
            "M17.6 3.72a10 10 0 0 1 2.7 2.7",
            "M21.82 10.1a10 10 0 0 1 0 3.8",
            "M20.28 17.6a10 10 0 0 1-2.7 2.7",
            "M13.9 21.82a10 10 0 0 1-3.8 0",
            "M6.4 20.28a10 10 0 0 1-2.7-2.7",
            "M2.18 13.9a10 10 0 0 1 0-3.8",
            "M3.72 6.4a10 10 0 0 1 2.7-2.7",
        ],
        "clock" => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 6v6l4 2"],
        "loader" => &[
            "M12 2v4",
            "M12 18v4",
            "M4.93 4.93l2.83 2.83",
            "M16.24 16.24l2.83 2.83",
            "M2 12h4",
            "M18 12h4",
        ],
        "slash" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M4.93 4.93l14.14 14.14",
        ],
        "lock" => &["M5 11h14v11H5z", "M7 11V7a5 5 0 0 1 10 0v4"],
        "shield" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        "shield-check" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z", "M9 12l2 2 4-4"],
        // people and places
        "user" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
        ],
        "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "user-x" => &[
            "M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M8.5 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M18 8l5 5",
            "M23 8l-5 5",
        ],
        "briefcase" => &[
            "M2 7h20v14H2z",
            "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
        ],
        "building" => &[
            "M4 2h16v20H4z",
            "M9 22v-4h6v4",
            "M8 6h.01",
            "M16 6h.01",
            "M12 6h.01",
            "M8 10h.01",
            "M16 10h.01",
            "M12 10h.01",
        ],
        "map-pin" => &[
            "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
            "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
        ],
        "mail" => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M22 6l-10 7L2 6"],
        "heart" => &["M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z"],
        // money and documents
        "dollar-sign" => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        "banknote" => &["M2 6h20v12H2z", "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z", "M6 12h.01", "M18 12h.01"],
        "credit-card" => &["M1 4h22v16H1z", "M1 10h22"],
        "shopping-bag" => &["M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z", "M3 6h18", "M16 10a4 4 0 0 1-8 0"],
        "package" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12.01l8.73-5.05",
            "M12 22.08V12",
        ],
        "file-text" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M16 13H8",
            "M16 17H8",
        ],
        "folder" => &["M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"],
        "book-open" => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        "list" => &["M8 6h13", "M8 12h13", "M8 18h13", "M3 6h.01", "M3 12h.01", "M3 18h.01"],
        "database" => &[
            "M12 2c4.97 0 9 1.34 9 3s-4.03 3-9 3-9-1.34-9-3 4.03-3 9-3z",
            "M21 12c0 1.66-4 3-9 3s-9-1.34-9-3",
            "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
        ],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "calendar" => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "calendar-range" => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18", "M7 14h10", "M7 18h6"],
        // goals and misc
        "target" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        "star" => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
        "sparkles" => &["M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z", "M19 3v4", "M21 5h-4"],
        "sun" => &[
            "M12 7a5 5 0 1 0 0 10a5 5 0 1 0 0-10z",
            "M12 1v2",
            "M12 21v2",
            "M4.22 4.22l1.42 1.42",
            "M18.36 18.36l1.42 1.42",
            "M1 12h2",
            "M21 12h2",
        ],
        "tool" => &["M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"],
        _ => return None,
    };
    Some(paths)
}

pub fn icon(name: &str) -> AnyView {
    let paths = glyph(name).unwrap_or(FALLBACK);
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{
        a001_exit_interview, a002_final_settlement, a003_tax_record, a004_goal,
        a005_attendance_report, a006_branch, a007_leave_type, a008_user_account,
    };
    use contracts::shared::record_list::{presentation_table, Presentable, RecordAction, Summarize};

    fn assert_enum_icons<E: Presentable>() {
        for (code, p) in presentation_table::<E>() {
            assert!(glyph(p.icon).is_some(), "no glyph '{}' for '{}'", p.icon, code);
        }
    }

    fn assert_summary_icons<R: Summarize>() {
        for s in R::summary(&[]) {
            assert!(glyph(s.icon).is_some(), "no glyph '{}' for stat '{}'", s.icon, s.key);
        }
    }

    #[test]
    fn test_every_presentation_icon_has_a_glyph() {
        assert_enum_icons::<RecordAction>();
        assert_enum_icons::<a001_exit_interview::ExitInterviewStatus>();
        assert_enum_icons::<a001_exit_interview::ExitReason>();
        assert_enum_icons::<a002_final_settlement::SettlementStatus>();
        assert_enum_icons::<a002_final_settlement::PaymentMode>();
        assert_enum_icons::<a003_tax_record::TaxStatus>();
        assert_enum_icons::<a003_tax_record::TaxRegime>();
        assert_enum_icons::<a004_goal::GoalStatus>();
        assert_enum_icons::<a004_goal::GoalCategory>();
        assert_enum_icons::<a004_goal::GoalPriority>();
        assert_enum_icons::<a005_attendance_report::ReportType>();
        assert_enum_icons::<a005_attendance_report::ReportStatus>();
        assert_enum_icons::<a005_attendance_report::ReportPeriod>();
        assert_enum_icons::<a006_branch::BranchType>();
        assert_enum_icons::<a006_branch::BranchStatus>();
        assert_enum_icons::<a007_leave_type::LeaveCategory>();
        assert_enum_icons::<a007_leave_type::LeaveTypeStatus>();
        assert_enum_icons::<a008_user_account::UserRole>();
        assert_enum_icons::<a008_user_account::UserStatus>();
    }

    #[test]
    fn test_every_summary_icon_has_a_glyph() {
        assert_summary_icons::<a001_exit_interview::ExitInterview>();
        assert_summary_icons::<a002_final_settlement::FinalSettlement>();
        assert_summary_icons::<a003_tax_record::TaxRecord>();
        assert_summary_icons::<a004_goal::Goal>();
        assert_summary_icons::<a005_attendance_report::AttendanceReport>();
        assert_summary_icons::<a006_branch::Branch>();
        assert_summary_icons::<a007_leave_type::LeaveType>();
        assert_summary_icons::<a008_user_account::UserAccount>();
    }

    #[test]
    fn test_unknown_name_has_no_glyph() {
        assert!(glyph("no-such-icon").is_none());
    }
}
