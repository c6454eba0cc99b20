//! Tab titles for every tab key.

/// Readable title of a tab; unknown keys are shown as-is.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_exit_interview" => "Exit Interviews",
        "a002_final_settlement" => "Final Settlement",
        "a003_tax_record" => "Tax Management",
        "a004_goal" => "Goal Setting",
        "a005_attendance_report" => "Attendance & Leave Reports",
        "a006_branch" => "Branches",
        "a007_leave_type" => "Leave Types",
        "a008_user_account" => "User Management",
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_label_for_key("a006_branch"), "Branches");
        assert_eq!(tab_label_for_key("x_custom"), "x_custom");
    }
}
