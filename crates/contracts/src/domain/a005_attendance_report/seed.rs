use super::aggregate::{AttendanceReport, ReportFormat, ReportPeriod, ReportStatus, ReportType};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

pub fn seed() -> Vec<AttendanceReport> {
    vec![
        AttendanceReport {
            id: "R001".into(),
            title: "March 2024 Attendance Summary".into(),
            description: "Company-wide presence, late arrivals and early exits.".into(),
            report_type: ReportType::Attendance,
            period: ReportPeriod::Monthly,
            department: "All Departments".into(),
            generated_by: "Priya Menon".into(),
            generated_on: Some(ymd(2024, 4, 1)),
            period_start: ymd(2024, 3, 1),
            period_end: ymd(2024, 3, 31),
            format: ReportFormat::Pdf,
            status: ReportStatus::Generated,
            record_count: 1_240,
            attendance_rate: Some(94.5),
            file_size: Some("2.4 MB".into()),
        },
        AttendanceReport {
            id: "R002".into(),
            title: "Q1 Leave Utilization".into(),
            description: "Leave taken against quota per employee.".into(),
            report_type: ReportType::Leave,
            period: ReportPeriod::Quarterly,
            department: "Engineering".into(),
            generated_by: "Vikram Desai".into(),
            generated_on: Some(ymd(2024, 4, 2)),
            period_start: ymd(2024, 1, 1),
            period_end: ymd(2024, 3, 31),
            format: ReportFormat::Excel,
            status: ReportStatus::Generated,
            record_count: 860,
            attendance_rate: None,
            file_size: Some("1.1 MB".into()),
        },
        AttendanceReport {
            id: "R003".into(),
            title: "Weekly Overtime Report".into(),
            description: "Hours logged beyond the standard shift.".into(),
            report_type: ReportType::Overtime,
            period: ReportPeriod::Weekly,
            department: "Operations".into(),
            generated_by: "System".into(),
            generated_on: None,
            period_start: ymd(2024, 4, 8),
            period_end: ymd(2024, 4, 14),
            format: ReportFormat::Csv,
            status: ReportStatus::Scheduled,
            record_count: 0,
            attendance_rate: None,
            file_size: None,
        },
        AttendanceReport {
            id: "R004".into(),
            title: "Absenteeism Trends 2023".into(),
            description: "Unplanned absences by month and team.".into(),
            report_type: ReportType::Absenteeism,
            period: ReportPeriod::Yearly,
            department: "All Departments".into(),
            generated_by: "Neha Gupta".into(),
            generated_on: Some(ymd(2024, 1, 5)),
            period_start: ymd(2023, 1, 1),
            period_end: ymd(2023, 12, 31),
            format: ReportFormat::Pdf,
            status: ReportStatus::Generated,
            record_count: 14_820,
            attendance_rate: Some(91.25),
            file_size: Some("5.8 MB".into()),
        },
        AttendanceReport {
            id: "R005".into(),
            title: "Daily Attendance - Sales".into(),
            description: "Check-in log for field staff.".into(),
            report_type: ReportType::Attendance,
            period: ReportPeriod::Daily,
            department: "Sales".into(),
            generated_by: "System".into(),
            generated_on: None,
            period_start: ymd(2024, 4, 10),
            period_end: ymd(2024, 4, 10),
            format: ReportFormat::Excel,
            status: ReportStatus::Processing,
            record_count: 120,
            attendance_rate: None,
            file_size: None,
        },
        AttendanceReport {
            id: "R006".into(),
            title: "Monthly Workforce Summary".into(),
            description: "Headcount, joiners and leavers for leadership review.".into(),
            report_type: ReportType::Summary,
            period: ReportPeriod::Monthly,
            department: "Human Resources".into(),
            generated_by: "Priya Menon".into(),
            generated_on: None,
            period_start: ymd(2024, 3, 1),
            period_end: ymd(2024, 3, 31),
            format: ReportFormat::Pdf,
            status: ReportStatus::Failed,
            record_count: 0,
            attendance_rate: None,
            file_size: None,
        },
        AttendanceReport {
            id: "R007".into(),
            title: "Platform Team Attendance".into(),
            description: "Remote and on-site presence for March.".into(),
            report_type: ReportType::Attendance,
            period: ReportPeriod::Monthly,
            department: "Engineering".into(),
            generated_by: "Vikram Desai".into(),
            generated_on: Some(ymd(2024, 4, 1)),
            period_start: ymd(2024, 3, 1),
            period_end: ymd(2024, 3, 31),
            format: ReportFormat::Csv,
            status: ReportStatus::Generated,
            record_count: 410,
            attendance_rate: Some(96.25),
            file_size: Some("320 KB".into()),
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<AttendanceReport>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_attendance_report::aggregate::{KEY_PERIOD, KEY_REPORT_TYPE};
    use crate::domain::KEY_STATUS;
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{Average, FilterState, StatValue, Summarize};

    fn ids(records: Vec<&AttendanceReport>) -> Vec<String> {
        records.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(7)));
        assert_eq!(stat(&summary, "generated"), Some(&StatValue::Count(4)));
        assert_eq!(stat(&summary, "scheduled"), Some(&StatValue::Count(1)));
        assert_eq!(
            stat(&summary, "records_covered"),
            Some(&StatValue::Count(17_450))
        );
        assert_eq!(
            stat(&summary, "avg_attendance"),
            Some(&StatValue::Percent(Average::Value(94.0)))
        );
    }

    #[test]
    fn test_avg_attendance_skips_reports_without_rate() {
        let leave_only: Vec<AttendanceReport> = seed()
            .into_iter()
            .filter(|r| r.attendance_rate.is_none())
            .collect();
        let summary = AttendanceReport::summary(&leave_only);
        assert_eq!(
            stat(&summary, "avg_attendance"),
            Some(&StatValue::Percent(Average::NotApplicable))
        );
    }

    #[test]
    fn test_filters() {
        let store = store().unwrap();
        let state = FilterState::new().with_category(KEY_REPORT_TYPE, "attendance");
        assert_eq!(ids(store.filter(&state)), vec!["R001", "R005", "R007"]);

        let state = FilterState::new()
            .with_category(KEY_PERIOD, "monthly")
            .with_category(KEY_STATUS, "generated");
        assert_eq!(ids(store.filter(&state)), vec!["R001", "R007"]);
    }

    #[test]
    fn test_search_generated_by() {
        let store = store().unwrap();
        let state = FilterState::new().with_search("system");
        assert_eq!(ids(store.filter(&state)), vec!["R003", "R005"]);

        let state = FilterState::new().with_search("Engineering");
        assert_eq!(ids(store.filter(&state)), vec!["R002", "R007"]);
    }
}
