use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
use crate::shared::record_list::{
    average_by, count_category, Cell, Chip, CodeEnum, Column, Displayable, Headline, ListRecord,
    Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_REPORT_TYPE: &str = "report_type";
pub const KEY_PERIOD: &str = "period";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Attendance,
    Leave,
    Overtime,
    Absenteeism,
    Summary,
}

impl CodeEnum for ReportType {
    fn all() -> &'static [Self] {
        &[
            ReportType::Attendance,
            ReportType::Leave,
            ReportType::Overtime,
            ReportType::Absenteeism,
            ReportType::Summary,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ReportType::Attendance => "attendance",
            ReportType::Leave => "leave",
            ReportType::Overtime => "overtime",
            ReportType::Absenteeism => "absenteeism",
            ReportType::Summary => "summary",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ReportType::Attendance => "Attendance",
            ReportType::Leave => "Leave",
            ReportType::Overtime => "Overtime",
            ReportType::Absenteeism => "Absenteeism",
            ReportType::Summary => "Summary",
        }
    }
}

impl Presentable for ReportType {
    fn presentation(&self) -> Presentation {
        match self {
            ReportType::Attendance => Presentation::new(Tone::Brand, "calendar"),
            ReportType::Leave => Presentation::new(Tone::Success, "sun"),
            ReportType::Overtime => Presentation::new(Tone::Warning, "clock"),
            ReportType::Absenteeism => Presentation::new(Tone::Danger, "user-x"),
            ReportType::Summary => Presentation::new(Tone::Informative, "bar-chart"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Generated,
    Processing,
    Scheduled,
    Failed,
}

impl CodeEnum for ReportStatus {
    fn all() -> &'static [Self] {
        &[
            ReportStatus::Generated,
            ReportStatus::Processing,
            ReportStatus::Scheduled,
            ReportStatus::Failed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ReportStatus::Generated => "generated",
            ReportStatus::Processing => "processing",
            ReportStatus::Scheduled => "scheduled",
            ReportStatus::Failed => "failed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ReportStatus::Generated => "Generated",
            ReportStatus::Processing => "Processing",
            ReportStatus::Scheduled => "Scheduled",
            ReportStatus::Failed => "Failed",
        }
    }
}

impl Presentable for ReportStatus {
    fn presentation(&self) -> Presentation {
        match self {
            ReportStatus::Generated => Presentation::new(Tone::Success, "check-circle"),
            ReportStatus::Processing => Presentation::new(Tone::Informative, "loader"),
            ReportStatus::Scheduled => Presentation::new(Tone::Brand, "calendar"),
            ReportStatus::Failed => Presentation::new(Tone::Danger, "x-circle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl CodeEnum for ReportPeriod {
    fn all() -> &'static [Self] {
        &[
            ReportPeriod::Daily,
            ReportPeriod::Weekly,
            ReportPeriod::Monthly,
            ReportPeriod::Quarterly,
            ReportPeriod::Yearly,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Quarterly => "quarterly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "Daily",
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Quarterly => "Quarterly",
            ReportPeriod::Yearly => "Yearly",
        }
    }
}

impl Presentable for ReportPeriod {
    fn presentation(&self) -> Presentation {
        match self {
            ReportPeriod::Daily => Presentation::new(Tone::Informative, "sun"),
            ReportPeriod::Weekly => Presentation::new(Tone::Brand, "calendar"),
            ReportPeriod::Monthly => Presentation::new(Tone::Success, "calendar-range"),
            ReportPeriod::Quarterly => Presentation::new(Tone::Warning, "bar-chart"),
            ReportPeriod::Yearly => Presentation::new(Tone::Subtle, "trending-up"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
            ReportFormat::Csv => "CSV",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub report_type: ReportType,
    pub period: ReportPeriod,
    pub department: String,
    pub generated_by: String,
    pub generated_on: Option<NaiveDate>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub format: ReportFormat,
    pub status: ReportStatus,
    pub record_count: u32,
    /// Percent present over the covered period, when the report measures it
    pub attendance_rate: Option<f64>,
    pub file_size: Option<String>,
}

impl ListRecord for AttendanceReport {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            Some(self.description.as_str()),
            Some(self.department.as_str()),
            Some(self.generated_by.as_str()),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_REPORT_TYPE => Some(self.report_type.code()),
            KEY_PERIOD => Some(self.period.code()),
            KEY_DEPARTMENT => Some(self.department.as_str()),
            _ => None,
        }
    }
}

impl Displayable for AttendanceReport {
    fn headline_title() -> &'static str {
        "Report"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("report_type", "Type"),
            Column::new("period", "Period"),
            Column::new("department", "Department"),
            Column::new("range", "Covers"),
            Column::new("records", "Records"),
            Column::new("attendance_rate", "Attendance"),
            Column::new("format", "Format"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        let subtitle = match self.generated_on {
            Some(date) => format!("{} · {}", self.generated_by, date.format("%Y-%m-%d")),
            None => self.generated_by.clone(),
        };
        Headline::new(&self.title, Some(subtitle))
    }

    fn cells(&self) -> Vec<Cell> {
        let rate = match self.attendance_rate {
            Some(rate) => Cell::Progress(rate.round().clamp(0.0, 100.0) as u8),
            None => Cell::Empty,
        };
        vec![
            Cell::Chip(Chip::of(&self.report_type)),
            Cell::Chip(Chip::of(&self.period)),
            Cell::text(&self.department),
            Cell::Text(format!(
                "{} to {}",
                self.period_start.format("%Y-%m-%d"),
                self.period_end.format("%Y-%m-%d")
            )),
            Cell::Text(self.record_count.to_string()),
            rate,
            match &self.file_size {
                Some(size) => Cell::Text(format!("{} · {}", self.format.label(), size)),
                None => Cell::text(self.format.label()),
            },
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for AttendanceReport {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        let covered: u64 = records.iter().map(|r| u64::from(r.record_count)).sum();
        vec![
            SummaryStat::new(
                "total",
                "Total Reports",
                "file-text",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "generated",
                "Generated",
                "check-circle",
                Tone::Success,
                StatValue::Count(count_category(
                    records,
                    KEY_STATUS,
                    ReportStatus::Generated.code(),
                )),
            ),
            SummaryStat::new(
                "scheduled",
                "Scheduled",
                "calendar",
                Tone::Informative,
                StatValue::Count(count_category(
                    records,
                    KEY_STATUS,
                    ReportStatus::Scheduled.code(),
                )),
            ),
            SummaryStat::new(
                "records_covered",
                "Records Covered",
                "database",
                Tone::Subtle,
                StatValue::Count(covered as usize),
            ),
            SummaryStat::new(
                "avg_attendance",
                "Avg. Attendance",
                "trending-up",
                Tone::Brand,
                StatValue::Percent(average_by(
                    records,
                    |r| r.attendance_rate.is_some(),
                    |r| r.attendance_rate.unwrap_or_default(),
                )),
            ),
        ]
    }
}
