use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
use crate::shared::record_list::{
    average_by, count_category, Cell, Chip, CodeEnum, Column, Displayable, Headline, ListRecord,
    Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_REASON: &str = "reason";

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitInterviewStatus {
    Scheduled,
    Completed,
    Pending,
    Cancelled,
}

impl CodeEnum for ExitInterviewStatus {
    fn all() -> &'static [Self] {
        &[
            ExitInterviewStatus::Scheduled,
            ExitInterviewStatus::Completed,
            ExitInterviewStatus::Pending,
            ExitInterviewStatus::Cancelled,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ExitInterviewStatus::Scheduled => "scheduled",
            ExitInterviewStatus::Completed => "completed",
            ExitInterviewStatus::Pending => "pending",
            ExitInterviewStatus::Cancelled => "cancelled",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ExitInterviewStatus::Scheduled => "Scheduled",
            ExitInterviewStatus::Completed => "Completed",
            ExitInterviewStatus::Pending => "Pending",
            ExitInterviewStatus::Cancelled => "Cancelled",
        }
    }
}

impl Presentable for ExitInterviewStatus {
    fn presentation(&self) -> Presentation {
        match self {
            ExitInterviewStatus::Scheduled => Presentation::new(Tone::Informative, "calendar"),
            ExitInterviewStatus::Completed => Presentation::new(Tone::Success, "check-circle"),
            ExitInterviewStatus::Pending => Presentation::new(Tone::Warning, "clock"),
            ExitInterviewStatus::Cancelled => Presentation::new(Tone::Danger, "x-circle"),
        }
    }
}

/// Primary reason given for leaving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    BetterOpportunity,
    Compensation,
    CareerGrowth,
    Relocation,
    WorkEnvironment,
    Personal,
}

impl CodeEnum for ExitReason {
    fn all() -> &'static [Self] {
        &[
            ExitReason::BetterOpportunity,
            ExitReason::Compensation,
            ExitReason::CareerGrowth,
            ExitReason::Relocation,
            ExitReason::WorkEnvironment,
            ExitReason::Personal,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ExitReason::BetterOpportunity => "better_opportunity",
            ExitReason::Compensation => "compensation",
            ExitReason::CareerGrowth => "career_growth",
            ExitReason::Relocation => "relocation",
            ExitReason::WorkEnvironment => "work_environment",
            ExitReason::Personal => "personal",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ExitReason::BetterOpportunity => "Better Opportunity",
            ExitReason::Compensation => "Compensation",
            ExitReason::CareerGrowth => "Career Growth",
            ExitReason::Relocation => "Relocation",
            ExitReason::WorkEnvironment => "Work Environment",
            ExitReason::Personal => "Personal",
        }
    }
}

impl Presentable for ExitReason {
    fn presentation(&self) -> Presentation {
        match self {
            ExitReason::BetterOpportunity => Presentation::new(Tone::Brand, "trending-up"),
            ExitReason::Compensation => Presentation::new(Tone::Warning, "dollar-sign"),
            ExitReason::CareerGrowth => Presentation::new(Tone::Informative, "target"),
            ExitReason::Relocation => Presentation::new(Tone::Informative, "map-pin"),
            ExitReason::WorkEnvironment => Presentation::new(Tone::Danger, "alert-triangle"),
            ExitReason::Personal => Presentation::new(Tone::Brand, "user"),
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Interviewer conducting the exit interview (display only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interviewer {
    pub name: String,
    pub designation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitInterview {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub reason: ExitReason,
    pub status: ExitInterviewStatus,
    pub last_working_day: NaiveDate,
    pub interview_date: Option<NaiveDate>,
    pub interviewer: Interviewer,
    /// Overall experience rating 1..=5, given once the interview is held
    pub rating: Option<u8>,
    pub would_recommend: Option<bool>,
    pub feedback: Option<String>,
}

impl ListRecord for ExitInterview {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.employee_name.as_str()),
            Some(self.employee_id.as_str()),
            Some(self.department.as_str()),
            Some(self.designation.as_str()),
            self.feedback.as_deref(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_DEPARTMENT => Some(self.department.as_str()),
            KEY_REASON => Some(self.reason.code()),
            _ => None,
        }
    }
}

impl Displayable for ExitInterview {
    fn headline_title() -> &'static str {
        "Employee"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("department", "Department"),
            Column::new("reason", "Reason"),
            Column::new("last_working_day", "Last Working Day"),
            Column::new("interview_date", "Interview Date"),
            Column::new("interviewer", "Interviewer"),
            Column::new("rating", "Rating"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(
            &self.employee_name,
            Some(format!("{} · {}", self.employee_id, self.designation)),
        )
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.department),
            Cell::Chip(Chip::of(&self.reason)),
            Cell::Date(self.last_working_day),
            Cell::opt_date(self.interview_date),
            Cell::Text(format!(
                "{} ({})",
                self.interviewer.name, self.interviewer.designation
            )),
            self.rating
                .map(|r| Cell::Text(format!("{r}/5")))
                .unwrap_or(Cell::Empty),
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for ExitInterview {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        let status_count = |s: ExitInterviewStatus| count_category(records, KEY_STATUS, s.code());

        vec![
            SummaryStat::new(
                "total",
                "Total Interviews",
                "users",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "completed",
                "Completed",
                "check-circle",
                Tone::Success,
                StatValue::Count(status_count(ExitInterviewStatus::Completed)),
            ),
            SummaryStat::new(
                "scheduled",
                "Scheduled",
                "calendar",
                Tone::Informative,
                StatValue::Count(status_count(ExitInterviewStatus::Scheduled)),
            ),
            SummaryStat::new(
                "pending",
                "Pending",
                "clock",
                Tone::Warning,
                StatValue::Count(status_count(ExitInterviewStatus::Pending)),
            ),
            SummaryStat::new(
                "avg_rating",
                "Avg. Rating",
                "star",
                Tone::Brand,
                StatValue::Average {
                    value: average_by(
                        records,
                        |r| r.status == ExitInterviewStatus::Completed && r.rating.is_some(),
                        |r| f64::from(r.rating.unwrap_or_default()),
                    ),
                    decimals: 1,
                },
            ),
        ]
    }
}
