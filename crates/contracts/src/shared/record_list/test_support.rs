//! Small record type shared by the record_list unit tests.

use super::aggregate::{average_by, count_category, StatValue, Summarize, SummaryStat};
use super::code_enum::CodeEnum;
use super::presentation::{Presentable, Presentation, Tone};
use super::store::ListRecord;
use super::view::{Cell, Chip, Column, Displayable, Headline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Open,
    InProgress,
    Done,
}

impl CodeEnum for Stage {
    fn all() -> &'static [Self] {
        &[Stage::Open, Stage::InProgress, Stage::Done]
    }

    fn code(&self) -> &'static str {
        match self {
            Stage::Open => "open",
            Stage::InProgress => "in_progress",
            Stage::Done => "done",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Stage::Open => "Open",
            Stage::InProgress => "In Progress",
            Stage::Done => "Done",
        }
    }
}

impl Presentable for Stage {
    fn presentation(&self) -> Presentation {
        match self {
            Stage::Open => Presentation::new(Tone::Informative, "clock"),
            Stage::InProgress => Presentation::new(Tone::Warning, "loader"),
            Stage::Done => Presentation::new(Tone::Success, "check-circle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub department: String,
    pub stage: Stage,
    pub note: Option<String>,
    pub hours: f64,
}

impl Task {
    pub fn new(id: &str, title: &str, department: &str, stage: Stage) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            department: department.to_string(),
            stage,
            note: None,
            hours: 1.0,
        }
    }

    fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }
}

impl ListRecord for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            Some(self.department.as_str()),
            self.note.as_deref(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "stage" => Some(self.stage.code()),
            "department" => Some(self.department.as_str()),
            _ => None,
        }
    }
}

impl Displayable for Task {
    fn headline_title() -> &'static str {
        "Task"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("department", "Department"),
            Column::new("stage", "Stage"),
            Column::new("hours", "Hours"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(&self.title, self.note.clone())
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.department),
            Cell::Chip(Chip::of(&self.stage)),
            Cell::Text(format!("{:.1}", self.hours)),
        ]
    }
}

impl Summarize for Task {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new("total", "Total", "list", Tone::Brand, StatValue::Count(records.len())),
            SummaryStat::new(
                "completed",
                "Completed",
                "check-circle",
                Tone::Success,
                StatValue::Count(count_category(records, "stage", "done")),
            ),
            SummaryStat::new(
                "avg_hours_done",
                "Avg hours (done)",
                "clock",
                Tone::Informative,
                StatValue::Average {
                    value: average_by(records, |t| t.stage == Stage::Done, |t| t.hours),
                    decimals: 1,
                },
            ),
        ]
    }
}

/// Five tasks: two done, one of those in Engineering.
pub fn sample() -> Vec<Task> {
    vec![
        Task::new("T1", "Onboarding checklist", "Engineering", Stage::Done)
            .with_note("Rahul Sharma to review")
            .with_hours(4.0),
        Task::new("T2", "Laptop provisioning", "IT", Stage::Open).with_hours(2.0),
        Task::new("T3", "Payroll audit", "Finance", Stage::Done)
            .with_note("quarterly")
            .with_hours(6.0),
        Task::new("T4", "Code review training", "Engineering", Stage::InProgress).with_hours(3.0),
        Task::new("T5", "Exit formalities", "HR", Stage::Open).with_note("Priya"),
    ]
}
