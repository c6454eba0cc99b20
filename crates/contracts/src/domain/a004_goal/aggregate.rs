use crate::domain::{KEY_CATEGORY, KEY_DEPARTMENT, KEY_STATUS};
use crate::shared::record_list::{
    average_by, count_category, Cell, Chip, CodeEnum, Column, Displayable, Headline, ListRecord,
    Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_PRIORITY: &str = "priority";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
    Overdue,
}

impl CodeEnum for GoalStatus {
    fn all() -> &'static [Self] {
        &[
            GoalStatus::NotStarted,
            GoalStatus::InProgress,
            GoalStatus::Completed,
            GoalStatus::OnHold,
            GoalStatus::Overdue,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
            GoalStatus::OnHold => "on_hold",
            GoalStatus::Overdue => "overdue",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "Not Started",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Completed => "Completed",
            GoalStatus::OnHold => "On Hold",
            GoalStatus::Overdue => "Overdue",
        }
    }
}

impl Presentable for GoalStatus {
    fn presentation(&self) -> Presentation {
        match self {
            GoalStatus::NotStarted => Presentation::new(Tone::Subtle, "circle-dashed"),
            GoalStatus::InProgress => Presentation::new(Tone::Informative, "loader"),
            GoalStatus::Completed => Presentation::new(Tone::Success, "check-circle"),
            GoalStatus::OnHold => Presentation::new(Tone::Warning, "pause-circle"),
            GoalStatus::Overdue => Presentation::new(Tone::Danger, "alert-triangle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Performance,
    Development,
    Project,
    Behavioral,
    Team,
}

impl CodeEnum for GoalCategory {
    fn all() -> &'static [Self] {
        &[
            GoalCategory::Performance,
            GoalCategory::Development,
            GoalCategory::Project,
            GoalCategory::Behavioral,
            GoalCategory::Team,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            GoalCategory::Performance => "performance",
            GoalCategory::Development => "development",
            GoalCategory::Project => "project",
            GoalCategory::Behavioral => "behavioral",
            GoalCategory::Team => "team",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GoalCategory::Performance => "Performance",
            GoalCategory::Development => "Development",
            GoalCategory::Project => "Project",
            GoalCategory::Behavioral => "Behavioral",
            GoalCategory::Team => "Team",
        }
    }
}

impl Presentable for GoalCategory {
    fn presentation(&self) -> Presentation {
        match self {
            GoalCategory::Performance => Presentation::new(Tone::Brand, "trending-up"),
            GoalCategory::Development => Presentation::new(Tone::Success, "book-open"),
            GoalCategory::Project => Presentation::new(Tone::Informative, "folder"),
            GoalCategory::Behavioral => Presentation::new(Tone::Warning, "heart"),
            GoalCategory::Team => Presentation::new(Tone::Subtle, "users"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl CodeEnum for GoalPriority {
    fn all() -> &'static [Self] {
        &[GoalPriority::High, GoalPriority::Medium, GoalPriority::Low]
    }

    fn code(&self) -> &'static str {
        match self {
            GoalPriority::High => "high",
            GoalPriority::Medium => "medium",
            GoalPriority::Low => "low",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GoalPriority::High => "High",
            GoalPriority::Medium => "Medium",
            GoalPriority::Low => "Low",
        }
    }
}

impl Presentable for GoalPriority {
    fn presentation(&self) -> Presentation {
        match self {
            GoalPriority::High => Presentation::new(Tone::Danger, "arrow-up"),
            GoalPriority::Medium => Presentation::new(Tone::Warning, "minus"),
            GoalPriority::Low => Presentation::new(Tone::Success, "arrow-down"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalOwner {
    pub name: String,
    pub employee_id: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner: GoalOwner,
    pub manager: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub status: GoalStatus,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// 0..=100
    pub progress: u8,
    pub milestones: Vec<Milestone>,
}

impl Goal {
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }
}

impl ListRecord for Goal {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            Some(self.description.as_str()),
            Some(self.owner.name.as_str()),
            Some(self.owner.department.as_str()),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_CATEGORY => Some(self.category.code()),
            KEY_PRIORITY => Some(self.priority.code()),
            KEY_DEPARTMENT => Some(self.owner.department.as_str()),
            _ => None,
        }
    }
}

impl Displayable for Goal {
    fn headline_title() -> &'static str {
        "Goal"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("employee", "Employee"),
            Column::new("category", "Category"),
            Column::new("priority", "Priority"),
            Column::new("due_date", "Due Date"),
            Column::new("progress", "Progress"),
            Column::new("milestones", "Milestones"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(&self.title, Some(self.description.clone()))
    }

    fn cells(&self) -> Vec<Cell> {
        let milestones = if self.milestones.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(format!(
                "{}/{}",
                self.completed_milestones(),
                self.milestones.len()
            ))
        };
        vec![
            Cell::Text(format!("{} · {}", self.owner.name, self.owner.department)),
            Cell::Chip(Chip::of(&self.category)),
            Cell::Chip(Chip::of(&self.priority)),
            Cell::Date(self.due_date),
            Cell::Progress(self.progress.min(100)),
            milestones,
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for Goal {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        let by_status = |status: GoalStatus| count_category(records, KEY_STATUS, status.code());
        vec![
            SummaryStat::new(
                "total",
                "Total Goals",
                "target",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "completed",
                "Completed",
                "check-circle",
                Tone::Success,
                StatValue::Count(by_status(GoalStatus::Completed)),
            ),
            SummaryStat::new(
                "in_progress",
                "In Progress",
                "loader",
                Tone::Informative,
                StatValue::Count(by_status(GoalStatus::InProgress)),
            ),
            SummaryStat::new(
                "overdue",
                "Overdue",
                "alert-triangle",
                Tone::Danger,
                StatValue::Count(by_status(GoalStatus::Overdue)),
            ),
            SummaryStat::new(
                "avg_progress",
                "Avg. Progress",
                "trending-up",
                Tone::Brand,
                StatValue::Percent(average_by(records, |_| true, |r| f64::from(r.progress))),
            ),
        ]
    }
}
