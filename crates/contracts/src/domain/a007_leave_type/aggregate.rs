use crate::domain::{KEY_CATEGORY, KEY_STATUS};
use crate::shared::record_list::{
    average_by, count_category, Cell, Chip, CodeEnum, Column, Displayable, Headline, ListRecord,
    Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    Paid,
    Unpaid,
    Statutory,
    Special,
}

impl CodeEnum for LeaveCategory {
    fn all() -> &'static [Self] {
        &[
            LeaveCategory::Paid,
            LeaveCategory::Unpaid,
            LeaveCategory::Statutory,
            LeaveCategory::Special,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            LeaveCategory::Paid => "paid",
            LeaveCategory::Unpaid => "unpaid",
            LeaveCategory::Statutory => "statutory",
            LeaveCategory::Special => "special",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            LeaveCategory::Paid => "Paid",
            LeaveCategory::Unpaid => "Unpaid",
            LeaveCategory::Statutory => "Statutory",
            LeaveCategory::Special => "Special",
        }
    }
}

impl Presentable for LeaveCategory {
    fn presentation(&self) -> Presentation {
        match self {
            LeaveCategory::Paid => Presentation::new(Tone::Success, "dollar-sign"),
            LeaveCategory::Unpaid => Presentation::new(Tone::Subtle, "slash"),
            LeaveCategory::Statutory => Presentation::new(Tone::Brand, "shield"),
            LeaveCategory::Special => Presentation::new(Tone::Informative, "star"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveTypeStatus {
    Active,
    Inactive,
}

impl CodeEnum for LeaveTypeStatus {
    fn all() -> &'static [Self] {
        &[LeaveTypeStatus::Active, LeaveTypeStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            LeaveTypeStatus::Active => "active",
            LeaveTypeStatus::Inactive => "inactive",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            LeaveTypeStatus::Active => "Active",
            LeaveTypeStatus::Inactive => "Inactive",
        }
    }
}

impl Presentable for LeaveTypeStatus {
    fn presentation(&self) -> Presentation {
        match self {
            LeaveTypeStatus::Active => Presentation::new(Tone::Success, "check-circle"),
            LeaveTypeStatus::Inactive => Presentation::new(Tone::Subtle, "minus-circle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub category: LeaveCategory,
    pub status: LeaveTypeStatus,
    /// Days granted per calendar year
    pub annual_quota: u16,
    pub carry_forward: bool,
    pub max_carry_forward: Option<u16>,
    pub encashable: bool,
    pub requires_approval: bool,
    pub min_notice_days: u8,
    pub applicable_to: String,
}

impl LeaveType {
    /// Short policy flags shown as tags
    pub fn policy_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if self.carry_forward {
            match self.max_carry_forward {
                Some(max) => tags.push(format!("Carry forward (max {})", max)),
                None => tags.push("Carry forward".to_string()),
            }
        }
        if self.encashable {
            tags.push("Encashable".to_string());
        }
        if self.requires_approval {
            tags.push("Approval".to_string());
        }
        tags
    }
}

impl ListRecord for LeaveType {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            Some(self.code.as_str()),
            Some(self.description.as_str()),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_CATEGORY => Some(self.category.code()),
            _ => None,
        }
    }
}

impl Displayable for LeaveType {
    fn headline_title() -> &'static str {
        "Leave Type"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("code", "Code"),
            Column::new("category", "Category"),
            Column::new("annual_quota", "Days / Year"),
            Column::new("notice", "Notice"),
            Column::new("applicable_to", "Applicable To"),
            Column::new("policy", "Policy"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(&self.name, Some(self.description.clone()))
    }

    fn cells(&self) -> Vec<Cell> {
        let notice = if self.min_notice_days == 0 {
            Cell::Empty
        } else {
            Cell::Text(format!("{} days", self.min_notice_days))
        };
        vec![
            Cell::text(&self.code),
            Cell::Chip(Chip::of(&self.category)),
            Cell::Text(self.annual_quota.to_string()),
            notice,
            Cell::text(&self.applicable_to),
            Cell::Tags(self.policy_tags()),
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for LeaveType {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new(
                "total",
                "Leave Types",
                "list",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "active",
                "Active",
                "check-circle",
                Tone::Success,
                StatValue::Count(count_category(
                    records,
                    KEY_STATUS,
                    LeaveTypeStatus::Active.code(),
                )),
            ),
            SummaryStat::new(
                "paid",
                "Paid",
                "dollar-sign",
                Tone::Informative,
                StatValue::Count(count_category(
                    records,
                    KEY_CATEGORY,
                    LeaveCategory::Paid.code(),
                )),
            ),
            SummaryStat::new(
                "avg_quota_active",
                "Avg. Quota (Active)",
                "calendar",
                Tone::Brand,
                StatValue::Average {
                    value: average_by(
                        records,
                        |r| r.status == LeaveTypeStatus::Active,
                        |r| f64::from(r.annual_quota),
                    ),
                    decimals: 1,
                },
            ),
        ]
    }
}
