use crate::domain::KEY_STATUS;
use crate::shared::record_list::{
    average_by, count_category, Cell, Chip, CodeEnum, Column, Displayable, Headline, ListRecord,
    Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_BRANCH_TYPE: &str = "branch_type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchType {
    HeadOffice,
    Regional,
    Sales,
    Warehouse,
}

impl CodeEnum for BranchType {
    fn all() -> &'static [Self] {
        &[
            BranchType::HeadOffice,
            BranchType::Regional,
            BranchType::Sales,
            BranchType::Warehouse,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            BranchType::HeadOffice => "head_office",
            BranchType::Regional => "regional",
            BranchType::Sales => "sales",
            BranchType::Warehouse => "warehouse",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BranchType::HeadOffice => "Head Office",
            BranchType::Regional => "Regional",
            BranchType::Sales => "Sales",
            BranchType::Warehouse => "Warehouse",
        }
    }
}

impl Presentable for BranchType {
    fn presentation(&self) -> Presentation {
        match self {
            BranchType::HeadOffice => Presentation::new(Tone::Brand, "building"),
            BranchType::Regional => Presentation::new(Tone::Informative, "map-pin"),
            BranchType::Sales => Presentation::new(Tone::Success, "shopping-bag"),
            BranchType::Warehouse => Presentation::new(Tone::Warning, "package"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchStatus {
    Active,
    Inactive,
    UnderSetup,
}

impl CodeEnum for BranchStatus {
    fn all() -> &'static [Self] {
        &[
            BranchStatus::Active,
            BranchStatus::Inactive,
            BranchStatus::UnderSetup,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            BranchStatus::Active => "active",
            BranchStatus::Inactive => "inactive",
            BranchStatus::UnderSetup => "under_setup",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BranchStatus::Active => "Active",
            BranchStatus::Inactive => "Inactive",
            BranchStatus::UnderSetup => "Under Setup",
        }
    }
}

impl Presentable for BranchStatus {
    fn presentation(&self) -> Presentation {
        match self {
            BranchStatus::Active => Presentation::new(Tone::Success, "check-circle"),
            BranchStatus::Inactive => Presentation::new(Tone::Subtle, "minus-circle"),
            BranchStatus::UnderSetup => Presentation::new(Tone::Warning, "tool"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub code: String,
    pub branch_type: BranchType,
    pub status: BranchStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub email: String,
    pub manager: Option<String>,
    pub employee_count: u32,
    pub opened_on: NaiveDate,
}

impl ListRecord for Branch {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            Some(self.code.as_str()),
            Some(self.city.as_str()),
            Some(self.state.as_str()),
            self.manager.as_deref(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_BRANCH_TYPE => Some(self.branch_type.code()),
            _ => None,
        }
    }
}

impl Displayable for Branch {
    fn headline_title() -> &'static str {
        "Branch"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("branch_type", "Type"),
            Column::new("location", "Location"),
            Column::new("manager", "Manager"),
            Column::new("employees", "Employees"),
            Column::new("contact", "Contact"),
            Column::new("opened_on", "Opened"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(&self.name, Some(self.code.clone()))
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Chip(Chip::of(&self.branch_type)),
            Cell::Text(format!("{}, {}", self.city, self.state)),
            Cell::opt_text(self.manager.as_deref()),
            Cell::Text(self.employee_count.to_string()),
            Cell::text(&self.email),
            Cell::Date(self.opened_on),
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for Branch {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        let employees: u64 = records.iter().map(|r| u64::from(r.employee_count)).sum();
        vec![
            SummaryStat::new(
                "total",
                "Total Branches",
                "building",
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
                    BranchStatus::Active.code(),
                )),
            ),
            SummaryStat::new(
                "employees",
                "Employees",
                "users",
                Tone::Informative,
                StatValue::Count(employees as usize),
            ),
            SummaryStat::new(
                "avg_employees_active",
                "Avg. Staff per Active Branch",
                "trending-up",
                Tone::Brand,
                StatValue::Average {
                    value: average_by(
                        records,
                        |r| r.status == BranchStatus::Active,
                        |r| f64::from(r.employee_count),
                    ),
                    decimals: 0,
                },
            ),
        ]
    }
}
