use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
use crate::shared::record_list::{
    count_category, share_where, Cell, Chip, CodeEnum, Column, Displayable, Headline, ListRecord,
    Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_ROLE: &str = "role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    HrManager,
    Manager,
    Employee,
}

impl CodeEnum for UserRole {
    fn all() -> &'static [Self] {
        &[
            UserRole::Admin,
            UserRole::HrManager,
            UserRole::Manager,
            UserRole::Employee,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::HrManager => "hr_manager",
            UserRole::Manager => "manager",
            UserRole::Employee => "employee",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::HrManager => "HR Manager",
            UserRole::Manager => "Manager",
            UserRole::Employee => "Employee",
        }
    }
}

impl Presentable for UserRole {
    fn presentation(&self) -> Presentation {
        match self {
            UserRole::Admin => Presentation::new(Tone::Danger, "shield"),
            UserRole::HrManager => Presentation::new(Tone::Brand, "briefcase"),
            UserRole::Manager => Presentation::new(Tone::Informative, "users"),
            UserRole::Employee => Presentation::new(Tone::Subtle, "user"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    PendingInvite,
}

impl CodeEnum for UserStatus {
    fn all() -> &'static [Self] {
        &[
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Suspended,
            UserStatus::PendingInvite,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
            UserStatus::PendingInvite => "pending_invite",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
            UserStatus::PendingInvite => "Pending Invite",
        }
    }
}

impl Presentable for UserStatus {
    fn presentation(&self) -> Presentation {
        match self {
            UserStatus::Active => Presentation::new(Tone::Success, "check-circle"),
            UserStatus::Inactive => Presentation::new(Tone::Subtle, "minus-circle"),
            UserStatus::Suspended => Presentation::new(Tone::Danger, "lock"),
            UserStatus::PendingInvite => Presentation::new(Tone::Warning, "mail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub designation: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub two_factor_enabled: bool,
    pub last_login: Option<NaiveDate>,
    pub created_on: NaiveDate,
    pub permissions: Vec<String>,
}

impl ListRecord for UserAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.full_name.as_str()),
            Some(self.email.as_str()),
            Some(self.username.as_str()),
            Some(self.department.as_str()),
            self.phone.as_deref(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_ROLE => Some(self.role.code()),
            KEY_DEPARTMENT => Some(self.department.as_str()),
            _ => None,
        }
    }
}

impl Displayable for UserAccount {
    fn headline_title() -> &'static str {
        "User"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("email", "Email"),
            Column::new("phone", "Phone"),
            Column::new("department", "Department"),
            Column::new("role", "Role"),
            Column::new("two_factor", "2FA"),
            Column::new("last_login", "Last Login"),
            Column::new("permissions", "Permissions"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(
            &self.full_name,
            Some(format!("@{} · {}", self.username, self.designation)),
        )
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.email),
            Cell::opt_text(self.phone.as_deref()),
            Cell::text(&self.department),
            Cell::Chip(Chip::of(&self.role)),
            Cell::Flag(self.two_factor_enabled),
            Cell::opt_date(self.last_login),
            Cell::Tags(self.permissions.clone()),
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for UserAccount {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new(
                "total",
                "Total Users",
                "users",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "active",
                "Active",
                "check-circle",
                Tone::Success,
                StatValue::Count(count_category(records, KEY_STATUS, UserStatus::Active.code())),
            ),
            SummaryStat::new(
                "admins",
                "Admins",
                "shield",
                Tone::Danger,
                StatValue::Count(count_category(records, KEY_ROLE, UserRole::Admin.code())),
            ),
            SummaryStat::new(
                "two_factor",
                "2FA Enabled",
                "lock",
                Tone::Informative,
                StatValue::Percent(share_where(records, |r| r.two_factor_enabled)),
            ),
        ]
    }
}
