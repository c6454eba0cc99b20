use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
use crate::shared::record_list::{
    average_by, count_category, sum_by, Cell, Chip, CodeEnum, Column, Displayable, Headline,
    ListRecord, Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_REGIME: &str = "regime";
pub const KEY_FINANCIAL_YEAR: &str = "financial_year";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxStatus {
    Filed,
    Pending,
    UnderReview,
    Verified,
}

impl CodeEnum for TaxStatus {
    fn all() -> &'static [Self] {
        &[
            TaxStatus::Filed,
            TaxStatus::Pending,
            TaxStatus::UnderReview,
            TaxStatus::Verified,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            TaxStatus::Filed => "filed",
            TaxStatus::Pending => "pending",
            TaxStatus::UnderReview => "under_review",
            TaxStatus::Verified => "verified",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TaxStatus::Filed => "Filed",
            TaxStatus::Pending => "Pending",
            TaxStatus::UnderReview => "Under Review",
            TaxStatus::Verified => "Verified",
        }
    }
}

impl Presentable for TaxStatus {
    fn presentation(&self) -> Presentation {
        match self {
            TaxStatus::Filed => Presentation::new(Tone::Success, "check-circle"),
            TaxStatus::Pending => Presentation::new(Tone::Warning, "clock"),
            TaxStatus::UnderReview => Presentation::new(Tone::Informative, "search"),
            TaxStatus::Verified => Presentation::new(Tone::Brand, "shield-check"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    Old,
    New,
}

impl CodeEnum for TaxRegime {
    fn all() -> &'static [Self] {
        &[TaxRegime::Old, TaxRegime::New]
    }

    fn code(&self) -> &'static str {
        match self {
            TaxRegime::Old => "old",
            TaxRegime::New => "new",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TaxRegime::Old => "Old Regime",
            TaxRegime::New => "New Regime",
        }
    }
}

impl Presentable for TaxRegime {
    fn presentation(&self) -> Presentation {
        match self {
            TaxRegime::Old => Presentation::new(Tone::Warning, "archive"),
            TaxRegime::New => Presentation::new(Tone::Brand, "sparkles"),
        }
    }
}

/// Investment or exemption declared by the employee (display only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDeclaration {
    pub section: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRecord {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub pan_number: String,
    /// e.g. "2023-24"
    pub financial_year: String,
    pub regime: TaxRegime,
    pub annual_income: f64,
    pub taxable_income: f64,
    pub tax_liability: f64,
    pub tax_deducted: f64,
    pub declarations: Vec<TaxDeclaration>,
    pub status: TaxStatus,
    pub filing_date: Option<NaiveDate>,
}

impl TaxRecord {
    /// Positive when more tax is still due, negative for a refund
    pub fn balance(&self) -> f64 {
        self.tax_liability - self.tax_deducted
    }

    pub fn declared_total(&self) -> f64 {
        self.declarations.iter().map(|d| d.amount).sum()
    }
}

impl ListRecord for TaxRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.employee_name.as_str()),
            Some(self.employee_id.as_str()),
            Some(self.pan_number.as_str()),
            Some(self.department.as_str()),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_DEPARTMENT => Some(self.department.as_str()),
            KEY_REGIME => Some(self.regime.code()),
            KEY_FINANCIAL_YEAR => Some(self.financial_year.as_str()),
            _ => None,
        }
    }
}

impl Displayable for TaxRecord {
    fn headline_title() -> &'static str {
        "Employee"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("financial_year", "FY"),
            Column::new("regime", "Regime"),
            Column::new("taxable_income", "Taxable Income"),
            Column::new("tax_liability", "Tax Liability"),
            Column::new("tax_deducted", "TDS"),
            Column::new("declarations", "Declarations"),
            Column::new("filing_date", "Filed On"),
            Column::new("status", "Status"),
        ]
    }

    fn headline(&self) -> Headline {
        Headline::new(
            &self.employee_name,
            Some(format!("{} · PAN {}", self.employee_id, self.pan_number)),
        )
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.financial_year),
            Cell::Chip(Chip::of(&self.regime)),
            Cell::Money(self.taxable_income),
            Cell::Money(self.tax_liability),
            Cell::Money(self.tax_deducted),
            Cell::Tags(self.declarations.iter().map(|d| d.section.clone()).collect()),
            Cell::opt_date(self.filing_date),
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for TaxRecord {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new(
                "total",
                "Tax Records",
                "file-text",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "filed",
                "Filed",
                "check-circle",
                Tone::Success,
                StatValue::Count(count_category(records, KEY_STATUS, TaxStatus::Filed.code())),
            ),
            SummaryStat::new(
                "pending",
                "Pending",
                "clock",
                Tone::Warning,
                StatValue::Count(count_category(
                    records,
                    KEY_STATUS,
                    TaxStatus::Pending.code(),
                )),
            ),
            SummaryStat::new(
                "total_tds",
                "Total TDS",
                "dollar-sign",
                Tone::Informative,
                StatValue::Amount(sum_by(records, |r| r.tax_deducted)),
            ),
            SummaryStat::new(
                "avg_tds_filed",
                "Avg. TDS (Filed)",
                "trending-up",
                Tone::Brand,
                StatValue::Average {
                    value: average_by(
                        records,
                        |r| r.status == TaxStatus::Filed,
                        |r| r.tax_deducted,
                    ),
                    decimals: 0,
                },
            ),
        ]
    }
}
