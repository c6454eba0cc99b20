use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
use crate::shared::record_list::{
    average_by, count_category, sum_by, Cell, Chip, CodeEnum, Column, Displayable, Headline,
    ListRecord, Presentable, Presentation, StatValue, Summarize, SummaryStat, Tone,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_PAYMENT_MODE: &str = "payment_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    Pending,
    Processing,
    Approved,
    Paid,
    OnHold,
}

impl CodeEnum for SettlementStatus {
    fn all() -> &'static [Self] {
        &[
            SettlementStatus::Pending,
            SettlementStatus::Processing,
            SettlementStatus::Approved,
            SettlementStatus::Paid,
            SettlementStatus::OnHold,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            SettlementStatus::Pending => "pending",
            SettlementStatus::Processing => "processing",
            SettlementStatus::Approved => "approved",
            SettlementStatus::Paid => "paid",
            SettlementStatus::OnHold => "on_hold",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SettlementStatus::Pending => "Pending",
            SettlementStatus::Processing => "Processing",
            SettlementStatus::Approved => "Approved",
            SettlementStatus::Paid => "Paid",
            SettlementStatus::OnHold => "On Hold",
        }
    }
}

impl Presentable for SettlementStatus {
    fn presentation(&self) -> Presentation {
        match self {
            SettlementStatus::Pending => Presentation::new(Tone::Warning, "clock"),
            SettlementStatus::Processing => Presentation::new(Tone::Informative, "loader"),
            SettlementStatus::Approved => Presentation::new(Tone::Brand, "check"),
            SettlementStatus::Paid => Presentation::new(Tone::Success, "check-circle"),
            SettlementStatus::OnHold => Presentation::new(Tone::Danger, "pause-circle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    BankTransfer,
    Cheque,
    Cash,
}

impl CodeEnum for PaymentMode {
    fn all() -> &'static [Self] {
        &[PaymentMode::BankTransfer, PaymentMode::Cheque, PaymentMode::Cash]
    }

    fn code(&self) -> &'static str {
        match self {
            PaymentMode::BankTransfer => "bank_transfer",
            PaymentMode::Cheque => "cheque",
            PaymentMode::Cash => "cash",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentMode::BankTransfer => "Bank Transfer",
            PaymentMode::Cheque => "Cheque",
            PaymentMode::Cash => "Cash",
        }
    }
}

impl Presentable for PaymentMode {
    fn presentation(&self) -> Presentation {
        match self {
            PaymentMode::BankTransfer => Presentation::new(Tone::Brand, "credit-card"),
            PaymentMode::Cheque => Presentation::new(Tone::Informative, "file-text"),
            PaymentMode::Cash => Presentation::new(Tone::Warning, "banknote"),
        }
    }
}

/// Earnings and recoveries making up the settlement amount (display only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementBreakdown {
    pub salary_due: f64,
    pub leave_encashment: f64,
    pub gratuity: f64,
    pub bonus: f64,
    pub notice_recovery: f64,
    pub other_deductions: f64,
}

impl SettlementBreakdown {
    pub fn earnings(&self) -> f64 {
        self.salary_due + self.leave_encashment + self.gratuity + self.bonus
    }

    pub fn deductions(&self) -> f64 {
        self.notice_recovery + self.other_deductions
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalSettlement {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub resignation_date: NaiveDate,
    pub last_working_day: NaiveDate,
    pub settlement_date: Option<NaiveDate>,
    pub status: SettlementStatus,
    pub payment_mode: PaymentMode,
    pub breakdown: SettlementBreakdown,
    pub processed_by: Option<String>,
    pub remarks: Option<String>,
}

impl FinalSettlement {
    pub fn net_amount(&self) -> f64 {
        self.breakdown.earnings() - self.breakdown.deductions()
    }
}

impl ListRecord for FinalSettlement {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.employee_name.as_str()),
            Some(self.employee_id.as_str()),
            Some(self.department.as_str()),
            Some(self.designation.as_str()),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            KEY_STATUS => Some(self.status.code()),
            KEY_DEPARTMENT => Some(self.department.as_str()),
            KEY_PAYMENT_MODE => Some(self.payment_mode.code()),
            _ => None,
        }
    }
}

impl Displayable for FinalSettlement {
    fn headline_title() -> &'static str {
        "Employee"
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("department", "Department"),
            Column::new("last_working_day", "Last Working Day"),
            Column::new("earnings", "Earnings"),
            Column::new("deductions", "Deductions"),
            Column::new("net_amount", "Net Payable"),
            Column::new("payment_mode", "Payment Mode"),
            Column::new("settlement_date", "Settled On"),
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
            Cell::Date(self.last_working_day),
            Cell::Money(self.breakdown.earnings()),
            Cell::Money(self.breakdown.deductions()),
            Cell::Money(self.net_amount()),
            Cell::Chip(Chip::of(&self.payment_mode)),
            Cell::opt_date(self.settlement_date),
            Cell::Chip(Chip::of(&self.status)),
        ]
    }
}

impl Summarize for FinalSettlement {
    fn summary(records: &[Self]) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new(
                "total",
                "Total Settlements",
                "file-text",
                Tone::Brand,
                StatValue::Count(records.len()),
            ),
            SummaryStat::new(
                "pending",
                "Pending",
                "clock",
                Tone::Warning,
                StatValue::Count(count_category(
                    records,
                    KEY_STATUS,
                    SettlementStatus::Pending.code(),
                )),
            ),
            SummaryStat::new(
                "paid",
                "Paid",
                "check-circle",
                Tone::Success,
                StatValue::Count(count_category(
                    records,
                    KEY_STATUS,
                    SettlementStatus::Paid.code(),
                )),
            ),
            SummaryStat::new(
                "total_payout",
                "Total Payout",
                "dollar-sign",
                Tone::Informative,
                StatValue::Amount(sum_by(records, FinalSettlement::net_amount)),
            ),
            SummaryStat::new(
                "avg_paid",
                "Avg. Paid Amount",
                "trending-up",
                Tone::Brand,
                StatValue::Average {
                    value: average_by(
                        records,
                        |r| r.status == SettlementStatus::Paid,
                        FinalSettlement::net_amount,
                    ),
                    decimals: 0,
                },
            ),
        ]
    }
}
