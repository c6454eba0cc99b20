use super::aggregate::{FinalSettlement, PaymentMode, SettlementBreakdown, SettlementStatus};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

fn breakdown(
    salary_due: f64,
    leave_encashment: f64,
    gratuity: f64,
    bonus: f64,
    notice_recovery: f64,
    other_deductions: f64,
) -> SettlementBreakdown {
    SettlementBreakdown {
        salary_due,
        leave_encashment,
        gratuity,
        bonus,
        notice_recovery,
        other_deductions,
    }
}

pub fn seed() -> Vec<FinalSettlement> {
    vec![
        FinalSettlement {
            id: "FS001".into(),
            employee_name: "Rahul Sharma".into(),
            employee_id: "EMP1023".into(),
            department: "Engineering".into(),
            designation: "Senior Software Engineer".into(),
            resignation_date: ymd(2024, 2, 14),
            last_working_day: ymd(2024, 3, 15),
            settlement_date: Some(ymd(2024, 4, 10)),
            status: SettlementStatus::Paid,
            payment_mode: PaymentMode::BankTransfer,
            breakdown: breakdown(85_000.0, 42_000.0, 180_000.0, 25_000.0, 0.0, 7_000.0),
            processed_by: Some("Vikram Desai".into()),
            remarks: None,
        },
        FinalSettlement {
            id: "FS002".into(),
            employee_name: "Sneha Kapoor".into(),
            employee_id: "EMP1311".into(),
            department: "Finance".into(),
            designation: "Financial Analyst".into(),
            resignation_date: ymd(2024, 1, 29),
            last_working_day: ymd(2024, 2, 28),
            settlement_date: Some(ymd(2024, 3, 20)),
            status: SettlementStatus::Paid,
            payment_mode: PaymentMode::Cheque,
            breakdown: breakdown(62_000.0, 18_000.0, 0.0, 10_000.0, 15_000.0, 5_000.0),
            processed_by: Some("Vikram Desai".into()),
            remarks: Some("Notice period shortfall recovered".into()),
        },
        FinalSettlement {
            id: "FS003".into(),
            employee_name: "Ananya Iyer".into(),
            employee_id: "EMP1187".into(),
            department: "Marketing".into(),
            designation: "Marketing Manager".into(),
            resignation_date: ymd(2024, 3, 6),
            last_working_day: ymd(2024, 4, 5),
            settlement_date: None,
            status: SettlementStatus::Processing,
            payment_mode: PaymentMode::BankTransfer,
            breakdown: breakdown(95_000.0, 30_000.0, 210_000.0, 0.0, 0.0, 12_000.0),
            processed_by: Some("Neha Gupta".into()),
            remarks: None,
        },
        FinalSettlement {
            id: "FS004".into(),
            employee_name: "Arjun Mehta".into(),
            employee_id: "EMP0954".into(),
            department: "Engineering".into(),
            designation: "QA Lead".into(),
            resignation_date: ymd(2024, 3, 21),
            last_working_day: ymd(2024, 4, 20),
            settlement_date: None,
            status: SettlementStatus::Pending,
            payment_mode: PaymentMode::BankTransfer,
            breakdown: breakdown(78_000.0, 26_000.0, 150_000.0, 20_000.0, 0.0, 4_000.0),
            processed_by: None,
            remarks: None,
        },
        FinalSettlement {
            id: "FS005".into(),
            employee_name: "Karan Malhotra".into(),
            employee_id: "EMP0876".into(),
            department: "Sales".into(),
            designation: "Regional Sales Executive".into(),
            resignation_date: ymd(2024, 3, 1),
            last_working_day: ymd(2024, 3, 31),
            settlement_date: None,
            status: SettlementStatus::OnHold,
            payment_mode: PaymentMode::Cash,
            breakdown: breakdown(48_000.0, 9_000.0, 0.0, 5_000.0, 24_000.0, 3_000.0),
            processed_by: None,
            remarks: Some("Pending asset return (laptop)".into()),
        },
        FinalSettlement {
            id: "FS006".into(),
            employee_name: "Meera Joshi".into(),
            employee_id: "EMP0731".into(),
            department: "Human Resources".into(),
            designation: "HR Generalist".into(),
            resignation_date: ymd(2024, 2, 20),
            last_working_day: ymd(2024, 3, 20),
            settlement_date: Some(ymd(2024, 4, 2)),
            status: SettlementStatus::Approved,
            payment_mode: PaymentMode::BankTransfer,
            breakdown: breakdown(55_000.0, 21_000.0, 95_000.0, 0.0, 0.0, 1_000.0),
            processed_by: Some("Neha Gupta".into()),
            remarks: None,
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<FinalSettlement>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_final_settlement::aggregate::KEY_PAYMENT_MODE;
    use crate::domain::KEY_STATUS;
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{Average, FilterState, StatValue};

    fn ids(records: Vec<&FinalSettlement>) -> Vec<String> {
        records.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_net_amount() {
        let records = seed();
        assert_eq!(records[0].net_amount(), 325_000.0);
        assert_eq!(records[4].net_amount(), 35_000.0);
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(6)));
        assert_eq!(stat(&summary, "pending"), Some(&StatValue::Count(1)));
        assert_eq!(stat(&summary, "paid"), Some(&StatValue::Count(2)));
        assert_eq!(
            stat(&summary, "total_payout"),
            Some(&StatValue::Amount(1_193_000.0))
        );
        assert_eq!(
            stat(&summary, "avg_paid"),
            Some(&StatValue::Average {
                value: Average::Value(197_500.0),
                decimals: 0
            })
        );
    }

    #[test]
    fn test_filters() {
        let store = store().unwrap();
        let state = FilterState::new()
            .with_category(KEY_PAYMENT_MODE, "bank_transfer")
            .with_category(KEY_STATUS, "paid");
        assert_eq!(ids(store.filter(&state)), vec!["FS001"]);

        let state = FilterState::new().with_search("engineer");
        assert_eq!(ids(store.filter(&state)), vec!["FS001", "FS004"]);
    }
}
