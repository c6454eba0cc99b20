use super::aggregate::{TaxDeclaration, TaxRecord, TaxRegime, TaxStatus};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

fn declaration(section: &str, description: &str, amount: f64) -> TaxDeclaration {
    TaxDeclaration {
        section: section.to_string(),
        description: description.to_string(),
        amount,
    }
}

pub fn seed() -> Vec<TaxRecord> {
    vec![
        TaxRecord {
            id: "TX001".into(),
            employee_name: "Rahul Sharma".into(),
            employee_id: "EMP1023".into(),
            department: "Engineering".into(),
            pan_number: "ABCPS1234K".into(),
            financial_year: "2023-24".into(),
            regime: TaxRegime::New,
            annual_income: 2_400_000.0,
            taxable_income: 2_325_000.0,
            tax_liability: 442_500.0,
            tax_deducted: 442_500.0,
            declarations: vec![],
            status: TaxStatus::Filed,
            filing_date: Some(ymd(2024, 7, 15)),
        },
        TaxRecord {
            id: "TX002".into(),
            employee_name: "Sneha Kapoor".into(),
            employee_id: "EMP1311".into(),
            department: "Finance".into(),
            pan_number: "BQRPK5678L".into(),
            financial_year: "2023-24".into(),
            regime: TaxRegime::Old,
            annual_income: 1_200_000.0,
            taxable_income: 950_000.0,
            tax_liability: 105_000.0,
            tax_deducted: 98_000.0,
            declarations: vec![
                declaration("80C", "PPF and ELSS", 150_000.0),
                declaration("80D", "Health insurance", 25_000.0),
                declaration("HRA", "House rent allowance", 75_000.0),
            ],
            status: TaxStatus::Verified,
            filing_date: Some(ymd(2024, 7, 2)),
        },
        TaxRecord {
            id: "TX003".into(),
            employee_name: "Ananya Iyer".into(),
            employee_id: "EMP1187".into(),
            department: "Marketing".into(),
            pan_number: "CKLPI9012M".into(),
            financial_year: "2023-24".into(),
            regime: TaxRegime::New,
            annual_income: 1_850_000.0,
            taxable_income: 1_800_000.0,
            tax_liability: 240_000.0,
            tax_deducted: 240_000.0,
            declarations: vec![],
            status: TaxStatus::Pending,
            filing_date: None,
        },
        TaxRecord {
            id: "TX004".into(),
            employee_name: "Arjun Mehta".into(),
            employee_id: "EMP0954".into(),
            department: "Engineering".into(),
            pan_number: "DMNPM3456N".into(),
            financial_year: "2023-24".into(),
            regime: TaxRegime::Old,
            annual_income: 1_560_000.0,
            taxable_income: 1_285_000.0,
            tax_liability: 198_000.0,
            tax_deducted: 185_000.0,
            declarations: vec![
                declaration("80C", "Life insurance premium", 150_000.0),
                declaration("80CCD(1B)", "NPS contribution", 50_000.0),
                declaration("24(b)", "Home loan interest", 75_000.0),
            ],
            status: TaxStatus::UnderReview,
            filing_date: None,
        },
        TaxRecord {
            id: "TX005".into(),
            employee_name: "Priya Menon".into(),
            employee_id: "EMP0412".into(),
            department: "Human Resources".into(),
            pan_number: "EFGPM7890P".into(),
            financial_year: "2024-25".into(),
            regime: TaxRegime::New,
            annual_income: 1_400_000.0,
            taxable_income: 1_325_000.0,
            tax_liability: 110_000.0,
            tax_deducted: 55_000.0,
            declarations: vec![],
            status: TaxStatus::Pending,
            filing_date: None,
        },
        TaxRecord {
            id: "TX006".into(),
            employee_name: "Vikram Desai".into(),
            employee_id: "EMP0207".into(),
            department: "Human Resources".into(),
            pan_number: "FGHPD2345Q".into(),
            financial_year: "2022-23".into(),
            regime: TaxRegime::Old,
            annual_income: 2_100_000.0,
            taxable_income: 1_860_000.0,
            tax_liability: 370_800.0,
            tax_deducted: 370_800.0,
            declarations: vec![
                declaration("80C", "EPF and tuition fees", 150_000.0),
                declaration("80D", "Medical insurance (parents)", 50_000.0),
            ],
            status: TaxStatus::Filed,
            filing_date: Some(ymd(2023, 7, 20)),
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<TaxRecord>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_tax_record::aggregate::{KEY_FINANCIAL_YEAR, KEY_REGIME};
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{distinct_values, Average, FilterState, StatValue};

    fn ids(records: Vec<&TaxRecord>) -> Vec<String> {
        records.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "filed"), Some(&StatValue::Count(2)));
        assert_eq!(stat(&summary, "pending"), Some(&StatValue::Count(2)));
        assert_eq!(
            stat(&summary, "total_tds"),
            Some(&StatValue::Amount(1_391_300.0))
        );
        assert_eq!(
            stat(&summary, "avg_tds_filed"),
            Some(&StatValue::Average {
                value: Average::Value(406_650.0),
                decimals: 0
            })
        );
    }

    #[test]
    fn test_financial_year_and_regime() {
        let store = store().unwrap();
        assert_eq!(
            distinct_values(store.records(), KEY_FINANCIAL_YEAR),
            vec!["2023-24", "2024-25", "2022-23"]
        );

        let state = FilterState::new().with_category(KEY_FINANCIAL_YEAR, "2023-24");
        assert_eq!(ids(store.filter(&state)), vec!["TX001", "TX002", "TX003", "TX004"]);

        let state = state.with_category(KEY_REGIME, "old");
        assert_eq!(ids(store.filter(&state)), vec!["TX002", "TX004"]);
    }

    #[test]
    fn test_search_by_pan() {
        let store = store().unwrap();
        let state = FilterState::new().with_search("dmnpm3456n");
        assert_eq!(ids(store.filter(&state)), vec!["TX004"]);
    }

    #[test]
    fn test_balance_and_declarations() {
        let records = seed();
        assert_eq!(records[1].balance(), 7_000.0);
        assert_eq!(records[1].declared_total(), 250_000.0);
        assert_eq!(records[0].declared_total(), 0.0);
    }
}
