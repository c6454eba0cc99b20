use super::aggregate::{LeaveCategory, LeaveType, LeaveTypeStatus};
use crate::shared::record_list::RecordStore;

pub fn seed() -> Vec<LeaveType> {
    vec![
        LeaveType {
            id: "LT001".into(),
            name: "Casual Leave".into(),
            code: "CL".into(),
            description: "Short personal absences and urgent errands.".into(),
            category: LeaveCategory::Paid,
            status: LeaveTypeStatus::Active,
            annual_quota: 12,
            carry_forward: false,
            max_carry_forward: None,
            encashable: false,
            requires_approval: true,
            min_notice_days: 1,
            applicable_to: "All Employees".into(),
        },
        LeaveType {
            id: "LT002".into(),
            name: "Sick Leave".into(),
            code: "SL".into(),
            description: "Illness or medical appointments. Certificate needed beyond two days."
                .into(),
            category: LeaveCategory::Paid,
            status: LeaveTypeStatus::Active,
            annual_quota: 10,
            carry_forward: true,
            max_carry_forward: Some(30),
            encashable: false,
            requires_approval: false,
            min_notice_days: 0,
            applicable_to: "All Employees".into(),
        },
        LeaveType {
            id: "LT003".into(),
            name: "Earned Leave".into(),
            code: "EL".into(),
            description: "Accrues monthly with service and can be planned in advance.".into(),
            category: LeaveCategory::Paid,
            status: LeaveTypeStatus::Active,
            annual_quota: 18,
            carry_forward: true,
            max_carry_forward: Some(45),
            encashable: true,
            requires_approval: true,
            min_notice_days: 7,
            applicable_to: "Confirmed Employees".into(),
        },
        LeaveType {
            id: "LT004".into(),
            name: "Maternity Leave".into(),
            code: "ML".into(),
            description: "Granted for childbirth under the Maternity Benefit Act.".into(),
            category: LeaveCategory::Statutory,
            status: LeaveTypeStatus::Active,
            annual_quota: 182,
            carry_forward: false,
            max_carry_forward: None,
            encashable: false,
            requires_approval: true,
            min_notice_days: 30,
            applicable_to: "Female Employees".into(),
        },
        LeaveType {
            id: "LT005".into(),
            name: "Paternity Leave".into(),
            code: "PL".into(),
            description: "Time off for new fathers within six months of the birth.".into(),
            category: LeaveCategory::Statutory,
            status: LeaveTypeStatus::Active,
            annual_quota: 15,
            carry_forward: false,
            max_carry_forward: None,
            encashable: false,
            requires_approval: true,
            min_notice_days: 14,
            applicable_to: "Male Employees".into(),
        },
        LeaveType {
            id: "LT006".into(),
            name: "Leave Without Pay".into(),
            code: "LWP".into(),
            description: "Unpaid absence once other balances are exhausted.".into(),
            category: LeaveCategory::Unpaid,
            status: LeaveTypeStatus::Active,
            annual_quota: 30,
            carry_forward: false,
            max_carry_forward: None,
            encashable: false,
            requires_approval: true,
            min_notice_days: 3,
            applicable_to: "All Employees".into(),
        },
        LeaveType {
            id: "LT007".into(),
            name: "Sabbatical".into(),
            code: "SAB".into(),
            description: "Extended break for study or research after five years of service."
                .into(),
            category: LeaveCategory::Special,
            status: LeaveTypeStatus::Inactive,
            annual_quota: 90,
            carry_forward: false,
            max_carry_forward: None,
            encashable: false,
            requires_approval: true,
            min_notice_days: 60,
            applicable_to: "Senior Staff".into(),
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<LeaveType>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KEY_CATEGORY, KEY_STATUS};
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{Average, FilterState, StatValue};

    fn ids(records: Vec<&LeaveType>) -> Vec<String> {
        records.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(7)));
        assert_eq!(stat(&summary, "active"), Some(&StatValue::Count(6)));
        assert_eq!(stat(&summary, "paid"), Some(&StatValue::Count(3)));
        assert_eq!(
            stat(&summary, "avg_quota_active"),
            Some(&StatValue::Average {
                value: Average::Value(44.5),
                decimals: 1
            })
        );
    }

    #[test]
    fn test_filters() {
        let store = store().unwrap();
        let state = FilterState::new().with_category(KEY_CATEGORY, "statutory");
        assert_eq!(ids(store.filter(&state)), vec!["LT004", "LT005"]);

        let state = FilterState::new().with_category(KEY_STATUS, "inactive");
        assert_eq!(ids(store.filter(&state)), vec!["LT007"]);
    }

    #[test]
    fn test_search_code_and_description() {
        let store = store().unwrap();
        let state = FilterState::new().with_search("lwp");
        assert_eq!(ids(store.filter(&state)), vec!["LT006"]);

        let state = FilterState::new().with_search("MATERNITY");
        assert_eq!(ids(store.filter(&state)), vec!["LT004"]);
    }

    #[test]
    fn test_policy_tags() {
        let records = seed();
        assert_eq!(
            records[2].policy_tags(),
            vec!["Carry forward (max 45)", "Encashable", "Approval"]
        );
        assert!(records[1].policy_tags().len() == 1);
    }
}
