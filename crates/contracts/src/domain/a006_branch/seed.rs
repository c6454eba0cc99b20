use super::aggregate::{Branch, BranchStatus, BranchType};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

pub fn seed() -> Vec<Branch> {
    vec![
        Branch {
            id: "B001".into(),
            name: "Mumbai Head Office".into(),
            code: "MUM-HO".into(),
            branch_type: BranchType::HeadOffice,
            status: BranchStatus::Active,
            address: "Nariman Point, Tower B, 12th Floor".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            phone: "+91 22 4000 1000".into(),
            email: "mumbai.ho@company.in".into(),
            manager: Some("Vikram Desai".into()),
            employee_count: 420,
            opened_on: ymd(2012, 4, 1),
        },
        Branch {
            id: "B002".into(),
            name: "Bengaluru Tech Hub".into(),
            code: "BLR-01".into(),
            branch_type: BranchType::Regional,
            status: BranchStatus::Active,
            address: "Outer Ring Road, Bellandur".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            phone: "+91 80 4100 2000".into(),
            email: "blr.hub@company.in".into(),
            manager: Some("Rahul Sharma".into()),
            employee_count: 310,
            opened_on: ymd(2016, 7, 15),
        },
        Branch {
            id: "B003".into(),
            name: "Delhi Sales Office".into(),
            code: "DEL-S1".into(),
            branch_type: BranchType::Sales,
            status: BranchStatus::Active,
            address: "Connaught Place, Block E".into(),
            city: "New Delhi".into(),
            state: "Delhi".into(),
            phone: "+91 11 4200 3000".into(),
            email: "delhi.sales@company.in".into(),
            manager: Some("Karan Malhotra".into()),
            employee_count: 85,
            opened_on: ymd(2018, 1, 10),
        },
        Branch {
            id: "B004".into(),
            name: "Pune Warehouse".into(),
            code: "PUN-W1".into(),
            branch_type: BranchType::Warehouse,
            status: BranchStatus::Inactive,
            address: "Chakan MIDC, Plot 44".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            phone: "+91 20 4300 4000".into(),
            email: "pune.wh@company.in".into(),
            manager: None,
            employee_count: 12,
            opened_on: ymd(2019, 11, 1),
        },
        Branch {
            id: "B005".into(),
            name: "Chennai Regional Office".into(),
            code: "CHN-01".into(),
            branch_type: BranchType::Regional,
            status: BranchStatus::UnderSetup,
            address: "OMR, Sholinganallur".into(),
            city: "Chennai".into(),
            state: "Tamil Nadu".into(),
            phone: "+91 44 4400 5000".into(),
            email: "chennai@company.in".into(),
            manager: Some("Lakshmi Narayanan".into()),
            employee_count: 0,
            opened_on: ymd(2024, 6, 1),
        },
        Branch {
            id: "B006".into(),
            name: "Hyderabad Sales Office".into(),
            code: "HYD-S1".into(),
            branch_type: BranchType::Sales,
            status: BranchStatus::Active,
            address: "HITEC City, Cyber Towers".into(),
            city: "Hyderabad".into(),
            state: "Telangana".into(),
            phone: "+91 40 4500 6000".into(),
            email: "hyd.sales@company.in".into(),
            manager: None,
            employee_count: 45,
            opened_on: ymd(2021, 3, 22),
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<Branch>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_branch::aggregate::KEY_BRANCH_TYPE;
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{Average, FilterState, StatValue};

    fn ids(records: Vec<&Branch>) -> Vec<String> {
        records.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(6)));
        assert_eq!(stat(&summary, "active"), Some(&StatValue::Count(4)));
        assert_eq!(stat(&summary, "employees"), Some(&StatValue::Count(872)));
        assert_eq!(
            stat(&summary, "avg_employees_active"),
            Some(&StatValue::Average {
                value: Average::Value(215.0),
                decimals: 0
            })
        );
    }

    #[test]
    fn test_search_location_and_manager() {
        let store = store().unwrap();
        let state = FilterState::new().with_search("maharashtra");
        assert_eq!(ids(store.filter(&state)), vec!["B001", "B004"]);

        // Branches without a manager are skipped, not failed
        let state = FilterState::new().with_search("lakshmi");
        assert_eq!(ids(store.filter(&state)), vec!["B005"]);

        let state = FilterState::new().with_search("hyd-s1");
        assert_eq!(ids(store.filter(&state)), vec!["B006"]);
    }

    #[test]
    fn test_type_filter() {
        let store = store().unwrap();
        let state = FilterState::new().with_category(KEY_BRANCH_TYPE, "sales");
        assert_eq!(ids(store.filter(&state)), vec!["B003", "B006"]);
    }
}
