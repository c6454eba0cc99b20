use super::aggregate::{UserAccount, UserRole, UserStatus};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

fn permissions(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

pub fn seed() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "U001".into(),
            full_name: "Vikram Desai".into(),
            username: "vikram.desai".into(),
            email: "vikram.desai@company.in".into(),
            phone: Some("+91 98200 11111".into()),
            department: "Human Resources".into(),
            designation: "HR Manager".into(),
            role: UserRole::HrManager,
            status: UserStatus::Active,
            two_factor_enabled: true,
            last_login: Some(ymd(2024, 4, 10)),
            created_on: ymd(2019, 6, 3),
            permissions: permissions(&["employees", "payroll", "reports"]),
        },
        UserAccount {
            id: "U002".into(),
            full_name: "Anita Rao".into(),
            username: "anita.rao".into(),
            email: "anita.rao@company.in".into(),
            phone: None,
            department: "IT".into(),
            designation: "Systems Administrator".into(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            two_factor_enabled: true,
            last_login: Some(ymd(2024, 4, 11)),
            created_on: ymd(2018, 2, 12),
            permissions: permissions(&["all"]),
        },
        UserAccount {
            id: "U003".into(),
            full_name: "Rahul Sharma".into(),
            username: "rahul.sharma".into(),
            email: "rahul.sharma@company.in".into(),
            phone: Some("+91 99870 22222".into()),
            department: "Engineering".into(),
            designation: "Engineering Manager".into(),
            role: UserRole::Manager,
            status: UserStatus::Active,
            two_factor_enabled: false,
            last_login: Some(ymd(2024, 4, 9)),
            created_on: ymd(2020, 8, 17),
            permissions: permissions(&["team", "approvals"]),
        },
        UserAccount {
            id: "U004".into(),
            full_name: "Priya Menon".into(),
            username: "priya.menon".into(),
            email: "priya.menon@company.in".into(),
            phone: Some("+91 98450 33333".into()),
            department: "Human Resources".into(),
            designation: "HR Business Partner".into(),
            role: UserRole::Employee,
            status: UserStatus::Active,
            two_factor_enabled: true,
            last_login: Some(ymd(2024, 4, 8)),
            created_on: ymd(2021, 1, 4),
            permissions: permissions(&["employees", "reports"]),
        },
        UserAccount {
            id: "U005".into(),
            full_name: "Karan Malhotra".into(),
            username: "karan.m".into(),
            email: "karan.malhotra@company.in".into(),
            phone: Some("+91 97300 44444".into()),
            department: "Sales".into(),
            designation: "Regional Sales Executive".into(),
            role: UserRole::Employee,
            status: UserStatus::Suspended,
            two_factor_enabled: false,
            last_login: Some(ymd(2024, 3, 29)),
            created_on: ymd(2022, 5, 23),
            permissions: permissions(&["self_service"]),
        },
        UserAccount {
            id: "U006".into(),
            full_name: "Sameer Khan".into(),
            username: "sameer.khan".into(),
            email: "sameer.khan@company.in".into(),
            phone: None,
            department: "IT".into(),
            designation: "Security Engineer".into(),
            role: UserRole::Admin,
            status: UserStatus::PendingInvite,
            two_factor_enabled: false,
            last_login: None,
            created_on: ymd(2024, 4, 5),
            permissions: vec![],
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<UserAccount>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_user_account::aggregate::KEY_ROLE;
    use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{Average, FilterState, StatValue};

    fn ids(records: Vec<&UserAccount>) -> Vec<String> {
        records.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(6)));
        assert_eq!(stat(&summary, "active"), Some(&StatValue::Count(4)));
        assert_eq!(stat(&summary, "admins"), Some(&StatValue::Count(2)));
        assert_eq!(
            stat(&summary, "two_factor"),
            Some(&StatValue::Percent(Average::Value(50.0)))
        );
    }

    #[test]
    fn test_two_factor_share_of_empty_list() {
        let summary = <UserAccount as crate::shared::record_list::Summarize>::summary(&[]);
        assert_eq!(
            stat(&summary, "two_factor"),
            Some(&StatValue::Percent(Average::NotApplicable))
        );
    }

    #[test]
    fn test_filters() {
        let store = store().unwrap();
        let state = FilterState::new().with_category(KEY_ROLE, "admin");
        assert_eq!(ids(store.filter(&state)), vec!["U002", "U006"]);

        let state = FilterState::new()
            .with_category(KEY_DEPARTMENT, "Human Resources")
            .with_category(KEY_STATUS, "active");
        assert_eq!(ids(store.filter(&state)), vec!["U001", "U004"]);
    }

    #[test]
    fn test_search_optional_phone() {
        let store = store().unwrap();
        let state = FilterState::new().with_search("98200");
        assert_eq!(ids(store.filter(&state)), vec!["U001"]);

        let state = FilterState::new().with_search("company.in");
        assert_eq!(store.filter(&state).len(), 6);
    }
}
