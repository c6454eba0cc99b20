use super::aggregate::{ExitInterview, ExitInterviewStatus, ExitReason, Interviewer};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

fn interviewer(name: &str, designation: &str) -> Interviewer {
    Interviewer {
        name: name.to_string(),
        designation: designation.to_string(),
    }
}

pub fn seed() -> Vec<ExitInterview> {
    vec![
        ExitInterview {
            id: "EI001".into(),
            employee_name: "Rahul Sharma".into(),
            employee_id: "EMP1023".into(),
            department: "Engineering".into(),
            designation: "Senior Software Engineer".into(),
            reason: ExitReason::BetterOpportunity,
            status: ExitInterviewStatus::Completed,
            last_working_day: ymd(2024, 3, 15),
            interview_date: Some(ymd(2024, 3, 12)),
            interviewer: interviewer("Priya Menon", "HR Business Partner"),
            rating: Some(4),
            would_recommend: Some(true),
            feedback: Some("Great team culture, but limited growth in the current role.".into()),
        },
        ExitInterview {
            id: "EI002".into(),
            employee_name: "Ananya Iyer".into(),
            employee_id: "EMP1187".into(),
            department: "Marketing".into(),
            designation: "Marketing Manager".into(),
            reason: ExitReason::Relocation,
            status: ExitInterviewStatus::Scheduled,
            last_working_day: ymd(2024, 4, 5),
            interview_date: Some(ymd(2024, 4, 1)),
            interviewer: interviewer("Vikram Desai", "HR Manager"),
            rating: None,
            would_recommend: None,
            feedback: None,
        },
        ExitInterview {
            id: "EI003".into(),
            employee_name: "Arjun Mehta".into(),
            employee_id: "EMP0954".into(),
            department: "Engineering".into(),
            designation: "QA Lead".into(),
            reason: ExitReason::Compensation,
            status: ExitInterviewStatus::Pending,
            last_working_day: ymd(2024, 4, 20),
            interview_date: None,
            interviewer: interviewer("Priya Menon", "HR Business Partner"),
            rating: None,
            would_recommend: None,
            feedback: None,
        },
        ExitInterview {
            id: "EI004".into(),
            employee_name: "Sneha Kapoor".into(),
            employee_id: "EMP1311".into(),
            department: "Finance".into(),
            designation: "Financial Analyst".into(),
            reason: ExitReason::CareerGrowth,
            status: ExitInterviewStatus::Completed,
            last_working_day: ymd(2024, 2, 28),
            interview_date: Some(ymd(2024, 2, 26)),
            interviewer: interviewer("Vikram Desai", "HR Manager"),
            rating: Some(3),
            would_recommend: Some(false),
            feedback: Some("Wanted exposure to strategic planning work.".into()),
        },
        ExitInterview {
            id: "EI005".into(),
            employee_name: "Karan Malhotra".into(),
            employee_id: "EMP0876".into(),
            department: "Sales".into(),
            designation: "Regional Sales Executive".into(),
            reason: ExitReason::WorkEnvironment,
            status: ExitInterviewStatus::Cancelled,
            last_working_day: ymd(2024, 3, 31),
            interview_date: None,
            interviewer: interviewer("Neha Gupta", "HR Executive"),
            rating: None,
            would_recommend: None,
            feedback: Some("Employee declined the interview.".into()),
        },
        ExitInterview {
            id: "EI006".into(),
            employee_name: "Divya Nair".into(),
            employee_id: "EMP1402".into(),
            department: "Human Resources".into(),
            designation: "Talent Acquisition Specialist".into(),
            reason: ExitReason::Personal,
            status: ExitInterviewStatus::Scheduled,
            last_working_day: ymd(2024, 4, 12),
            interview_date: Some(ymd(2024, 4, 10)),
            interviewer: interviewer("Vikram Desai", "HR Manager"),
            rating: None,
            would_recommend: None,
            feedback: None,
        },
        ExitInterview {
            id: "EI007".into(),
            employee_name: "Rohit Verma".into(),
            employee_id: "EMP1099".into(),
            department: "Operations".into(),
            designation: "Operations Executive".into(),
            reason: ExitReason::BetterOpportunity,
            status: ExitInterviewStatus::Pending,
            last_working_day: ymd(2024, 5, 3),
            interview_date: None,
            interviewer: interviewer("Neha Gupta", "HR Executive"),
            rating: None,
            would_recommend: None,
            feedback: None,
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<ExitInterview>> {
    RecordStore::new(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_exit_interview::aggregate::KEY_REASON;
    use crate::domain::{KEY_DEPARTMENT, KEY_STATUS};
    use crate::shared::record_list::aggregate::stat;
    use crate::shared::record_list::{Average, FilterState, StatValue};

    fn ids(records: &[&ExitInterview]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_seed_ids_are_unique() {
        assert_eq!(store().unwrap().len(), 7);
    }

    #[test]
    fn test_completed_engineering() {
        let store = store().unwrap();
        let state = FilterState::new()
            .with_category(KEY_STATUS, "completed")
            .with_category(KEY_DEPARTMENT, "Engineering");
        assert_eq!(ids(&store.filter(&state)), vec!["EI001"]);

        let summary = store.summary();
        assert_eq!(stat(&summary, "completed"), Some(&StatValue::Count(2)));
    }

    #[test]
    fn test_search_covers_optional_feedback() {
        let store = store().unwrap();
        let state = FilterState::new().with_search("GROWTH");
        assert_eq!(ids(&store.filter(&state)), vec!["EI001"]);

        let state = FilterState::new().with_search("emp09");
        assert_eq!(ids(&store.filter(&state)), vec!["EI003"]);
    }

    #[test]
    fn test_reason_filter() {
        let store = store().unwrap();
        let state = FilterState::new().with_category(KEY_REASON, "better_opportunity");
        assert_eq!(ids(&store.filter(&state)), vec!["EI001", "EI007"]);
    }

    #[test]
    fn test_summary() {
        let summary = store().unwrap().summary();
        assert_eq!(stat(&summary, "total"), Some(&StatValue::Count(7)));
        assert_eq!(stat(&summary, "scheduled"), Some(&StatValue::Count(2)));
        assert_eq!(stat(&summary, "pending"), Some(&StatValue::Count(2)));
        assert_eq!(
            stat(&summary, "avg_rating"),
            Some(&StatValue::Average {
                value: Average::Value(3.5),
                decimals: 1
            })
        );
    }

    #[test]
    fn test_avg_rating_without_completed_is_not_applicable() {
        let pending: Vec<ExitInterview> = seed()
            .into_iter()
            .filter(|r| r.status == ExitInterviewStatus::Pending)
            .collect();
        let summary = <ExitInterview as crate::shared::record_list::Summarize>::summary(&pending);
        assert_eq!(
            stat(&summary, "avg_rating"),
            Some(&StatValue::Average {
                value: Average::NotApplicable,
                decimals: 1
            })
        );
    }
}
