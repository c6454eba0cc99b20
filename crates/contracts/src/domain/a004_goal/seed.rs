use super::aggregate::{Goal, GoalCategory, GoalOwner, GoalPriority, GoalStatus, Milestone};
use crate::domain::ymd;
use crate::shared::record_list::RecordStore;

fn owner(name: &str, employee_id: &str, department: &str) -> GoalOwner {
    GoalOwner {
        name: name.to_string(),
        employee_id: employee_id.to_string(),
        department: department.to_string(),
    }
}

fn milestones(items: &[(&str, bool)]) -> Vec<Milestone> {
    items
        .iter()
        .map(|(title, completed)| Milestone {
            title: title.to_string(),
            completed: *completed,
        })
        .collect()
}

pub fn seed() -> Vec<Goal> {
    vec![
        Goal {
            id: "G001".into(),
            title: "Migrate billing to microservices".into(),
            description: "Split the billing module into independently deployed services.".into(),
            owner: owner("Arjun Mehta", "EMP0954", "Engineering"),
            manager: "Rahul Sharma".into(),
            category: GoalCategory::Project,
            priority: GoalPriority::High,
            status: GoalStatus::InProgress,
            start_date: ymd(2024, 1, 8),
            due_date: ymd(2024, 6, 30),
            progress: 60,
            milestones: milestones(&[
                ("Service boundaries agreed", true),
                ("Invoice service live", true),
                ("Payments service live", false),
            ]),
        },
        Goal {
            id: "G002".into(),
            title: "Complete cloud architect certification".into(),
            description: "Finish the associate course and pass the certification exam.".into(),
            owner: owner("Kavya Reddy", "EMP1245", "Engineering"),
            manager: "Arjun Mehta".into(),
            category: GoalCategory::Development,
            priority: GoalPriority::Medium,
            status: GoalStatus::Completed,
            start_date: ymd(2024, 1, 15),
            due_date: ymd(2024, 3, 31),
            progress: 100,
            milestones: milestones(&[
                ("Course modules", true),
                ("Practice exams", true),
                ("Certification exam", true),
            ]),
        },
        Goal {
            id: "G003".into(),
            title: "Grow regional sales by 15%".into(),
            description: "Expand the dealer network in the western region.".into(),
            owner: owner("Karan Malhotra", "EMP0876", "Sales"),
            manager: "Sanjay Rao".into(),
            category: GoalCategory::Performance,
            priority: GoalPriority::High,
            status: GoalStatus::Overdue,
            start_date: ymd(2023, 10, 1),
            due_date: ymd(2024, 3, 31),
            progress: 45,
            milestones: milestones(&[("Q3 target", true), ("Q4 target", false)]),
        },
        Goal {
            id: "G004".into(),
            title: "Improve onboarding satisfaction".into(),
            description: "Redesign the first-week checklist for new joiners.".into(),
            owner: owner("Priya Menon", "EMP0412", "Human Resources"),
            manager: "Vikram Desai".into(),
            category: GoalCategory::Team,
            priority: GoalPriority::Medium,
            status: GoalStatus::NotStarted,
            start_date: ymd(2024, 5, 1),
            due_date: ymd(2024, 9, 30),
            progress: 0,
            milestones: vec![],
        },
        Goal {
            id: "G005".into(),
            title: "Mentor two junior analysts".into(),
            description: "Weekly pairing sessions and a quarterly skills review.".into(),
            owner: owner("Rohan Gupta", "EMP1378", "Finance"),
            manager: "Amit Patel".into(),
            category: GoalCategory::Behavioral,
            priority: GoalPriority::Low,
            status: GoalStatus::InProgress,
            start_date: ymd(2024, 2, 1),
            due_date: ymd(2024, 7, 31),
            progress: 50,
            milestones: milestones(&[
                ("Pairing sessions set up", true),
                ("Quarterly review", false),
            ]),
        },
        Goal {
            id: "G006".into(),
            title: "Reduce campaign cost per lead".into(),
            description: "Shift budget towards the best converting channels.".into(),
            owner: owner("Neha Kulkarni", "EMP1290", "Marketing"),
            manager: "Ananya Iyer".into(),
            category: GoalCategory::Performance,
            priority: GoalPriority::Medium,
            status: GoalStatus::OnHold,
            start_date: ymd(2024, 1, 2),
            due_date: ymd(2024, 6, 30),
            progress: 30,
            milestones: vec![],
        },
        Goal {
            id: "G007".into(),
            title: "Automate payroll reconciliation".into(),
            description: "Replace the monthly spreadsheet check with a scheduled job.".into(),
            owner: owner("Amit Patel", "EMP1120", "Finance"),
            manager: "Vikram Desai".into(),
            category: GoalCategory::Project,
            priority: GoalPriority::High,
            status: GoalStatus::Completed,
            start_date: ymd(2023, 11, 1),
            due_date: ymd(2024, 2, 29),
            progress: 100,
            milestones: milestones(&[("Rules documented", true), ("Job in production", true)]),
        },
    ]
}

pub fn store() -> anyhow::Result<RecordStore<Goal>> {
    RecordStore::new(seed())
}
