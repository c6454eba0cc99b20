pub mod a001_exit_interview;
pub mod a002_final_settlement;
pub mod a003_tax_record;
pub mod a004_goal;
pub mod a005_attendance_report;
pub mod a006_branch;
pub mod a007_leave_type;
pub mod a008_user_account;
