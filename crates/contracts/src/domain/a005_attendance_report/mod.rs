pub mod aggregate;
pub mod seed;

pub use aggregate::{
    AttendanceReport, ReportFormat, ReportPeriod, ReportStatus, ReportType, KEY_PERIOD,
    KEY_REPORT_TYPE,
};
