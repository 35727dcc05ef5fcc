pub mod attendance;
pub mod report;
pub mod roster;
pub mod schedule_hours;
pub mod vacancy;
pub mod wage;

pub use report::{ReportAssembler, ReportInput, ReportSettings};
pub use roster::Roster;
