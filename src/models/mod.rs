mod macros;

pub mod employee;
pub mod locale;
pub mod month;
pub mod position;
pub mod report;
pub mod schedule;
pub mod time_entry;

/// Money in the smallest currency unit.
pub type Money = i64;

// Re-export all models for easy importing
pub use employee::*;
pub use locale::*;
pub use month::*;
pub use position::*;
pub use report::*;
pub use schedule::*;
pub use time_entry::*;
