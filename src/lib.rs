pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod snapshot;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::PayrollError;
pub use services::{ReportAssembler, ReportInput, ReportSettings};
pub use snapshot::Snapshot;
