use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{Employee, Position, TimeEntry};
use crate::services::ReportInput;

/// Collections fetched for one site-month, as handed over by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub month: String,
    pub site_id: Uuid,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, PayrollError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PayrollError> {
        let path = path.as_ref();
        log::debug!("Loading snapshot from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn as_input(&self) -> ReportInput<'_> {
        ReportInput {
            month: &self.month,
            site_id: self.site_id,
            manager_name: self.manager_name.as_deref(),
            employees: &self.employees,
            positions: &self.positions,
            time_entries: &self.time_entries,
        }
    }
}
