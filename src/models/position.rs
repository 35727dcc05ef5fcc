use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::PayTerms;
use super::schedule::WorkSchedule;

/// Required headcount for one job title at one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: Uuid,
    pub object_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub work_schedule: WorkSchedule,
    #[serde(flatten)]
    pub pay: PayTerms,
    #[serde(default)]
    pub positions_count: u32,
}

impl Position {
    pub fn belongs_to(&self, site_id: Uuid) -> bool {
        self.object_id == site_id
    }
}
