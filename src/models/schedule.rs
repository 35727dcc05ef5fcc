use serde::{Deserialize, Serialize};

/// Work rotation pattern that determines the expected hours of a month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkSchedule {
    #[default]
    FiveTwo,
    TwoTwo,
    ThreeThree,
    SixOne,
    /// Rotational shift work, every calendar day is a working day.
    Rotational,
    /// Unrecognized code, computed with the 5/2 rule.
    Other(String),
}

impl WorkSchedule {
    pub fn code(&self) -> &str {
        match self {
            WorkSchedule::FiveTwo => "5/2",
            WorkSchedule::TwoTwo => "2/2",
            WorkSchedule::ThreeThree => "3/3",
            WorkSchedule::SixOne => "6/1",
            WorkSchedule::Rotational => "вахта (7/0)",
            WorkSchedule::Other(code) => code,
        }
    }

    /// Length of one shift in hours.
    pub fn shift_hours(&self) -> u32 {
        match self {
            WorkSchedule::TwoTwo | WorkSchedule::ThreeThree => 12,
            _ => 8,
        }
    }
}

impl From<&str> for WorkSchedule {
    fn from(code: &str) -> Self {
        match code.trim() {
            "5/2" => WorkSchedule::FiveTwo,
            "2/2" => WorkSchedule::TwoTwo,
            "3/3" => WorkSchedule::ThreeThree,
            "6/1" => WorkSchedule::SixOne,
            "вахта (7/0)" => WorkSchedule::Rotational,
            _ => WorkSchedule::Other(code.to_string()),
        }
    }
}

impl From<String> for WorkSchedule {
    fn from(code: String) -> Self {
        WorkSchedule::from(code.as_str())
    }
}

impl From<WorkSchedule> for String {
    fn from(schedule: WorkSchedule) -> Self {
        match schedule {
            WorkSchedule::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for WorkSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
