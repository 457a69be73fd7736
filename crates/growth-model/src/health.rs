use serde::{Deserialize, Serialize};

/// Daily targets for an age and sex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoals {
    pub sleep_hours: f64,
    pub calories: u32,
}
