//! Inputs and results of the adult-height projection.

use serde::{Deserialize, Serialize};

use crate::sex::Sex;

/// Caller-supplied measurements for a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightInput {
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
    #[serde(default)]
    pub mother_height_cm: Option<f64>,
    #[serde(default)]
    pub father_height_cm: Option<f64>,
}

impl HeightInput {
    pub fn new(height_cm: f64, age_years: f64, sex: Sex) -> Self {
        Self {
            height_cm,
            age_years,
            sex,
            mother_height_cm: None,
            father_height_cm: None,
        }
    }

    pub fn with_parents(mut self, mother_height_cm: f64, father_height_cm: f64) -> Self {
        self.mother_height_cm = Some(mother_height_cm);
        self.father_height_cm = Some(father_height_cm);
        self
    }

    /// Both parent heights, when supplied.
    pub fn parents(&self) -> Option<(f64, f64)> {
        self.mother_height_cm.zip(self.father_height_cm)
    }
}

/// Adult heights read from the reference table's oldest row, in centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultHeightsCm {
    pub lower: Option<f64>,
    pub exact: Option<f64>,
    pub upper: Option<f64>,
}

impl AdultHeightsCm {
    /// Preferred single estimate: exact, then upper, then lower.
    pub fn preferred(&self) -> Option<f64> {
        self.exact.or(self.upper).or(self.lower)
    }
}

/// Adult heights as feet-inches display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedHeights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<String>,
}

/// Current, likely and upper-bound adult heights as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub current_height: String,
    pub actual_height: String,
    pub potential_height: String,
}
