//! Inputs and results of dream-height scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sex::Sex;

/// Lowest reported probability.
pub const PROBABILITY_FLOOR: u8 = 5;
/// Highest reported probability.
pub const PROBABILITY_CEILING: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamHeightInput {
    pub dream_height_cm: f64,
    pub current_height_cm: f64,
    pub age: f64,
    pub sex: Sex,
    #[serde(default)]
    pub mother_height_cm: Option<f64>,
    #[serde(default)]
    pub father_height_cm: Option<f64>,
}

impl DreamHeightInput {
    pub fn new(dream_height_cm: f64, current_height_cm: f64, age: f64, sex: Sex) -> Self {
        Self {
            dream_height_cm,
            current_height_cm,
            age,
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

    pub fn parents(&self) -> Option<(f64, f64)> {
        self.mother_height_cm.zip(self.father_height_cm)
    }
}

/// Qualitative band for a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbabilityLabel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl ProbabilityLabel {
    /// Band thresholds: 90, 75, 50, 25.
    pub fn from_probability(probability: u8) -> Self {
        match probability {
            90.. => ProbabilityLabel::VeryHigh,
            75..=89 => ProbabilityLabel::High,
            50..=74 => ProbabilityLabel::Moderate,
            25..=49 => ProbabilityLabel::Low,
            _ => ProbabilityLabel::VeryLow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbabilityLabel::VeryHigh => "Very High",
            ProbabilityLabel::High => "High",
            ProbabilityLabel::Moderate => "Moderate",
            ProbabilityLabel::Low => "Low",
            ProbabilityLabel::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for ProbabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityResult {
    /// Likelihood in percent, always within 5..=100.
    pub probability: u8,
    pub label: ProbabilityLabel,
    pub dream_height: String,
    /// Centimeters still needed; zero once the dream height is reached.
    pub height_to_go_cm: f64,
    pub height_to_go: String,
}
