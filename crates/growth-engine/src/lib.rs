//! Adult-height projection and dream-height probability.
//!
//! - **locator**: places a height on the percentile columns of one reference row
//! - **projector**: reads the same percentile from the adult (oldest) row
//! - **projection**: orchestrates table, genetic and current-height estimates
//! - **remaining**: hand-tuned remaining-growth curves
//! - **probability**: bounded dream-height scoring
//! - **health**: sleep and calorie targets by age band
//!
//! The free functions below run against the bundled reference with
//! default options. Use [`HeightEngine`] to swap any of those.

pub mod engine;
pub mod health;
pub mod locator;
pub mod probability;
pub mod projection;
pub mod projector;
pub mod remaining;

use std::sync::LazyLock;

use growth_model::{
    DreamHeightInput, HealthGoals, HeightInput, PercentileMatch, ProbabilityResult,
    ProjectedHeights, ProjectionResult, Result, Sex,
};

pub use engine::HeightEngine;
pub use locator::{age_in_months, locate_in_row};
pub use projection::midparental_height_cm;
pub use remaining::{RemainingGrowth, RemainingGrowthCurve, remaining_growth_cm};

static DEFAULT_ENGINE: LazyLock<HeightEngine<'static>> = LazyLock::new(HeightEngine::bundled);

/// Current, likely and upper-bound adult heights. Never fails.
pub fn calculate_height_projection(input: &HeightInput) -> ProjectionResult {
    DEFAULT_ENGINE.calculate_height_projection(input)
}

/// Adult heights at the located percentile(s).
///
/// # Errors
///
/// Fails with "No data found for age ..." for untabulated ages.
pub fn get_projected_heights(height_cm: f64, age_years: f64, sex: Sex) -> Result<ProjectedHeights> {
    DEFAULT_ENGINE.get_projected_heights(height_cm, age_years, sex)
}

pub fn find_surrounding_percentiles(
    height_cm: f64,
    age_years: f64,
    sex: Sex,
) -> Result<PercentileMatch> {
    DEFAULT_ENGINE.find_surrounding_percentiles(height_cm, age_years, sex)
}

pub fn calculate_dream_height_probability(input: &DreamHeightInput) -> ProbabilityResult {
    DEFAULT_ENGINE.calculate_dream_height_probability(input)
}

pub fn calculate_health_goals(age: f64, sex: Sex) -> HealthGoals {
    health::calculate_health_goals(age, sex)
}
