//! Facade bundling a reference, options, growth curves and a converter.

use growth_model::{
    DreamHeightInput, GrowthError, HealthGoals, HeightInput, PercentileMatch, ProbabilityResult,
    ProjectedHeights, ProjectionOptions, ProjectionResult, Result, Sex,
};
use growth_standards::GrowthReference;
use growth_units::{HeightConverter, ImperialConverter};

use crate::health;
use crate::locator;
use crate::probability;
use crate::projection;
use crate::projector;
use crate::remaining::RemainingGrowth;

/// Height projection engine.
///
/// Holds only read-only state, so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct HeightEngine<'r, C = ImperialConverter> {
    reference: std::result::Result<&'r GrowthReference, GrowthError>,
    options: ProjectionOptions,
    growth: RemainingGrowth,
    converter: C,
}

impl HeightEngine<'static> {
    /// Engine over the bundled reference.
    ///
    /// A bundled table that fails to load is logged and reported per call
    /// as [`GrowthError::ReferenceUnavailable`].
    pub fn bundled() -> Self {
        let reference = GrowthReference::bundled().map_err(|err| {
            tracing::warn!(error = %err, "bundled growth reference unavailable");
            GrowthError::ReferenceUnavailable {
                message: err.to_string(),
            }
        });
        Self {
            reference,
            options: ProjectionOptions::default(),
            growth: RemainingGrowth::default(),
            converter: ImperialConverter,
        }
    }
}

impl<'r> HeightEngine<'r> {
    pub fn new(reference: &'r GrowthReference) -> Self {
        Self {
            reference: Ok(reference),
            options: ProjectionOptions::default(),
            growth: RemainingGrowth::default(),
            converter: ImperialConverter,
        }
    }
}

impl<'r, C: HeightConverter> HeightEngine<'r, C> {
    #[must_use]
    pub fn with_options(mut self, options: ProjectionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_remaining_growth(mut self, growth: RemainingGrowth) -> Self {
        self.growth = growth;
        self
    }

    #[must_use]
    pub fn with_converter<D: HeightConverter>(self, converter: D) -> HeightEngine<'r, D> {
        HeightEngine {
            reference: self.reference,
            options: self.options,
            growth: self.growth,
            converter,
        }
    }

    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn reference(&self) -> Result<&'r GrowthReference> {
        self.reference.clone()
    }

    pub fn find_surrounding_percentiles(
        &self,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
    ) -> Result<PercentileMatch> {
        locator::find_surrounding_percentiles(
            self.reference()?,
            height_cm,
            age_years,
            sex,
            self.options.exact_match_tolerance_cm,
        )
    }

    /// # Errors
    ///
    /// Fails with "No data found for age ..." when the age in whole months
    /// is not tabulated; callers are expected to fall back.
    pub fn get_projected_heights(
        &self,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
    ) -> Result<ProjectedHeights> {
        projector::get_projected_heights(
            self.reference()?,
            &self.converter,
            height_cm,
            age_years,
            sex,
            self.options.exact_match_tolerance_cm,
        )
    }

    pub fn calculate_height_projection(&self, input: &HeightInput) -> ProjectionResult {
        projection::calculate_height_projection(
            self.reference(),
            &self.converter,
            &self.options,
            input,
        )
    }

    pub fn calculate_dream_height_probability(&self, input: &DreamHeightInput) -> ProbabilityResult {
        probability::calculate_dream_height_probability(
            &self.converter,
            &self.growth,
            &self.options,
            input,
        )
    }

    pub fn remaining_growth_cm(&self, age: f64, sex: Sex) -> f64 {
        self.growth.remaining_cm(age, sex)
    }

    pub fn calculate_health_goals(&self, age: f64, sex: Sex) -> HealthGoals {
        health::calculate_health_goals(age, sex)
    }
}
