//! Tunable constants for the projection engine.

use serde::{Deserialize, Serialize};

/// Options controlling projection behavior.
///
/// Every field has a default, so a partial options file only overrides
/// the keys it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Age in years from which projection is skipped entirely.
    pub adult_age_years: f64,

    /// Headroom added above the base estimate (and, for adults, above
    /// the current height), in inches.
    pub residual_growth_inches: f64,

    /// Distance within which a height counts as sitting on a percentile column.
    pub exact_match_tolerance_cm: f64,

    /// Sex correction of the midparental formula, in centimeters.
    pub midparental_offset_cm: f64,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            adult_age_years: 21.0,
            residual_growth_inches: 1.0,
            exact_match_tolerance_cm: 0.01,
            midparental_offset_cm: 13.0,
        }
    }
}

impl ProjectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_adult_age_years(mut self, years: f64) -> Self {
        self.adult_age_years = years;
        self
    }

    #[must_use]
    pub fn with_residual_growth_inches(mut self, inches: f64) -> Self {
        self.residual_growth_inches = inches;
        self
    }

    #[must_use]
    pub fn with_exact_match_tolerance_cm(mut self, tolerance: f64) -> Self {
        self.exact_match_tolerance_cm = tolerance;
        self
    }

    #[must_use]
    pub fn with_midparental_offset_cm(mut self, offset: f64) -> Self {
        self.midparental_offset_cm = offset;
        self
    }

    /// First field outside its valid range, with its value.
    ///
    /// Every field must be finite; the residual may not be negative and the
    /// tolerance must be positive.
    pub fn first_invalid(&self) -> Option<(&'static str, f64)> {
        let checks = [
            ("adult_age_years", self.adult_age_years, true),
            (
                "residual_growth_inches",
                self.residual_growth_inches,
                self.residual_growth_inches >= 0.0,
            ),
            (
                "exact_match_tolerance_cm",
                self.exact_match_tolerance_cm,
                self.exact_match_tolerance_cm > 0.0,
            ),
            ("midparental_offset_cm", self.midparental_offset_cm, true),
        ];
        checks
            .into_iter()
            .find(|(_, value, in_range)| !value.is_finite() || !in_range)
            .map(|(field, value, _)| (field, value))
    }
}
