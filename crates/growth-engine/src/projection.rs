//! Projection orchestrator: table estimate, genetic fallback, adult cap.

use growth_model::{HeightInput, ProjectionOptions, ProjectionResult, Result, Sex};
use growth_standards::GrowthReference;
use growth_units::HeightConverter;

use crate::projector::project_adult_cm;

/// Midparental (genetic) target height.
///
/// Male: `(father + mother + offset) / 2`; female: `(father + mother - offset) / 2`.
pub fn midparental_height_cm(
    sex: Sex,
    mother_height_cm: f64,
    father_height_cm: f64,
    offset_cm: f64,
) -> f64 {
    let offset = if sex.is_male() { offset_cm } else { -offset_cm };
    (father_height_cm + mother_height_cm + offset) / 2.0
}

/// Computes current, likely and upper-bound adult heights.
///
/// Never fails: a missing reference or a missing row for the caller's age
/// falls back to the genetic estimate, then to the current height. The
/// result always satisfies `potential >= actual >= current`.
pub fn calculate_height_projection<C: HeightConverter>(
    reference: Result<&GrowthReference>,
    converter: &C,
    options: &ProjectionOptions,
    input: &HeightInput,
) -> ProjectionResult {
    let height_cm = input.height_cm;
    let current_inches = converter.cm_to_inches(height_cm);
    let current_height = converter.format_cm(height_cm);
    // NaN also collapses to zero.
    let residual_inches = options.residual_growth_inches.max(0.0);

    if input.age_years >= options.adult_age_years {
        tracing::debug!(
            age_years = input.age_years,
            adult_age_years = options.adult_age_years,
            "adult short-circuit, skipping projection"
        );
        return ProjectionResult {
            actual_height: current_height.clone(),
            potential_height: converter
                .format_inches(current_inches + residual_inches),
            current_height,
        };
    }

    let genetic_cm = input.parents().map(|(mother, father)| {
        midparental_height_cm(input.sex, mother, father, options.midparental_offset_cm)
            .max(height_cm)
    });

    let table_cm = reference
        .and_then(|reference| {
            project_adult_cm(
                reference,
                height_cm,
                input.age_years,
                input.sex,
                options.exact_match_tolerance_cm,
            )
        })
        .map(|adult| adult.preferred())
        .unwrap_or_else(|err| {
            tracing::debug!(
                age_years = input.age_years,
                sex = %input.sex,
                has_genetic_estimate = genetic_cm.is_some(),
                error = %err,
                "no table estimate, falling back"
            );
            None
        });

    let base_cm = table_cm.or(genetic_cm).unwrap_or(height_cm).max(height_cm);
    let base_inches = converter.cm_to_inches(base_cm);

    ProjectionResult {
        current_height,
        actual_height: converter
            .format_inches((base_inches - residual_inches).max(current_inches)),
        potential_height: converter.format_inches(base_inches + residual_inches),
    }
}
