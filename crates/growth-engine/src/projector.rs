//! Adult-height projection: hold the percentile rank, advance age to the
//! oldest tabulated row.

use growth_model::{AdultHeightsCm, GrowthError, ProjectedHeights, Result, Sex};
use growth_standards::GrowthReference;
use growth_units::HeightConverter;

use crate::locator::{age_in_months, find_surrounding_percentiles};

/// Re-reads the located percentile(s) from the adult row.
///
/// # Errors
///
/// Propagates [`GrowthError::DataNotFound`] when the current age has no row.
pub fn project_adult_cm(
    reference: &GrowthReference,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    tolerance_cm: f64,
) -> Result<AdultHeightsCm> {
    let found = find_surrounding_percentiles(reference, height_cm, age_years, sex, tolerance_cm)?;
    let adult = reference
        .adult_row(sex)
        .ok_or(GrowthError::DataNotFound {
            age_years,
            age_months: age_in_months(age_years),
            sex,
        })?;

    Ok(AdultHeightsCm {
        lower: found.lower().map(|p| adult.height_at(p)),
        exact: found.exact().map(|p| adult.height_at(p)),
        upper: found.upper().map(|p| adult.height_at(p)),
    })
}

/// [`project_adult_cm`] rendered as feet-inches strings.
pub fn get_projected_heights<C: HeightConverter>(
    reference: &GrowthReference,
    converter: &C,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    tolerance_cm: f64,
) -> Result<ProjectedHeights> {
    let adult = project_adult_cm(reference, height_cm, age_years, sex, tolerance_cm)?;
    Ok(display_heights(converter, &adult))
}

pub(crate) fn display_heights<C: HeightConverter>(
    converter: &C,
    adult: &AdultHeightsCm,
) -> ProjectedHeights {
    ProjectedHeights {
        lower: adult.lower.map(|cm| converter.format_cm(cm)),
        exact: adult.exact.map(|cm| converter.format_cm(cm)),
        upper: adult.upper.map(|cm| converter.format_cm(cm)),
    }
}
