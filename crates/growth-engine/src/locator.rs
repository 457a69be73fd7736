//! Percentile location within a single reference row.

use growth_model::{GrowthError, GrowthTableRow, Percentile, PercentileMatch, Result, Sex};
use growth_standards::GrowthReference;

/// Converts an age in years to whole months, rounding to the nearest month.
pub fn age_in_months(age_years: f64) -> i64 {
    (age_years * 12.0).round() as i64
}

/// Finds the row for `age_years` (exact whole-month match) and locates
/// `height_cm` on its percentile axis.
///
/// # Errors
///
/// Returns [`GrowthError::DataNotFound`] when the reference has no row for
/// that sex at exactly that month.
pub fn find_surrounding_percentiles(
    reference: &GrowthReference,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    tolerance_cm: f64,
) -> Result<PercentileMatch> {
    let row = row_for_age(reference, age_years, sex)?;
    let found = locate_in_row(row, height_cm, tolerance_cm);
    tracing::trace!(
        sex = %sex,
        age_months = row.age_months,
        exact = ?found.exact(),
        lower = ?found.lower(),
        upper = ?found.upper(),
        "located percentile"
    );
    Ok(found)
}

/// The row tabulated at exactly `round(age_years * 12)` months.
pub fn row_for_age(
    reference: &GrowthReference,
    age_years: f64,
    sex: Sex,
) -> Result<&GrowthTableRow> {
    let age_months = age_in_months(age_years);
    u32::try_from(age_months)
        .ok()
        .and_then(|month| reference.row(sex, month))
        .ok_or(GrowthError::DataNotFound {
            age_years,
            age_months,
            sex,
        })
}

/// Places a height on the row's percentile columns.
///
/// A column within `tolerance_cm` is an exact match. Otherwise the first
/// column above the height and its predecessor form the bracket; heights
/// outside every column only get the nearest bound.
pub fn locate_in_row(row: &GrowthTableRow, height_cm: f64, tolerance_cm: f64) -> PercentileMatch {
    if let Some((percentile, _)) = row
        .columns()
        .find(|(_, column)| (column - height_cm).abs() < tolerance_cm)
    {
        return PercentileMatch::Exact { percentile };
    }

    let mut previous: Option<(Percentile, f64)> = None;
    for (percentile, column) in row.columns() {
        if column > height_cm {
            return match previous {
                Some((lower, lower_column)) => PercentileMatch::Bracket {
                    lower,
                    upper: percentile,
                    lower_diff_cm: (height_cm - lower_column).abs(),
                    upper_diff_cm: (column - height_cm).abs(),
                },
                None => PercentileMatch::BelowRange {
                    upper: percentile,
                    upper_diff_cm: (column - height_cm).abs(),
                },
            };
        }
        previous = Some((percentile, column));
    }

    let top = row.height_at(Percentile::HIGHEST);
    PercentileMatch::AboveRange {
        lower: Percentile::HIGHEST,
        lower_diff_cm: (height_cm - top).abs(),
    }
}
