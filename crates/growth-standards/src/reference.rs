#![deny(unsafe_code)]

//! Frozen stature-for-age reference keyed by (sex, whole month).

use std::collections::{BTreeMap, HashMap};

use growth_model::{GrowthTableRow, Percentile, Sex};

use crate::error::StandardsError;

/// Immutable growth reference.
///
/// Built once and only read afterwards; concurrent readers share it
/// without synchronization.
#[derive(Debug, Clone)]
pub struct GrowthReference {
    source: String,
    rows: BTreeMap<Sex, Vec<GrowthTableRow>>,
    by_month: HashMap<(Sex, u32), usize>,
}

impl GrowthReference {
    /// Validates and indexes rows.
    ///
    /// Rows must be unique per (sex, age) and strictly increasing across
    /// the percentile columns.
    pub fn from_rows(
        source: impl Into<String>,
        rows: Vec<GrowthTableRow>,
    ) -> Result<Self, StandardsError> {
        let source = source.into();
        if rows.is_empty() {
            return Err(StandardsError::EmptyTable {
                source_name: source,
            });
        }

        let mut grouped: BTreeMap<Sex, Vec<GrowthTableRow>> = BTreeMap::new();
        for row in rows {
            check_monotonic(&source, &row)?;
            grouped.entry(row.sex).or_default().push(row);
        }

        let mut by_month = HashMap::new();
        for (sex, rows) in &mut grouped {
            rows.sort_by(|a, b| a.age_months.total_cmp(&b.age_months));
            for pair in rows.windows(2) {
                if pair[0].age_months == pair[1].age_months {
                    return Err(StandardsError::DuplicateRow {
                        source_name: source,
                        sex: *sex,
                        age_months: pair[0].age_months,
                    });
                }
            }
            for (idx, row) in rows.iter().enumerate() {
                if let Some(month) = row.whole_month() {
                    by_month.insert((*sex, month), idx);
                }
            }
        }

        Ok(Self {
            source,
            rows: grouped,
            by_month,
        })
    }

    /// Where the rows came from (file path or `bundled`).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Row for an exact whole month; no interpolation across ages.
    pub fn row(&self, sex: Sex, age_months: u32) -> Option<&GrowthTableRow> {
        let idx = *self.by_month.get(&(sex, age_months))?;
        self.rows.get(&sex).and_then(|rows| rows.get(idx))
    }

    /// The oldest row for a sex, treated as the adult reference.
    pub fn adult_row(&self, sex: Sex) -> Option<&GrowthTableRow> {
        self.rows.get(&sex).and_then(|rows| rows.last())
    }

    /// All rows for a sex, ordered by age.
    pub fn rows(&self, sex: Sex) -> &[GrowthTableRow] {
        self.rows.get(&sex).map(Vec::as_slice).unwrap_or_default()
    }

    /// Tabulated age range in months for a sex.
    pub fn age_range(&self, sex: Sex) -> Option<(f64, f64)> {
        let rows = self.rows(sex);
        Some((rows.first()?.age_months, rows.last()?.age_months))
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_monotonic(source: &str, row: &GrowthTableRow) -> Result<(), StandardsError> {
    let mut previous: Option<f64> = None;
    for (percentile, height) in row.columns() {
        let ok = height.is_finite() && previous.is_none_or(|prev| height > prev);
        if !ok {
            return Err(non_monotonic(source, row, percentile));
        }
        previous = Some(height);
    }
    Ok(())
}

fn non_monotonic(source: &str, row: &GrowthTableRow, percentile: Percentile) -> StandardsError {
    StandardsError::NonMonotonic {
        source_name: source.to_string(),
        sex: row.sex,
        age_months: row.age_months,
        column: percentile.column().to_string(),
    }
}
