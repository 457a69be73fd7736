//! Percentile axis of the growth reference and lookup outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sex::Sex;

/// Named percentile columns, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Percentile {
    P3,
    P5,
    P10,
    P25,
    P50,
    P75,
    P90,
    P95,
    P97,
}

impl Percentile {
    /// All columns in ascending percentile order.
    pub const ALL: [Percentile; 9] = [
        Percentile::P3,
        Percentile::P5,
        Percentile::P10,
        Percentile::P25,
        Percentile::P50,
        Percentile::P75,
        Percentile::P90,
        Percentile::P95,
        Percentile::P97,
    ];

    pub const LOWEST: Percentile = Percentile::P3;
    pub const HIGHEST: Percentile = Percentile::P97;

    /// Percentile rank as a number (e.g. `50` for the median).
    pub fn value(&self) -> u8 {
        match self {
            Percentile::P3 => 3,
            Percentile::P5 => 5,
            Percentile::P10 => 10,
            Percentile::P25 => 25,
            Percentile::P50 => 50,
            Percentile::P75 => 75,
            Percentile::P90 => 90,
            Percentile::P95 => 95,
            Percentile::P97 => 97,
        }
    }

    /// Column header in the reference CSV.
    pub fn column(&self) -> &'static str {
        match self {
            Percentile::P3 => "P3",
            Percentile::P5 => "P5",
            Percentile::P10 => "P10",
            Percentile::P25 => "P25",
            Percentile::P50 => "P50",
            Percentile::P75 => "P75",
            Percentile::P90 => "P90",
            Percentile::P95 => "P95",
            Percentile::P97 => "P97",
        }
    }

    /// Position of this column within [`Percentile::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.value())
    }
}

/// One reference row: percentile heights for a (sex, age-in-months) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTableRow {
    pub sex: Sex,
    pub age_months: f64,
    /// Heights in centimeters, indexed like [`Percentile::ALL`].
    pub heights_cm: [f64; 9],
}

impl GrowthTableRow {
    pub fn new(sex: Sex, age_months: f64, heights_cm: [f64; 9]) -> Self {
        Self {
            sex,
            age_months,
            heights_cm,
        }
    }

    /// Height in centimeters at the given percentile column.
    pub fn height_at(&self, percentile: Percentile) -> f64 {
        self.heights_cm[percentile.index()]
    }

    /// Iterates `(percentile, height_cm)` pairs in ascending order.
    pub fn columns(&self) -> impl Iterator<Item = (Percentile, f64)> + '_ {
        Percentile::ALL
            .iter()
            .map(move |p| (*p, self.heights_cm[p.index()]))
    }

    /// Whole-month key, if `age_months` is integral.
    pub fn whole_month(&self) -> Option<u32> {
        let months = self.age_months;
        if months >= 0.0 && months.fract() == 0.0 && months <= f64::from(u32::MAX) {
            Some(months as u32)
        } else {
            None
        }
    }
}

/// Where a height falls on a row's percentile axis.
///
/// Exactly one shape is produced per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PercentileMatch {
    /// The height equals a column value within tolerance.
    Exact { percentile: Percentile },
    /// The height lies strictly between two adjacent columns.
    #[serde(rename_all = "camelCase")]
    Bracket {
        lower: Percentile,
        upper: Percentile,
        lower_diff_cm: f64,
        upper_diff_cm: f64,
    },
    /// The height exceeds every column; only the top bound is known.
    #[serde(rename_all = "camelCase")]
    AboveRange { lower: Percentile, lower_diff_cm: f64 },
    /// The height is below every column; only the bottom bound is known.
    #[serde(rename_all = "camelCase")]
    BelowRange { upper: Percentile, upper_diff_cm: f64 },
}

impl PercentileMatch {
    pub fn exact(&self) -> Option<Percentile> {
        match self {
            PercentileMatch::Exact { percentile } => Some(*percentile),
            _ => None,
        }
    }

    /// The percentile just below the height, when one exists.
    pub fn lower(&self) -> Option<Percentile> {
        match self {
            PercentileMatch::Bracket { lower, .. } | PercentileMatch::AboveRange { lower, .. } => {
                Some(*lower)
            }
            _ => None,
        }
    }

    /// The percentile just above the height, when one exists.
    pub fn upper(&self) -> Option<Percentile> {
        match self {
            PercentileMatch::Bracket { upper, .. } | PercentileMatch::BelowRange { upper, .. } => {
                Some(*upper)
            }
            _ => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            PercentileMatch::AboveRange { .. } | PercentileMatch::BelowRange { .. }
        )
    }
}
