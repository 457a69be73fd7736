//! Expected remaining growth by age.
//!
//! Hand-tuned piecewise-linear curves, separate from the percentile
//! reference and used only for dream-height scoring.

use growth_model::Sex;

/// (age in years, remaining growth in cm), ascending by age.
pub const MALE_REMAINING_GROWTH: [(f64, f64); 10] = [
    (6.0, 62.0),
    (8.0, 50.0),
    (10.0, 39.0),
    (12.0, 28.0),
    (13.0, 21.0),
    (14.0, 13.0),
    (15.0, 8.0),
    (16.0, 4.0),
    (17.0, 2.0),
    (19.0, 0.5),
];

pub const FEMALE_REMAINING_GROWTH: [(f64, f64); 10] = [
    (6.0, 48.0),
    (8.0, 37.0),
    (10.0, 25.0),
    (11.0, 18.0),
    (12.0, 11.0),
    (13.0, 6.0),
    (14.0, 3.0),
    (15.0, 1.5),
    (16.0, 0.8),
    (17.0, 0.3),
];

/// Piecewise-linear curve over anchor points, flat beyond both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct RemainingGrowthCurve {
    anchors: Vec<(f64, f64)>,
}

impl RemainingGrowthCurve {
    /// Builds a curve; anchors are sorted by age.
    pub fn new(mut anchors: Vec<(f64, f64)>) -> Self {
        anchors.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { anchors }
    }

    pub fn anchors(&self) -> &[(f64, f64)] {
        &self.anchors
    }

    /// Remaining growth in cm at `age`. An empty curve yields zero.
    pub fn remaining_cm(&self, age: f64) -> f64 {
        interpolate(&self.anchors, age)
    }
}

fn interpolate(anchors: &[(f64, f64)], age: f64) -> f64 {
    let (Some(&(first_age, first_cm)), Some(&(last_age, last_cm))) =
        (anchors.first(), anchors.last())
    else {
        return 0.0;
    };

    if age <= first_age {
        return first_cm;
    }
    if age >= last_age {
        return last_cm;
    }

    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x0 <= age && age <= x1 {
            if x1 == x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (age - x0) / (x1 - x0);
        }
    }

    // Only reachable for NaN ages.
    last_cm
}

/// One curve per sex.
#[derive(Debug, Clone, PartialEq)]
pub struct RemainingGrowth {
    pub male: RemainingGrowthCurve,
    pub female: RemainingGrowthCurve,
}

impl Default for RemainingGrowth {
    fn default() -> Self {
        Self {
            male: RemainingGrowthCurve::new(MALE_REMAINING_GROWTH.to_vec()),
            female: RemainingGrowthCurve::new(FEMALE_REMAINING_GROWTH.to_vec()),
        }
    }
}

impl RemainingGrowth {
    pub fn curve(&self, sex: Sex) -> &RemainingGrowthCurve {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    pub fn remaining_cm(&self, age: f64, sex: Sex) -> f64 {
        self.curve(sex).remaining_cm(age)
    }
}

/// Remaining growth from the default curves.
pub fn remaining_growth_cm(age: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => interpolate(&MALE_REMAINING_GROWTH, age),
        Sex::Female => interpolate(&FEMALE_REMAINING_GROWTH, age),
    }
}
