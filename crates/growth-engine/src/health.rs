//! Sleep and calorie targets by age band.

use growth_model::{HealthGoals, Sex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepBand {
    pub min_age: f64,
    pub max_age: f64,
    pub hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieBand {
    pub min_age: f64,
    pub max_age: f64,
    pub male: u32,
    pub female: u32,
}

/// Closed `[min_age, max_age]` bands; the first containing band wins.
pub const SLEEP_BANDS: [SleepBand; 6] = [
    SleepBand { min_age: 0.0, max_age: 2.0, hours: 13.0 },
    SleepBand { min_age: 2.0, max_age: 5.0, hours: 11.5 },
    SleepBand { min_age: 5.0, max_age: 12.0, hours: 10.0 },
    SleepBand { min_age: 12.0, max_age: 18.0, hours: 9.0 },
    SleepBand { min_age: 18.0, max_age: 64.0, hours: 8.0 },
    SleepBand { min_age: 64.0, max_age: 120.0, hours: 7.5 },
];

pub const CALORIE_BANDS: [CalorieBand; 7] = [
    CalorieBand { min_age: 0.0, max_age: 3.0, male: 1000, female: 1000 },
    CalorieBand { min_age: 3.0, max_age: 8.0, male: 1600, female: 1400 },
    CalorieBand { min_age: 8.0, max_age: 13.0, male: 2000, female: 1800 },
    CalorieBand { min_age: 13.0, max_age: 18.0, male: 2800, female: 2000 },
    CalorieBand { min_age: 18.0, max_age: 30.0, male: 2600, female: 2000 },
    CalorieBand { min_age: 30.0, max_age: 50.0, male: 2400, female: 1900 },
    CalorieBand { min_age: 50.0, max_age: 120.0, male: 2200, female: 1700 },
];

fn contains(min_age: f64, max_age: f64, age: f64) -> bool {
    min_age <= age && age <= max_age
}

/// Daily sleep and calorie targets. Ages outside every band use the last band.
pub fn calculate_health_goals(age: f64, sex: Sex) -> HealthGoals {
    let sleep = SLEEP_BANDS
        .iter()
        .find(|band| contains(band.min_age, band.max_age, age))
        .unwrap_or(&SLEEP_BANDS[SLEEP_BANDS.len() - 1]);
    let calories = CALORIE_BANDS
        .iter()
        .find(|band| contains(band.min_age, band.max_age, age))
        .unwrap_or(&CALORIE_BANDS[CALORIE_BANDS.len() - 1]);

    HealthGoals {
        sleep_hours: sleep.hours,
        calories: match sex {
            Sex::Male => calories.male,
            Sex::Female => calories.female,
        },
    }
}
