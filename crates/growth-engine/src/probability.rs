//! Dream-height probability scoring.
//!
//! The score is a heuristic, not a statistical estimate:
//!
//! 1. Dream at or below current height: 100.
//! 2. Less than 0.5 cm of expected growth left: 5.
//! 3. Dream needs more than 1.25x the expected growth: 5.
//! 4. Otherwise `95 - 90 * (needed / expected)`, adjusted by the
//!    midparental gap (+5 within 2 cm, -15 beyond 10 cm) and +3 for males,
//!    clamped to 5..=100.

use growth_model::{
    DreamHeightInput, PROBABILITY_CEILING, PROBABILITY_FLOOR, ProbabilityLabel, ProbabilityResult,
    ProjectionOptions,
};
use growth_units::HeightConverter;

use crate::projection::midparental_height_cm;
use crate::remaining::RemainingGrowth;

/// Below this much expected growth the dream is treated as out of reach.
const MIN_REMAINING_CM: f64 = 0.5;
/// Largest needed/expected ratio still scored on the linear scale.
const MAX_GROWTH_RATIO: f64 = 1.25;
const BASE_SCORE: f64 = 95.0;
const RATIO_PENALTY: f64 = 90.0;
const NEAR_GENETIC_GAP_CM: f64 = 2.0;
const NEAR_GENETIC_BONUS: f64 = 5.0;
const FAR_GENETIC_GAP_CM: f64 = 10.0;
const FAR_GENETIC_PENALTY: f64 = 15.0;
const MALE_BONUS: f64 = 3.0;

/// Scores a dream height and formats the gap still to grow.
///
/// Total over all numeric input; never panics.
pub fn calculate_dream_height_probability<C: HeightConverter>(
    converter: &C,
    growth: &RemainingGrowth,
    options: &ProjectionOptions,
    input: &DreamHeightInput,
) -> ProbabilityResult {
    let probability = score(growth, options, input);
    let height_to_go_cm = (input.dream_height_cm - input.current_height_cm).max(0.0);

    ProbabilityResult {
        probability,
        label: ProbabilityLabel::from_probability(probability),
        dream_height: converter.format_cm(input.dream_height_cm),
        height_to_go_cm,
        height_to_go: format!("{} to go", converter.format_cm(height_to_go_cm)),
    }
}

fn score(growth: &RemainingGrowth, options: &ProjectionOptions, input: &DreamHeightInput) -> u8 {
    let needed = input.dream_height_cm - input.current_height_cm;
    if needed <= 0.0 {
        return PROBABILITY_CEILING;
    }

    let remaining = growth.remaining_cm(input.age, input.sex);
    if remaining < MIN_REMAINING_CM || needed > remaining * MAX_GROWTH_RATIO {
        return PROBABILITY_FLOOR;
    }

    let ratio = needed / remaining;
    let mut score = BASE_SCORE - ratio * RATIO_PENALTY;

    if let Some((mother, father)) = input.parents() {
        let genetic =
            midparental_height_cm(input.sex, mother, father, options.midparental_offset_cm);
        let gap = input.dream_height_cm - genetic;
        if gap <= NEAR_GENETIC_GAP_CM {
            score += NEAR_GENETIC_BONUS;
        } else if gap > FAR_GENETIC_GAP_CM {
            score -= FAR_GENETIC_PENALTY;
        }
    }

    if input.sex.is_male() {
        score += MALE_BONUS;
    }

    clamp_probability(score)
}

/// Rounds into 5..=100; NaN falls to the floor.
fn clamp_probability(score: f64) -> u8 {
    if score.is_nan() {
        return PROBABILITY_FLOOR;
    }
    score
        .clamp(f64::from(PROBABILITY_FLOOR), f64::from(PROBABILITY_CEILING))
        .round() as u8
}
