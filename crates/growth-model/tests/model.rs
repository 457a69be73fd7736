//! Tests for growth-model types.

use growth_model::{
    DreamHeightInput, GrowthError, HealthGoals, HeightInput, Percentile, PercentileMatch,
    ProbabilityLabel, ProbabilityResult, ProjectedHeights, ProjectionOptions, ProjectionResult,
    Sex,
};

#[test]
fn data_not_found_message_names_the_age() {
    let err = GrowthError::DataNotFound {
        age_years: 37.0,
        age_months: 444,
        sex: Sex::Male,
    };
    let message = err.to_string();
    assert!(message.starts_with("No data found for age 37"));
    assert!(message.contains("444 months"));
}

#[test]
fn label_thresholds() {
    assert_eq!(ProbabilityLabel::from_probability(100), ProbabilityLabel::VeryHigh);
    assert_eq!(ProbabilityLabel::from_probability(90), ProbabilityLabel::VeryHigh);
    assert_eq!(ProbabilityLabel::from_probability(89), ProbabilityLabel::High);
    assert_eq!(ProbabilityLabel::from_probability(75), ProbabilityLabel::High);
    assert_eq!(ProbabilityLabel::from_probability(74), ProbabilityLabel::Moderate);
    assert_eq!(ProbabilityLabel::from_probability(50), ProbabilityLabel::Moderate);
    assert_eq!(ProbabilityLabel::from_probability(49), ProbabilityLabel::Low);
    assert_eq!(ProbabilityLabel::from_probability(25), ProbabilityLabel::Low);
    assert_eq!(ProbabilityLabel::from_probability(24), ProbabilityLabel::VeryLow);
    assert_eq!(ProbabilityLabel::from_probability(5), ProbabilityLabel::VeryLow);
}

#[test]
fn projection_result_uses_camel_case_keys() {
    let result = ProjectionResult {
        current_height: "4'6\"".to_string(),
        actual_height: "5'8\"".to_string(),
        potential_height: "5'10\"".to_string(),
    };
    let json = serde_json::to_value(&result).expect("serialize projection");
    assert_eq!(json["currentHeight"], "4'6\"");
    assert_eq!(json["actualHeight"], "5'8\"");
    assert_eq!(json["potentialHeight"], "5'10\"");
}

#[test]
fn projected_heights_omit_missing_bounds() {
    let heights = ProjectedHeights {
        lower: None,
        exact: Some("5'10\"".to_string()),
        upper: None,
    };
    let json = serde_json::to_string(&heights).expect("serialize heights");
    assert_eq!(json, r#"{"exact":"5'10\""}"#);
}

#[test]
fn probability_result_serializes_label_text() {
    let result = ProbabilityResult {
        probability: 95,
        label: ProbabilityLabel::VeryHigh,
        dream_height: "6'0\"".to_string(),
        height_to_go_cm: 0.0,
        height_to_go: "0'0\" to go".to_string(),
    };
    let json = serde_json::to_value(&result).expect("serialize probability");
    assert_eq!(json["label"], "Very High");
    assert_eq!(json["heightToGo"], "0'0\" to go");
    let round: ProbabilityResult = serde_json::from_value(json).expect("deserialize probability");
    assert_eq!(round, result);
}

#[test]
fn inputs_accept_missing_parents() {
    let input: HeightInput =
        serde_json::from_str(r#"{"heightCm":150.0,"ageYears":12.0,"sex":"female"}"#)
            .expect("deserialize input");
    assert_eq!(input.parents(), None);
    assert_eq!(input.sex, Sex::Female);

    let dream = DreamHeightInput::new(180.0, 170.0, 15.0, Sex::Male).with_parents(165.0, 180.0);
    assert_eq!(dream.parents(), Some((165.0, 180.0)));
}

#[test]
fn partial_options_keep_defaults() {
    let options: ProjectionOptions =
        serde_json::from_str(r#"{"adult_age_years":18.0}"#).expect("deserialize options");
    assert_eq!(options.adult_age_years, 18.0);
    assert_eq!(options.residual_growth_inches, 1.0);
    assert_eq!(options.midparental_offset_cm, 13.0);
}

#[test]
fn overflow_matches_expose_single_bound() {
    let above = PercentileMatch::AboveRange {
        lower: Percentile::HIGHEST,
        lower_diff_cm: 4.0,
    };
    assert_eq!(above.lower(), Some(Percentile::P97));
    assert_eq!(above.upper(), None);
    assert!(above.is_overflow());

    let below = PercentileMatch::BelowRange {
        upper: Percentile::LOWEST,
        upper_diff_cm: 2.0,
    };
    assert_eq!(below.upper(), Some(Percentile::P3));
    assert_eq!(below.lower(), None);
}

#[test]
fn health_goals_serialize() {
    let goals = HealthGoals {
        sleep_hours: 9.5,
        calories: 2200,
    };
    let json = serde_json::to_value(goals).expect("serialize goals");
    assert_eq!(json["sleepHours"], 9.5);
    assert_eq!(json["calories"], 2200);
}
