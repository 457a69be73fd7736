//! Integration tests for percentile lookup and adult-height projection
//! against the bundled reference.

use growth_engine::{
    HeightEngine, calculate_height_projection, find_surrounding_percentiles, get_projected_heights,
};
use growth_model::{
    GrowthTableRow, HeightInput, Percentile, PercentileMatch, ProjectionOptions, ProjectionResult,
    Sex,
};
use growth_standards::GrowthReference;
use growth_units::{HeightConverter, ImperialConverter};
use proptest::prelude::*;

fn as_cm(display: &str) -> f64 {
    ImperialConverter
        .parse_cm(display)
        .expect("display height parses")
}

fn assert_ordered(result: &ProjectionResult) {
    let current = as_cm(&result.current_height);
    let actual = as_cm(&result.actual_height);
    let potential = as_cm(&result.potential_height);
    assert!(
        potential >= actual && actual >= current,
        "unordered projection: {result:?}"
    );
}

#[test]
fn median_height_is_exact_percentile_for_every_row() {
    let reference = GrowthReference::bundled().expect("bundled reference");
    for sex in Sex::ALL {
        for row in reference.rows(sex) {
            let age_years = row.age_months / 12.0;
            let found =
                find_surrounding_percentiles(row.height_at(Percentile::P50), age_years, sex)
                    .expect("tabulated age");
            assert_eq!(found.exact().map(|p| p.value()), Some(50));
        }
    }
}

#[test]
fn height_between_p25_and_p50_brackets() {
    let found = find_surrounding_percentiles(136.0, 10.0, Sex::Male).expect("age 10 tabulated");
    match found {
        PercentileMatch::Bracket {
            lower,
            upper,
            lower_diff_cm,
            upper_diff_cm,
        } => {
            assert_eq!(lower.value(), 25);
            assert_eq!(upper.value(), 50);
            approx::assert_relative_eq!(lower_diff_cm, 136.0 - 133.9, epsilon = 1e-9);
            approx::assert_relative_eq!(upper_diff_cm, 138.4 - 136.0, epsilon = 1e-9);
        }
        other => panic!("expected bracket, got {other:?}"),
    }
}

#[test]
fn ten_year_old_median_boy_projects_to_adult_median() {
    let heights = get_projected_heights(138.4, 10.0, Sex::Male).expect("age 10 tabulated");
    let reference = GrowthReference::bundled().expect("bundled reference");
    let adult_median = reference
        .row(Sex::Male, 240)
        .expect("adult row")
        .height_at(Percentile::P50);
    assert_eq!(heights.exact, Some(ImperialConverter.format_cm(adult_median)));
    assert_eq!(heights.exact.as_deref(), Some("5'10\""));
    assert_eq!(heights.lower, None);
    assert_eq!(heights.upper, None);
}

#[test]
fn untabulated_age_reports_no_data() {
    let err = get_projected_heights(170.0, 37.0, Sex::Male).unwrap_err();
    assert!(err.to_string().contains("No data found for age"));

    let err = find_surrounding_percentiles(140.0, 10.5, Sex::Female).unwrap_err();
    assert!(err.to_string().contains("No data found for age 10.5"));
}

#[test]
fn missing_sex_in_custom_reference_reports_no_data() {
    let reference = GrowthReference::from_rows(
        "boys-only",
        vec![
            GrowthTableRow::new(
                Sex::Male,
                120.0,
                [125.8, 127.4, 129.8, 133.9, 138.4, 142.9, 147.0, 149.4, 151.0],
            ),
            GrowthTableRow::new(
                Sex::Male,
                240.0,
                [162.7, 164.5, 167.2, 171.7, 176.8, 181.9, 186.4, 189.1, 190.9],
            ),
        ],
    )
    .expect("valid reference");
    let engine = HeightEngine::new(&reference);
    assert!(engine.get_projected_heights(138.4, 10.0, Sex::Female).is_err());

    // The orchestrator swallows the miss and falls back to current height.
    let result = engine.calculate_height_projection(&HeightInput::new(152.4, 10.0, Sex::Female));
    assert_eq!(result.actual_height, "5'0\"");
    assert_eq!(result.potential_height, "5'1\"");
}

#[test]
fn table_estimate_overrides_genetics() {
    // Tabulated age: adult P50 wins over a much taller midparental target.
    let with_table = calculate_height_projection(
        &HeightInput::new(138.4, 10.0, Sex::Male).with_parents(180.0, 200.0),
    );
    assert_eq!(with_table.actual_height, "5'9\"");
    assert_eq!(with_table.potential_height, "5'11\"");

    // Untabulated age: the midparental target is used instead.
    let without_table = calculate_height_projection(
        &HeightInput::new(138.4, 10.5, Sex::Male).with_parents(180.0, 200.0),
    );
    // (200 + 180 + 13) / 2 = 196.5 cm = 77.36 in
    assert_eq!(without_table.actual_height, "6'4\"");
    assert_eq!(without_table.potential_height, "6'6\"");
}

#[test]
fn custom_options_move_the_adult_cutoff() {
    let reference = GrowthReference::bundled().expect("bundled reference");
    let engine =
        HeightEngine::new(reference).with_options(ProjectionOptions::new().with_adult_age_years(16.0));
    let result = engine.calculate_height_projection(&HeightInput::new(172.0, 16.0, Sex::Male));
    assert_eq!(result.actual_height, result.current_height);
    assert_eq!(result.potential_height, "5'9\"");
}

#[test]
fn negative_residual_keeps_projection_ordered() {
    let reference = GrowthReference::bundled().expect("bundled reference");
    let engine = HeightEngine::new(reference)
        .with_options(ProjectionOptions::new().with_residual_growth_inches(-2.0));
    assert_eq!(engine.options().residual_growth_inches, -2.0);

    let child = engine.calculate_height_projection(&HeightInput::new(138.4, 10.0, Sex::Male));
    assert_eq!(child.current_height, engine.converter().format_cm(138.4));
    assert_eq!(child.actual_height, "5'10\"");
    assert_eq!(child.potential_height, "5'10\"");
    assert_ordered(&child);

    let adult = engine.calculate_height_projection(&HeightInput::new(170.0, 30.0, Sex::Male));
    assert_eq!(adult.current_height, "5'7\"");
    assert_eq!(adult.potential_height, "5'7\"");
    assert_ordered(&adult);
}

#[test]
fn projection_snapshot() {
    let cases = [
        HeightInput::new(138.4, 10.0, Sex::Male),
        HeightInput::new(150.0, 12.0, Sex::Female).with_parents(160.0, 175.0),
        HeightInput::new(150.0, 12.5, Sex::Female).with_parents(160.0, 175.0),
        HeightInput::new(172.0, 16.0, Sex::Male),
        HeightInput::new(120.0, 10.0, Sex::Male),
        HeightInput::new(200.0, 10.0, Sex::Male),
        HeightInput::new(165.0, 25.0, Sex::Female).with_parents(150.0, 190.0),
    ];
    let lines = cases
        .iter()
        .map(|input| {
            let result = calculate_height_projection(input);
            format!(
                "{} {}y {}cm: {} -> {} / {}",
                input.sex,
                input.age_years,
                input.height_cm,
                result.current_height,
                result.actual_height,
                result.potential_height
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(lines, @r#"
    male 10y 138.4cm: 4'6" -> 5'9" / 5'11"
    female 12y 150cm: 4'11" -> 5'3" / 5'5"
    female 12.5y 150cm: 4'11" -> 5'2" / 5'4"
    male 16y 172cm: 5'8" -> 5'9" / 5'11"
    male 10y 120cm: 3'11" -> 5'3" / 5'5"
    male 10y 200cm: 6'7" -> 6'7" / 6'8"
    female 25y 165cm: 5'5" -> 5'5" / 5'6"
    "#);
}

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

proptest! {
    #[test]
    fn projection_never_drops_below_current(
        height_cm in 60.0f64..210.0,
        whole_years in 2u32..30,
        half_year in any::<bool>(),
        sex in sex_strategy(),
        parents in proptest::option::of((140.0f64..190.0, 150.0f64..205.0)),
    ) {
        let age_years = f64::from(whole_years) + if half_year { 0.5 } else { 0.0 };
        let mut input = HeightInput::new(height_cm, age_years, sex);
        if let Some((mother, father)) = parents {
            input = input.with_parents(mother, father);
        }
        assert_ordered(&calculate_height_projection(&input));
    }

    #[test]
    fn adults_gain_at_most_one_inch(
        height_cm in 120.0f64..215.0,
        age_years in 21.0f64..90.0,
        sex in sex_strategy(),
        parents in proptest::option::of((140.0f64..190.0, 150.0f64..205.0)),
    ) {
        let mut input = HeightInput::new(height_cm, age_years, sex);
        if let Some((mother, father)) = parents {
            input = input.with_parents(mother, father);
        }
        let result = calculate_height_projection(&input);
        let gain = as_cm(&result.potential_height) - as_cm(&result.current_height);
        prop_assert!(gain <= 2.6, "gain {gain} for {result:?}");
        prop_assert_eq!(&result.actual_height, &result.current_height);
    }
}
