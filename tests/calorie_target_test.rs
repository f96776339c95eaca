#[macro_use]
extern crate assert_float_eq;

use diet_mate_rs::models::{ActivityLevel, Gender, Goal, Profile};
use diet_mate_rs::planner::{
    MIN_LOSE_TARGET_KCAL, activity_multiplier, bmr_mifflin_st_jeor, compute_daily_target, tdee,
};

fn make_profile(goal: Goal) -> Profile {
    Profile {
        name: "Meera".to_string(),
        age: 25,
        gender: Gender::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        activity: ActivityLevel::Light,
        goal,
        days: 7,
        diabetic: false,
        hypertensive: false,
        diet_pref: Default::default(),
        prefer_south_indian: true,
        one_rice_meal_per_day: false,
    }
}

#[test]
fn test_reference_bmr_and_tdee() {
    let profile = make_profile(Goal::Maintain);
    assert_float_absolute_eq!(
        bmr_mifflin_st_jeor(profile.weight_kg, profile.height_cm, profile.age, profile.gender),
        1345.25,
        1e-9
    );
    assert_float_absolute_eq!(tdee(&profile), 1849.71875, 1e-6);
}

#[test]
fn test_reference_targets_per_goal() {
    assert_eq!(compute_daily_target(&make_profile(Goal::Maintain)), 1849);
    assert_eq!(compute_daily_target(&make_profile(Goal::Lose)), 1449);
    assert_eq!(compute_daily_target(&make_profile(Goal::Gain)), 2149);
}

#[test]
fn test_target_is_deterministic() {
    let profile = make_profile(Goal::Lose);
    let first = compute_daily_target(&profile);
    for _ in 0..100 {
        assert_eq!(compute_daily_target(&profile), first);
    }
}

#[test]
fn test_activity_scales_target() {
    let mut targets = Vec::new();
    for activity in [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ] {
        let mut profile = make_profile(Goal::Maintain);
        profile.activity = activity;
        targets.push(compute_daily_target(&profile));
    }
    assert!(targets.windows(2).all(|w| w[0] < w[1]), "{:?}", targets);
    // 1345.25 * 1.2 = 1614.3
    assert_eq!(targets[0], 1614);
}

#[test]
fn test_unknown_activity_name_uses_light_factor() {
    assert_float_absolute_eq!(activity_multiplier("athlete"), 1.375, 1e-12);
    assert_float_absolute_eq!(activity_multiplier("moderate"), 1.55, 1e-12);
}

#[test]
fn test_lose_never_below_minimum() {
    let mut profile = make_profile(Goal::Lose);
    profile.weight_kg = 45.0;
    profile.height_cm = 150.0;
    profile.age = 60;
    profile.activity = ActivityLevel::Sedentary;
    assert_eq!(compute_daily_target(&profile), MIN_LOSE_TARGET_KCAL);
}
