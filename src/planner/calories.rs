use crate::models::{Gender, Goal, Profile};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin–St Jeor), in kcal/day.
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * age as f64
        + offset
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn tdee(profile: &Profile) -> f64 {
    let bmr = bmr_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    bmr * activity_factor(profile.activity)
}

/// Daily calorie target for the profile's goal.
///
/// Pure function of the profile; malformed inputs are rejected by
/// [`Profile::validate`] before they reach this point.
pub fn compute_daily_target(profile: &Profile) -> u32 {
    let tdee = tdee(profile);
    // `as` saturates, so a negative TDEE (absurd inputs) becomes 0
    match profile.goal {
        Goal::Lose => ((tdee - LOSE_DEFICIT_KCAL).floor() as u32).max(MIN_LOSE_TARGET_KCAL),
        Goal::Gain => (tdee + GAIN_SURPLUS_KCAL).floor() as u32,
        Goal::Maintain => tdee.floor() as u32,
    }
}
