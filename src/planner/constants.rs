use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin–St Jeor BMR coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Sex constant added to BMR for men.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Sex constant added to BMR for women.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity factors
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_FACTOR: f64 = 1.2;
pub const LIGHT_FACTOR: f64 = 1.375;
pub const MODERATE_FACTOR: f64 = 1.55;
pub const ACTIVE_FACTOR: f64 = 1.725;

/// Factor used when an activity name is not recognized.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = LIGHT_FACTOR;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit applied for weight loss.
pub const LOSE_DEFICIT_KCAL: f64 = 400.0;

/// Daily surplus applied for weight gain.
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Weight-loss targets never drop below this.
pub const MIN_LOSE_TARGET_KCAL: u32 = 1200;

// ─────────────────────────────────────────────────────────────────────────────
// Day notes
// ─────────────────────────────────────────────────────────────────────────────

/// A day is over target when its total exceeds target + this margin.
pub const OVER_TARGET_MARGIN_KCAL: u32 = 200;

/// A day is under target when its total is below target - this margin.
pub const UNDER_TARGET_MARGIN_KCAL: u32 = 300;

// ─────────────────────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────────────────────

/// Diabetic profiles skip meals with more carbohydrate grams than this.
pub const DIABETIC_MAX_CARBS_G: u32 = 90;

/// Tag carried by meals unsuitable for vegetarians.
pub const OMNIVORE_TAG: &str = "omnivore";

/// Tag forced on lunch when one rice meal per day is requested.
pub const RICE_TAG: &str = "rice";

/// Lowercase name fragments that exclude a meal for vegans.
pub const VEGAN_EXCLUDED_FRAGMENTS: [&str; 3] = ["egg", "curd", "milk"];

/// Multiplier turning BMR into TDEE for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_FACTOR,
        ActivityLevel::Light => LIGHT_FACTOR,
        ActivityLevel::Moderate => MODERATE_FACTOR,
        ActivityLevel::Active => ACTIVE_FACTOR,
    }
}

/// Multiplier for a free-text activity name, falling back to the light factor.
pub fn activity_multiplier(name: &str) -> f64 {
    name.parse::<ActivityLevel>()
        .map(activity_factor)
        .unwrap_or(DEFAULT_ACTIVITY_FACTOR)
}
