use tracing::warn;

use crate::models::{DietPreference, MealRecord, MealSlot, Profile};
use crate::planner::constants::*;

/// Whether a meal's name trips the vegan exclusion list.
///
/// Matches on name fragments rather than tags, so "Buttermilk" is excluded
/// while an unlisted animal product would pass.
pub fn looks_non_vegan(name: &str) -> bool {
    let lower = name.to_lowercase();
    VEGAN_EXCLUDED_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

/// Whether a single meal survives the profile's dietary constraints.
pub fn is_allowed(meal: &MealRecord, profile: &Profile, mandatory_tag: Option<&str>) -> bool {
    if profile.diet_pref == DietPreference::Vegetarian && meal.has_tag(OMNIVORE_TAG) {
        return false;
    }
    if profile.diet_pref == DietPreference::Vegan && looks_non_vegan(&meal.name) {
        return false;
    }
    if profile.diabetic && meal.carbs_g > DIABETIC_MAX_CARBS_G {
        return false;
    }
    if let Some(tag) = mandatory_tag {
        if !meal.has_tag(tag) {
            return false;
        }
    }
    true
}

/// Meals from `candidates` that satisfy every constraint, in input order.
pub fn filter_meals<'a>(
    candidates: &'a [MealRecord],
    profile: &Profile,
    mandatory_tag: Option<&str>,
) -> Vec<&'a MealRecord> {
    candidates
        .iter()
        .filter(|meal| is_allowed(meal, profile, mandatory_tag))
        .collect()
}

/// Pool to draw a slot's meal from.
///
/// Falls back to the whole unfiltered slot when no meal satisfies the
/// constraints, so a meal can always be chosen.
pub fn candidate_pool<'a>(
    slot: MealSlot,
    candidates: &'a [MealRecord],
    profile: &Profile,
    mandatory_tag: Option<&str>,
) -> Vec<&'a MealRecord> {
    let pool = filter_meals(candidates, profile, mandatory_tag);
    if !pool.is_empty() {
        return pool;
    }

    warn!(
        slot = %slot,
        mandatory_tag = mandatory_tag.unwrap_or("-"),
        diet_pref = ?profile.diet_pref,
        diabetic = profile.diabetic,
        "no {} meal satisfies the profile constraints, using the full slot",
        slot
    );
    candidates.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunches() -> Vec<MealRecord> {
        vec![
            MealRecord::new("Brown rice + dal", 650, 18, 95, 12, &["vegetarian", "rice"]),
            MealRecord::new("Quinoa bowl", 600, 22, 70, 14, &["vegetarian"]),
            MealRecord::new("Grilled chicken + rice", 700, 40, 80, 14, &["omnivore", "rice"]),
            MealRecord::new("Chapati + sabzi + Curd", 600, 18, 70, 18, &["vegetarian"]),
        ]
    }

    fn names(pool: &[&MealRecord]) -> Vec<String> {
        pool.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_omnivore_keeps_everything() {
        let meals = lunches();
        let profile = Profile::with_defaults("a");
        assert_eq!(filter_meals(&meals, &profile, None).len(), meals.len());
    }

    #[test]
    fn test_vegetarian_drops_omnivore_tag() {
        let meals = lunches();
        let mut profile = Profile::with_defaults("a");
        profile.diet_pref = DietPreference::Vegetarian;
        let pool = filter_meals(&meals, &profile, None);
        assert!(pool.iter().all(|m| !m.has_tag("omnivore")));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_vegan_drops_by_name_case_insensitive() {
        let meals = lunches();
        let mut profile = Profile::with_defaults("a");
        profile.diet_pref = DietPreference::Vegan;
        let pool = filter_meals(&meals, &profile, None);
        // Name heuristic only: the chicken dish carries no excluded fragment
        assert_eq!(
            names(&pool),
            vec!["Brown rice + dal", "Quinoa bowl", "Grilled chicken + rice"]
        );
    }

    #[test]
    fn test_looks_non_vegan() {
        assert!(looks_non_vegan("Two boiled EGGS"));
        assert!(looks_non_vegan("Buttermilk + cucumber sticks"));
        assert!(!looks_non_vegan("Sprout salad"));
    }

    #[test]
    fn test_diabetic_drops_high_carb() {
        let meals = lunches();
        let mut profile = Profile::with_defaults("a");
        profile.diabetic = true;
        let pool = filter_meals(&meals, &profile, None);
        assert!(pool.iter().all(|m| m.carbs_g <= DIABETIC_MAX_CARBS_G));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_mandatory_tag() {
        let meals = lunches();
        let profile = Profile::with_defaults("a");
        let pool = filter_meals(&meals, &profile, Some(RICE_TAG));
        assert_eq!(names(&pool), vec!["Brown rice + dal", "Grilled chicken + rice"]);
    }

    #[test]
    fn test_rules_combine() {
        let meals = lunches();
        let mut profile = Profile::with_defaults("a");
        profile.diet_pref = DietPreference::Vegetarian;
        profile.diabetic = true;
        // Only rice lunches are the 95g brown rice and the chicken: both excluded
        assert!(filter_meals(&meals, &profile, Some(RICE_TAG)).is_empty());
    }

    #[test]
    fn test_candidate_pool_falls_back_to_full_slot() {
        let meals = lunches();
        let mut profile = Profile::with_defaults("a");
        profile.diet_pref = DietPreference::Vegetarian;
        profile.diabetic = true;
        let pool = candidate_pool(MealSlot::Lunch, &meals, &profile, Some(RICE_TAG));
        assert_eq!(pool.len(), meals.len());
    }

    #[test]
    fn test_candidate_pool_keeps_filtered_when_possible() {
        let meals = lunches();
        let mut profile = Profile::with_defaults("a");
        profile.diabetic = true;
        let pool = candidate_pool(MealSlot::Lunch, &meals, &profile, None);
        assert_eq!(pool.len(), 3);
    }
}
