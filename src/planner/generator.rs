use chrono::{Days, Local, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, trace};

use crate::error::{DietError, Result};
use crate::models::{DayNote, DayPlan, MacroTotals, MealRecord, MealSlot, Plan, Profile};
use crate::planner::calories::compute_daily_target;
use crate::planner::catalog::MealCatalog;
use crate::planner::constants::*;
use crate::planner::filter::candidate_pool;

/// Classify a day's total against the daily target.
pub fn day_note(total_kcal: u32, daily_target: u32) -> DayNote {
    if total_kcal > daily_target.saturating_add(OVER_TARGET_MARGIN_KCAL) {
        DayNote::OverTarget
    } else if total_kcal < daily_target.saturating_sub(UNDER_TARGET_MARGIN_KCAL) {
        DayNote::UnderTarget
    } else {
        DayNote::None
    }
}

/// Mandatory tag for a slot, given the profile.
pub fn mandatory_tag(slot: MealSlot, profile: &Profile) -> Option<&'static str> {
    match slot {
        MealSlot::Lunch if profile.one_rice_meal_per_day => Some(RICE_TAG),
        _ => None,
    }
}

/// Pick one meal uniformly at random from the slot's candidate pool.
pub fn pick_meal<'a, R: Rng + ?Sized>(
    catalog: &'a MealCatalog,
    slot: MealSlot,
    profile: &Profile,
    rng: &mut R,
) -> Result<&'a MealRecord> {
    let pool = candidate_pool(slot, catalog.slot(slot), profile, mandatory_tag(slot, profile));
    let meal = pool
        .choose(rng)
        .copied()
        .ok_or(DietError::EmptySlot(slot))?;
    trace!(slot = %slot, pool = pool.len(), "picked {}", meal.debug_string());
    Ok(meal)
}

/// Build one day's record from a meal per slot.
fn build_day(date: NaiveDate, meals: [&MealRecord; 4], daily_target: u32) -> DayPlan {
    let total_kcal: u32 = meals.iter().map(|m| m.kcal).sum();
    let macro_totals = meals
        .iter()
        .fold(MacroTotals::default(), |acc, m| acc + m.macros());
    let [breakfast, lunch, snack, dinner] = meals;

    DayPlan {
        date,
        breakfast: breakfast.name.clone(),
        lunch: lunch.name.clone(),
        snack: snack.name.clone(),
        dinner: dinner.name.clone(),
        total_kcal,
        macro_totals,
        note: day_note(total_kcal, daily_target),
    }
}

/// Generate a plan starting today, from the built-in catalog.
pub fn generate_plan(profile: &Profile) -> Result<Plan> {
    let today = Local::now().date_naive();
    generate_plan_with(profile, MealCatalog::builtin(), today, &mut rand::thread_rng())
}

/// Generate a plan with an explicit catalog, start date and random source.
///
/// The profile is validated before any day is produced; on error no plan is
/// returned. Each slot of each day is drawn independently.
pub fn generate_plan_with<R: Rng + ?Sized>(
    profile: &Profile,
    catalog: &MealCatalog,
    start: NaiveDate,
    rng: &mut R,
) -> Result<Plan> {
    profile.validate()?;

    let daily_target = compute_daily_target(profile);
    let mut days = Vec::new();

    for offset in 0..profile.days {
        let date = start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                DietError::validation("days", "plan runs past the last supported date")
            })?;

        let breakfast = pick_meal(catalog, MealSlot::Breakfast, profile, rng)?;
        let lunch = pick_meal(catalog, MealSlot::Lunch, profile, rng)?;
        let snack = pick_meal(catalog, MealSlot::Snack, profile, rng)?;
        let dinner = pick_meal(catalog, MealSlot::Dinner, profile, rng)?;

        let day = build_day(date, [breakfast, lunch, snack, dinner], daily_target);
        debug!(
            date = %day.date,
            total_kcal = day.total_kcal,
            note = ?day.note,
            "planned {} | {} | {} | {}",
            day.breakfast,
            day.lunch,
            day.snack,
            day.dinner
        );
        days.push(day);
    }

    let plan = Plan { daily_target, days };
    info!(
        profile = %profile.name,
        days = plan.len(),
        daily_target,
        flagged = plan.flagged_days(),
        "generated meal plan"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    #[test]
    fn test_day_note_thresholds() {
        assert_eq!(day_note(2000, 1800), DayNote::None);
        assert_eq!(day_note(2001, 1800), DayNote::OverTarget);
        assert_eq!(day_note(1500, 1800), DayNote::None);
        assert_eq!(day_note(1499, 1800), DayNote::UnderTarget);
    }

    #[test]
    fn test_day_note_small_target() {
        assert_eq!(day_note(0, 200), DayNote::None);
    }

    #[test]
    fn test_mandatory_tag_only_for_lunch() {
        let mut profile = Profile::with_defaults("a");
        assert_eq!(mandatory_tag(MealSlot::Lunch, &profile), None);
        profile.one_rice_meal_per_day = true;
        assert_eq!(mandatory_tag(MealSlot::Lunch, &profile), Some(RICE_TAG));
        assert_eq!(mandatory_tag(MealSlot::Dinner, &profile), None);
    }

    #[test]
    fn test_build_day_sums() {
        let meals = [
            MealRecord::new("a", 300, 10, 40, 5, &[]),
            MealRecord::new("b", 600, 20, 80, 10, &[]),
            MealRecord::new("c", 150, 5, 15, 5, &[]),
            MealRecord::new("d", 450, 25, 35, 15, &[]),
        ];
        let day = build_day(start(), [&meals[0], &meals[1], &meals[2], &meals[3]], 1500);
        assert_eq!(day.total_kcal, 1500);
        assert_eq!(
            day.macro_totals,
            MacroTotals {
                protein_g: 60,
                carbs_g: 170,
                fat_g: 35
            }
        );
        assert_eq!(day.note, DayNote::None);
        assert_eq!(day.meal(MealSlot::Snack), "c");
    }

    #[test]
    fn test_dates_are_consecutive() {
        let mut profile = Profile::with_defaults("a");
        profile.days = 3;
        let mut rng = StdRng::seed_from_u64(7);
        let plan = generate_plan_with(&profile, MealCatalog::builtin(), start(), &mut rng).unwrap();
        let dates: Vec<String> = plan.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-02-27", "2024-02-28", "2024-02-29"]);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let profile = Profile::with_defaults("a");
        let a = generate_plan_with(
            &profile,
            MealCatalog::builtin(),
            start(),
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let b = generate_plan_with(
            &profile,
            MealCatalog::builtin(),
            start(),
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut profile = Profile::with_defaults("a");
        profile.days = 0;
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_plan_with(&profile, MealCatalog::builtin(), start(), &mut rng);
        assert!(matches!(result, Err(DietError::Validation { field: "days", .. })));
    }

    #[test]
    fn test_huge_days_rejected() {
        let mut profile = Profile::with_defaults("a");
        profile.days = u32::MAX;
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_plan_with(&profile, MealCatalog::builtin(), start(), &mut rng);
        assert!(matches!(result, Err(DietError::Validation { field: "days", .. })));
    }

    #[test]
    fn test_plan_past_last_date_is_an_error() {
        let mut profile = Profile::with_defaults("a");
        profile.days = 3;
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_plan_with(&profile, MealCatalog::builtin(), NaiveDate::MAX, &mut rng);
        assert!(matches!(result, Err(DietError::Validation { field: "days", .. })));
    }
}
