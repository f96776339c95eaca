pub mod meal;
pub mod plan;
pub mod profile;

pub use meal::{MacroTotals, MealRecord, MealSlot};
pub use plan::{DayNote, DayPlan, Plan};
pub use profile::{ActivityLevel, DietPreference, Gender, Goal, MAX_PLAN_DAYS, Profile};
