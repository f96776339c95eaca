pub mod calories;
pub mod catalog;
pub mod constants;
pub mod filter;
pub mod generator;

pub use calories::{bmr_mifflin_st_jeor, compute_daily_target, tdee};
pub use catalog::MealCatalog;
pub use constants::*;
pub use filter::{candidate_pool, filter_meals, is_allowed, looks_non_vegan};
pub use generator::{day_note, generate_plan, generate_plan_with, mandatory_tag, pick_meal};
