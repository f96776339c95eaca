pub mod auth;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DietError, Result};
pub use models::{DayPlan, MealRecord, Plan, Profile};
pub use planner::{compute_daily_target, generate_plan};
