pub mod prompts;
pub mod render;

pub use prompts::{prompt_day_selection, prompt_password, prompt_profile, prompt_yes_no};
pub use render::{display_exported_rows, display_macro_breakdown, display_meal_plan};
