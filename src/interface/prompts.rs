use dialoguer::{Confirm, Input, Password, Select};

use crate::error::Result;
use crate::models::profile::{parse_positive_float, parse_positive_int};
use crate::models::{ActivityLevel, DietPreference, Gender, Goal, Plan, Profile};

/// Prompt for a password, asking twice when `confirm` is set.
pub fn prompt_password(confirm: bool) -> Result<String> {
    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Prompt for a positive whole number, re-asking until it parses.
fn prompt_int(field: &'static str, label: &str, default: u32) -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()?;

        match parse_positive_int(field, &input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for a positive decimal number, re-asking until it parses.
fn prompt_float(field: &'static str, label: &str, default: f64) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()?;

        match parse_positive_float(field, &input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Pick one of a fixed set of options and parse it into `T`.
fn prompt_choice<T: std::str::FromStr<Err = crate::error::DietError>>(
    label: &str,
    options: &[&str],
    default: &str,
) -> Result<T> {
    let default_idx = options.iter().position(|o| *o == default).unwrap_or(0);
    let selection = Select::new()
        .with_prompt(label)
        .items(options)
        .default(default_idx)
        .interact()?;
    options[selection].parse()
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile, pre-filled with the defaults for `name`.
pub fn prompt_profile(name: &str) -> Result<Profile> {
    let defaults = Profile::with_defaults(name);

    let name: String = Input::new()
        .with_prompt("Name")
        .default(defaults.name.clone())
        .interact_text()?;
    let age = prompt_int("age", "Age", defaults.age)?;
    let gender: Gender = prompt_choice("Gender", &Gender::OPTIONS, "M")?;
    let weight_kg = prompt_float("weight_kg", "Weight (kg)", defaults.weight_kg)?;
    let height_cm = prompt_float("height_cm", "Height (cm)", defaults.height_cm)?;
    let activity: ActivityLevel =
        prompt_choice("Activity", &ActivityLevel::OPTIONS, defaults.activity.as_str())?;
    let goal: Goal = prompt_choice("Goal", &Goal::OPTIONS, "maintain")?;
    let days = prompt_int("days", "Plan days", defaults.days)?;
    let diabetic = prompt_yes_no("Diabetic?", defaults.diabetic)?;
    let hypertensive = prompt_yes_no("Hypertensive?", defaults.hypertensive)?;
    let diet_pref: DietPreference =
        prompt_choice("Diet preference", &DietPreference::OPTIONS, "omnivore")?;
    let prefer_south_indian =
        prompt_yes_no("Prefer South-Indian breakfast?", defaults.prefer_south_indian)?;
    let one_rice_meal_per_day =
        prompt_yes_no("Require 1 rice meal/day?", defaults.one_rice_meal_per_day)?;

    let profile = Profile {
        name,
        age,
        gender,
        weight_kg,
        height_cm,
        activity,
        goal,
        days,
        diabetic,
        hypertensive,
        diet_pref,
        prefer_south_indian,
        one_rice_meal_per_day,
    };
    profile.validate()?;
    Ok(profile)
}

/// Let the user pick a day to inspect. `None` when they are done.
pub fn prompt_day_selection(plan: &Plan) -> Result<Option<usize>> {
    let mut options: Vec<String> = plan
        .iter()
        .map(|d| format!("{} ({} kcal)", d.date, d.total_kcal))
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Select a day to see its macros")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < plan.len()).then_some(selection))
}
