use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};

/// Longest plan a profile may ask for, one year.
pub const MAX_PLAN_DAYS: u32 = 366;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest option to a misspelled choice, if any is close enough.
fn suggest<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    options
        .iter()
        .map(|opt| (*opt, jaro_winkler(opt, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(opt, _)| opt)
}

fn unknown_choice(field: &'static str, input: &str, options: &[&str]) -> DietError {
    let reason = match suggest(input, options) {
        Some(close) => format!("unknown value '{}' (did you mean '{}'?)", input, close),
        None => format!("unknown value '{}' (expected one of: {})", input, options.join(", ")),
    };
    DietError::validation(field, reason)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const OPTIONS: [&'static str; 2] = ["M", "F"];
}

impl FromStr for Gender {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Gender::Male),
            "F" | "FEMALE" => Ok(Gender::Female),
            other => Err(unknown_choice("gender", other, &Self::OPTIONS)),
        }
    }
}

/// Physical activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const OPTIONS: [&'static str; 4] = ["sedentary", "light", "moderate", "active"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            other => Err(unknown_choice("activity", other, &Self::OPTIONS)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub const OPTIONS: [&'static str; 3] = ["lose", "maintain", "gain"];
}

impl FromStr for Goal {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            other => Err(unknown_choice("goal", other, &Self::OPTIONS)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietPreference {
    pub const OPTIONS: [&'static str; 3] = ["omnivore", "vegetarian", "vegan"];
}

impl FromStr for DietPreference {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "omnivore" => Ok(DietPreference::Omnivore),
            "vegetarian" => Ok(DietPreference::Vegetarian),
            "vegan" => Ok(DietPreference::Vegan),
            other => Err(unknown_choice("diet_pref", other, &Self::OPTIONS)),
        }
    }
}

/// Physical stats, goal and dietary constraints for one plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub activity: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    pub days: u32,
    #[serde(default)]
    pub diabetic: bool,
    #[serde(default)]
    pub hypertensive: bool,
    #[serde(default)]
    pub diet_pref: DietPreference,
    #[serde(default)]
    pub prefer_south_indian: bool,
    #[serde(default)]
    pub one_rice_meal_per_day: bool,
}

impl Profile {
    /// Profile pre-filled with the form defaults offered to a new user.
    pub fn with_defaults(name: &str) -> Self {
        Self {
            name: name.to_string(),
            age: 25,
            gender: Gender::Male,
            weight_kg: 60.0,
            height_cm: 165.0,
            activity: ActivityLevel::Light,
            goal: Goal::Maintain,
            days: 7,
            diabetic: false,
            hypertensive: false,
            diet_pref: DietPreference::Omnivore,
            prefer_south_indian: true,
            one_rice_meal_per_day: false,
        }
    }

    /// Check every field that must be positive before a plan is generated.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(DietError::validation("age", "must be greater than 0"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(DietError::validation(
                "weight_kg",
                format!("must be a positive number, got {}", self.weight_kg),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(DietError::validation(
                "height_cm",
                format!("must be a positive number, got {}", self.height_cm),
            ));
        }
        if self.days < 1 {
            return Err(DietError::validation("days", "must be at least 1"));
        }
        if self.days > MAX_PLAN_DAYS {
            return Err(DietError::validation(
                "days",
                format!("must be at most {}, got {}", MAX_PLAN_DAYS, self.days),
            ));
        }
        Ok(())
    }

    /// Parse a profile from a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }
}

/// Parse a positive whole number typed by the user.
pub fn parse_positive_int(field: &'static str, input: &str) -> Result<u32> {
    let value: u32 = input
        .trim()
        .parse()
        .map_err(|_| DietError::validation(field, format!("'{}' is not a whole number", input)))?;
    if value == 0 {
        return Err(DietError::validation(field, "must be greater than 0"));
    }
    Ok(value)
}

/// Parse a positive decimal number typed by the user.
pub fn parse_positive_float(field: &'static str, input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DietError::validation(field, format!("'{}' is not a number", input)))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DietError::validation(field, "must be a positive number"));
    }
    Ok(value)
}
