use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::meal::{MacroTotals, MealSlot};

/// How a day's total compares with the daily calorie target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayNote {
    #[default]
    None,
    OverTarget,
    UnderTarget,
}

impl DayNote {
    pub fn label(&self) -> &'static str {
        match self {
            DayNote::None => "",
            DayNote::OverTarget => "Calories exceed target!",
            DayNote::UnderTarget => "Calories below target!",
        }
    }

    /// Inverse of [`DayNote::label`].
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim() {
            "" => Ok(DayNote::None),
            "Calories exceed target!" => Ok(DayNote::OverTarget),
            "Calories below target!" => Ok(DayNote::UnderTarget),
            other => Err(DietError::InvalidInput(format!("Unknown day note: {}", other))),
        }
    }
}

impl fmt::Display for DayNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four meals chosen for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub breakfast: String,
    pub lunch: String,
    pub snack: String,
    pub dinner: String,
    pub total_kcal: u32,
    pub macro_totals: MacroTotals,
    pub note: DayNote,
}

impl DayPlan {
    /// Meal name chosen for a slot.
    pub fn meal(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// A generated multi-day plan and the target it was checked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub daily_target: u32,
    pub days: Vec<DayPlan>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.days.iter()
    }

    /// Number of days flagged over or under the target.
    pub fn flagged_days(&self) -> usize {
        self.days.iter().filter(|d| d.note != DayNote::None).count()
    }

    /// Mean calories per day, zero for an empty plan.
    pub fn average_kcal(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        let total: u64 = self.days.iter().map(|d| d.total_kcal as u64).sum();
        total as f64 / self.days.len() as f64
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
