use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// One of the four meal categories in a day, in eating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog meal with its energy, macros and filter tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub name: String,
    pub kcal: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub tags: BTreeSet<String>,
}

impl MealRecord {
    pub fn new(
        name: &str,
        kcal: u32,
        protein_g: u32,
        carbs_g: u32,
        fat_g: u32,
        tags: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            kcal,
            protein_g,
            carbs_g,
            fat_g,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[inline]
    pub fn macros(&self) -> MacroTotals {
        MacroTotals {
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} [{}]",
            self.name,
            self.kcal,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.tags.iter().cloned().collect::<Vec<_>>().join(", ")
        )
    }
}

/// Protein, carbohydrate and fat grams summed over one or more meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl MacroTotals {
    pub fn total_grams(&self) -> u32 {
        self.protein_g + self.carbs_g + self.fat_g
    }

    /// Share of each macro by weight, as percentages (protein, carbs, fat).
    ///
    /// All zeros when no grams were recorded.
    pub fn percentages(&self) -> (f64, f64, f64) {
        let total = self.total_grams();
        if total == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = total as f64;
        (
            self.protein_g as f64 * 100.0 / total,
            self.carbs_g as f64 * 100.0 / total,
            self.fat_g as f64 * 100.0 / total,
        )
    }
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: Self) -> Self::Output {
        MacroTotals {
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
