use std::sync::LazyLock;

use crate::error::{DietError, Result};
use crate::models::{MealRecord, MealSlot};

/// Candidate meals for each of the four daily slots.
///
/// Every slot is guaranteed non-empty, so a pick can always succeed.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    breakfast: Vec<MealRecord>,
    lunch: Vec<MealRecord>,
    snack: Vec<MealRecord>,
    dinner: Vec<MealRecord>,
}

impl MealCatalog {
    pub fn new(
        breakfast: Vec<MealRecord>,
        lunch: Vec<MealRecord>,
        snack: Vec<MealRecord>,
        dinner: Vec<MealRecord>,
    ) -> Result<Self> {
        let catalog = Self {
            breakfast,
            lunch,
            snack,
            dinner,
        };
        for slot in MealSlot::ALL {
            if catalog.slot(slot).is_empty() {
                return Err(DietError::EmptySlot(slot));
            }
        }
        Ok(catalog)
    }

    pub fn slot(&self, slot: MealSlot) -> &[MealRecord] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Total number of meals across all slots.
    pub fn len(&self) -> usize {
        MealSlot::ALL.iter().map(|s| self.slot(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot that lists a meal with this name, if any.
    pub fn slot_of(&self, name: &str) -> Option<MealSlot> {
        MealSlot::ALL
            .into_iter()
            .find(|slot| self.slot(*slot).iter().any(|m| m.name == name))
    }

    /// The compiled-in catalog.
    pub fn builtin() -> &'static MealCatalog {
        &BUILTIN_CATALOG
    }
}

/// Process-wide catalog, built once on first use and never mutated.
static BUILTIN_CATALOG: LazyLock<MealCatalog> = LazyLock::new(|| MealCatalog {
    breakfast: vec![
        MealRecord::new("Ragi idli + sambhar + fruit", 350, 10, 60, 6, &["vegetarian", "south"]),
        MealRecord::new(
            "Ragi dosa + sambar + coconut chutney",
            380,
            8,
            58,
            10,
            &["vegetarian", "south"],
        ),
        MealRecord::new("Oats upma + curd + fruit", 360, 12, 50, 8, &["vegetarian"]),
        MealRecord::new("Millet porridge + nuts", 320, 8, 40, 12, &["vegetarian", "south"]),
        MealRecord::new("Two boiled eggs + vegetable toast", 300, 18, 25, 12, &["omnivore"]),
        MealRecord::new("Poha + peanuts + curd", 340, 10, 55, 9, &["vegetarian", "south"]),
    ],
    lunch: vec![
        MealRecord::new(
            "Brown rice + dal + vegetable curry + salad",
            650,
            18,
            95,
            12,
            &["vegetarian", "rice"],
        ),
        MealRecord::new(
            "White rice + sambar + rasam + veg",
            700,
            16,
            110,
            10,
            &["vegetarian", "rice", "south"],
        ),
        MealRecord::new("Quinoa bowl + chickpeas + salad", 600, 22, 70, 14, &["vegetarian"]),
        MealRecord::new(
            "Grilled chicken + brown rice + veg salad",
            700,
            40,
            80,
            14,
            &["omnivore", "rice"],
        ),
        MealRecord::new("Chapati (2) + sabzi + curd", 600, 18, 70, 18, &["vegetarian"]),
    ],
    snack: vec![
        MealRecord::new("Fruit bowl + a handful of nuts", 200, 5, 28, 10, &["vegetarian"]),
        MealRecord::new("Sprout salad", 180, 12, 20, 6, &["vegetarian"]),
        MealRecord::new("Buttermilk + cucumber sticks", 120, 5, 12, 4, &["vegetarian"]),
        MealRecord::new("Greek yogurt + berries", 180, 12, 20, 6, &["vegetarian"]),
    ],
    dinner: vec![
        MealRecord::new(
            "Mixed vegetable soup + millet dosa",
            420,
            12,
            50,
            12,
            &["vegetarian", "south"],
        ),
        MealRecord::new("Grilled fish + steamed veg + salad", 450, 35, 20, 18, &["omnivore"]),
        MealRecord::new(
            "Vegetable stir-fry + tofu + small portion of rice",
            480,
            20,
            55,
            15,
            &["vegetarian", "rice"],
        ),
        MealRecord::new("Ragi roti + dal + salad", 420, 15, 50, 10, &["vegetarian", "south"]),
    ],
});
