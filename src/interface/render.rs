use crate::models::{DayNote, DayPlan, MealSlot, Plan};
use crate::state::PlanRow;

/// Width of the widest macro bar.
const BAR_WIDTH: usize = 40;

/// Row marker standing in for the over/under/normal row colours.
fn note_marker(note: DayNote) -> &'static str {
    match note {
        DayNote::None => " ",
        DayNote::OverTarget => "+",
        DayNote::UnderTarget => "-",
    }
}

fn print_table<'a>(rows: impl Iterator<Item = (String, [&'a str; 4], u32, String, &'a str)>) {
    let rows: Vec<_> = rows.collect();
    let width = |i: usize| {
        rows.iter()
            .map(|r| r.1[i].len())
            .chain(std::iter::once(MealSlot::ALL[i].as_str().len()))
            .max()
            .unwrap_or(10)
    };
    let widths = [width(0), width(1), width(2), width(3)];

    println!(
        "  {:<10} | {:<w0$} | {:<w1$} | {:<w2$} | {:<w3$} | {:>5} | Note",
        "Date",
        "Breakfast",
        "Lunch",
        "Snack",
        "Dinner",
        "kcal",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    for (date, meals, kcal, note, marker) in &rows {
        println!(
            "{} {:<10} | {:<w0$} | {:<w1$} | {:<w2$} | {:<w3$} | {:>5} | {}",
            marker,
            date,
            meals[0],
            meals[1],
            meals[2],
            meals[3],
            kcal,
            note,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
    }
}

/// Display a generated plan in a formatted table.
pub fn display_meal_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== Meal Plan (target {} kcal/day) ===", plan.daily_target);
    println!();

    print_table(plan.iter().map(|d| {
        (
            d.date.to_string(),
            [
                d.meal(MealSlot::Breakfast),
                d.meal(MealSlot::Lunch),
                d.meal(MealSlot::Snack),
                d.meal(MealSlot::Dinner),
            ],
            d.total_kcal,
            d.note.label().to_string(),
            note_marker(d.note),
        )
    }));

    println!();
    println!("--- Summary ---");
    println!("Days: {}", plan.len());
    println!("Average kcal/day: {:.0}", plan.average_kcal());
    println!("Days off target: {}", plan.flagged_days());
    println!();
}

/// Display rows re-read from an exported CSV file.
pub fn display_exported_rows(rows: &[PlanRow]) {
    if rows.is_empty() {
        println!("Exported plan has no days.");
        return;
    }

    println!();
    println!("=== Exported Plan ({} days) ===", rows.len());
    println!();

    print_table(rows.iter().map(|r| {
        let marker = r.day_note().map(note_marker).unwrap_or("?");
        (
            r.date.to_string(),
            [
                r.breakfast.as_str(),
                r.lunch.as_str(),
                r.snack.as_str(),
                r.dinner.as_str(),
            ],
            r.total_kcal,
            r.note.clone(),
            marker,
        )
    }));
    println!();
}

/// Display one day's macro split as horizontal bars.
pub fn display_macro_breakdown(day: &DayPlan) {
    let macros = day.macro_totals;
    let (protein_pct, carbs_pct, fat_pct) = macros.percentages();

    println!();
    println!("=== Macros for {} ===", day.date);
    for (label, grams, pct) in [
        ("Protein", macros.protein_g, protein_pct),
        ("Carbs", macros.carbs_g, carbs_pct),
        ("Fat", macros.fat_g, fat_pct),
    ] {
        let bar = "#".repeat((pct / 100.0 * BAR_WIDTH as f64).round() as usize);
        println!("  {:<8} {:>4} g {:>5.1}% {}", label, grams, pct, bar);
    }
    println!();
}
