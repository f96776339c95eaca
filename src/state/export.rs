use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{DayNote, DayPlan, Plan};

/// One exported row per day, in a fixed column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Breakfast")]
    pub breakfast: String,

    #[serde(rename = "Lunch")]
    pub lunch: String,

    #[serde(rename = "Snack")]
    pub snack: String,

    #[serde(rename = "Dinner")]
    pub dinner: String,

    #[serde(rename = "Total kcal")]
    pub total_kcal: u32,

    #[serde(rename = "Note")]
    pub note: String,
}

impl PlanRow {
    pub fn day_note(&self) -> Result<DayNote> {
        DayNote::from_label(&self.note)
    }
}

impl From<&DayPlan> for PlanRow {
    fn from(day: &DayPlan) -> Self {
        Self {
            date: day.date,
            breakfast: day.breakfast.clone(),
            lunch: day.lunch.clone(),
            snack: day.snack.clone(),
            dinner: day.dinner.clone(),
            total_kcal: day.total_kcal,
            note: day.note.label().to_string(),
        }
    }
}

/// Write a plan as CSV rows with a header line.
pub fn write_plan_csv<W: Write>(writer: W, plan: &Plan) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for day in plan {
        wtr.serialize(PlanRow::from(day))?;
    }
    // An empty plan still gets its header
    if plan.is_empty() {
        wtr.write_record([
            "Date",
            "Breakfast",
            "Lunch",
            "Snack",
            "Dinner",
            "Total kcal",
            "Note",
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read rows written by [`write_plan_csv`], checking every note label.
pub fn read_plan_csv<R: Read>(reader: R) -> Result<Vec<PlanRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        let row: PlanRow = row?;
        row.day_note()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Export a plan to a CSV file.
pub fn export_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_plan_csv(file, plan)?;
    info!(path = %path.as_ref().display(), days = plan.len(), "exported plan");
    Ok(())
}

/// Load rows from a previously exported CSV file.
pub fn load_exported_plan<P: AsRef<Path>>(path: P) -> Result<Vec<PlanRow>> {
    let file = File::open(path)?;
    read_plan_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroTotals;

    fn sample_plan() -> Plan {
        Plan {
            daily_target: 1849,
            days: vec![DayPlan {
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                breakfast: "Poha + peanuts + curd".to_string(),
                lunch: "Chapati (2) + sabzi + curd".to_string(),
                snack: "Sprout salad".to_string(),
                dinner: "Ragi roti + dal + salad".to_string(),
                total_kcal: 1540,
                macro_totals: MacroTotals {
                    protein_g: 55,
                    carbs_g: 195,
                    fat_g: 43,
                },
                note: DayNote::UnderTarget,
            }],
        }
    }

    #[test]
    fn test_written_layout() {
        let mut buf = Vec::new();
        write_plan_csv(&mut buf, &sample_plan()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Breakfast,Lunch,Snack,Dinner,Total kcal,Note"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-05-01,Poha + peanuts + curd,Chapati (2) + sabzi + curd,Sprout salad,Ragi roti + dal + salad,1540,Calories below target!"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_plan_writes_header_only() {
        let plan = Plan {
            daily_target: 1800,
            days: vec![],
        };
        let mut buf = Vec::new();
        write_plan_csv(&mut buf, &plan).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), "Date,Breakfast,Lunch,Snack,Dinner,Total kcal,Note");
        assert!(read_plan_csv(text.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_rejects_unknown_note() {
        let text = "Date,Breakfast,Lunch,Snack,Dinner,Total kcal,Note\n\
                    2024-05-01,a,b,c,d,1500,Too much salt\n";
        assert!(read_plan_csv(text.as_bytes()).is_err());
    }
}
