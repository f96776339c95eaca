mod export;
mod session;

pub use export::{
    PlanRow, export_plan, load_exported_plan, read_plan_csv, write_plan_csv,
};
pub use session::Session;
