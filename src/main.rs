use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use diet_mate_rs::auth::{AuthProvider, CsvCredentialStore, RegisterOutcome};
use diet_mate_rs::cli::{Cli, Command};
use diet_mate_rs::error::Result;
use diet_mate_rs::interface::{
    display_exported_rows, display_macro_breakdown, display_meal_plan, prompt_day_selection,
    prompt_password, prompt_profile, prompt_yes_no,
};
use diet_mate_rs::logging::init_logging;
use diet_mate_rs::models::Profile;
use diet_mate_rs::planner::MealCatalog;
use diet_mate_rs::state::{Session, export_plan, load_exported_plan};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut store = CsvCredentialStore::new(&cli.users_file);

    match cli.command {
        Command::Register { username } => cmd_register(&mut store, &username),
        Command::Plan {
            username,
            profile,
            export,
            seed,
        } => cmd_plan(&store, &username, profile.as_deref(), export, seed),
        Command::Show { file } => cmd_show(&file),
    }
}

/// Register a new user in the credential file.
fn cmd_register(store: &mut CsvCredentialStore, username: &str) -> Result<()> {
    let password = prompt_password(true)?;

    match store.register(username.trim(), &password)? {
        RegisterOutcome::Registered => println!("User registered! You can log in now."),
        RegisterOutcome::AlreadyExists => println!("Username already exists!"),
    }
    Ok(())
}

/// Sign in, collect a profile and generate a plan.
fn cmd_plan(
    store: &CsvCredentialStore,
    username: &str,
    profile_path: Option<&Path>,
    export: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let password = prompt_password(false)?;
    let mut session = Session::login(store, username.trim(), &password)?;
    println!("Login successful. Welcome, {}!", session.username());

    let profile = match profile_path {
        Some(path) => Profile::from_json(&fs::read_to_string(path)?)?,
        None => prompt_profile(session.username())?,
    };

    let today = Local::now().date_naive();
    let catalog = MealCatalog::builtin();
    match seed {
        Some(seed) => session.generate(profile, catalog, today, &mut StdRng::seed_from_u64(seed))?,
        None => session.generate(profile, catalog, today, &mut rand::thread_rng())?,
    };
    if let Some(target) = session.daily_target() {
        println!("Your daily calorie target: {} kcal", target);
    }
    let Some(plan) = session.plan() else {
        return Ok(());
    };

    display_meal_plan(plan);

    if profile_path.is_none() {
        while let Some(idx) = prompt_day_selection(plan)? {
            display_macro_breakdown(&plan.days[idx]);
        }
    }

    let export = match export {
        Some(path) => Some(path),
        None if profile_path.is_none() && prompt_yes_no("Export plan to CSV?", false)? => {
            Some(PathBuf::from(format!("{}_plan.csv", session.username())))
        }
        None => None,
    };

    if let Some(path) = export {
        export_plan(&path, plan)?;
        println!("Plan saved to {}", path.display());
    }

    Ok(())
}

/// Display a plan exported earlier.
fn cmd_show(file: &Path) -> Result<()> {
    let rows = load_exported_plan(file)?;
    display_exported_rows(&rows);
    Ok(())
}
