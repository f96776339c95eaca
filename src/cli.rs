use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DietMate — builds multi-day meal plans from a nutritional profile.
#[derive(Parser, Debug)]
#[command(name = "diet_mate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the credential CSV file.
    #[arg(long, global = true, default_value = "users.csv")]
    pub users_file: PathBuf,

    /// Show debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new user.
    Register {
        /// Username to create.
        #[arg(short, long)]
        username: String,
    },

    /// Sign in and generate a meal plan.
    Plan {
        /// Username to sign in as.
        #[arg(short, long)]
        username: String,

        /// Read the profile from a JSON file instead of prompting.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Write the generated plan to this CSV file.
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Seed for reproducible meal picks.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Display a previously exported plan.
    Show {
        /// CSV file written by `plan --export`.
        file: PathBuf,
    },
}
