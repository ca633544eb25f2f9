//! Interactive terminal session for the caltrack calorie budget tracker.

mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use caltrack::{CalorieForm, Settings};

use crate::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "caltrack",
    version,
    about = "Track calories against a daily budget"
)]
struct Cli {
    /// Seed the calorie budget before the session starts
    #[arg(long)]
    budget: Option<String>,

    /// Render reports as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to a TOML settings file (defaults to the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("caltrack").join("config.toml"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(default_config_path);
    let mut settings = Settings::load(config_path.as_deref())?;
    if cli.no_color {
        settings = settings.with_color(false);
    }
    if !settings.color {
        colored::control::set_override(false);
    }

    tracing::debug!(?settings, json = cli.json, "starting session");

    let mut form = CalorieForm::new();
    if let Some(budget) = cli.budget.or(settings.default_budget) {
        form.set_budget(budget);
    }

    let stdin = io::stdin();
    let mut session = Session::new(form, cli.json);
    session.run(stdin.lock(), io::stdout())?;

    Ok(())
}
