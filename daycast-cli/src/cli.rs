use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use daycast_core::{Config, RefreshReport, WeatherBoard, provider_from_config};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "daycast", version, about = "Current weather and daily forecast")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the city to show.
    Configure,

    /// Show current weather and the daily forecast.
    Show {
        /// City name; defaults to the configured city.
        #[arg(long)]
        city: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(city, json).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let city = Text::new("City:")
        .with_default(&config.city)
        .prompt()
        .context("Failed to read city")?;

    config.set_api_key(api_key);
    config.set_city(city);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut board = WeatherBoard::new(city.unwrap_or(config.city));
    debug!(city = %board.city, base_url = %config.base_url, "refreshing weather");
    let report = board.refresh(provider.as_ref()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", render::render_board(&board));
    }

    check_report(&board.city, &report)
}

/// Partial data is still a success; only a refresh that got nothing fails.
fn check_report(city: &str, report: &RefreshReport) -> anyhow::Result<()> {
    if report.all_failed() {
        bail!("Could not fetch any weather data for {city}");
    }

    Ok(())
}
