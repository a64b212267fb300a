use anyhow::Result;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, FetchState, HttpWeatherService, QueryController, refresh};
use inquire::{InquireError, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Weather dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather backend URL and the startup location.
    Configure,

    /// Fetch and render the dashboard for one location, then exit.
    Show {
        /// Location name, e.g. "Bengaluru".
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Some(Command::Configure) => configure(config),
            Some(Command::Show { location }) => show(&config, location).await,
            // No subcommand: the interactive dashboard.
            None => interactive(&config).await,
        }
    }
}

fn configure(mut config: Config) -> Result<()> {
    let url = Text::new("Backend URL:")
        .with_default(config.backend_url.as_deref().unwrap_or("http://localhost:5000"))
        .prompt()?;
    config.set_backend_url(url.trim().to_string());

    let location = Text::new("Startup location:")
        .with_default(config.default_location())
        .prompt()?;
    if !location.trim().is_empty() {
        config.set_default_location(location.trim().to_string());
    }

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(config: &Config, location: String) -> Result<()> {
    let service = HttpWeatherService::new(config.backend_url()?);

    let mut controller = QueryController::new(config.default_location());
    controller.set_draft(location);

    // Whitespace-only input commits nothing, same as in the dashboard.
    let Some(location) = controller.commit() else {
        return Ok(());
    };

    let mut machine = FetchState::new();
    refresh(&mut machine, &service, &location).await;
    render::render(machine.state());

    Ok(())
}

async fn interactive(config: &Config) -> Result<()> {
    let service = HttpWeatherService::new(config.backend_url()?);

    let mut controller = QueryController::new(config.default_location());
    let mut machine = FetchState::new();

    // Startup fetch for the default location.
    render::loading();
    refresh(&mut machine, &service, controller.committed()).await;
    render::render(machine.state());

    loop {
        let input = match Text::new("Search city:")
            .with_help_message("Enter to search, Esc to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        controller.set_draft(input);

        // Enter is the activation event; a draft that trims to empty
        // commits nothing and the prompt simply comes back.
        let Some(location) = controller.commit() else {
            continue;
        };
        tracing::debug!(%location, "location committed");

        render::loading();
        refresh(&mut machine, &service, &location).await;
        render::render(machine.state());
    }

    Ok(())
}
