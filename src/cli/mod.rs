use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::Settings;
use commands::{project, serve, ProjectArgs};

#[derive(Parser)]
#[command(name = "duebook")]
#[command(about = "Projects recurring accounts payable and receivable into dated occurrences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind, overrides the configured one
        #[arg(short, long, env = "DUEBOOK_BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Project the accounts of a JSON or YAML file and print the result
    ///
    /// Examples:
    ///   duebook project --input accounts.yaml --today 2024-06-01
    ///   duebook project --input accounts.json --horizon-months 3 --summary
    Project(ProjectArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = Settings::load()?;

        match self.command {
            Commands::Serve { bind_address } => {
                let settings = Settings {
                    bind_address: bind_address.unwrap_or(settings.bind_address),
                    ..settings
                };
                serve(settings).await?;
            }
            Commands::Project(args) => {
                project(args, settings)?;
            }
        }
        Ok(())
    }
}
