use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use common::BaseAccountDto;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace, warn};
use validator::Validate;

use crate::config::Settings;
use crate::helpers::converters::{accounts_from_dtos, projection_to_dto, summary_to_dto};
use crate::helpers::projections::run_projection;
use crate::schemas::ProjectionQuery;

/// Arguments of the `project` command
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Accounts file, a JSON or YAML list of accounts
    #[arg(short, long)]
    pub input: PathBuf,
    /// Date statuses are derived against (YYYY-MM-DD), defaults to today in UTC
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Months after "today" to project into
    #[arg(long)]
    pub horizon_months: Option<u32>,
    /// Projections per account, anchor excluded
    #[arg(long)]
    pub max_occurrences: Option<usize>,
    /// Keep occurrences due on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    /// Keep occurrences due on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// Window of the "due soon" count
    #[arg(long)]
    pub notice_days: Option<u32>,
    /// Print totals by account kind instead of the occurrences
    #[arg(long)]
    pub summary: bool,
}

impl ProjectArgs {
    fn query(&self) -> ProjectionQuery {
        ProjectionQuery {
            today: self.today,
            horizon_months: self.horizon_months,
            max_occurrences: self.max_occurrences,
            start_date: self.start_date,
            end_date: self.end_date,
            notice_days: self.notice_days,
        }
    }
}

/// Errors raised while reading an accounts file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unsupported input format '{0}', expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON accounts: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML accounts: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            _ => Err(LoadError::UnsupportedFormat(extension)),
        }
    }
}

pub fn parse_accounts(content: &str, format: InputFormat) -> Result<Vec<BaseAccountDto>, LoadError> {
    let accounts = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(accounts)
}

pub fn load_accounts(path: &Path) -> Result<Vec<BaseAccountDto>, LoadError> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_accounts(&content, format)
}

/// Projects the accounts of a file and renders the result as pretty JSON.
pub fn render(args: &ProjectArgs, accounts: Vec<BaseAccountDto>, settings: &Settings) -> Result<String> {
    let query = args.query();
    query.validate()?;

    let accounts = accounts_from_dtos(accounts).map_err(anyhow::Error::msg)?;
    let run = run_projection(&accounts, &query, settings)?;

    for warning in run.projection.warnings() {
        warn!("{}", warning);
    }

    let output = if args.summary {
        let summary = run.projection.summary(run.today, run.notice_days);
        serde_json::to_string_pretty(&summary_to_dto(&summary, &run.projection, run.today))?
    } else {
        serde_json::to_string_pretty(&projection_to_dto(&run.projection, run.today))?
    };
    Ok(output)
}

pub fn project(args: ProjectArgs, settings: Settings) -> Result<()> {
    trace!("Entering project function");
    debug!("Project arguments: {:?}", args);

    let accounts = load_accounts(&args.input)?;
    info!("Loaded {} accounts from {}", accounts.len(), args.input.display());

    let output = render(&args, accounts, &settings)?;
    println!("{}", output);
    Ok(())
}
