use anyhow::Result;
use compute::ExpansionOptions;
use compute::recurrence::{DEFAULT_HORIZON_MONTHS, DEFAULT_MAX_OCCURRENCES};
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::schemas::AppState;

/// Config file looked up when `DUEBOOK_CONFIG` is not set. The extension is optional.
pub const DEFAULT_CONFIG_FILE: &str = "duebook";

/// Runtime settings.
///
/// Sources, later ones winning: built-in defaults, the optional config file,
/// then `DUEBOOK_*` environment variables (e.g. `DUEBOOK_HORIZON_MONTHS=6`).
/// Numeric values are held to the same bounds as the API query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct Settings {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Months after "today" that recurring accounts are projected into.
    #[serde(default = "default_horizon_months")]
    #[validate(range(max = 120))]
    pub horizon_months: u32,
    /// Projections per account, anchor excluded.
    #[serde(default = "default_max_occurrences")]
    #[validate(range(max = 240))]
    pub max_occurrences: usize,
    /// Window of the "due soon" badge count.
    #[serde(default = "default_notice_days")]
    #[validate(range(max = 365))]
    pub notice_days: u32,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_max_occurrences() -> usize {
    DEFAULT_MAX_OCCURRENCES
}

fn default_notice_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            horizon_months: default_horizon_months(),
            max_occurrences: default_max_occurrences(),
            notice_days: default_notice_days(),
        }
    }
}

impl Settings {
    /// Loads `.env`, then the file named by `DUEBOOK_CONFIG` (or `duebook.*`), then the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path =
            std::env::var("DUEBOOK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Same as [`Settings::load`] with an explicit config file. A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self> {
        debug!("Loading settings from {}", path);

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("DUEBOOK").try_parsing(true))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn expansion_options(&self) -> ExpansionOptions {
        ExpansionOptions {
            horizon_months: self.horizon_months,
            max_occurrences: self.max_occurrences,
        }
    }
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: Settings) -> AppState {
    tracing::info!(
        "Projection defaults: horizon {} months, {} occurrences per account, {} notice days",
        settings.horizon_months,
        settings.max_occurrences,
        settings.notice_days
    );
    AppState::new(settings)
}
