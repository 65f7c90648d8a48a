use chrono::NaiveDate;
use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A date range whose start lies after its end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Recoverable problems found while expanding a single account.
///
/// These never abort a read: the account degrades to its anchor occurrence
/// and the warning is logged and handed back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionWarning {
    /// The stored period is not one of the known cadences
    #[error("account {account_id}: unrecognized recurring period '{period}', only the anchor is projected")]
    UnrecognizedPeriod { account_id: String, period: String },

    /// The account is flagged recurring but carries no period
    #[error("account {account_id}: recurring without a period, only the anchor is projected")]
    MissingPeriod { account_id: String },
}

impl ExpansionWarning {
    pub fn account_id(&self) -> &str {
        match self {
            ExpansionWarning::UnrecognizedPeriod { account_id, .. } => account_id,
            ExpansionWarning::MissingPeriod { account_id } => account_id,
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
