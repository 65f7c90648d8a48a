use chrono::NaiveDate;
use compute::{default_expander, ComputeError, DateRange, Projection, RecurrenceExpander};
use model::BaseAccount;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::schemas::ProjectionQuery;

/// A projection together with the "today" it was computed for.
#[derive(Debug, Clone)]
pub struct ProjectionRun {
    pub today: NaiveDate,
    pub projection: Projection,
    pub notice_days: u32,
}

/// Builds the expander for a query, falling back to the configured defaults.
pub fn expander_for(query: &ProjectionQuery, settings: &Settings) -> RecurrenceExpander {
    let defaults = settings.expansion_options();
    default_expander(query.today)
        .with_horizon_months(query.horizon_months.unwrap_or(defaults.horizon_months))
        .with_max_occurrences(query.max_occurrences.unwrap_or(defaults.max_occurrences))
}

/// Range filter requested by the query, if any. An open bound is unbounded.
pub fn range_for(query: &ProjectionQuery) -> Result<Option<DateRange>, ComputeError> {
    match (query.start_date, query.end_date) {
        (None, None) => Ok(None),
        (start, end) => DateRange::new(
            start.unwrap_or(NaiveDate::MIN),
            end.unwrap_or(NaiveDate::MAX),
        )
        .map(Some),
    }
}

/// Expands `accounts` as the query asks, shared by the HTTP handlers and the CLI.
#[instrument(skip(accounts, settings), fields(num_accounts = accounts.len()))]
pub fn run_projection(
    accounts: &[BaseAccount],
    query: &ProjectionQuery,
    settings: &Settings,
) -> Result<ProjectionRun, ComputeError> {
    let range = range_for(query)?;
    let expander = expander_for(query, settings);
    debug!(
        "Projecting with today {} and options {:?}",
        expander.today(),
        expander.options()
    );

    let mut projection = Projection::build(accounts, &expander);
    if let Some(range) = range {
        projection = projection.within(range);
    }

    Ok(ProjectionRun {
        today: expander.today(),
        projection,
        notice_days: query.notice_days.unwrap_or(settings.notice_days),
    })
}
