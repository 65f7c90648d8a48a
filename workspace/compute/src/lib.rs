pub mod date_step;
pub mod error;
pub mod projection;
pub mod recurrence;

use chrono::{NaiveDate, Utc};

pub use error::{ComputeError, ExpansionWarning};
pub use projection::{DateRange, KindTotals, Projection, ProjectionSummary};
pub use recurrence::{expand, expand_detailed, Expansion, ExpansionOptions, RecurrenceExpander};

/// Returns the expander every consumer should use unless told otherwise.
///
/// Uses the provided date as "today", or the current UTC date if none is
/// provided. The horizon and cap are the defaults of [`ExpansionOptions`].
pub fn default_expander(today: Option<NaiveDate>) -> RecurrenceExpander {
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    RecurrenceExpander::new(today)
}
