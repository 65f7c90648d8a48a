//! Expansion of one stored account into its dated occurrences.
//!
//! A recurring account yields its anchor followed by projections one period
//! apart. Projection `k` is always computed from the anchor date (`due_date +
//! k * period`), never from the previous projection, so a month-end anchor
//! keeps landing on month ends after passing through a short month.
//!
//! Two bounds stop the sequence: the horizon (counted from `today`, not from
//! the anchor) and the occurrence cap. The cap is checked on every iteration
//! even when the horizon alone would end the loop.

use chrono::NaiveDate;
use model::{BaseAccount, ProjectedOccurrence};
use tracing::{debug, instrument, trace, warn};

use crate::date_step::add_months;
use crate::error::ExpansionWarning;

#[cfg(test)]
mod properties;
#[cfg(test)]
pub mod testing;

/// Default forward window, in months from today.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Default maximum number of projections per account, the anchor excluded.
pub const DEFAULT_MAX_OCCURRENCES: usize = 24;

/// Bounds applied to every expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Months after today beyond which no projection is generated.
    pub horizon_months: u32,
    /// Maximum number of projections per account, the anchor excluded.
    pub max_occurrences: usize,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

/// Occurrences of one account plus the warning raised while producing them, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub occurrences: Vec<ProjectedOccurrence>,
    pub warning: Option<ExpansionWarning>,
}

/// Expands `account` into its anchor and projections.
///
/// Never fails: a recurring account without a usable period degrades to its
/// anchor, see [`expand_detailed`] for the warning that goes with it.
pub fn expand(
    account: &BaseAccount,
    today: NaiveDate,
    horizon_months: u32,
    max_occurrences: usize,
) -> Vec<ProjectedOccurrence> {
    let options = ExpansionOptions {
        horizon_months,
        max_occurrences,
    };
    expand_detailed(account, today, options).occurrences
}

/// Same as [`expand`], also returning the warning for malformed recurrence data.
#[instrument(level = "trace", skip(account), fields(account_id = %account.id))]
pub fn expand_detailed(account: &BaseAccount, today: NaiveDate, options: ExpansionOptions) -> Expansion {
    let mut occurrences = vec![ProjectedOccurrence::anchor(account.clone(), today)];

    if !account.is_recurring {
        trace!("Account {} is not recurring, anchor only", account.id);
        return Expansion {
            occurrences,
            warning: None,
        };
    }

    let step = match account.effective_period() {
        None => {
            let warning = ExpansionWarning::MissingPeriod {
                account_id: account.id.clone(),
            };
            warn!("{}", warning);
            return Expansion {
                occurrences,
                warning: Some(warning),
            };
        }
        Some(period) => match period.months() {
            Some(step) => step,
            None => {
                let warning = ExpansionWarning::UnrecognizedPeriod {
                    account_id: account.id.clone(),
                    period: period.to_string(),
                };
                warn!("{}", warning);
                return Expansion {
                    occurrences,
                    warning: Some(warning),
                };
            }
        },
    };

    let limit = add_months(today, options.horizon_months);
    let mut last_due = account.due_date;

    for index in 1..=options.max_occurrences {
        let Some(offset) = u32::try_from(index).ok().and_then(|i| i.checked_mul(step)) else {
            break;
        };
        let due = add_months(account.due_date, offset);

        // Saturated dates stop repeating themselves at NaiveDate::MAX.
        if due > limit || due <= last_due {
            break;
        }

        trace!(
            "Adding projection {} on {} for account id={}",
            index, due, account.id
        );
        occurrences.push(ProjectedOccurrence::follow_on(account.clone(), index, due, today));
        last_due = due;
    }

    if occurrences.len() > options.max_occurrences {
        debug!(
            "Account {} reached the cap of {} projections before {}",
            account.id, options.max_occurrences, limit
        );
    }

    Expansion {
        occurrences,
        warning: None,
    }
}

/// Expands accounts against a fixed "today" and fixed bounds.
///
/// Hand one of these to every consumer (calendar, dashboard, badge counts) so
/// they all project the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceExpander {
    today: NaiveDate,
    options: ExpansionOptions,
}

impl RecurrenceExpander {
    /// Creates an expander with the default horizon and cap.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            options: ExpansionOptions::default(),
        }
    }

    pub fn with_horizon_months(mut self, horizon_months: u32) -> Self {
        self.options.horizon_months = horizon_months;
        self
    }

    pub fn with_max_occurrences(mut self, max_occurrences: usize) -> Self {
        self.options.max_occurrences = max_occurrences;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn options(&self) -> ExpansionOptions {
        self.options
    }

    pub fn expand(&self, account: &BaseAccount) -> Vec<ProjectedOccurrence> {
        self.expand_detailed(account).occurrences
    }

    pub fn expand_detailed(&self, account: &BaseAccount) -> Expansion {
        expand_detailed(account, self.today, self.options)
    }
}
