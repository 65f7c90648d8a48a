pub mod scenario_non_recurring;
pub mod scenario_settled_quarterly;
pub mod scenario_unrecognized_period;
pub mod scenario_yearly_overdue;

pub use scenario_month_end::ScenarioMonthEnd;
pub use scenario_non_recurring::ScenarioNonRecurring;
pub use scenario_occurrence_cap::ScenarioOccurrenceCap;
pub use scenario_settled_quarterly::ScenarioSettledQuarterly;
pub use scenario_unrecognized_period::ScenarioUnrecognizedPeriod;
pub use scenario_yearly_overdue::ScenarioYearlyOverdue;

use chrono::NaiveDate;
use model::{BaseAccount, OccurrenceStatus};

use crate::error::ExpansionWarning;
use crate::recurrence::RecurrenceExpander;

/// Type representing the expected result of a test scenario.
/// in the following schema (occurrence_id, due date, expected status)
pub type AssertResult = Vec<(String, NaiveDate, OccurrenceStatus)>;

/// Trait for building expansion test scenarios.
pub trait ExpansionScenario {
    /// The stored account to expand.
    fn account(&self) -> BaseAccount;

    /// The expander, carrying "today" and the bounds of the scenario.
    fn expander(&self) -> RecurrenceExpander;

    fn expected(&self) -> AssertResult;

    fn expected_warning(&self) -> Option<ExpansionWarning> {
        None
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Expands the scenario's account and compares every occurrence with the expectation.
pub fn run_and_assert_scenario(scenario: &dyn ExpansionScenario) {
    let _guard = init_test_tracing();

    let account = scenario.account();
    let expansion = scenario.expander().expand_detailed(&account);

    let actual: AssertResult = expansion
        .occurrences
        .iter()
        .map(|o| (o.occurrence_id().to_string(), o.occurrence_due_date(), o.status()))
        .collect();

    assert_eq!(actual, scenario.expected());
    assert_eq!(expansion.warning, scenario.expected_warning());

    for occurrence in &expansion.occurrences {
        assert_eq!(occurrence.account(), &account);
        assert_eq!(occurrence.is_projection(), occurrence.occurrence_id() != format!("{}#0", account.id));
    }
}

/// Routes tracing output of a test to the test writer so warnings show up with `--nocapture`.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_non_recurring() {
        run_and_assert_scenario(&ScenarioNonRecurring::new());
    }

    #[test]
    fn test_scenario_month_end() {
        run_and_assert_scenario(&ScenarioMonthEnd::new());
    }

    #[test]
    fn test_scenario_yearly_overdue() {
        run_and_assert_scenario(&ScenarioYearlyOverdue::new());
    }

    #[test]
    fn test_scenario_unrecognized_period() {
        run_and_assert_scenario(&ScenarioUnrecognizedPeriod::new());
    }

    #[test]
    fn test_scenario_occurrence_cap() {
        run_and_assert_scenario(&ScenarioOccurrenceCap::new());
    }

    #[test]
    fn test_scenario_settled_quarterly() {
        run_and_assert_scenario(&ScenarioSettledQuarterly::new());
    }
}
