use model::{AccountKind, BaseAccount, OccurrenceStatus};
use rust_decimal::Decimal;

use super::{date, AssertResult, ExpansionScenario};
use crate::recurrence::RecurrenceExpander;

/// A one-off supplier bill that is already past due.
pub struct ScenarioNonRecurring {}

impl ScenarioNonRecurring {
    pub fn new() -> Self {
        Self {}
    }
}

impl ExpansionScenario for ScenarioNonRecurring {
    fn account(&self) -> BaseAccount {
        BaseAccount::new(
            "ap-100",
            AccountKind::Payable,
            "Printer toner",
            Decimal::new(8990, 2),
            date(2024, 1, 15),
        )
        .with_counterparty("Office Supplies Co")
    }

    fn expander(&self) -> RecurrenceExpander {
        RecurrenceExpander::new(date(2024, 2, 1))
    }

    fn expected(&self) -> AssertResult {
        vec![("ap-100#0".to_string(), date(2024, 1, 15), OccurrenceStatus::Overdue)]
    }
}
