use model::{AccountKind, BaseAccount, OccurrenceStatus, RecurrencePeriod};
use rust_decimal::Decimal;

use super::{date, AssertResult, ExpansionScenario};
use crate::recurrence::RecurrenceExpander;

/// A yearly insurance premium checked one day after its second due date.
pub struct ScenarioYearlyOverdue {}

impl ScenarioYearlyOverdue {
    pub fn new() -> Self {
        Self {}
    }
}

impl ExpansionScenario for ScenarioYearlyOverdue {
    fn account(&self) -> BaseAccount {
        BaseAccount::recurring(
            "ap-300",
            AccountKind::Payable,
            "Fire insurance",
            Decimal::new(120000, 2),
            date(2023, 6, 1),
            RecurrencePeriod::Yearly,
        )
        .with_category("Insurance")
    }

    fn expander(&self) -> RecurrenceExpander {
        // A full year from today would also reach 2025-06-01, so 11 months keeps one follow-on (DESIGN.md, open question 1).
        // Horizon ends 2025-05-02, one month short of the 2025 premium.
        RecurrenceExpander::new(date(2024, 6, 2)).with_horizon_months(11)
    }

    fn expected(&self) -> AssertResult {
        vec![
            ("ap-300#0".to_string(), date(2023, 6, 1), OccurrenceStatus::Overdue),
            ("ap-300#1".to_string(), date(2024, 6, 1), OccurrenceStatus::Overdue),
        ]
    }
}
