use model::{AccountKind, AccountStatus, BaseAccount, OccurrenceStatus, RecurrencePeriod};
use rust_decimal::Decimal;

use super::{date, AssertResult, ExpansionScenario};
use crate::recurrence::RecurrenceExpander;

/// A quarterly client fee whose leap-day anchor was already received.
pub struct ScenarioSettledQuarterly {}

impl ScenarioSettledQuarterly {
    pub fn new() -> Self {
        Self {}
    }
}

impl ExpansionScenario for ScenarioSettledQuarterly {
    fn account(&self) -> BaseAccount {
        BaseAccount::recurring(
            "ar-600",
            AccountKind::Receivable,
            "Support plan",
            Decimal::new(180000, 2),
            date(2024, 2, 29),
            RecurrencePeriod::Quarterly,
        )
        .with_status(AccountStatus::Received)
        .with_counterparty("Globex")
    }

    fn expander(&self) -> RecurrenceExpander {
        RecurrenceExpander::new(date(2024, 6, 1))
    }

    fn expected(&self) -> AssertResult {
        vec![
            ("ar-600#0".to_string(), date(2024, 2, 29), OccurrenceStatus::Received),
            ("ar-600#1".to_string(), date(2024, 5, 29), OccurrenceStatus::Overdue),
            ("ar-600#2".to_string(), date(2024, 8, 29), OccurrenceStatus::Open),
            ("ar-600#3".to_string(), date(2024, 11, 29), OccurrenceStatus::Open),
            ("ar-600#4".to_string(), date(2025, 2, 28), OccurrenceStatus::Open),
            ("ar-600#5".to_string(), date(2025, 5, 29), OccurrenceStatus::Open),
        ]
    }
}
