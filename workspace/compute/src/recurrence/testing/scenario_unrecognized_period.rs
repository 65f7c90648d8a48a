use model::{AccountKind, BaseAccount, OccurrenceStatus, RecurrencePeriod};
use rust_decimal::Decimal;

use super::{date, AssertResult, ExpansionScenario};
use crate::error::ExpansionWarning;
use crate::recurrence::RecurrenceExpander;

/// Legacy row with a cadence the expander does not know.
pub struct ScenarioUnrecognizedPeriod {}

impl ScenarioUnrecognizedPeriod {
    pub fn new() -> Self {
        Self {}
    }
}

impl ExpansionScenario for ScenarioUnrecognizedPeriod {
    fn account(&self) -> BaseAccount {
        BaseAccount::recurring(
            "ar-400",
            AccountKind::Receivable,
            "Cleaning services",
            Decimal::new(35000, 2),
            date(2024, 3, 10),
            RecurrencePeriod::from("fortnightly"),
        )
    }

    fn expander(&self) -> RecurrenceExpander {
        RecurrenceExpander::new(date(2024, 3, 1))
    }

    fn expected(&self) -> AssertResult {
        vec![("ar-400#0".to_string(), date(2024, 3, 10), OccurrenceStatus::Open)]
    }

    fn expected_warning(&self) -> Option<ExpansionWarning> {
        Some(ExpansionWarning::UnrecognizedPeriod {
            account_id: "ar-400".to_string(),
            period: "fortnightly".to_string(),
        })
    }
}
