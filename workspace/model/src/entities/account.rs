use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::recurrence_period::RecurrencePeriod;

/// Which side of the ledger an account sits on.
/// Informational only, expansion treats both kinds the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Money the company owes to a supplier.
    Payable,
    /// Money a client owes to the company.
    Receivable,
}

/// Status of a stored account row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Pending,
    Overdue,
    /// Payable settled.
    Paid,
    /// Receivable settled.
    Received,
}

impl AccountStatus {
    /// Returns true for statuses that confirm the money actually moved.
    pub fn is_settled(&self) -> bool {
        matches!(self, AccountStatus::Paid | AccountStatus::Received)
    }
}

/// An account payable or receivable as stored by the back office.
///
/// The `due_date` is the anchor occurrence. When `is_recurring` is set the
/// account repeats every `recurring_period`; the period is ignored otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseAccount {
    pub id: String,
    pub kind: AccountKind,
    pub description: String,
    /// Supplier name for payables, client name for receivables.
    pub counterparty: Option<String>,
    pub category: Option<String>,
    /// Non-negative monetary value of every occurrence.
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: AccountStatus,
    pub is_recurring: bool,
    pub recurring_period: Option<RecurrencePeriod>,
}

impl BaseAccount {
    /// Creates a pending, non-recurring account.
    pub fn new(
        id: impl Into<String>,
        kind: AccountKind,
        description: impl Into<String>,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            description: description.into(),
            counterparty: None,
            category: None,
            amount,
            due_date,
            status: AccountStatus::Pending,
            is_recurring: false,
            recurring_period: None,
        }
    }

    /// Creates a pending account repeating every `period`.
    pub fn recurring(
        id: impl Into<String>,
        kind: AccountKind,
        description: impl Into<String>,
        amount: Decimal,
        due_date: NaiveDate,
        period: RecurrencePeriod,
    ) -> Self {
        Self {
            is_recurring: true,
            recurring_period: Some(period),
            ..Self::new(id, kind, description, amount, due_date)
        }
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The period to expand with, or None when the account does not repeat.
    pub fn effective_period(&self) -> Option<&RecurrencePeriod> {
        if self.is_recurring {
            self.recurring_period.as_ref()
        } else {
            None
        }
    }
}
