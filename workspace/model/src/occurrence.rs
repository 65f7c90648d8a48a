use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::account::{AccountKind, AccountStatus, BaseAccount};

/// Status of a single occurrence as shown on calendars and dashboards.
///
/// `Paid` and `Received` only ever appear on an anchor whose stored row is
/// already settled; projections are never assumed to be settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccurrenceStatus {
    Open,
    Overdue,
    Paid,
    Received,
}

impl OccurrenceStatus {
    /// Open or overdue depending on the due date alone.
    pub fn for_due_date(due_date: NaiveDate, today: NaiveDate) -> Self {
        if due_date < today {
            OccurrenceStatus::Overdue
        } else {
            OccurrenceStatus::Open
        }
    }

    /// Status of the anchor: a settled stored status wins, anything else is derived.
    pub fn for_anchor(stored: AccountStatus, due_date: NaiveDate, today: NaiveDate) -> Self {
        match stored {
            AccountStatus::Paid => OccurrenceStatus::Paid,
            AccountStatus::Received => OccurrenceStatus::Received,
            AccountStatus::Pending | AccountStatus::Overdue => Self::for_due_date(due_date, today),
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, OccurrenceStatus::Paid | OccurrenceStatus::Received)
    }
}

/// One dated instance of an account, either the stored anchor or a projection.
///
/// Occurrences are computed on every read and never persisted. The
/// `original_id` is None for the anchor and carries the base account id for
/// projections, so consumers can leave projections out of row counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedOccurrence {
    account: BaseAccount,
    occurrence_due_date: NaiveDate,
    occurrence_id: String,
    original_id: Option<String>,
    status: OccurrenceStatus,
}

impl ProjectedOccurrence {
    /// Creates the anchor occurrence of `account`.
    pub fn anchor(account: BaseAccount, today: NaiveDate) -> Self {
        let status = OccurrenceStatus::for_anchor(account.status, account.due_date, today);
        Self {
            occurrence_due_date: account.due_date,
            occurrence_id: occurrence_id(&account.id, 0),
            original_id: None,
            status,
            account,
        }
    }

    /// Creates the `index`-th follow-on of `account` (index 1 is the first projection).
    pub fn follow_on(account: BaseAccount, index: usize, due_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            occurrence_due_date: due_date,
            occurrence_id: occurrence_id(&account.id, index),
            original_id: Some(account.id.clone()),
            status: OccurrenceStatus::for_due_date(due_date, today),
            account,
        }
    }

    /// Gets the base account this occurrence was computed from.
    pub fn account(&self) -> &BaseAccount {
        &self.account
    }

    pub fn occurrence_due_date(&self) -> NaiveDate {
        self.occurrence_due_date
    }

    pub fn occurrence_id(&self) -> &str {
        &self.occurrence_id
    }

    pub fn original_id(&self) -> Option<&str> {
        self.original_id.as_deref()
    }

    pub fn status(&self) -> OccurrenceStatus {
        self.status
    }

    pub fn amount(&self) -> Decimal {
        self.account.amount
    }

    pub fn kind(&self) -> AccountKind {
        self.account.kind
    }

    /// Returns true for computed follow-ons, false for the stored anchor.
    pub fn is_projection(&self) -> bool {
        self.original_id.is_some()
    }
}

fn occurrence_id(base_id: &str, index: usize) -> String {
    format!("{base_id}#{index}")
}
