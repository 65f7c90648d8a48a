//! Domain types for payable and receivable accounts and their projected occurrences.

pub mod entities;
pub mod occurrence;

pub use entities::account::{AccountKind, AccountStatus, BaseAccount};
pub use entities::recurrence_period::RecurrencePeriod;
pub use occurrence::{OccurrenceStatus, ProjectedOccurrence};
