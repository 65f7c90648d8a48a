//! Stored records as the persistence layer hands them over.
//! Nothing in here is written back; projections live in `crate::occurrence`.

pub mod account;
pub mod recurrence_period;
