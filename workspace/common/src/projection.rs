use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ProjectedOccurrenceDto;

/// Occurrences of many accounts sorted by due date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProjectionDto {
    /// "Today" the statuses were derived against
    pub today: NaiveDate,
    pub occurrences: Vec<ProjectedOccurrenceDto>,
    /// Number of stored rows, projections excluded
    pub stored_count: usize,
    pub projected_count: usize,
    /// Accounts whose recurrence could not be projected
    pub warnings: Vec<String>,
}

/// Amounts of one account kind split by status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct KindTotalsDto {
    pub open: Decimal,
    pub overdue: Decimal,
    pub settled: Decimal,
    /// Open plus overdue
    pub outstanding: Decimal,
    pub overdue_count: usize,
}

/// Dashboard figures over a projection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProjectionSummaryDto {
    pub today: NaiveDate,
    pub payable: KindTotalsDto,
    pub receivable: KindTotalsDto,
    pub stored_count: usize,
    pub projected_count: usize,
    /// Open occurrences due within the notice window
    pub due_soon_count: usize,
    /// Receivable outstanding minus payable outstanding
    pub net_outstanding: Decimal,
    pub warnings: Vec<String>,
}
