//! Common transport-layer types shared between the HTTP API and the CLI.
//! These structs mirror the domain model with serde and OpenAPI derives so
//! both surfaces read and write the same JSON shapes.

mod projection;

pub use projection::{KindTotalsDto, ProjectionDto, ProjectionSummaryDto};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Accounts =====================

/// Side of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountKindDto {
    Payable,
    Receivable,
}

/// Stored status of an account row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatusDto {
    #[default]
    Pending,
    Overdue,
    Paid,
    Received,
}

/// Account payable or receivable as handed over by the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BaseAccountDto {
    pub id: String,
    pub kind: AccountKindDto,
    #[serde(default)]
    pub description: String,
    /// Supplier name for payables, client name for receivables
    #[serde(default)]
    pub counterparty: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: Decimal,
    /// Due date of the stored (anchor) occurrence (YYYY-MM-DD)
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: AccountStatusDto,
    #[serde(default)]
    pub is_recurring: bool,
    /// "monthly", "quarterly" or "yearly"; other values are projected as anchor only
    #[serde(default)]
    pub recurring_period: Option<String>,
}

// ===================== Occurrences =====================

/// Status of one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceStatusDto {
    Open,
    Overdue,
    Paid,
    Received,
}

/// One dated occurrence of an account, stored anchor or projection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProjectedOccurrenceDto {
    /// Unique within one projection, "{account id}#{index}"
    pub occurrence_id: String,
    /// Base account id for projections, null for the stored row itself
    pub original_id: Option<String>,
    pub occurrence_due_date: NaiveDate,
    pub status: OccurrenceStatusDto,
    /// The stored account this occurrence was computed from
    pub account: BaseAccountDto,
}
