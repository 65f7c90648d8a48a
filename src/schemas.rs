use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

use crate::config::Settings;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Projection defaults used when a request leaves them out
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Query parameters shared by the projection endpoints and the `project` command
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams, Validate)]
pub struct ProjectionQuery {
    /// Date statuses are derived against (YYYY-MM-DD), defaults to the current UTC date
    pub today: Option<NaiveDate>,
    /// Months after "today" to project into (default from settings)
    #[validate(range(max = 120))]
    pub horizon_months: Option<u32>,
    /// Projections per account, anchor excluded (default from settings)
    #[validate(range(max = 240))]
    pub max_occurrences: Option<usize>,
    /// Keep occurrences due on or after this date (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Keep occurrences due on or before this date (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    /// Window of the "due soon" count, summary only (default from settings)
    #[validate(range(max = 365))]
    pub notice_days: Option<u32>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::projections::create_projection,
        crate::handlers::projections::create_projection_summary,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ProjectionQuery,
            common::BaseAccountDto,
            common::AccountKindDto,
            common::AccountStatusDto,
            common::OccurrenceStatusDto,
            common::ProjectedOccurrenceDto,
            common::ProjectionDto,
            common::KindTotalsDto,
            common::ProjectionSummaryDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "projections", description = "Recurring account projection endpoints"),
    ),
    info(
        title = "Duebook API",
        version = "0.1.0",
        description = "Projects recurring accounts payable and receivable into dated occurrences",
    )
)]
pub struct ApiDoc;
