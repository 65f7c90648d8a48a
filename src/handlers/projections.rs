use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{BaseAccountDto, ProjectionDto, ProjectionSummaryDto};
use compute::ComputeError;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::helpers::converters::{accounts_from_dtos, projection_to_dto, summary_to_dto};
use crate::helpers::projections::{run_projection, ProjectionRun};
use crate::schemas::{ApiResponse, AppState, ErrorResponse, ProjectionQuery};

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String, code: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error,
            code: code.to_string(),
            success: false,
        }),
    )
}

fn compute_error_response(e: ComputeError) -> HandlerError {
    let code = match e {
        ComputeError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
    };
    bad_request(e.to_string(), code)
}

/// Converts the request body and runs the projection the query describes.
fn project(
    state: &AppState,
    query: &ProjectionQuery,
    accounts: Vec<BaseAccountDto>,
) -> Result<ProjectionRun, HandlerError> {
    let accounts = accounts_from_dtos(accounts).map_err(|e| {
        warn!("Rejected account payload: {}", e);
        bad_request(e, "INVALID_ACCOUNT")
    })?;
    debug!("Converted {} accounts", accounts.len());

    run_projection(&accounts, query, &state.settings).map_err(|e| {
        error!("Failed to project accounts: {}", e);
        compute_error_response(e)
    })
}

/// Expand accounts into dated occurrences
#[utoipa::path(
    post,
    path = "/api/v1/projections",
    tag = "projections",
    params(ProjectionQuery),
    request_body = Vec<BaseAccountDto>,
    responses(
        (status = 200, description = "Occurrences projected successfully", body = ApiResponse<ProjectionDto>),
        (status = 400, description = "Invalid accounts or query parameters", body = ErrorResponse)
    )
)]
#[instrument(skip(state, accounts), fields(num_accounts = accounts.len()))]
pub async fn create_projection(
    Valid(Query(query)): Valid<Query<ProjectionQuery>>,
    State(state): State<AppState>,
    Json(accounts): Json<Vec<BaseAccountDto>>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectionDto>>), HandlerError> {
    trace!("Entering create_projection function");

    let run = project(&state, &query, accounts)?;
    let data = projection_to_dto(&run.projection, run.today);

    info!(
        "Projected {} occurrences ({} stored, {} projected)",
        data.occurrences.len(),
        data.stored_count,
        data.projected_count
    );

    let response = ApiResponse {
        data,
        message: "Occurrences projected successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Summarize projected occurrences by account kind
#[utoipa::path(
    post,
    path = "/api/v1/projections/summary",
    tag = "projections",
    params(ProjectionQuery),
    request_body = Vec<BaseAccountDto>,
    responses(
        (status = 200, description = "Projection summarized successfully", body = ApiResponse<ProjectionSummaryDto>),
        (status = 400, description = "Invalid accounts or query parameters", body = ErrorResponse)
    )
)]
#[instrument(skip(state, accounts), fields(num_accounts = accounts.len()))]
pub async fn create_projection_summary(
    Valid(Query(query)): Valid<Query<ProjectionQuery>>,
    State(state): State<AppState>,
    Json(accounts): Json<Vec<BaseAccountDto>>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectionSummaryDto>>), HandlerError> {
    trace!("Entering create_projection_summary function");

    let run = project(&state, &query, accounts)?;
    let summary = run.projection.summary(run.today, run.notice_days);
    debug!("Summary over {} notice days: {:?}", run.notice_days, summary);

    let response = ApiResponse {
        data: summary_to_dto(&summary, &run.projection, run.today),
        message: "Projection summarized successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}
