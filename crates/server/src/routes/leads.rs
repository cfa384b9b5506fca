use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use service::leads::domain::{LeadInput, LeadOutcome, LeadStatus};

use crate::routes::ServerState;

/// Contact form endpoint. Always answers `{success, message}`; the status
/// code tells validation failures (400) from storage failures (500).
#[utoipa::path(
    post, path = "/api/leads", tag = "leads",
    request_body = crate::openapi::LeadRequest,
    responses(
        (status = 200, description = "Lead stored", body = crate::openapi::LeadResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::LeadResponse),
        (status = 500, description = "Submit Failed", body = crate::openapi::LeadResponse)
    )
)]
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<LeadInput>, JsonRejection>,
) -> (StatusCode, Json<LeadOutcome>) {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable lead payload");
            return (StatusCode::BAD_REQUEST, Json(LeadOutcome::invalid(Vec::new())));
        }
    };

    let outcome = state.leads.submit(input).await;
    (status_for(&outcome), Json(outcome))
}

fn status_for(outcome: &LeadOutcome) -> StatusCode {
    match outcome.status {
        LeadStatus::Accepted => StatusCode::OK,
        LeadStatus::Invalid => StatusCode::BAD_REQUEST,
        LeadStatus::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
