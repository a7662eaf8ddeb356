//! API Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campaign::CampaignError;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Campaign(#[from] CampaignError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Campaign(e) => match e {
                CampaignError::CampaignNotFound(_) => (StatusCode::NOT_FOUND, "campaign_not_found"),
                CampaignError::ReservationNotFound(_) => {
                    (StatusCode::NOT_FOUND, "reservation_not_found")
                }
                CampaignError::InvalidCampaign(_) => (StatusCode::BAD_REQUEST, "invalid_campaign"),
                CampaignError::InvalidPlantCount(_)
                | CampaignError::BelowMinimum { .. }
                | CampaignError::AboveMaximum { .. } => {
                    (StatusCode::BAD_REQUEST, "invalid_plant_count")
                }
                CampaignError::CampaignInactive(_) => (StatusCode::CONFLICT, "campaign_inactive"),
                CampaignError::CampaignClosed(_) => (StatusCode::CONFLICT, "campaign_closed"),
                CampaignError::InsufficientAvailability { .. } => {
                    (StatusCode::CONFLICT, "insufficient_availability")
                }
                CampaignError::DuplicateReservation { .. } => {
                    (StatusCode::CONFLICT, "duplicate_reservation")
                }
                CampaignError::AlreadyPaid(_) => (StatusCode::CONFLICT, "already_paid"),
                CampaignError::Storage(_) | CampaignError::Serialization(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
                }
            },
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.parts();

        let body = Json(json!({
            "error": error_type,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
