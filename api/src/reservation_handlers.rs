//! Investor reservation endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use campaign::Reservation;
use chrono::Utc;

use crate::models::{FormattedCalculation, ReservationResponse, ReserveRequest};
use crate::{ApiError, ApiResult, ApiState};

pub async fn create_reservation(
    State(state): State<ApiState>,
    Path(campaign_id): Path<String>,
    Json(request): Json<ReserveRequest>,
) -> ApiResult<Json<ReservationResponse>> {
    let investor_id = request.investor_id.trim();
    if investor_id.is_empty() {
        return Err(ApiError::BadRequest("investor_id is required".to_string()));
    }

    let mut registry = state.registry.write().await;
    let reservation = registry
        .reserve(&campaign_id, investor_id, request.plant_count, Utc::now())
        .map_err(|e| {
            tracing::info!(campaign_id = %campaign_id, investor_id, error = %e, "reservation rejected");
            e
        })?;
    state.persist(&registry).await;

    ok_json!(ReservationResponse {
        formatted: FormattedCalculation::build(&reservation.calculation, &state.currency),
        reservation,
    })
}

pub async fn list_investor_reservations(
    State(state): State<ApiState>,
    Path(investor_id): Path<String>,
) -> ApiResult<Json<Vec<Reservation>>> {
    let registry = state.registry.read().await;

    let reservations: Vec<Reservation> = registry
        .reservations_for_investor(&investor_id)
        .into_iter()
        .cloned()
        .collect();

    ok_json!(reservations)
}
