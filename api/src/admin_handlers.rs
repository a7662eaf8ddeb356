//! Admin endpoints, all gated on the configured bearer token

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use campaign::{Campaign, CampaignStats, NewCampaign, Reservation};
use chrono::Utc;

use crate::models::SetStatusRequest;
use crate::{ApiResult, ApiState};

pub async fn create_campaign(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(request): Json<NewCampaign>,
) -> ApiResult<Json<Campaign>> {
    state.require_admin(&headers)?;

    let mut registry = state.registry.write().await;
    let campaign = registry.create_campaign(request, Utc::now())?;
    state.persist(&registry).await;

    ok_json!(campaign)
}

pub async fn set_campaign_status(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> ApiResult<Json<Campaign>> {
    state.require_admin(&headers)?;

    let mut registry = state.registry.write().await;
    let campaign = registry.set_active(&id, request.is_active)?.clone();
    state.persist(&registry).await;

    ok_json!(campaign)
}

pub async fn confirm_payment(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(reservation_id): Path<String>,
) -> ApiResult<Json<Reservation>> {
    state.require_admin(&headers)?;

    let mut registry = state.registry.write().await;
    let reservation = registry.confirm_payment(&reservation_id, Utc::now())?.clone();
    state.persist(&registry).await;

    ok_json!(reservation)
}

pub async fn get_campaign_stats(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<CampaignStats>> {
    state.require_admin(&headers)?;

    let registry = state.registry.read().await;
    ok_json!(registry.stats(&id)?)
}
