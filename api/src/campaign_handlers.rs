//! Public campaign endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use economics::AvailabilityInfo;
use serde::Serialize;

use crate::models::{
    CampaignDetail, CampaignSummary, FormattedCalculation, ListCampaignsQuery, QuoteRequest,
    QuoteResponse,
};
use crate::{ApiError, ApiResult, ApiState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub campaigns: usize,
    pub reservations: usize,
}

pub async fn health_check(State(state): State<ApiState>) -> ApiResult<Json<HealthResponse>> {
    let registry = state.registry.read().await;

    ok_json!(HealthResponse {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs(),
        campaigns: registry.campaign_count(),
        reservations: registry.reservation_count(),
    })
}

pub async fn list_campaigns(
    State(state): State<ApiState>,
    Query(query): Query<ListCampaignsQuery>,
) -> ApiResult<Json<Vec<CampaignSummary>>> {
    let registry = state.registry.read().await;
    let now = Utc::now();

    let summaries: Vec<CampaignSummary> = registry
        .campaigns(query.active_only)
        .into_iter()
        .map(|c| CampaignSummary::build(c, now))
        .collect();

    ok_json!(summaries)
}

pub async fn get_campaign(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CampaignDetail>> {
    let registry = state.registry.read().await;
    let campaign = registry.campaign(&id)?;

    ok_json!(CampaignDetail::build(campaign, Utc::now(), &state.currency))
}

pub async fn get_availability(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AvailabilityInfo>> {
    let registry = state.registry.read().await;
    let campaign = registry.campaign(&id)?;

    ok_json!(campaign.availability())
}

/// Price a prospective reservation without recording it
pub async fn quote_reservation(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(request): Json<QuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    if request.plant_count <= 0 {
        return Err(ApiError::BadRequest(format!(
            "plant_count must be positive, got {}",
            request.plant_count
        )));
    }

    let registry = state.registry.read().await;
    let campaign = registry.campaign(&id)?;

    let calculation = campaign.quote(request.plant_count);
    let available_plants = registry.available_plants(&id)?;

    ok_json!(QuoteResponse {
        campaign_id: campaign.id.clone(),
        plant_count: request.plant_count,
        return_on_investment: calculation.return_on_investment(),
        available_plants,
        within_availability: (request.plant_count as u64) <= available_plants,
        formatted: FormattedCalculation::build(&calculation, &state.currency),
        calculation,
    })
}
