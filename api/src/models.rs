//! Request and response bodies

use campaign::{Campaign, Reservation};
use chrono::{DateTime, Utc};
use economics::{AvailabilityInfo, CurrencyFormat, InvestmentCalculation, TimeRemaining};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListCampaignsQuery {
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub cost_per_plant: f64,
    pub expected_return_percentage: f64,
    pub target_amount: f64,
    pub raised_amount: f64,
    pub funding_progress: f64,
    pub availability: AvailabilityInfo,
    pub is_active: bool,
    pub end_date: DateTime<Utc>,
    pub time_remaining: String,
}

impl CampaignSummary {
    pub fn build(campaign: &Campaign, now: DateTime<Utc>) -> Self {
        Self {
            id: campaign.id.clone(),
            title: campaign.title.clone(),
            location: campaign.location.clone(),
            cost_per_plant: campaign.cost_per_plant,
            expected_return_percentage: campaign.expected_return_percentage,
            target_amount: campaign.target_amount,
            raised_amount: campaign.raised_amount,
            funding_progress: campaign.funding_progress(),
            availability: campaign.availability(),
            is_active: campaign.is_active,
            end_date: campaign.end_date,
            time_remaining: campaign.time_remaining(now).label(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CampaignDetail {
    pub campaign: Campaign,
    pub availability: AvailabilityInfo,
    pub funding_progress: f64,
    pub time_remaining: TimeRemaining,
    pub time_remaining_label: String,
    pub is_open: bool,
    pub formatted: FormattedCampaign,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedCampaign {
    pub cost_per_plant: String,
    pub market_price: String,
    pub target_amount: String,
    pub raised_amount: String,
}

impl CampaignDetail {
    pub fn build(campaign: &Campaign, now: DateTime<Utc>, currency: &CurrencyFormat) -> Self {
        let time_remaining = campaign.time_remaining(now);
        Self {
            availability: campaign.availability(),
            funding_progress: campaign.funding_progress(),
            time_remaining,
            time_remaining_label: time_remaining.label(),
            is_open: campaign.is_open(now),
            formatted: FormattedCampaign {
                cost_per_plant: currency.format(campaign.cost_per_plant),
                market_price: currency.format(campaign.market_price),
                target_amount: currency.format(campaign.target_amount),
                raised_amount: currency.format(campaign.raised_amount),
            },
            campaign: campaign.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub plant_count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub campaign_id: String,
    pub plant_count: i64,
    pub calculation: InvestmentCalculation,
    pub return_on_investment: f64,
    pub available_plants: u64,
    pub within_availability: bool,
    pub formatted: FormattedCalculation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedCalculation {
    pub investment_amount: String,
    pub estimated_income: String,
    pub net_profit: String,
    pub projected_return: String,
    pub total_return: String,
}

impl FormattedCalculation {
    pub fn build(calc: &InvestmentCalculation, currency: &CurrencyFormat) -> Self {
        Self {
            investment_amount: currency.format(calc.investment_amount),
            estimated_income: currency.format(calc.estimated_income),
            net_profit: currency.format(calc.net_profit),
            projected_return: currency.format(calc.projected_return),
            total_return: currency.format(calc.total_return),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReserveRequest {
    pub investor_id: String,
    pub plant_count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub reservation: Reservation,
    pub formatted: FormattedCalculation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetStatusRequest {
    pub is_active: bool,
}
