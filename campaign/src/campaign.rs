//! Campaign records and admin input validation

use chrono::{DateTime, Utc};
use economics::{
    constants::MAX_RETURN_FRACTION, funding_progress, AvailabilityCalculator, AvailabilityInfo,
    InvestmentCalculation, ReturnCalculator, TimeRemaining,
};
use serde::{Deserialize, Serialize};

use crate::error::{CampaignError, Result};

/// One funding round for an agricultural production cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    /// Fixed for the campaign's lifetime; plant counts are derived from it.
    pub cost_per_plant: f64,
    /// Expected average sale price per plant at harvest
    pub market_price: f64,
    /// Investor share of net profit (0.20 = 20%)
    pub expected_return_percentage: f64,
    pub target_amount: f64,
    /// Never decreases; grows by each reservation's investment amount
    pub raised_amount: f64,
    pub min_plants: u32,
    pub max_plants: Option<u32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn availability(&self) -> AvailabilityInfo {
        AvailabilityCalculator::calculate_plant_availability(
            self.target_amount,
            self.raised_amount,
            self.cost_per_plant,
        )
    }

    pub fn quote(&self, plant_count: i64) -> InvestmentCalculation {
        ReturnCalculator::calculate_investment_return(
            plant_count,
            self.cost_per_plant,
            self.market_price,
            self.expected_return_percentage,
        )
    }

    pub fn time_remaining(&self, now: DateTime<Utc>) -> TimeRemaining {
        TimeRemaining::between(now, self.end_date)
    }

    pub fn funding_progress(&self) -> f64 {
        funding_progress(self.target_amount, self.raised_amount)
    }

    /// Accepting reservations: active and inside `[start_date, end_date)`.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.start_date <= now && now < self.end_date
    }
}

fn default_min_plants() -> u32 {
    1
}

/// Admin input for a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCampaign {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    pub cost_per_plant: f64,
    pub market_price: f64,
    pub expected_return_percentage: f64,
    pub target_amount: f64,
    #[serde(default = "default_min_plants")]
    pub min_plants: u32,
    #[serde(default)]
    pub max_plants: Option<u32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl NewCampaign {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if !(self.cost_per_plant > 0.0) || !self.cost_per_plant.is_finite() {
            return Err(invalid("cost_per_plant must be a positive amount"));
        }
        if !(self.market_price >= 0.0) || !self.market_price.is_finite() {
            return Err(invalid("market_price must be a non-negative amount"));
        }
        if !(self.target_amount >= 0.0) || !self.target_amount.is_finite() {
            return Err(invalid("target_amount must be a non-negative amount"));
        }
        if !(0.0..=MAX_RETURN_FRACTION).contains(&self.expected_return_percentage) {
            return Err(invalid("expected_return_percentage must be between 0 and 1"));
        }
        if self.min_plants == 0 {
            return Err(invalid("min_plants must be at least 1"));
        }
        if let Some(max) = self.max_plants {
            if max < self.min_plants {
                return Err(invalid("max_plants must not be below min_plants"));
            }
        }
        if self.end_date <= self.start_date {
            return Err(invalid("end_date must be after start_date"));
        }

        let capacity =
            AvailabilityCalculator::calculate_total_plants_from_target(self.target_amount, self.cost_per_plant);
        if capacity == 0 {
            return Err(invalid("target_amount must cover at least one plant"));
        }

        Ok(())
    }

    pub(crate) fn into_campaign(self, id: String, now: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            location: self.location,
            cost_per_plant: self.cost_per_plant,
            market_price: self.market_price,
            expected_return_percentage: self.expected_return_percentage,
            target_amount: self.target_amount,
            raised_amount: 0.0,
            min_plants: self.min_plants,
            max_plants: self.max_plants,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: true,
            created_at: now,
        }
    }
}

fn invalid(reason: &str) -> CampaignError {
    CampaignError::InvalidCampaign(reason.to_string())
}
