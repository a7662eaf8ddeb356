//! Reservation records and aggregate statistics

use chrono::{DateTime, Utc};
use economics::{AvailabilityInfo, InvestmentCalculation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

/// An investor's commitment to fund `plant_count` plants in one campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub campaign_id: String,
    pub investor_id: String,
    pub plant_count: u32,
    /// Amount owed, equal to `calculation.investment_amount`
    pub amount: f64,
    /// Pricing snapshot taken when the reservation was accepted
    pub calculation: InvestmentCalculation,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn status(&self) -> PaymentStatus {
        if self.is_paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignStats {
    pub campaign_id: String,
    pub investor_count: usize,
    pub reservation_count: usize,
    pub total_plants: u64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    pub availability: AvailabilityInfo,
}
