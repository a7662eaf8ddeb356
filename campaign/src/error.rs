//! Campaign error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CampaignError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Invalid campaign: {0}")]
    InvalidCampaign(String),

    #[error("Campaign is not active: {0}")]
    CampaignInactive(String),

    #[error("Campaign is not accepting reservations: {0}")]
    CampaignClosed(String),

    #[error("Invalid plant count: {0}")]
    InvalidPlantCount(i64),

    #[error("Below minimum reservation: requested {requested}, minimum {min}")]
    BelowMinimum { min: u32, requested: u32 },

    #[error("Above maximum reservation: requested {requested}, maximum {max}")]
    AboveMaximum { max: u32, requested: u32 },

    #[error("Not enough plants available: requested {requested}, available {available}")]
    InsufficientAvailability { requested: u64, available: u64 },

    #[error("Investor {investor_id} already holds a reservation in campaign {campaign_id}")]
    DuplicateReservation {
        investor_id: String,
        campaign_id: String,
    },

    #[error("Reservation already paid: {0}")]
    AlreadyPaid(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for CampaignError {
    fn from(e: std::io::Error) -> Self {
        CampaignError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CampaignError {
    fn from(e: serde_json::Error) -> Self {
        CampaignError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CampaignError>;
