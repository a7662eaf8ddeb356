//! AgroFund Campaign Module
//!
//! Campaigns, reservations and the registry that ties them together:
//! - Admin campaign creation and activation
//! - Reservation validation, pricing and recording
//! - Payment confirmation
//! - Per-campaign aggregate statistics
//! - JSON snapshots for persistence

pub mod campaign;
pub mod error;
pub mod registry;
pub mod reservation;

pub use campaign::{Campaign, NewCampaign};
pub use error::{CampaignError, Result};
pub use registry::CampaignRegistry;
pub use reservation::{CampaignStats, PaymentStatus, Reservation};
