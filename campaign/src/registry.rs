//! Campaign registry
//!
//! Owns every campaign and reservation record. Reservations are validated
//! against the campaign's window, per-investor limits and remaining plant
//! capacity, then priced and recorded in one step, so a caller that holds
//! `&mut CampaignRegistry` cannot over-allocate a campaign.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::campaign::{Campaign, NewCampaign};
use crate::error::{CampaignError, Result};
use crate::reservation::{CampaignStats, Reservation};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignRegistry {
    campaigns: HashMap<String, Campaign>,
    reservations: Vec<Reservation>,
}

impl CampaignRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_campaign(&mut self, new: NewCampaign, now: DateTime<Utc>) -> Result<Campaign> {
        new.validate()?;

        let id = Uuid::new_v4().to_string();
        let campaign = new.into_campaign(id.clone(), now);
        self.campaigns.insert(id.clone(), campaign.clone());

        info!(
            campaign_id = %id,
            title = %campaign.title,
            target_amount = campaign.target_amount,
            "campaign created"
        );
        Ok(campaign)
    }

    pub fn campaign(&self, id: &str) -> Result<&Campaign> {
        self.campaigns
            .get(id)
            .ok_or_else(|| CampaignError::CampaignNotFound(id.to_string()))
    }

    /// Campaigns ordered by closing date, soonest first.
    pub fn campaigns(&self, active_only: bool) -> Vec<&Campaign> {
        let mut list: Vec<&Campaign> = self
            .campaigns
            .values()
            .filter(|c| !active_only || c.is_active)
            .collect();
        list.sort_by(|a, b| a.end_date.cmp(&b.end_date).then_with(|| a.title.cmp(&b.title)));
        list
    }

    pub fn set_active(&mut self, id: &str, active: bool) -> Result<&Campaign> {
        let campaign = self
            .campaigns
            .get_mut(id)
            .ok_or_else(|| CampaignError::CampaignNotFound(id.to_string()))?;

        campaign.is_active = active;
        info!(campaign_id = %id, active, "campaign status changed");
        Ok(campaign)
    }

    /// Validate, price and record a reservation.
    pub fn reserve(
        &mut self,
        campaign_id: &str,
        investor_id: &str,
        plant_count: i64,
        now: DateTime<Utc>,
    ) -> Result<Reservation> {
        let campaign = self
            .campaigns
            .get_mut(campaign_id)
            .ok_or_else(|| CampaignError::CampaignNotFound(campaign_id.to_string()))?;

        if !campaign.is_active {
            return Err(CampaignError::CampaignInactive(campaign_id.to_string()));
        }
        if now < campaign.start_date || now >= campaign.end_date {
            return Err(CampaignError::CampaignClosed(campaign_id.to_string()));
        }

        let requested = u32::try_from(plant_count)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(CampaignError::InvalidPlantCount(plant_count))?;

        if requested < campaign.min_plants {
            return Err(CampaignError::BelowMinimum {
                min: campaign.min_plants,
                requested,
            });
        }
        if let Some(max) = campaign.max_plants {
            if requested > max {
                return Err(CampaignError::AboveMaximum { max, requested });
            }
        }

        let duplicate = self
            .reservations
            .iter()
            .any(|r| r.campaign_id == campaign_id && r.investor_id == investor_id);
        if duplicate {
            return Err(CampaignError::DuplicateReservation {
                investor_id: investor_id.to_string(),
                campaign_id: campaign_id.to_string(),
            });
        }

        let available = bounded_available(campaign, &self.reservations);
        if u64::from(requested) > available {
            return Err(CampaignError::InsufficientAvailability {
                requested: u64::from(requested),
                available,
            });
        }

        let calculation = campaign.quote(plant_count);
        campaign.raised_amount += calculation.investment_amount;

        let reservation = Reservation {
            id: Uuid::new_v4().to_string(),
            campaign_id: campaign_id.to_string(),
            investor_id: investor_id.to_string(),
            plant_count: requested,
            amount: calculation.investment_amount,
            calculation,
            is_paid: false,
            created_at: now,
            paid_at: None,
        };
        self.reservations.push(reservation.clone());

        info!(
            campaign_id = %campaign_id,
            investor_id = %investor_id,
            plants = requested,
            amount = reservation.amount,
            raised = campaign.raised_amount,
            "reservation recorded"
        );
        Ok(reservation)
    }

    /// Plants still open for reservation in a campaign.
    pub fn available_plants(&self, campaign_id: &str) -> Result<u64> {
        let campaign = self.campaign(campaign_id)?;
        Ok(bounded_available(campaign, &self.reservations))
    }

    pub fn confirm_payment(&mut self, reservation_id: &str, now: DateTime<Utc>) -> Result<&Reservation> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == reservation_id)
            .ok_or_else(|| CampaignError::ReservationNotFound(reservation_id.to_string()))?;

        if reservation.is_paid {
            return Err(CampaignError::AlreadyPaid(reservation_id.to_string()));
        }

        reservation.is_paid = true;
        reservation.paid_at = Some(now);
        info!(reservation_id = %reservation_id, amount = reservation.amount, "payment confirmed");
        Ok(reservation)
    }

    pub fn reservation(&self, id: &str) -> Result<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CampaignError::ReservationNotFound(id.to_string()))
    }

    pub fn reservations_for_investor(&self, investor_id: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.investor_id == investor_id)
            .collect()
    }

    pub fn reservations_for_campaign(&self, campaign_id: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.campaign_id == campaign_id)
            .collect()
    }

    pub fn stats(&self, campaign_id: &str) -> Result<CampaignStats> {
        let campaign = self.campaign(campaign_id)?;
        let reservations = self.reservations_for_campaign(campaign_id);

        let investors: HashSet<&str> = reservations.iter().map(|r| r.investor_id.as_str()).collect();
        let total_plants: u64 = reservations.iter().map(|r| u64::from(r.plant_count)).sum();
        let (paid_amount, pending_amount) = reservations.iter().fold((0.0, 0.0), |(paid, pending), r| {
            if r.is_paid {
                (paid + r.amount, pending)
            } else {
                (paid, pending + r.amount)
            }
        });

        Ok(CampaignStats {
            campaign_id: campaign_id.to_string(),
            investor_count: investors.len(),
            reservation_count: reservations.len(),
            total_plants,
            paid_amount,
            pending_amount,
            availability: campaign.availability(),
        })
    }

    pub fn campaign_count(&self) -> usize {
        self.campaigns.len()
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Write a JSON snapshot, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        debug!(path = %path.display(), campaigns = self.campaigns.len(), "registry saved");
        Ok(())
    }

    /// Load a snapshot; a missing file yields an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no registry snapshot, starting empty");
            return Ok(Self::new());
        }

        let bytes = fs::read(path)?;
        let registry: Self = serde_json::from_slice(&bytes)?;
        info!(
            path = %path.display(),
            campaigns = registry.campaigns.len(),
            reservations = registry.reservations.len(),
            "registry loaded"
        );
        Ok(registry)
    }
}

/// Currency-derived availability, capped by the recorded plant counts.
/// Summing fractional per-plant costs can leave `raised_amount` a hair under
/// the true total, which would undercount reserved plants.
fn bounded_available(campaign: &Campaign, reservations: &[Reservation]) -> u64 {
    let info = campaign.availability();
    let recorded: u64 = reservations
        .iter()
        .filter(|r| r.campaign_id == campaign.id)
        .map(|r| u64::from(r.plant_count))
        .sum();

    info.available_plants
        .min(info.total_plants.saturating_sub(recorded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
    }

    fn small_campaign() -> NewCampaign {
        NewCampaign {
            title: "Melon cycle".to_string(),
            description: "Greenhouse melons".to_string(),
            location: None,
            cost_per_plant: 1_000.0,
            market_price: 1_500.0,
            expected_return_percentage: 0.3,
            target_amount: 10_000.0,
            min_plants: 2,
            max_plants: Some(6),
            start_date: now() - Duration::days(1),
            end_date: now() + Duration::days(14),
        }
    }

    #[test]
    fn test_reservation_updates_raised_amount() {
        let mut registry = CampaignRegistry::new();
        let campaign = registry.create_campaign(small_campaign(), now()).unwrap();

        let r = registry.reserve(&campaign.id, "inv-1", 4, now()).unwrap();
        assert_eq!(r.amount, 4_000.0);
        assert_eq!(r.status(), crate::PaymentStatus::Pending);

        let campaign = registry.campaign(&campaign.id).unwrap();
        assert_eq!(campaign.raised_amount, 4_000.0);
        assert_eq!(campaign.availability().available_plants, 6);
    }

    #[test]
    fn test_limits_enforced_in_order() {
        let mut registry = CampaignRegistry::new();
        let id = registry.create_campaign(small_campaign(), now()).unwrap().id;

        assert_eq!(
            registry.reserve(&id, "inv-1", 0, now()),
            Err(CampaignError::InvalidPlantCount(0))
        );
        assert_eq!(
            registry.reserve(&id, "inv-1", -3, now()),
            Err(CampaignError::InvalidPlantCount(-3))
        );
        assert_eq!(
            registry.reserve(&id, "inv-1", 1, now()),
            Err(CampaignError::BelowMinimum { min: 2, requested: 1 })
        );
        assert_eq!(
            registry.reserve(&id, "inv-1", 7, now()),
            Err(CampaignError::AboveMaximum { max: 6, requested: 7 })
        );
    }

    #[test]
    fn test_unknown_campaign() {
        let mut registry = CampaignRegistry::new();
        assert_eq!(
            registry.reserve("missing", "inv-1", 2, now()),
            Err(CampaignError::CampaignNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_confirm_payment_once() {
        let mut registry = CampaignRegistry::new();
        let id = registry.create_campaign(small_campaign(), now()).unwrap().id;
        let r = registry.reserve(&id, "inv-1", 2, now()).unwrap();

        let paid = registry.confirm_payment(&r.id, now()).unwrap();
        assert!(paid.is_paid);
        assert_eq!(paid.paid_at, Some(now()));

        assert_eq!(
            registry.confirm_payment(&r.id, now()).unwrap_err(),
            CampaignError::AlreadyPaid(r.id.clone())
        );
    }
}
