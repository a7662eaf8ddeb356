//! Plant availability accounting
//!
//! Plant counts are derived from cumulative currency amounts, assuming every
//! reservation is priced at exactly `cost_per_plant`. That holds because the
//! per-plant cost is fixed for a campaign's lifetime.

use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityInfo {
    pub total_plants: u64,
    pub reserved_plants: u64,
    pub available_plants: u64,
    pub is_fully_funded: bool,
    /// Share of capacity still open, 0-100
    pub availability_percentage: f64,
}

pub struct AvailabilityCalculator;

impl AvailabilityCalculator {
    /// Plant capacity of a campaign: `floor(target_amount / cost_per_plant)`.
    pub fn calculate_total_plants_from_target(target_amount: f64, cost_per_plant: f64) -> u64 {
        plants_for_amount(target_amount, cost_per_plant)
    }

    /// Plants already taken: `floor(raised_amount / cost_per_plant)`.
    pub fn calculate_reserved_plants(raised_amount: f64, cost_per_plant: f64) -> u64 {
        plants_for_amount(raised_amount, cost_per_plant)
    }

    pub fn calculate_plant_availability(
        target_amount: f64,
        raised_amount: f64,
        cost_per_plant: f64,
    ) -> AvailabilityInfo {
        let total_plants = Self::calculate_total_plants_from_target(target_amount, cost_per_plant);
        let reserved_plants = Self::calculate_reserved_plants(raised_amount, cost_per_plant);

        // Raised may overshoot the target; never report negative stock.
        let available_plants = total_plants.saturating_sub(reserved_plants);

        let availability_percentage = if total_plants > 0 {
            available_plants as f64 / total_plants as f64 * PERCENT_SCALE
        } else {
            0.0
        };

        AvailabilityInfo {
            total_plants,
            reserved_plants,
            available_plants,
            is_fully_funded: available_plants == 0,
            availability_percentage,
        }
    }
}

/// Whole plants an amount buys. Degenerate input (zero, negative or NaN
/// divisor; NaN, infinite or negative amount) yields 0 instead of failing.
fn plants_for_amount(amount: f64, cost_per_plant: f64) -> u64 {
    if !(cost_per_plant > 0.0) || !amount.is_finite() || amount <= 0.0 {
        return 0;
    }

    let plants = (amount / cost_per_plant).floor();
    if !plants.is_finite() {
        return 0;
    }
    plants as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_has_no_capacity() {
        assert_eq!(
            AvailabilityCalculator::calculate_total_plants_from_target(0.0, 1_000.0),
            0
        );
    }

    #[test]
    fn test_division_guards() {
        assert_eq!(
            AvailabilityCalculator::calculate_total_plants_from_target(10_000.0, 0.0),
            0
        );
        assert_eq!(
            AvailabilityCalculator::calculate_total_plants_from_target(10_000.0, f64::NAN),
            0
        );
        assert_eq!(
            AvailabilityCalculator::calculate_total_plants_from_target(f64::NAN, 1_000.0),
            0
        );
        assert_eq!(
            AvailabilityCalculator::calculate_reserved_plants(5_000.0, -10.0),
            0
        );
        assert_eq!(
            AvailabilityCalculator::calculate_reserved_plants(f64::INFINITY, 1_000.0),
            0
        );
    }

    #[test]
    fn test_floor_drops_partial_plants() {
        assert_eq!(
            AvailabilityCalculator::calculate_reserved_plants(2_999.99, 1_000.0),
            2
        );
    }

    #[test]
    fn test_fully_funded_campaign() {
        let info = AvailabilityCalculator::calculate_plant_availability(10_000.0, 10_000.0, 1_000.0);

        assert_eq!(info.total_plants, 10);
        assert_eq!(info.reserved_plants, 10);
        assert_eq!(info.available_plants, 0);
        assert!(info.is_fully_funded);
        assert_eq!(info.availability_percentage, 0.0);
    }

    #[test]
    fn test_oversubscribed_is_clamped() {
        let info = AvailabilityCalculator::calculate_plant_availability(10_000.0, 12_000.0, 1_000.0);

        assert_eq!(info.reserved_plants, 12);
        assert_eq!(info.available_plants, 0);
        assert!(info.is_fully_funded);
    }

    #[test]
    fn test_partial_funding_percentage() {
        let info = AvailabilityCalculator::calculate_plant_availability(10_000.0, 2_500.0, 1_000.0);

        assert_eq!(info.reserved_plants, 2);
        assert_eq!(info.available_plants, 8);
        assert!(!info.is_fully_funded);
        assert_eq!(info.availability_percentage, 80.0);
    }

    #[test]
    fn test_degenerate_campaign_reports_zero() {
        let info = AvailabilityCalculator::calculate_plant_availability(10_000.0, 0.0, 0.0);

        assert_eq!(info.total_plants, 0);
        assert_eq!(info.available_plants, 0);
        assert!(info.is_fully_funded);
        assert_eq!(info.availability_percentage, 0.0);
    }
}
