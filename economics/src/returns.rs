//! Investment return projection
//!
//! The investor receives a share of *net profit*, not interest on capital:
//! income minus cost, a percentage of the remainder, then added back to the
//! principal. Every figure on an investor disclosure follows this chain.

use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentCalculation {
    /// Capital committed: `plant_count * cost_per_plant`
    pub investment_amount: f64,
    /// Gross harvest value: `plant_count * market_price`
    pub estimated_income: f64,
    /// `estimated_income - investment_amount`, negative when the market
    /// price sits below cost
    pub net_profit: f64,
    /// Investor's share of `net_profit`
    pub projected_return: f64,
    /// Principal plus projected return
    pub total_return: f64,
}

impl InvestmentCalculation {
    /// Projected return as a percentage of the capital committed.
    pub fn return_on_investment(&self) -> f64 {
        if self.investment_amount == 0.0 || self.investment_amount.is_nan() {
            return 0.0;
        }
        self.projected_return / self.investment_amount * PERCENT_SCALE
    }

    pub fn is_loss(&self) -> bool {
        self.net_profit < 0.0
    }
}

pub struct ReturnCalculator;

impl ReturnCalculator {
    /// Price a reservation of `plant_count` plants.
    ///
    /// Total over its domain: zero or negative plant counts are not rejected
    /// and simply yield zero or negative figures. Callers validate the count.
    pub fn calculate_investment_return(
        plant_count: i64,
        cost_per_plant: f64,
        market_price: f64,
        expected_return_percentage: f64,
    ) -> InvestmentCalculation {
        let plants = plant_count as f64;

        let investment_amount = plants * cost_per_plant;
        let estimated_income = plants * market_price;
        let net_profit = estimated_income - investment_amount;
        let projected_return = net_profit * expected_return_percentage;
        let total_return = investment_amount + projected_return;

        InvestmentCalculation {
            investment_amount,
            estimated_income,
            net_profit,
            projected_return,
            total_return,
        }
    }
}
